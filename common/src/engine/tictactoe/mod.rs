mod ai;
mod board;
mod bot;
mod error;
mod types;
mod win_detector;

pub use ai::{AI_MARK, TicTacToeAi};
pub use board::Board;
pub use bot::{OPENING_BOOK, calculate_move, score_moves};
pub use error::EngineError;
pub use types::{BOARD_SIZE, CELL_COUNT, Difficulty, GameStatus, Mark, Position, WinningLine};
pub use win_detector::{LINES, check_win, check_win_with_line};
