pub mod config;
pub mod engine;
pub mod logger;

pub use engine::session::{MatchError, MatchSession, RoundResult, Scoreboard, TurnOutcome};
pub use engine::session_rng::SessionRng;
pub use engine::tictactoe::{
    Board, Difficulty, EngineError, GameStatus, Mark, Position, TicTacToeAi, WinningLine,
};
