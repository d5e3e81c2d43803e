use super::board::Board;
use super::bot::{calculate_move, score_moves};
use super::types::{Difficulty, GameStatus, Mark, Position, WinningLine};
use crate::engine::session_rng::SessionRng;
use crate::log_debug;

/// The mark `best_move` plays for.
pub const AI_MARK: Mark = Mark::O;

/// Tic-tac-toe opponent owning its board and difficulty tier.
///
/// Callers alternate turns themselves: the engine only rejects writes to
/// occupied or out-of-range cells.
#[derive(Debug, Clone)]
pub struct TicTacToeAi {
    board: Board,
    difficulty: Difficulty,
    rng: SessionRng,
}

impl TicTacToeAi {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, SessionRng::from_random())
    }

    pub fn with_rng(difficulty: Difficulty, rng: SessionRng) -> Self {
        Self::from_board(Board::new(), difficulty, rng)
    }

    pub fn from_board(board: Board, difficulty: Difficulty, rng: SessionRng) -> Self {
        Self { board, difficulty, rng }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        log_debug!("Difficulty changed from {} to {}", self.difficulty, difficulty);
        self.difficulty = difficulty;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the position, e.g. to follow a game driven elsewhere.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn reset_board(&mut self) {
        self.board.reset();
    }

    /// Places `mark` at (`row`, `col`) if that cell exists and is empty.
    pub fn make_move(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        match Position::new(row, col) {
            Ok(position) => self.board.place(position, mark),
            Err(err) => {
                log_debug!("Rejected move: {}", err);
                false
            }
        }
    }

    pub fn check_win(&self, mark: Mark) -> bool {
        self.board.check_win(mark)
    }

    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// Move for `AI_MARK` at the configured difficulty; `None` when the board has no empty cell.
    pub fn best_move(&mut self) -> Option<Position> {
        self.best_move_for(AI_MARK)
    }

    pub fn best_move_for(&mut self, mark: Mark) -> Option<Position> {
        let chosen = calculate_move(self.difficulty, &mut self.board, mark, &mut self.rng);
        match chosen {
            Some(position) => log_debug!("{} bot playing {} chose {} on {}", self.difficulty, mark, position, self.board),
            None => log_debug!("{} bot playing {} has no move on {}", self.difficulty, mark, self.board),
        }
        chosen
    }

    pub fn move_scores(&mut self, mark: Mark) -> Vec<(Position, i32)> {
        score_moves(&mut self.board, mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(difficulty: Difficulty, notation: &str) -> TicTacToeAi {
        TicTacToeAi::from_board(notation.parse().unwrap(), difficulty, SessionRng::new(42))
    }

    #[test]
    fn test_make_move_twice_on_same_cell() {
        let mut ai = TicTacToeAi::with_rng(Difficulty::Easy, SessionRng::new(0));
        assert!(ai.make_move(0, 0, Mark::X));
        let snapshot = *ai.board();
        assert!(!ai.make_move(0, 0, Mark::O));
        assert!(!ai.make_move(0, 0, Mark::O));
        assert_eq!(*ai.board(), snapshot);
    }

    #[test]
    fn test_make_move_out_of_range() {
        let mut ai = TicTacToeAi::with_rng(Difficulty::Easy, SessionRng::new(0));
        assert!(!ai.make_move(3, 0, Mark::X));
        assert!(!ai.make_move(0, 7, Mark::X));
        assert!(ai.board().is_empty());
    }

    #[test]
    fn test_difficulty_setter() {
        let mut ai = TicTacToeAi::with_rng(Difficulty::Easy, SessionRng::new(0));
        assert_eq!(ai.difficulty(), Difficulty::Easy);
        ai.set_difficulty(Difficulty::Unbeatable);
        assert_eq!(ai.difficulty(), Difficulty::Unbeatable);
    }

    #[test]
    fn test_best_move_plays_for_o() {
        let mut ai = engine(Difficulty::Medium, "OO_/XX_/___");
        assert_eq!(ai.best_move(), Position::new(0, 2).ok());
        let mut ai = engine(Difficulty::Unbeatable, "OO_/XX_/___");
        assert_eq!(ai.best_move(), Position::new(0, 2).ok());
    }

    #[test]
    fn test_best_move_on_full_board_is_none() {
        let mut ai = engine(Difficulty::Unbeatable, "XOX/XOO/OXX");
        let best = ai.best_move();
        assert_eq!(best, None);
        assert_eq!(Position::to_pair_or_sentinel(best), (-1, -1));
    }

    #[test]
    fn test_best_move_does_not_touch_board() {
        let mut ai = engine(Difficulty::Unbeatable, "X__/_O_/__X");
        let before = *ai.board();
        ai.best_move();
        assert_eq!(*ai.board(), before);
    }

    #[test]
    fn test_reset_board_and_status() {
        let mut ai = engine(Difficulty::Easy, "XXX/OO_/___");
        assert!(ai.check_win(Mark::X));
        assert_eq!(ai.status(), GameStatus::XWon);
        assert_eq!(ai.winning_line().unwrap().coordinates(), (0, 0, 0, 2));
        ai.reset_board();
        assert!(!ai.check_win(Mark::X));
        assert!(ai.winning_line().is_none());
        assert!(!ai.is_full());
    }

    #[test]
    fn test_same_seed_same_easy_moves() {
        let mut a = TicTacToeAi::with_rng(Difficulty::Easy, SessionRng::new(99));
        let mut b = TicTacToeAi::with_rng(Difficulty::Easy, SessionRng::new(99));
        for _ in 0..5 {
            assert_eq!(a.best_move(), b.best_move());
        }
        assert_eq!(a.seed(), 99);
    }
}
