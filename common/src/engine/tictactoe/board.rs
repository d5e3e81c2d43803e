use std::fmt;
use std::str::FromStr;

use super::error::EngineError;
use super::types::{BOARD_SIZE, CELL_COUNT, GameStatus, Mark, Position, WinningLine};
use super::win_detector::{Grid, check_win, check_win_with_line};

/// The 3x3 grid. Turn order is not enforced here.
///
/// Text notation is three rows of `X`, `O` and `_` separated by `/`,
/// for example `OO_/XX_/___`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: Grid,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, position: Position) -> Mark {
        self.cells[position.row()][position.col()]
    }

    pub fn grid(&self) -> &Grid {
        &self.cells
    }

    /// Writes `mark` if the cell is empty. Returns whether the write happened.
    pub fn place(&mut self, position: Position, mark: Mark) -> bool {
        if mark == Mark::Empty || self.get(position) != Mark::Empty {
            return false;
        }
        self.set(position, mark);
        true
    }

    pub(crate) fn set(&mut self, position: Position, mark: Mark) {
        self.cells[position.row()][position.col()] = mark;
    }

    pub(crate) fn clear(&mut self, position: Position) {
        self.set(position, Mark::Empty);
    }

    pub fn reset(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn check_win(&self, mark: Mark) -> bool {
        check_win(&self.cells, mark)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Mark::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell == Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell == mark).count()
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        (0..CELL_COUNT)
            .map(Position::from_index)
            .filter(|&p| self.get(p) == Mark::Empty)
            .collect()
    }

    pub fn status(&self) -> GameStatus {
        if self.check_win(Mark::X) {
            GameStatus::XWon
        } else if self.check_win(Mark::O) {
            GameStatus::OWon
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Spaces are empty cells, so only line endings are stripped.
        let rows: Vec<&str> = s.trim_end_matches(['\r', '\n']).split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(EngineError::InvalidBoard(format!(
                "expected {} rows separated by '/', got {} in '{}'",
                BOARD_SIZE,
                rows.len(),
                s
            )));
        }

        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let marks: Vec<char> = text.chars().collect();
            if marks.len() != BOARD_SIZE {
                return Err(EngineError::InvalidBoard(format!(
                    "row {} must have {} cells, got '{}'",
                    row, BOARD_SIZE, text
                )));
            }
            for (col, &c) in marks.iter().enumerate() {
                let mark = Mark::from_char(c).ok_or_else(|| {
                    EngineError::InvalidBoard(format!("unexpected character '{}' in row {}", c, row))
                })?;
                board.cells[row][col] = mark;
            }
        }
        Ok(board)
    }
}
