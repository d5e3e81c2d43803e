use super::types::{BOARD_SIZE, Mark, Position, WinningLine};

pub type Grid = [[Mark; BOARD_SIZE]; BOARD_SIZE];

/// All 8 lines as row-major cell indices, in scan order:
/// rows, then columns, then the main diagonal, then the anti-diagonal.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn cell(grid: &Grid, index: usize) -> Mark {
    grid[index / BOARD_SIZE][index % BOARD_SIZE]
}

fn line_owner(grid: &Grid, line: &[usize; 3]) -> Option<Mark> {
    let first = cell(grid, line[0]);
    if first == Mark::Empty {
        return None;
    }
    line[1..].iter().all(|&i| cell(grid, i) == first).then_some(first)
}

pub fn check_win(grid: &Grid, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    LINES.iter().any(|line| line.iter().all(|&i| cell(grid, i) == mark))
}

pub fn check_win_with_line(grid: &Grid) -> Option<WinningLine> {
    LINES.iter().find_map(|line| {
        line_owner(grid, line).map(|mark| {
            WinningLine::new(mark, Position::from_index(line[0]), Position::from_index(line[2]))
        })
    })
}
