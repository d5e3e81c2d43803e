use super::board::Board;
use super::types::{CELL_COUNT, Difficulty, Mark, Position};
use crate::engine::session_rng::SessionRng;

const WIN_SCORE: i32 = 10;

/// First moves used instead of a search on an empty board: center, then the corners.
pub const OPENING_BOOK: [Position; 5] = [
    Position::from_index(4),
    Position::from_index(0),
    Position::from_index(2),
    Position::from_index(6),
    Position::from_index(8),
];

#[derive(Clone, Copy)]
struct Sides {
    ai: Mark,
    opponent: Mark,
}

impl Sides {
    fn for_ai(ai: Mark) -> Option<Self> {
        ai.opponent().map(|opponent| Self { ai, opponent })
    }
}

/// Picks a move for `ai_mark` on `board`. Returns `None` when there is no
/// empty cell or `ai_mark` is `Mark::Empty`. The board is used as scratch
/// space and is restored before returning.
pub fn calculate_move(
    difficulty: Difficulty,
    board: &mut Board,
    ai_mark: Mark,
    rng: &mut SessionRng,
) -> Option<Position> {
    let sides = Sides::for_ai(ai_mark)?;
    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Medium => calculate_tactical_move(board, sides, rng),
        Difficulty::Unbeatable => calculate_minimax_move(board, sides, rng),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    rng.choose(&board.available_moves())
}

fn calculate_tactical_move(board: &mut Board, sides: Sides, rng: &mut SessionRng) -> Option<Position> {
    find_completing_cell(board, sides.ai)
        .or_else(|| find_completing_cell(board, sides.opponent))
        .or_else(|| calculate_random_move(board, rng))
}

/// First empty cell, row-major, where `mark` would complete a line.
fn find_completing_cell(board: &mut Board, mark: Mark) -> Option<Position> {
    board.available_moves().into_iter().find(|&position| {
        board.set(position, mark);
        let wins = board.check_win(mark);
        board.clear(position);
        wins
    })
}

fn calculate_minimax_move(board: &mut Board, sides: Sides, rng: &mut SessionRng) -> Option<Position> {
    if board.is_empty() {
        return rng.choose(&OPENING_BOOK);
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for (position, score) in root_scores(board, sides) {
        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move
}

fn root_scores(board: &mut Board, sides: Sides) -> Vec<(Position, i32)> {
    board
        .available_moves()
        .into_iter()
        .map(|position| {
            board.set(position, sides.ai);
            let score = minimax(board, sides, false, 1, i32::MIN, i32::MAX);
            board.clear(position);
            (position, score)
        })
        .collect()
}

/// Exact minimax score of every empty cell for `ai_mark`, row-major.
/// Positive scores are AI wins (faster is higher), negative are losses, zero is a draw.
pub fn score_moves(board: &mut Board, ai_mark: Mark) -> Vec<(Position, i32)> {
    match Sides::for_ai(ai_mark) {
        Some(sides) => root_scores(board, sides),
        None => Vec::new(),
    }
}

fn minimax(
    board: &mut Board,
    sides: Sides,
    is_maximizing: bool,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if board.check_win(sides.ai) {
        return WIN_SCORE - depth;
    }
    if board.check_win(sides.opponent) {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in 0..CELL_COUNT {
            let position = Position::from_index(index);
            if board.get(position) != Mark::Empty {
                continue;
            }

            board.set(position, sides.ai);
            let eval = minimax(board, sides, false, depth + 1, alpha, beta);
            board.clear(position);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                return max_eval;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in 0..CELL_COUNT {
            let position = Position::from_index(index);
            if board.get(position) != Mark::Empty {
                continue;
            }

            board.set(position, sides.opponent);
            let eval = minimax(board, sides, true, depth + 1, alpha, beta);
            board.clear(position);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                return min_eval;
            }
        }
        min_eval
    }
}
