use clap::Args;
use tictactoe_common::{Board, Difficulty, Mark, Position, TicTacToeAi, log_debug};

use super::session_rng;
use crate::config::ArenaConfig;

#[derive(Args, Debug)]
pub struct BestMoveArgs {
    /// Position as three rows of X, O and _ separated by '/', e.g. OO_/XX_/___
    #[arg(long)]
    pub board: Board,

    /// Tier to ask; defaults to the configured one
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Mark the engine plays
    #[arg(long, default_value = "o")]
    pub mark: Mark,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Also print the exact minimax score of every empty cell
    #[arg(long)]
    pub scores: bool,
}

pub fn run_best_move(args: &BestMoveArgs, config: &ArenaConfig) -> Option<Position> {
    let difficulty = args.difficulty.unwrap_or(config.difficulty);
    let rng = session_rng(args.seed.or(config.seed));
    log_debug!("Asking {} bot for {} on {} (seed {})", difficulty, args.mark, args.board, rng.seed());

    let mut ai = TicTacToeAi::from_board(args.board, difficulty, rng);

    if args.scores {
        for (position, score) in ai.move_scores(args.mark) {
            println!("{} {}", position, score);
        }
    }

    let chosen = ai.best_move_for(args.mark);
    match chosen {
        Some(position) => println!("{} {}", position.row(), position.col()),
        None => println!("none"),
    }
    chosen
}
