mod best_move;
mod duel;

pub use best_move::{BestMoveArgs, run_best_move};
pub use duel::{DuelArgs, run_duel};

use tictactoe_common::SessionRng;

fn session_rng(seed: Option<u64>) -> SessionRng {
    match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    }
}
