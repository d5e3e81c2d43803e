pub mod session;
pub mod session_rng;
pub mod tictactoe;
