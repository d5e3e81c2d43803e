mod match_session;

pub use match_session::{MatchError, MatchSession, RoundResult, Scoreboard, TurnOutcome};
