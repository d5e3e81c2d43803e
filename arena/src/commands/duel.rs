use std::fmt;

use clap::Args;
use thiserror::Error;
use tictactoe_common::config::Validate;
use tictactoe_common::{Difficulty, Mark, MatchError, MatchSession, Scoreboard, TicTacToeAi, log, log_debug};

use super::session_rng;
use crate::config::{ArenaConfig, MAX_ROUNDS};

#[derive(Args, Debug, Default)]
pub struct DuelArgs {
    /// Number of rounds; marks swap after every round
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_ROUNDS)))]
    pub rounds: Option<u32>,

    /// Tier of the engine under test
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Tier playing against it
    #[arg(long)]
    pub opponent: Option<Difficulty>,

    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Error, Debug)]
pub enum DuelError {
    #[error("invalid duel settings: {0}")]
    Settings(String),
    #[error(transparent)]
    Match(#[from] MatchError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuelReport {
    pub engine: Difficulty,
    pub opponent: Difficulty,
    pub seed: u64,
    pub scoreboard: Scoreboard,
}

impl fmt::Display for DuelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Seed:     {}", self.seed)?;
        writeln!(f, "Rounds:   {}", self.scoreboard.rounds_played())?;
        writeln!(f, "Engine:   {} ({} wins)", self.engine, self.scoreboard.ai)?;
        writeln!(f, "Opponent: {} ({} wins)", self.opponent, self.scoreboard.player)?;
        write!(f, "Draws:    {}", self.scoreboard.draws)
    }
}

/// Plays the configured number of rounds between two tiers.
/// The opponent takes the "player" side of the match and opens the first round.
pub fn run_duel(args: &DuelArgs, config: &ArenaConfig) -> Result<DuelReport, DuelError> {
    let settings = ArenaConfig {
        difficulty: args.difficulty.unwrap_or(config.difficulty),
        opponent: args.opponent.unwrap_or(config.opponent),
        rounds: args.rounds.unwrap_or(config.rounds),
        seed: args.seed.or(config.seed),
    };
    settings.validate().map_err(DuelError::Settings)?;

    let engine_tier = settings.difficulty;
    let opponent_tier = settings.opponent;
    let rounds = settings.rounds;
    let rng = session_rng(settings.seed);
    let seed = rng.seed();

    log!("Duel: {} engine vs {} opponent, {} rounds, seed {}", engine_tier, opponent_tier, rounds, seed);

    let mut opponent = TicTacToeAi::with_rng(opponent_tier, session_rng(Some(seed.wrapping_add(1))));
    let mut session = MatchSession::new(engine_tier, Mark::X, rng)?;

    for round in 1..=rounds {
        if round > 1 {
            session.next_round();
        }

        while session.round_result().is_none() {
            if !session.is_player_turn() {
                session.play_ai()?;
                continue;
            }

            opponent.set_board(*session.board());
            let Some(position) = opponent.best_move_for(session.player_mark()) else {
                break;
            };
            session.play_player(position.row(), position.col())?;
        }

        log_debug!("Round {}: {:?} on {}", round, session.round_result(), session.board());
    }

    let report = DuelReport {
        engine: engine_tier,
        opponent: opponent_tier,
        seed,
        scoreboard: session.scoreboard(),
    };
    log!("Duel finished: {}", report.scoreboard);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::MAX_ROUNDS;

    fn duel_args(engine: Difficulty, opponent: Difficulty, rounds: u32, seed: u64) -> DuelArgs {
        DuelArgs {
            rounds: Some(rounds),
            difficulty: Some(engine),
            opponent: Some(opponent),
            seed: Some(seed),
        }
    }

    fn duel(engine: Difficulty, opponent: Difficulty, rounds: u32, seed: u64) -> DuelReport {
        run_duel(&duel_args(engine, opponent, rounds, seed), &ArenaConfig::default()).unwrap()
    }

    #[test]
    fn test_rounds_override_out_of_range_is_rejected() {
        for rounds in [0, MAX_ROUNDS + 1] {
            let args = duel_args(Difficulty::Easy, Difficulty::Easy, rounds, 3);
            let result = run_duel(&args, &ArenaConfig::default());
            assert!(matches!(result, Err(DuelError::Settings(_))), "rounds {} was accepted", rounds);
        }
    }

    #[test]
    fn test_rounds_falls_back_to_config() {
        let config = ArenaConfig { rounds: 3, ..ArenaConfig::default() };
        let args = DuelArgs { seed: Some(8), ..DuelArgs::default() };
        let report = run_duel(&args, &config).unwrap();
        assert_eq!(report.scoreboard.rounds_played(), 3);
    }

    #[test]
    fn test_every_round_is_counted() {
        let report = duel(Difficulty::Easy, Difficulty::Easy, 25, 4);
        assert_eq!(report.scoreboard.rounds_played(), 25);
        assert_eq!(report.seed, 4);
    }

    #[test]
    fn test_unbeatable_mirror_only_draws() {
        let report = duel(Difficulty::Unbeatable, Difficulty::Unbeatable, 6, 9);
        assert_eq!(report.scoreboard.draws, 6);
    }

    #[test]
    fn test_unbeatable_never_loses_to_lower_tiers() {
        for opponent in [Difficulty::Easy, Difficulty::Medium] {
            let report = duel(Difficulty::Unbeatable, opponent, 20, 21);
            assert_eq!(report.scoreboard.player, 0, "lost against {}", opponent);
        }
    }

    #[test]
    fn test_same_seed_same_report() {
        let first = duel(Difficulty::Medium, Difficulty::Easy, 15, 1234);
        let second = duel(Difficulty::Medium, Difficulty::Easy, 15, 1234);
        assert_eq!(first, second);
    }

    #[test]
    fn test_report_display() {
        let report = DuelReport {
            engine: Difficulty::Unbeatable,
            opponent: Difficulty::Easy,
            seed: 0,
            scoreboard: Scoreboard { player: 0, ai: 3, draws: 1 },
        };
        let text = report.to_string();
        assert!(text.contains("Rounds:   4"));
        assert!(text.contains("Engine:   Unbeatable (3 wins)"));
        assert!(text.contains("Draws:    1"));
    }
}
