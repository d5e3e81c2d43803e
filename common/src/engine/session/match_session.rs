use std::fmt;

use thiserror::Error;

use crate::engine::session_rng::SessionRng;
use crate::engine::tictactoe::{Board, Difficulty, EngineError, Mark, Position, TicTacToeAi, WinningLine};
use crate::log_debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("cell {0} is already taken")]
    Occupied(Position),

    #[error("it is not the {0} turn")]
    OutOfTurn(&'static str),

    #[error("the round is already over")]
    RoundOver,

    #[error("the player must hold X or O")]
    InvalidMark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    PlayerWon,
    AiWon,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    pub player: u32,
    pub ai: u32,
    pub draws: u32,
}

impl Scoreboard {
    fn record(&mut self, result: RoundResult) {
        match result {
            RoundResult::PlayerWon => self.player += 1,
            RoundResult::AiWon => self.ai += 1,
            RoundResult::Draw => self.draws += 1,
        }
    }

    pub fn rounds_played(&self) -> u32 {
        self.player + self.ai + self.draws
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player: {} | AI: {}", self.player, self.ai)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub ai_move: Option<Position>,
    pub result: Option<RoundResult>,
}

/// A series of rounds between a player and the engine.
///
/// X always moves first. Marks swap between rounds, so the side that
/// started one round answers in the next.
#[derive(Debug)]
pub struct MatchSession {
    ai: TicTacToeAi,
    player_mark: Mark,
    player_turn: bool,
    round: u32,
    result: Option<RoundResult>,
    scoreboard: Scoreboard,
}

impl MatchSession {
    pub fn new(difficulty: Difficulty, player_mark: Mark, rng: SessionRng) -> Result<Self, MatchError> {
        if player_mark == Mark::Empty {
            return Err(MatchError::InvalidMark);
        }
        let mut session = Self {
            ai: TicTacToeAi::with_rng(difficulty, rng),
            player_mark,
            player_turn: true,
            round: 1,
            result: None,
            scoreboard: Scoreboard::default(),
        };
        session.start_round();
        Ok(session)
    }

    pub fn player_mark(&self) -> Mark {
        self.player_mark
    }

    pub fn ai_mark(&self) -> Mark {
        self.player_mark.opponent().unwrap_or(Mark::O)
    }

    pub fn is_player_turn(&self) -> bool {
        self.player_turn && self.result.is_none()
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn round_result(&self) -> Option<RoundResult> {
        self.result
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn board(&self) -> &Board {
        self.ai.board()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.ai.winning_line()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.ai.difficulty()
    }

    /// Changes the tier for the following moves; scores are kept.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.ai.set_difficulty(difficulty);
    }

    /// Clears the board for the current round. When the engine holds X it
    /// opens immediately and its move is returned.
    pub fn start_round(&mut self) -> Option<Position> {
        self.ai.reset_board();
        self.result = None;
        self.player_turn = self.player_mark == Mark::X;
        log_debug!("Round {} starts, player holds {}", self.round, self.player_mark);

        if self.player_turn {
            return None;
        }
        self.play_ai().ok().flatten()
    }

    pub fn play_player(&mut self, row: usize, col: usize) -> Result<TurnOutcome, MatchError> {
        if self.result.is_some() {
            return Err(MatchError::RoundOver);
        }
        if !self.player_turn {
            return Err(MatchError::OutOfTurn("player's"));
        }

        let position = Position::new(row, col)?;
        if !self.ai.make_move(row, col, self.player_mark) {
            return Err(MatchError::Occupied(position));
        }
        self.player_turn = false;

        if let Some(result) = self.settle() {
            return Ok(TurnOutcome { ai_move: None, result: Some(result) });
        }

        let ai_move = self.play_ai()?;
        Ok(TurnOutcome { ai_move, result: self.result })
    }

    /// Lets the engine move. `Ok(None)` means it found no empty cell.
    pub fn play_ai(&mut self) -> Result<Option<Position>, MatchError> {
        if self.result.is_some() {
            return Err(MatchError::RoundOver);
        }
        if self.player_turn {
            return Err(MatchError::OutOfTurn("engine's"));
        }

        let ai_mark = self.ai_mark();
        let Some(position) = self.ai.best_move_for(ai_mark) else {
            self.settle();
            return Ok(None);
        };
        self.ai.make_move(position.row(), position.col(), ai_mark);
        self.player_turn = true;
        self.settle();
        Ok(Some(position))
    }

    /// Swaps marks and starts the following round.
    pub fn next_round(&mut self) -> Option<Position> {
        self.player_mark = self.ai_mark();
        self.round += 1;
        self.start_round()
    }

    /// Clears scores and restarts from round one with the current marks.
    pub fn reset_match(&mut self) -> Option<Position> {
        self.scoreboard = Scoreboard::default();
        self.round = 1;
        self.start_round()
    }

    fn settle(&mut self) -> Option<RoundResult> {
        if self.result.is_some() {
            return self.result;
        }

        let result = if self.ai.check_win(self.player_mark) {
            RoundResult::PlayerWon
        } else if self.ai.check_win(self.ai_mark()) {
            RoundResult::AiWon
        } else if self.ai.is_full() {
            RoundResult::Draw
        } else {
            return None;
        };

        self.scoreboard.record(result);
        self.result = Some(result);
        log_debug!("Round {} finished: {:?} ({})", self.round, result, self.scoreboard);
        Some(result)
    }
}
