use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("position ({row}, {col}) is outside the 3x3 board")]
    OutOfRange { row: usize, col: usize },

    #[error("invalid board notation: {0}")]
    InvalidBoard(String),

    #[error("unknown {kind} '{value}'")]
    UnknownName { kind: &'static str, value: String },
}
