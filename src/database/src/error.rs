use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchSizeError {
    #[error("invalid match size code '{0}', expected a form like 7-7")]
    InvalidCode(String),

    #[error("match size must be between 1 and {max} players per side, got {value}")]
    OutOfRange { value: u32, max: u8 },
}

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("roster data is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    MatchSize(#[from] MatchSizeError),
}
