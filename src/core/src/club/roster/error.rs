use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("names must be non-empty and unique, invalid rows: {indexes:?}")]
    InvalidNames { indexes: Vec<usize> },

    #[error("at most 2 goalkeepers are allowed, got {count}")]
    TooManyGoalkeepers { count: usize },
}
