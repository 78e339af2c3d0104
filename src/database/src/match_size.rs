use crate::error::MatchSizeError;
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

pub const MAX_PLAYERS_PER_SIDE: u8 = 11;

/// Players per side, written as codes like `7-7`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MatchSize {
    per_side: u8,
}

impl MatchSize {
    pub fn new(per_side: u8) -> Option<Self> {
        (1..=MAX_PLAYERS_PER_SIDE)
            .contains(&per_side)
            .then_some(MatchSize { per_side })
    }

    pub fn per_side(&self) -> u8 {
        self.per_side
    }

    pub fn player_count(&self) -> usize {
        self.per_side as usize * 2
    }
}

impl FromStr for MatchSize {
    type Err = MatchSizeError;

    /// Only the left-hand number is used: `7-7` and `7` both mean seven a side.
    fn from_str(code: &str) -> std::result::Result<Self, Self::Err> {
        let left = code.split('-').next().unwrap_or_default().trim();

        let value: u32 = left
            .parse()
            .map_err(|_| MatchSizeError::InvalidCode(code.to_string()))?;

        u8::try_from(value)
            .ok()
            .and_then(MatchSize::new)
            .ok_or(MatchSizeError::OutOfRange {
                value,
                max: MAX_PLAYERS_PER_SIDE,
            })
    }
}

impl Display for MatchSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}-{}", self.per_side, self.per_side)
    }
}

impl Serialize for MatchSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
