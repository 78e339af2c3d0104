use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlayerPositionType {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
    /// Any position code outside the four known ones.
    Unknown,
}

/// Field line a position is drawn on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PlayerFieldPositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPositionType {
    /// Parses a position code. Never fails: unrecognized codes map to `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "GK" => PlayerPositionType::Goalkeeper,
            "DEF" => PlayerPositionType::Defender,
            "MID" => PlayerPositionType::Midfielder,
            "FWD" => PlayerPositionType::Forward,
            _ => PlayerPositionType::Unknown,
        }
    }

    pub fn get_short_name(&self) -> &'static str {
        match self {
            PlayerPositionType::Goalkeeper => "GK",
            PlayerPositionType::Defender => "DEF",
            PlayerPositionType::Midfielder => "MID",
            PlayerPositionType::Forward => "FWD",
            PlayerPositionType::Unknown => "UNK",
        }
    }

    #[inline]
    pub fn is_goalkeeper(&self) -> bool {
        *self == PlayerPositionType::Goalkeeper
    }

    #[inline]
    pub fn is_defender(&self) -> bool {
        *self == PlayerPositionType::Defender
    }

    pub fn position_group(&self) -> PlayerFieldPositionGroup {
        match self {
            PlayerPositionType::Goalkeeper => PlayerFieldPositionGroup::Goalkeeper,
            PlayerPositionType::Defender => PlayerFieldPositionGroup::Defender,
            // Unknown positions are drawn on the midfield line
            PlayerPositionType::Midfielder | PlayerPositionType::Unknown => {
                PlayerFieldPositionGroup::Midfielder
            }
            PlayerPositionType::Forward => PlayerFieldPositionGroup::Forward,
        }
    }
}

impl From<&str> for PlayerPositionType {
    fn from(code: &str) -> Self {
        PlayerPositionType::from_code(code)
    }
}

impl From<String> for PlayerPositionType {
    fn from(code: String) -> Self {
        PlayerPositionType::from_code(&code)
    }
}

impl From<PlayerPositionType> for String {
    fn from(position: PlayerPositionType) -> Self {
        position.get_short_name().to_string()
    }
}

impl Display for PlayerPositionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.get_short_name())
    }
}

impl PlayerFieldPositionGroup {
    pub const ALL: [PlayerFieldPositionGroup; 4] = [
        PlayerFieldPositionGroup::Goalkeeper,
        PlayerFieldPositionGroup::Defender,
        PlayerFieldPositionGroup::Midfielder,
        PlayerFieldPositionGroup::Forward,
    ];
}
