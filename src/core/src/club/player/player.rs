use crate::club::{PlayerPositionType, PlayerPowerCalculator, PlayerSkills};
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: PlayerPositionType,
    pub skills: PlayerSkills,

    power: u8,
}

impl Player {
    pub fn new(id: u32, name: String, position: PlayerPositionType, skills: PlayerSkills) -> Self {
        let power = PlayerPowerCalculator::calculate(&skills, position);

        Player {
            id,
            name,
            position,
            skills,
            power,
        }
    }

    /// Power computed once from skills and position when the player was created.
    #[inline]
    pub fn power(&self) -> u8 {
        self.power
    }

    #[inline]
    pub fn is_goalkeeper(&self) -> bool {
        self.position.is_goalkeeper()
    }

    /// First word of the name, as shown on field markers.
    pub fn short_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or(&self.name)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({}, {})", self.name, self.position, self.power)
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
