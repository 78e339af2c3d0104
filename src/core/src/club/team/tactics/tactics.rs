use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

const HIGH_ATTRIBUTE_THRESHOLD: u8 = 80;
const SOLID_DEFENSE_THRESHOLD: u8 = 75;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamTactic {
    LongRangeShooting,
    WideSpeed,
    Possession,
    CompactCounter,
    Balanced,
}

impl TeamTactic {
    /// First matching rule wins:
    /// shooting, then pace, then passing with technique, then a defender-heavy
    /// solid defense. Anything else plays balanced.
    pub fn select(
        avg_pace: u8,
        avg_technique: u8,
        avg_passing: u8,
        avg_shooting: u8,
        avg_defense: u8,
        defender_count: usize,
        team_size: usize,
    ) -> TeamTactic {
        if avg_shooting > HIGH_ATTRIBUTE_THRESHOLD {
            return TeamTactic::LongRangeShooting;
        }

        if avg_pace > HIGH_ATTRIBUTE_THRESHOLD {
            return TeamTactic::WideSpeed;
        }

        if avg_passing > HIGH_ATTRIBUTE_THRESHOLD && avg_technique > HIGH_ATTRIBUTE_THRESHOLD {
            return TeamTactic::Possession;
        }

        // defenders >= size / 2, without integer division
        if defender_count * 2 >= team_size && avg_defense > SOLID_DEFENSE_THRESHOLD {
            return TeamTactic::CompactCounter;
        }

        TeamTactic::Balanced
    }

    pub fn description(&self) -> &'static str {
        match self {
            TeamTactic::LongRangeShooting => "favor long-range shooting opportunities",
            TeamTactic::WideSpeed => {
                "exploit speed in wide areas, attack the space behind the defense"
            }
            TeamTactic::Possession => "control the game through short passing and possession",
            TeamTactic::CompactCounter => {
                "play compact defense, counter-attack quickly on turnovers"
            }
            TeamTactic::Balanced => {
                "play balanced, controlled football and wait for opponent mistakes"
            }
        }
    }
}

impl Display for TeamTactic {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.description())
    }
}
