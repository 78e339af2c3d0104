use crate::club::Player;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum TeamSide {
    A,
    B,
}

impl TeamSide {
    pub fn display_name(&self) -> &'static str {
        match self {
            TeamSide::A => "Blues",
            TeamSide::B => "Reds",
        }
    }
}

impl Display for TeamSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.display_name())
    }
}

/// Two disjoint teams whose union is the balanced roster.
#[derive(Debug, Clone, Default)]
pub struct TeamAssignment<'p> {
    pub team_a: Vec<&'p Player>,
    pub team_b: Vec<&'p Player>,
}

impl<'p> TeamAssignment<'p> {
    pub fn team(&self, side: TeamSide) -> &[&'p Player] {
        match side {
            TeamSide::A => &self.team_a,
            TeamSide::B => &self.team_b,
        }
    }

    pub fn total_power(&self, side: TeamSide) -> u32 {
        Self::sum_power(self.team(side))
    }

    pub fn power_gap(&self) -> u32 {
        self.total_power(TeamSide::A)
            .abs_diff(self.total_power(TeamSide::B))
    }

    pub fn len(&self) -> usize {
        self.team_a.len() + self.team_b.len()
    }

    pub fn is_empty(&self) -> bool {
        self.team_a.is_empty() && self.team_b.is_empty()
    }

    pub(crate) fn sum_power(players: &[&Player]) -> u32 {
        players.iter().map(|p| p.power() as u32).sum()
    }
}
