use crate::club::{Player, TeamTactic};
use serde::Serialize;

/// Rounded team averages plus the recommended tactic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct TeamStats {
    pub power: u8,
    pub pace: u8,
    pub technique: u8,
    pub passing: u8,
    pub shooting: u8,
    pub defense: u8,
    pub tactic: TeamTactic,
}

pub struct TeamAnalyzer;

impl TeamAnalyzer {
    /// Averages every attribute over `team`. An empty team has no stats.
    pub fn analyze(team: &[&Player]) -> Option<TeamStats> {
        if team.is_empty() {
            return None;
        }

        let average = |attribute: fn(&Player) -> u8| -> u8 {
            let total: u32 = team.iter().map(|p| attribute(p) as u32).sum();
            Self::rounded_mean(total, team.len())
        };

        let power = average(|p| p.power());
        let pace = average(|p| p.skills.pace);
        let technique = average(|p| p.skills.technique);
        let passing = average(|p| p.skills.passing);
        let shooting = average(|p| p.skills.shooting);
        let defense = average(|p| p.skills.defense);

        let defender_count = team.iter().filter(|p| p.position.is_defender()).count();

        let tactic = TeamTactic::select(
            pace,
            technique,
            passing,
            shooting,
            defense,
            defender_count,
            team.len(),
        );

        Some(TeamStats {
            power,
            pace,
            technique,
            passing,
            shooting,
            defense,
            tactic,
        })
    }

    /// `total / count` rounded half up.
    fn rounded_mean(total: u32, count: usize) -> u8 {
        let count = count as u32;
        ((2 * total + count) / (2 * count)) as u8
    }
}
