use crate::club::{Player, TeamAssignment};
use crate::utils::{shuffle, RandomSource};
use log::debug;

/// Goalkeeper-aware greedy splitter of a roster into two teams.
pub struct TeamBalancer;

impl TeamBalancer {
    /// Splits `players` into two teams of close total power.
    ///
    /// The first goalkeeper goes to team A, the second to team B. Any further
    /// goalkeepers are treated as outfield players. Outfield players are sorted by
    /// power, descending, then the whole sorted sequence is shuffled and each player
    /// is appended to the team with the lower-or-equal running total (ties go to A).
    pub fn balance<'p, R: RandomSource + ?Sized>(
        players: &'p [Player],
        rng: &mut R,
    ) -> TeamAssignment<'p> {
        let (mut goalkeepers, mut outfield): (Vec<&Player>, Vec<&Player>) =
            players.iter().partition(|p| p.is_goalkeeper());

        let mut assignment = TeamAssignment::default();

        if !goalkeepers.is_empty() {
            assignment.team_a.push(goalkeepers.remove(0));
        }
        if !goalkeepers.is_empty() {
            assignment.team_b.push(goalkeepers.remove(0));
        }

        if !goalkeepers.is_empty() {
            debug!(
                "{} extra goalkeepers balanced as outfield players",
                goalkeepers.len()
            );
            outfield.extend(goalkeepers);
        }

        let mut team_a_power = TeamAssignment::sum_power(&assignment.team_a);
        let mut team_b_power = TeamAssignment::sum_power(&assignment.team_b);

        debug!(
            "goalkeepers seeded: team A {} power, team B {} power",
            team_a_power, team_b_power
        );

        // stable sort keeps input order among equal powers
        outfield.sort_by(|a, b| b.power().cmp(&a.power()));
        shuffle(&mut outfield, rng);

        for player in outfield {
            if team_a_power <= team_b_power {
                assignment.team_a.push(player);
                team_a_power += player.power() as u32;
            } else {
                assignment.team_b.push(player);
                team_b_power += player.power() as u32;
            }
        }

        debug!(
            "balanced {} players: team A {} ({} power), team B {} ({} power)",
            players.len(),
            assignment.team_a.len(),
            team_a_power,
            assignment.team_b.len(),
            team_b_power
        );

        assignment
    }
}
