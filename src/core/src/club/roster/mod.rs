mod entry;
mod error;

pub use entry::RosterEntry;
pub use error::RosterError;

use crate::club::{Player, PlayerPositionType};
use log::warn;
use std::collections::HashSet;

pub const DEFAULT_SKILL_VALUE: i32 = 50;
pub const MAX_GOALKEEPERS: usize = 2;

pub struct Roster;

impl Roster {
    /// Validates raw input rows and turns them into scored players.
    ///
    /// Every row with an empty or repeated (case-insensitive) name is reported at once.
    /// Player ids are the row indexes.
    pub fn from_entries(entries: &[RosterEntry]) -> Result<Vec<Player>, RosterError> {
        let mut seen_names: HashSet<String> = HashSet::with_capacity(entries.len());
        let mut invalid_indexes = Vec::new();
        let mut goalkeeper_count = 0;

        let mut players = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let name = entry.name.trim();
            let lowercase_name = name.to_lowercase();

            if name.is_empty() || seen_names.contains(&lowercase_name) {
                invalid_indexes.push(index);
            }
            seen_names.insert(lowercase_name);

            let position = PlayerPositionType::from_code(&entry.position);
            if position.is_goalkeeper() {
                goalkeeper_count += 1;
            }

            players.push(Player::new(index as u32, name.to_string(), position, entry.skills()));
        }

        if !invalid_indexes.is_empty() {
            warn!("roster rejected, invalid names at rows {:?}", invalid_indexes);
            return Err(RosterError::InvalidNames {
                indexes: invalid_indexes,
            });
        }

        if goalkeeper_count > MAX_GOALKEEPERS {
            warn!("roster rejected, {} goalkeepers", goalkeeper_count);
            return Err(RosterError::TooManyGoalkeepers {
                count: goalkeeper_count,
            });
        }

        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, position: &str) -> RosterEntry {
        RosterEntry {
            name: name.to_string(),
            position: position.to_string(),
            ..RosterEntry::default()
        }
    }

    #[test]
    fn test_valid_roster_is_scored() {
        let entries = vec![entry("Ahmet", "GK"), entry("Burak", "MID"), entry("Cem", "FWD")];

        let players = Roster::from_entries(&entries).unwrap();

        assert_eq!(players.len(), 3);
        assert_eq!(players[0].id, 0);
        assert_eq!(players[2].id, 2);
        assert_eq!(players[0].position, PlayerPositionType::Goalkeeper);
        assert_eq!(players[1].power(), 50);
    }

    #[test]
    fn test_names_are_trimmed() {
        let players = Roster::from_entries(&[entry("  Emir  ", "DEF")]).unwrap();

        assert_eq!(players[0].name, "Emir");
    }

    #[test]
    fn test_empty_and_duplicate_names_reported_together() {
        let entries = vec![
            entry("Fatih", "MID"),
            entry("   ", "MID"),
            entry("fatih", "DEF"),
            entry("Gökhan", "FWD"),
            entry("FATIH", "FWD"),
        ];

        let err = Roster::from_entries(&entries).unwrap_err();

        assert_eq!(
            err,
            RosterError::InvalidNames {
                indexes: vec![1, 2, 4]
            }
        );
    }

    #[test]
    fn test_more_than_two_goalkeepers_rejected() {
        let entries = vec![entry("Hakan", "GK"), entry("İlker", "GK"), entry("Kerem", "gk")];

        let err = Roster::from_entries(&entries).unwrap_err();

        assert_eq!(err, RosterError::TooManyGoalkeepers { count: 3 });
    }

    #[test]
    fn test_name_errors_take_precedence_over_goalkeepers() {
        let entries = vec![entry("", "GK"), entry("Levent", "GK"), entry("Mert", "GK")];

        let err = Roster::from_entries(&entries).unwrap_err();

        assert!(matches!(err, RosterError::InvalidNames { .. }));
    }

    #[test]
    fn test_missing_and_out_of_range_stats() {
        let raw = RosterEntry {
            name: "Nasuh".to_string(),
            position: "XYZ".to_string(),
            pace: None,
            technique: Some(0),
            passing: Some(140),
            shooting: Some(60),
            defense: None,
        };

        let players = Roster::from_entries(&[raw]).unwrap();
        let player = &players[0];

        assert_eq!(player.position, PlayerPositionType::Unknown);
        assert_eq!(player.skills.pace, 50);
        assert_eq!(player.skills.technique, 1);
        assert_eq!(player.skills.passing, 100);
        // (50 + 1 + 100 + 60 + 50) / 5 = 52.2
        assert_eq!(player.power(), 52);
    }

    #[test]
    fn test_empty_roster_is_valid() {
        assert!(Roster::from_entries(&[]).unwrap().is_empty());
    }
}
