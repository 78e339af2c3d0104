use crate::MatchSize;
use squad_core::{PlayerSkills, RosterEntry};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

const BLANK_SKILL_VALUE: u8 = 75;
const RANDOM_SKILL_MIN: u8 = 50;
const RANDOM_SKILL_MAX: u8 = 90;

pub struct RosterGenerator {
    names: Vec<String>,
}

impl RosterGenerator {
    pub fn with_names(names: &[String]) -> Self {
        RosterGenerator {
            names: names.to_vec(),
        }
    }

    /// Empty input rows: midfielders with every skill at 75.
    pub fn blank(size: MatchSize) -> Vec<RosterEntry> {
        let skills = PlayerSkills::new(
            BLANK_SKILL_VALUE,
            BLANK_SKILL_VALUE,
            BLANK_SKILL_VALUE,
            BLANK_SKILL_VALUE,
            BLANK_SKILL_VALUE,
        );

        (0..size.player_count())
            .map(|_| RosterEntry::default().with_skills(skills))
            .collect()
    }

    /// Gives every unnamed row a name from the shuffled pool and random skills in [50, 90].
    /// Rows that already have a name are left alone.
    pub fn fill_random<R: Rng + ?Sized>(&self, entries: &mut [RosterEntry], rng: &mut R) {
        let mut taken: HashSet<String> = entries
            .iter()
            .map(|e| e.name.trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();

        let mut pool: Vec<&String> = self
            .names
            .iter()
            .filter(|name| !taken.contains(&name.to_lowercase()))
            .collect();
        pool.shuffle(rng);

        let mut filled = 0;

        for (index, entry) in entries.iter_mut().enumerate() {
            if !entry.name.trim().is_empty() {
                continue;
            }

            let name = match pool.pop() {
                Some(name) => name.clone(),
                None => Self::numbered_name(index + 1, &taken),
            };

            taken.insert(name.to_lowercase());
            entry.name = name;

            let skills = PlayerSkills::new(
                rng.gen_range(RANDOM_SKILL_MIN..=RANDOM_SKILL_MAX),
                rng.gen_range(RANDOM_SKILL_MIN..=RANDOM_SKILL_MAX),
                rng.gen_range(RANDOM_SKILL_MIN..=RANDOM_SKILL_MAX),
                rng.gen_range(RANDOM_SKILL_MIN..=RANDOM_SKILL_MAX),
                rng.gen_range(RANDOM_SKILL_MIN..=RANDOM_SKILL_MAX),
            );

            *entry = entry.clone().with_skills(skills);
            filled += 1;
        }

        debug!("filled {} of {} roster rows", filled, entries.len());
    }

    /// First free "Player N" with N starting at `number`.
    fn numbered_name(mut number: usize, taken: &HashSet<String>) -> String {
        loop {
            let name = format!("Player {}", number);
            if !taken.contains(&name.to_lowercase()) {
                return name;
            }
            number += 1;
        }
    }
}
