use serde::Serialize;

pub const SKILL_MIN_VALUE: u8 = 1;
pub const SKILL_MAX_VALUE: u8 = 100;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct PlayerSkills {
    pub pace: u8,
    pub technique: u8,
    pub passing: u8,
    pub shooting: u8,
    pub defense: u8,
}

impl PlayerSkills {
    pub fn new(pace: u8, technique: u8, passing: u8, shooting: u8, defense: u8) -> Self {
        PlayerSkills {
            pace,
            technique,
            passing,
            shooting,
            defense,
        }
    }

    /// Builds skills from raw input values, clamping each into [1, 100].
    pub fn clamped(pace: i32, technique: i32, passing: i32, shooting: i32, defense: i32) -> Self {
        PlayerSkills {
            pace: Self::clamp_value(pace),
            technique: Self::clamp_value(technique),
            passing: Self::clamp_value(passing),
            shooting: Self::clamp_value(shooting),
            defense: Self::clamp_value(defense),
        }
    }

    pub fn clamp_value(value: i32) -> u8 {
        value.clamp(SKILL_MIN_VALUE as i32, SKILL_MAX_VALUE as i32) as u8
    }

    /// Skills in weight-table order: pace, technique, passing, shooting, defense.
    pub fn as_array(&self) -> [u8; 5] {
        [
            self.pace,
            self.technique,
            self.passing,
            self.shooting,
            self.defense,
        ]
    }
}

impl Default for PlayerSkills {
    fn default() -> Self {
        PlayerSkills::new(75, 75, 75, 75, 75)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_limits_range() {
        let skills = PlayerSkills::clamped(0, -20, 101, 250, 55);

        assert_eq!(skills.pace, 1);
        assert_eq!(skills.technique, 1);
        assert_eq!(skills.passing, 100);
        assert_eq!(skills.shooting, 100);
        assert_eq!(skills.defense, 55);
    }

    #[test]
    fn test_as_array_order() {
        let skills = PlayerSkills::new(1, 2, 3, 4, 5);
        assert_eq!(skills.as_array(), [1, 2, 3, 4, 5]);
    }
}
