use crate::club::roster::DEFAULT_SKILL_VALUE;
use crate::club::PlayerSkills;
use serde::{Deserialize, Serialize};

/// Raw player row as supplied by the caller, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub pace: Option<i32>,
    #[serde(default)]
    pub technique: Option<i32>,
    #[serde(default)]
    pub passing: Option<i32>,
    #[serde(default)]
    pub shooting: Option<i32>,
    #[serde(default)]
    pub defense: Option<i32>,
}

impl RosterEntry {
    /// Skills with missing values defaulted and everything clamped into range.
    pub fn skills(&self) -> PlayerSkills {
        PlayerSkills::clamped(
            self.pace.unwrap_or(DEFAULT_SKILL_VALUE),
            self.technique.unwrap_or(DEFAULT_SKILL_VALUE),
            self.passing.unwrap_or(DEFAULT_SKILL_VALUE),
            self.shooting.unwrap_or(DEFAULT_SKILL_VALUE),
            self.defense.unwrap_or(DEFAULT_SKILL_VALUE),
        )
    }

    pub fn with_skills(mut self, skills: PlayerSkills) -> Self {
        self.pace = Some(skills.pace as i32);
        self.technique = Some(skills.technique as i32);
        self.passing = Some(skills.passing as i32);
        self.shooting = Some(skills.shooting as i32);
        self.defense = Some(skills.defense as i32);
        self
    }
}

impl Default for RosterEntry {
    fn default() -> Self {
        RosterEntry {
            name: String::new(),
            position: "MID".to_string(),
            pace: None,
            technique: None,
            passing: None,
            shooting: None,
            defense: None,
        }
    }
}
