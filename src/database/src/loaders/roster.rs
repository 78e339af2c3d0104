use serde::Deserialize;

const STATIC_ROSTER_JSON: &str = include_str!("../../data/roster.json");

#[derive(Deserialize)]
pub struct RosterDataEntity {
    pub names: Vec<String>,
    pub match_sizes: Vec<String>,
    pub default_match_size: String,
}

pub struct RosterDataLoader;

impl RosterDataLoader {
    pub fn load() -> Result<RosterDataEntity, serde_json::Error> {
        serde_json::from_str(STATIC_ROSTER_JSON)
    }
}
