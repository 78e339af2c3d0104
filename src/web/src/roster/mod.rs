pub mod blank;
pub mod random;
pub mod sizes;

use crate::{AppData, ApiResult};
use axum::Router;
use squad_core::RosterEntry;
use database::{DatabaseEntity, MatchSize};
use serde::{Deserialize, Serialize};

pub fn roster_routes() -> Router<AppData> {
    Router::new()
        .merge(blank::routes::routes())
        .merge(random::routes::routes())
        .merge(sizes::routes::routes())
}

#[derive(Deserialize)]
pub struct RosterGetRequest {
    pub size: Option<String>,
}

#[derive(Serialize)]
pub struct RosterDto {
    pub size: MatchSize,
    pub players: Vec<RosterEntry>,
}

impl RosterGetRequest {
    /// Requested match size, or the configured default when none was given.
    pub fn match_size(&self, database: &DatabaseEntity) -> ApiResult<MatchSize> {
        match &self.size {
            Some(code) => Ok(code.parse::<MatchSize>()?),
            None => Ok(database.default_match_size),
        }
    }
}
