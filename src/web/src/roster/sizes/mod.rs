pub mod routes;

use crate::AppData;
use axum::extract::State;
use axum::Json;
use database::MatchSize;
use serde::Serialize;

#[derive(Serialize)]
pub struct MatchSizesDto {
    pub sizes: Vec<MatchSize>,
    pub default: MatchSize,
}

pub async fn match_sizes_action(State(state): State<AppData>) -> Json<MatchSizesDto> {
    Json(MatchSizesDto {
        sizes: state.database.match_sizes.clone(),
        default: state.database.default_match_size,
    })
}
