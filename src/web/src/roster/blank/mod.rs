pub mod routes;

use crate::roster::{RosterDto, RosterGetRequest};
use crate::{AppData, ApiResult};
use axum::extract::{Query, State};
use axum::Json;
use database::RosterGenerator;

pub async fn roster_blank_action(
    State(state): State<AppData>,
    Query(request): Query<RosterGetRequest>,
) -> ApiResult<Json<RosterDto>> {
    let size = request.match_size(&state.database)?;

    Ok(Json(RosterDto {
        size,
        players: RosterGenerator::blank(size),
    }))
}
