pub mod routes;

use crate::roster::{RosterDto, RosterGetRequest};
use crate::{AppData, ApiResult};
use axum::extract::{Query, State};
use axum::Json;
use database::RosterGenerator;

pub async fn roster_random_action(
    State(state): State<AppData>,
    Query(request): Query<RosterGetRequest>,
) -> ApiResult<Json<RosterDto>> {
    let size = request.match_size(&state.database)?;

    let mut players = RosterGenerator::blank(size);

    RosterGenerator::with_names(&state.database.names)
        .fill_random(&mut players, &mut rand::thread_rng());

    Ok(Json(RosterDto { size, players }))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{get, post_json};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_random_roster_is_named_and_balanceable() {
        let (status, response) = get("/api/roster/random?size=6-6").await;

        assert_eq!(status, StatusCode::OK);

        let players = response["players"].as_array().unwrap();
        assert_eq!(players.len(), 12);

        for player in players {
            assert!(!player["name"].as_str().unwrap().is_empty());

            let pace = player["pace"].as_u64().unwrap();
            assert!((50..=90).contains(&pace));
        }

        let (status, _) = post_json("/api/teams", json!({ "players": players })).await;
        assert_eq!(status, StatusCode::OK);
    }
}
