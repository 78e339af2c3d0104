use crate::common::default_handler::default_handler;
use crate::roster::roster_routes;
use crate::teams::team_routes;
use crate::AppData;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<AppData> {
        Router::<AppData>::new()
            .merge(team_routes())
            .merge(roster_routes())
            .fallback(default_handler)
    }
}
