mod common;
mod config;
mod error;
mod roster;
mod routes;
mod teams;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};

use crate::routes::ServerRoutes;
use axum::response::IntoResponse;
use database::DatabaseEntity;
use log::{error, info};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct TeamBalancerServer {
    data: AppData,
}

impl TeamBalancerServer {
    pub fn new(data: AppData) -> Self {
        TeamBalancerServer { data }
    }

    pub fn router(&self) -> axum::Router {
        ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        ApiError::InternalError("handler panicked".to_string()).into_response()
                    })),
            )
            .with_state(self.data.clone())
    }

    pub async fn run(&self, config: &ServerConfig) -> std::io::Result<()> {
        let app = self.router();

        let addr = config.socket_addr();

        let listener = TcpListener::bind(addr).await.inspect_err(|e| {
            error!("Failed to bind to address {}: {}", addr, e);
        })?;

        info!("listen at: http://{}", addr);

        axum::serve(listener, app).await
    }
}

pub struct AppData {
    pub database: Arc<DatabaseEntity>,
}

impl Clone for AppData {
    fn clone(&self) -> Self {
        AppData {
            database: Arc::clone(&self.database),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use database::DatabaseLoader;
    use tower::ServiceExt;

    pub fn test_router() -> axum::Router {
        let database = DatabaseLoader::load().expect("embedded roster data");

        TeamBalancerServer::new(AppData {
            database: Arc::new(database),
        })
        .router()
    }

    pub async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = test_router().oneshot(request).await.expect("router response");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body");

        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    pub async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
        send(Request::get(uri).body(Body::empty()).expect("request")).await
    }

    pub async fn post_json(uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        send(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
    }
}
