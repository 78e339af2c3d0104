use crate::ApiError;
use axum::http::Uri;
use axum::response::{IntoResponse, Response};

pub async fn default_handler(uri: Uri) -> Response {
    ApiError::NotFound(format!("no route for {}", uri.path())).into_response()
}

#[cfg(test)]
mod tests {
    use crate::test_support::get;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = get("/api/unknown").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "no route for /api/unknown");
    }
}
