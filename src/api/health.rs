use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({})))
}

pub fn router() -> Router {
    Router::new().route("/health", get(health_handler))
}
