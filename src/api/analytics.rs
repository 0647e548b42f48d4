use super::AppState;
use axum::{extract::State, routing::get, Json, Router};
use dg_review_common::Analytics;

pub fn router() -> Router<AppState> {
    Router::new().route("/analytics", get(analytics))
}

async fn analytics(State(state): State<AppState>) -> Json<Analytics> {
    Json(state.store.analytics())
}
