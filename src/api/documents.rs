use super::AppState;
use axum::{extract::State, routing::get, Json, Router};
use dg_review_common::DocumentRecord;

pub fn router() -> Router<AppState> {
    Router::new().route("/documents", get(list_documents))
}

async fn list_documents(State(state): State<AppState>) -> Json<Vec<DocumentRecord>> {
    Json(state.store.list_documents())
}
