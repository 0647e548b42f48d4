use super::{parse_id, AppState};
use crate::error::Result;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use dg_review_common::{ReviewActionRequest, ReviewActionResponse, ReviewItem};

const RECORDED: &str = "recorded";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/review", get(list_review))
        .route("/review/{id}/action", post(record_action))
}

async fn list_review(State(state): State<AppState>) -> Json<Vec<ReviewItem>> {
    Json(state.store.list_review())
}

/// 操作は履歴に残すだけで、キューの中身は変わらない
#[tracing::instrument(skip(state, req))]
async fn record_action(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ReviewActionRequest>,
) -> Result<Json<ReviewActionResponse>> {
    let id = parse_id(&id, "review item")?;
    let decision = state.store.record_review_action(id, req.action);
    tracing::info!(action = ?decision.action, "review action recorded");
    Ok(Json(ReviewActionResponse {
        status: RECORDED.to_string(),
        action: decision.action,
    }))
}
