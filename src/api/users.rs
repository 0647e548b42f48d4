use super::{parse_id, AppState};
use crate::error::{DgReviewError, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use dg_review_common::{NewUser, User, UserPatch};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", put(update_user).delete(delete_user))
}

async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.store.list_users())
}

#[tracing::instrument(skip(state, new_user))]
async fn create_user(
    State(state): State<AppState>,
    Json(new_user): Json<NewUser>,
) -> (StatusCode, Json<User>) {
    let user = state.store.create_user(new_user);
    tracing::info!(id = user.id, email = %user.email, "user created");
    (StatusCode::CREATED, Json(user))
}

#[tracing::instrument(skip(state, patch))]
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<User>> {
    let id = parse_id(&id, "user")?;
    let user = state
        .store
        .update_user(id, patch)
        .ok_or_else(|| DgReviewError::NotFound(format!("user {}", id)))?;
    tracing::info!("user updated");
    Ok(Json(user))
}

#[tracing::instrument(skip(state))]
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    let id = parse_id(&id, "user")?;
    let user = state
        .store
        .delete_user(id)
        .ok_or_else(|| DgReviewError::NotFound(format!("user {}", id)))?;
    tracing::info!("user deleted");
    Ok(Json(user))
}
