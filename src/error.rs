use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DgReviewError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("見つかりません: {0}")]
    NotFound(String),

    #[error("アップロードエラー: {0}")]
    Upload(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] dg_review_common::Error),
}

pub type Result<T> = std::result::Result<T, DgReviewError>;

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl DgReviewError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DgReviewError::NotFound(_) => StatusCode::NOT_FOUND,
            DgReviewError::Upload(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DgReviewError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match status {
            // 404は本文なし
            StatusCode::NOT_FOUND => status.into_response(),
            StatusCode::BAD_REQUEST => {
                tracing::warn!(error = %self, "rejected request");
                (status, Json(ErrorResponse { message: self.to_string() })).into_response()
            }
            _ => {
                tracing::error!(error = ?self, "request failed");
                (status, Json(ErrorResponse { message: self.to_string() })).into_response()
            }
        }
    }
}
