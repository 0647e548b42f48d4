use super::AppState;
use crate::error::{DgReviewError, Result};
use crate::upload::save_upload;
use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::{get, post},
    Json, Router,
};
use dg_review_common::{IngestResponse, KafkaConfig, KafkaConfigPatch, KafkaStatus, NewDocument};

const UPLOAD_FIELD: &str = "file";
const RECEIVED: &str = "received";

pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/ingestion/config", get(get_config).post(update_config))
        .route("/ingestion/status", get(get_status))
        .route(
            "/ingest",
            post(ingest).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
}

async fn get_config(State(state): State<AppState>) -> Json<KafkaConfig> {
    Json(state.store.kafka_config())
}

#[tracing::instrument(skip_all)]
async fn update_config(
    State(state): State<AppState>,
    Json(patch): Json<KafkaConfigPatch>,
) -> Json<KafkaConfig> {
    let config = state.store.update_kafka_config(patch);
    tracing::info!(brokers = %config.brokers, topic = %config.topic, "kafka config updated");
    Json(config)
}

async fn get_status(State(state): State<AppState>) -> Json<KafkaStatus> {
    Json(state.store.kafka_status())
}

/// 手動アップロード
///
/// 分類は行わず、`Uploaded`としてドキュメント一覧に追加し
/// メッセージ数を1増やす。ファイルがなければ何もしない。
#[tracing::instrument(skip_all)]
async fn ingest(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<IngestResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| DgReviewError::Upload(e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or(UPLOAD_FIELD).to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| DgReviewError::Upload(e.to_string()))?;

        let path = save_upload(&state.config.upload_dir, &bytes).await?;
        let doc = state.store.add_document(NewDocument::uploaded(file_name));
        let status = state.store.record_ingested_message();
        tracing::info!(
            id = doc.id,
            file_name = %doc.file_name,
            size = bytes.len(),
            path = %path.display(),
            messages = status.messages,
            "file ingested"
        );
        break;
    }

    Ok(Json(IngestResponse {
        status: RECEIVED.to_string(),
    }))
}
