//! HTTP API（axum）
//!
//! `/api/*` のJSONエンドポイントと、ダッシュボードの静的ファイル配信。

use crate::config::Config;
use crate::error::{DgReviewError, Result};
use crate::store::Store;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

mod analytics;
mod documents;
mod health;
mod ingestion;
mod review;
mod users;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

/// ルーター全体を構築
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let index = static_dir.join("index.html");

    Router::new()
        .nest("/api", api_router(&state))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        // ヘルスチェックはトレース対象外
        .merge(health::router())
        // SPA: 静的ファイルがなければindex.html
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
}

fn api_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(users::router())
        .merge(documents::router())
        .merge(ingestion::router(state.config.max_upload_bytes))
        .merge(review::router())
        .merge(analytics::router())
}

/// 既にバインド済みのリスナーで待ち受け
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, static_dir = %state.config.static_dir.display(), "server running");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// パスの`:id`を解釈。数値でなければ未知のidと同じく404
pub(crate) fn parse_id(raw: &str, kind: &str) -> Result<u64> {
    raw.parse()
        .map_err(|_| DgReviewError::NotFound(format!("{} {}", kind, raw)))
}
