//! ストア層
//!
//! APIハンドラはこのトレイト経由でデータへアクセスする。
//! 現状の実装はメモリ上のみ（再起動で消える）。

pub mod memory;
pub mod seed;

pub use memory::InMemoryStore;
pub use seed::SeedData;

use dg_review_common::{
    Analytics, DocumentRecord, KafkaConfig, KafkaConfigPatch, KafkaStatus, NewDocument, NewUser,
    ReviewItem, User, UserPatch,
};
use serde::Serialize;

pub trait UserStore: Send + Sync {
    fn list_users(&self) -> Vec<User>;

    fn create_user(&self, new_user: NewUser) -> User;

    /// 存在しないidはNone
    fn update_user(&self, id: u64, patch: UserPatch) -> Option<User>;

    fn delete_user(&self, id: u64) -> Option<User>;
}

pub trait DocumentStore: Send + Sync {
    fn list_documents(&self) -> Vec<DocumentRecord>;

    fn add_document(&self, document: NewDocument) -> DocumentRecord;
}

/// レビュー操作の記録
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDecision {
    pub review_id: u64,
    pub action: Option<String>,
    pub recorded_at: String,
}

pub trait ReviewStore: Send + Sync {
    fn list_review(&self) -> Vec<ReviewItem>;

    /// キューは変更せず、操作履歴に追記するだけ
    fn record_review_action(&self, review_id: u64, action: Option<String>) -> ReviewDecision;

    fn review_decisions(&self) -> Vec<ReviewDecision>;
}

pub trait IngestionStore: Send + Sync {
    fn kafka_config(&self) -> KafkaConfig;

    fn update_kafka_config(&self, patch: KafkaConfigPatch) -> KafkaConfig;

    fn kafka_status(&self) -> KafkaStatus;

    /// 取り込みメッセージ数を1増やす
    fn record_ingested_message(&self) -> KafkaStatus;
}

pub trait AnalyticsStore: Send + Sync {
    fn analytics(&self) -> Analytics;
}

/// ハンドラが必要とするストア全体
pub trait Store: UserStore + DocumentStore + ReviewStore + IngestionStore + AnalyticsStore {}

impl<T> Store for T where T: UserStore + DocumentStore + ReviewStore + IngestionStore + AnalyticsStore {}
