//! メモリ上のストア
//!
//! コレクションごとにRwLockを持つ。ロックはハンドラ内の短い区間だけ保持し、
//! awaitをまたがない。

use super::{
    AnalyticsStore, DocumentStore, IngestionStore, ReviewDecision, ReviewStore, SeedData,
    UserStore,
};
use dg_review_common::{
    Analytics, DocumentRecord, KafkaConfig, KafkaConfigPatch, KafkaStatus, NewDocument, NewUser,
    ReviewItem, User, UserPatch,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

const DEFAULT_USER_STATUS: &str = "active";

#[derive(Debug)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
    documents: RwLock<Vec<DocumentRecord>>,
    review_queue: RwLock<Vec<ReviewItem>>,
    decisions: RwLock<Vec<ReviewDecision>>,
    analytics: RwLock<Analytics>,
    kafka_config: RwLock<KafkaConfig>,
    kafka_status: RwLock<KafkaStatus>,
    next_id: AtomicU64,
}

// 値は常に整合した状態で書き込まれるので、ポイズンは無視して中身を使う
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

fn now_millis() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

impl InMemoryStore {
    /// 組み込みのモックデータで初期化
    pub fn seeded() -> Self {
        Self::from_seed(SeedData::default())
    }

    pub fn empty() -> Self {
        Self::from_seed(SeedData {
            users: Vec::new(),
            documents: Vec::new(),
            review_queue: Vec::new(),
            ..SeedData::default()
        })
    }

    pub fn from_seed(seed: SeedData) -> Self {
        // idは現在時刻(ミリ秒)以上から採番する
        let first_id = now_millis().max(seed.max_id() + 1);
        Self {
            users: RwLock::new(seed.users),
            documents: RwLock::new(seed.documents),
            review_queue: RwLock::new(seed.review_queue),
            decisions: RwLock::new(Vec::new()),
            analytics: RwLock::new(seed.analytics),
            kafka_config: RwLock::new(seed.kafka_config),
            kafka_status: RwLock::new(seed.kafka_status),
            next_id: AtomicU64::new(first_id),
        }
    }

    fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl UserStore for InMemoryStore {
    fn list_users(&self) -> Vec<User> {
        read(&self.users).clone()
    }

    fn create_user(&self, new_user: NewUser) -> User {
        let user = User {
            id: self.allocate_id(),
            name: new_user.name,
            email: new_user.email,
            role: new_user.role,
            status: new_user
                .status
                .unwrap_or_else(|| DEFAULT_USER_STATUS.to_string()),
            last_activity: new_user.last_activity.unwrap_or_else(today),
        };
        write(&self.users).push(user.clone());
        user
    }

    fn update_user(&self, id: u64, patch: UserPatch) -> Option<User> {
        let mut users = write(&self.users);
        let user = users.iter_mut().find(|u| u.id == id)?;
        patch.apply(user);
        Some(user.clone())
    }

    fn delete_user(&self, id: u64) -> Option<User> {
        let mut users = write(&self.users);
        let idx = users.iter().position(|u| u.id == id)?;
        Some(users.remove(idx))
    }
}

impl DocumentStore for InMemoryStore {
    fn list_documents(&self) -> Vec<DocumentRecord> {
        read(&self.documents).clone()
    }

    fn add_document(&self, document: NewDocument) -> DocumentRecord {
        let record = document.into_record(self.allocate_id());
        write(&self.documents).push(record.clone());
        record
    }
}

impl ReviewStore for InMemoryStore {
    fn list_review(&self) -> Vec<ReviewItem> {
        read(&self.review_queue).clone()
    }

    fn record_review_action(&self, review_id: u64, action: Option<String>) -> ReviewDecision {
        let decision = ReviewDecision {
            review_id,
            action,
            recorded_at: chrono::Utc::now().to_rfc3339(),
        };
        write(&self.decisions).push(decision.clone());
        decision
    }

    fn review_decisions(&self) -> Vec<ReviewDecision> {
        read(&self.decisions).clone()
    }
}

impl IngestionStore for InMemoryStore {
    fn kafka_config(&self) -> KafkaConfig {
        read(&self.kafka_config).clone()
    }

    fn update_kafka_config(&self, patch: KafkaConfigPatch) -> KafkaConfig {
        let mut config = write(&self.kafka_config);
        patch.apply(&mut config);
        config.clone()
    }

    fn kafka_status(&self) -> KafkaStatus {
        read(&self.kafka_status).clone()
    }

    fn record_ingested_message(&self) -> KafkaStatus {
        let mut status = write(&self.kafka_status);
        status.messages += 1;
        status.clone()
    }
}

impl AnalyticsStore for InMemoryStore {
    fn analytics(&self) -> Analytics {
        read(&self.analytics).clone()
    }
}
