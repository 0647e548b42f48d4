//! 初期データ
//!
//! 既定値は組み込みのモックデータ。JSONファイルで差し替えられる
//! （省略した項目は組み込み値のまま）。

use crate::error::Result;
use dg_review_common::{
    Analytics, DocumentRecord, FieldInfo, KafkaConfig, KafkaStatus, ReviewItem, User,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedData {
    pub users: Vec<User>,
    pub documents: Vec<DocumentRecord>,
    pub review_queue: Vec<ReviewItem>,
    pub analytics: Analytics,
    pub kafka_config: KafkaConfig,
    pub kafka_status: KafkaStatus,
}

impl SeedData {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let seed: SeedData = serde_json::from_str(&content)?;
        seed.validate()?;
        Ok(seed)
    }

    /// ドキュメントの値域とidの重複を検証
    pub fn validate(&self) -> Result<()> {
        for doc in &self.documents {
            doc.validate()?;
        }
        ensure_unique("document", self.documents.iter().map(|d| d.id))?;
        ensure_unique("user", self.users.iter().map(|u| u.id))?;
        ensure_unique("review item", self.review_queue.iter().map(|r| r.id))?;
        Ok(())
    }

    /// 採番済みの最大id
    pub fn max_id(&self) -> u64 {
        let users = self.users.iter().map(|u| u.id);
        let documents = self.documents.iter().map(|d| d.id);
        let review = self.review_queue.iter().map(|r| r.id);
        users.chain(documents).chain(review).max().unwrap_or(0)
    }
}

fn ensure_unique(kind: &str, ids: impl Iterator<Item = u64>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(dg_review_common::Error::Validation(format!(
                "duplicate {} id {}",
                kind, id
            ))
            .into());
        }
    }
    Ok(())
}

fn field(value: &str, confidence: f64) -> FieldInfo {
    FieldInfo {
        value: value.to_string(),
        confidence,
    }
}

impl Default for SeedData {
    fn default() -> Self {
        let users = vec![
            User {
                id: 1,
                name: "Alice".into(),
                email: "alice@example.com".into(),
                role: "Admin".into(),
                status: "active".into(),
                last_activity: "2024-05-01".into(),
            },
            User {
                id: 2,
                name: "Bob".into(),
                email: "bob@example.com".into(),
                role: "Analyst".into(),
                status: "inactive".into(),
                last_activity: "2024-04-15".into(),
            },
        ];

        let documents = vec![
            DocumentRecord {
                id: 1,
                file_name: "invoice1.pdf".into(),
                page: 1,
                doc_type: "Invoice".into(),
                dg: false,
                confidence: 0.95,
                fields: BTreeMap::from([
                    ("supplier".to_string(), field("ACME Corp", 0.93)),
                    ("date".to_string(), field("2024-05-01", 0.88)),
                    ("items".to_string(), field("Widgets", 0.82)),
                    ("total".to_string(), field("$1,000", 0.91)),
                    ("un".to_string(), field("UN0000", 0.1)),
                ]),
                preview: None,
            },
            DocumentRecord {
                id: 2,
                file_name: "msds.pdf".into(),
                page: 1,
                doc_type: "Safety Sheet".into(),
                dg: true,
                confidence: 0.86,
                fields: BTreeMap::from([
                    ("supplier".to_string(), field("Contoso Chemicals", 0.9)),
                    ("un".to_string(), field("UN1234", 0.95)),
                    ("hazard".to_string(), field("Flammable", 0.84)),
                ]),
                preview: None,
            },
        ];

        let review_queue = vec![ReviewItem {
            id: 1,
            file: "msds.pdf".into(),
            page: 1,
            reason: "Keyword match".into(),
            indicator: "UN 1234".into(),
            severity: "high".into(),
            confidence: 0.88,
        }];

        Self {
            users,
            documents,
            review_queue,
            analytics: Analytics {
                total_files: 2,
                avg_pages: 1.0,
                avg_documents: 2.0,
                percent_dg: 50.0,
            },
            kafka_config: KafkaConfig {
                brokers: "localhost:9092".into(),
                topic: "documents".into(),
                username: String::new(),
                password: String::new(),
            },
            kafka_status: KafkaStatus {
                connected: true,
                messages: 0,
                lag: 0,
                errors: 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DgReviewError;

    #[test]
    fn test_default_seed_is_valid() {
        let seed = SeedData::default();
        assert!(seed.validate().is_ok());
        assert_eq!(seed.users.len(), 2);
        assert_eq!(seed.documents.len(), 2);
        assert_eq!(seed.max_id(), 2);
    }

    #[test]
    fn test_partial_seed_keeps_builtin_values() {
        let seed: SeedData = serde_json::from_str(r#"{"users": []}"#).expect("seed");
        assert!(seed.users.is_empty());
        assert_eq!(seed.documents.len(), 2);
        assert_eq!(seed.kafka_config.topic, "documents");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut seed = SeedData::default();
        seed.documents[1].id = seed.documents[0].id;
        let err = seed.validate().expect_err("duplicate ids must be rejected");
        assert!(matches!(
            err,
            DgReviewError::Common(dg_review_common::Error::Validation(_))
        ));
        assert_eq!(err.to_string(), "Validation error: duplicate document id 1");
    }

    #[test]
    fn test_out_of_range_confidence_rejected() {
        let mut seed = SeedData::default();
        seed.documents[0].confidence = 95.0;
        assert!(matches!(seed.validate(), Err(DgReviewError::Common(_))));
    }
}
