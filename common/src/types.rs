//! APIで受け渡しする型の定義
//!
//! サーバ(axum)とWeb(WASM)で共有される型:
//! - DocumentRecord: 処理済みドキュメント（フィルタ対象）
//! - User / NewUser / UserPatch: ユーザー管理
//! - ReviewItem: レビューキュー
//! - KafkaConfig / KafkaStatus: 取り込み設定（モック）
//! - Analytics: 集計値（モック）

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// アップロード直後のドキュメントに付与される分類ラベル
pub const UPLOADED_TYPE: &str = "Uploaded";

/// 抽出フィールド1件分
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub value: String,
    pub confidence: f64,
}

/// 処理済みドキュメント
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: u64,
    pub file_name: String,
    pub page: u32,

    #[serde(rename = "type")]
    pub doc_type: String,

    /// 危険物（Dangerous Goods）フラグ
    pub dg: bool,

    pub confidence: f64,

    #[serde(default)]
    pub fields: BTreeMap<String, FieldInfo>,

    /// プレビュー画像の参照。空文字は「なし」として扱う
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub preview: Option<String>,
}

impl DocumentRecord {
    /// 信頼度をパーセント表記に変換（例: "95.0%"）
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }

    pub fn dg_label(&self) -> &'static str {
        if self.dg { "Yes" } else { "No" }
    }

    /// 信頼度が[0,1]に収まり、ページが1以上であることを検証
    pub fn validate(&self) -> Result<()> {
        if self.page == 0 {
            return Err(Error::Validation(format!(
                "document {}: page must be positive",
                self.id
            )));
        }
        if !is_unit_interval(self.confidence) {
            return Err(Error::Validation(format!(
                "document {}: confidence {} is outside [0,1]",
                self.id, self.confidence
            )));
        }
        for (name, field) in &self.fields {
            if !is_unit_interval(field.confidence) {
                return Err(Error::Validation(format!(
                    "document {}: field '{}' confidence {} is outside [0,1]",
                    self.id, name, field.confidence
                )));
            }
        }
        Ok(())
    }
}

fn is_unit_interval(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// ストアへ追加するドキュメント（idはストアが採番）
#[derive(Debug, Clone, PartialEq)]
pub struct NewDocument {
    pub file_name: String,
    pub page: u32,
    pub doc_type: String,
    pub dg: bool,
    pub confidence: f64,
    pub fields: BTreeMap<String, FieldInfo>,
    pub preview: Option<String>,
}

impl NewDocument {
    /// 手動アップロードされたファイル。分類は行わない
    pub fn uploaded(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            page: 1,
            doc_type: UPLOADED_TYPE.to_string(),
            dg: false,
            confidence: 0.0,
            fields: BTreeMap::new(),
            preview: None,
        }
    }

    pub fn into_record(self, id: u64) -> DocumentRecord {
        DocumentRecord {
            id,
            file_name: self.file_name,
            page: self.page,
            doc_type: self.doc_type,
            dg: self.dg,
            confidence: self.confidence,
            fields: self.fields,
            preview: self.preview,
        }
    }
}

/// ユーザー
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub last_activity: String,
}

/// ユーザー作成リクエスト
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: Option<String>,
    pub last_activity: Option<String>,
}

/// ユーザー更新リクエスト（指定されたフィールドのみ上書き）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<String>,
}

impl UserPatch {
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(status) = self.status {
            user.status = status;
        }
        if let Some(last_activity) = self.last_activity {
            user.last_activity = last_activity;
        }
    }
}

impl From<&User> for UserPatch {
    fn from(user: &User) -> Self {
        Self {
            name: Some(user.name.clone()),
            email: Some(user.email.clone()),
            role: Some(user.role.clone()),
            status: Some(user.status.clone()),
            last_activity: Some(user.last_activity.clone()),
        }
    }
}

/// 画面で選択できるロール
pub const USER_ROLES: [&str; 7] = [
    "Admin",
    "Analyst",
    "Viewer",
    "DG Certified Operator",
    "Compliance Manager",
    "Regional Compliance Manager",
    "Global Compliance Director",
];

/// レビュー待ちアイテム
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewItem {
    pub id: u64,
    pub file: String,
    pub page: u32,
    pub reason: String,
    pub indicator: String,
    pub severity: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewActionRequest {
    pub action: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewActionResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// ダッシュボード用の集計値
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_files: u64,
    pub avg_pages: f64,
    pub avg_documents: f64,
    #[serde(rename = "percentDG")]
    pub percent_dg: f64,
}

/// Kafka接続設定（モック）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KafkaConfig {
    pub brokers: String,
    pub topic: String,
    pub username: String,
    pub password: String,
}

/// Kafka設定の部分更新
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KafkaConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brokers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl KafkaConfigPatch {
    pub fn apply(self, config: &mut KafkaConfig) {
        if let Some(brokers) = self.brokers {
            config.brokers = brokers;
        }
        if let Some(topic) = self.topic {
            config.topic = topic;
        }
        if let Some(username) = self.username {
            config.username = username;
        }
        if let Some(password) = self.password {
            config.password = password;
        }
    }
}

impl From<KafkaConfig> for KafkaConfigPatch {
    fn from(config: KafkaConfig) -> Self {
        Self {
            brokers: Some(config.brokers),
            topic: Some(config.topic),
            username: Some(config.username),
            password: Some(config.password),
        }
    }
}

/// Kafka接続状態（モックのカウンタ）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KafkaStatus {
    pub connected: bool,
    pub messages: u64,
    pub lag: u64,
    pub errors: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestResponse {
    pub status: String,
}

/// JSON配列ファイルからドキュメント一覧を読み込み（非WASM環境のみ）
#[cfg(not(feature = "wasm"))]
pub fn load_documents_file(path: &std::path::Path) -> Result<Vec<DocumentRecord>> {
    let content = std::fs::read_to_string(path)?;
    let documents: Vec<DocumentRecord> = serde_json::from_str(&content)?;
    for doc in &documents {
        doc.validate()?;
    }
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> DocumentRecord {
        serde_json::from_str(
            r#"{
                "id": 2,
                "fileName": "msds.pdf",
                "page": 1,
                "type": "Safety Sheet",
                "dg": true,
                "confidence": 0.86,
                "fields": {
                    "un": { "value": "UN1234", "confidence": 0.95 },
                    "hazard": { "value": "Flammable", "confidence": 0.84 }
                },
                "preview": ""
            }"#,
        )
        .expect("デシリアライズ失敗")
    }

    #[test]
    fn test_document_deserialize() {
        let doc = sample_document();
        assert_eq!(doc.file_name, "msds.pdf");
        assert_eq!(doc.doc_type, "Safety Sheet");
        assert!(doc.dg);
        assert_eq!(doc.fields["un"].value, "UN1234");
        // 空文字のプレビューは「なし」
        assert_eq!(doc.preview, None);
    }

    #[test]
    fn test_document_serialize_uses_wire_names() {
        let doc = sample_document();
        let json = serde_json::to_string(&doc).expect("シリアライズ失敗");
        assert!(json.contains("\"fileName\":\"msds.pdf\""));
        assert!(json.contains("\"type\":\"Safety Sheet\""));
        assert!(!json.contains("preview"));
    }

    #[test]
    fn test_document_missing_fields_defaults_to_empty() {
        let json = r#"{"id":9,"fileName":"a.pdf","page":1,"type":"Invoice","dg":false,"confidence":0.5}"#;
        let doc: DocumentRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(doc.fields.is_empty());
        assert!(doc.preview.is_none());
    }

    #[test]
    fn test_confidence_percent() {
        let mut doc = sample_document();
        assert_eq!(doc.confidence_percent(), "86.0%");
        doc.confidence = 0.95;
        assert_eq!(doc.confidence_percent(), "95.0%");
        assert_eq!(doc.dg_label(), "Yes");
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut doc = sample_document();
        assert!(doc.validate().is_ok());

        doc.confidence = 1.2;
        assert!(matches!(doc.validate(), Err(Error::Validation(_))));

        let mut doc = sample_document();
        doc.fields.get_mut("un").expect("un").confidence = -0.1;
        assert!(doc.validate().is_err());

        let mut doc = sample_document();
        doc.page = 0;
        assert!(doc.validate().is_err());
    }

    #[test]
    fn test_uploaded_document() {
        let doc = NewDocument::uploaded("scan.pdf").into_record(42);
        assert_eq!(doc.id, 42);
        assert_eq!(doc.doc_type, UPLOADED_TYPE);
        assert_eq!(doc.page, 1);
        assert!(!doc.dg);
        assert_eq!(doc.confidence, 0.0);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_user_patch_merges_only_given_fields() {
        let mut user = User {
            id: 1,
            name: "Alice".into(),
            email: "alice@example.com".into(),
            role: "Admin".into(),
            status: "active".into(),
            last_activity: "2024-05-01".into(),
        };
        let patch: UserPatch =
            serde_json::from_str(r#"{"role":"Analyst","status":"inactive"}"#).expect("patch");
        patch.apply(&mut user);
        assert_eq!(user.role, "Analyst");
        assert_eq!(user.status, "inactive");
        assert_eq!(user.name, "Alice");
        assert_eq!(user.id, 1);
    }

    #[test]
    fn test_kafka_patch_merges_only_given_fields() {
        let mut config = KafkaConfig {
            brokers: "localhost:9092".into(),
            topic: "documents".into(),
            ..Default::default()
        };
        let patch: KafkaConfigPatch =
            serde_json::from_str(r#"{"topic":"test"}"#).expect("patch");
        patch.apply(&mut config);
        assert_eq!(config.brokers, "localhost:9092");
        assert_eq!(config.topic, "test");
    }

    #[test]
    fn test_analytics_wire_names() {
        let analytics = Analytics {
            total_files: 2,
            avg_pages: 1.0,
            avg_documents: 2.0,
            percent_dg: 50.0,
        };
        let json = serde_json::to_string(&analytics).expect("シリアライズ失敗");
        assert!(json.contains("\"totalFiles\":2"));
        assert!(json.contains("\"percentDG\":50.0"));
    }

    #[test]
    fn test_review_action_without_action_is_omitted() {
        let response = ReviewActionResponse {
            status: "recorded".into(),
            action: None,
        };
        let json = serde_json::to_string(&response).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"status":"recorded"}"#);
    }
}
