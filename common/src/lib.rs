//! DG Review Common Library
//!
//! サーバとWeb(WASM)で共有される型と、処理済みドキュメント画面の
//! フィルタ・選択ロジック

pub mod types;
pub mod error;
pub mod filter;
pub mod options;
pub mod selection;
pub mod view;

pub use types::{
    Analytics, DocumentRecord, FieldInfo, IngestResponse, KafkaConfig, KafkaConfigPatch,
    KafkaStatus, NewDocument, NewUser, ReviewActionRequest, ReviewActionResponse, ReviewItem,
    User, UserPatch, UPLOADED_TYPE, USER_ROLES,
};
#[cfg(not(feature = "wasm"))]
pub use types::load_documents_file;
pub use error::{Error, Result};
pub use filter::{filter_documents, DgFilter, FilterState};
pub use options::distinct_types;
pub use selection::Selection;
pub use view::{DocumentsView, ViewSummary};
