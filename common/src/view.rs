//! 処理済みドキュメント画面のセッション
//!
//! 一度取得したスナップショットに対して、フィルタ・選択肢抽出・選択を
//! すべて同期的に計算する。ネットワークアクセスは行わない。

use crate::filter::{filter_documents, FilterState};
use crate::options::distinct_types;
use crate::selection::Selection;
use crate::types::DocumentRecord;

/// 表示件数のサマリ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSummary {
    pub visible: usize,
    pub total: usize,
}

impl std::fmt::Display for ViewSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Showing {} of {} documents", self.visible, self.total)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentsView {
    documents: Vec<DocumentRecord>,
    filters: FilterState,
    selection: Selection,
}

impl DocumentsView {
    pub fn new(documents: Vec<DocumentRecord>) -> Self {
        Self {
            documents,
            ..Default::default()
        }
    }

    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// フィルタを通過したドキュメント（入力順）
    pub fn visible(&self) -> Vec<&DocumentRecord> {
        filter_documents(&self.documents, &self.filters)
    }

    /// 種類セレクトの選択肢（フィルタ前の全件から毎回計算）
    pub fn type_options(&self) -> Vec<String> {
        distinct_types(&self.documents)
    }

    /// スナップショットにないidは無視する。非表示のドキュメントも選択できる
    pub fn select(&mut self, id: u64) -> bool {
        match self.documents.iter().find(|doc| doc.id == id) {
            Some(doc) => {
                self.selection.select(doc);
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// フィルタに関係なく選択中のドキュメントを返す
    pub fn selected(&self) -> Option<&DocumentRecord> {
        self.selection.resolve(&self.documents)
    }

    /// フィルタのみ既定値へ戻す。選択は維持
    pub fn clear_filters(&mut self) {
        self.filters.reset();
    }

    pub fn summary(&self) -> ViewSummary {
        ViewSummary {
            visible: self.visible().len(),
            total: self.documents.len(),
        }
    }
}
