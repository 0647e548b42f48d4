//! 詳細パネルの選択状態
//!
//! 選択はフィルタと独立している。フィルタで非表示になっても選択は解除しない。

use crate::types::DocumentRecord;

/// 選択中のドキュメント（最大1件、idで保持）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<u64>,
}

impl Selection {
    /// 既存の選択を置き換える
    pub fn select(&mut self, record: &DocumentRecord) {
        self.selected = Some(record.id);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selected
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selected == Some(id)
    }

    /// スナップショットから選択中のドキュメントを引く
    pub fn resolve<'a>(&self, documents: &'a [DocumentRecord]) -> Option<&'a DocumentRecord> {
        let id = self.selected?;
        documents.iter().find(|doc| doc.id == id)
    }
}
