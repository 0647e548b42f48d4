//! ドキュメントフィルタ
//!
//! 4つの独立した条件（ファイル名検索・種類・DG・最低信頼度）のANDで
//! 表示対象を判定する。各条件は既定値のとき常に真。

use crate::types::DocumentRecord;
use serde::{Deserialize, Serialize};

/// DG（危険物）フラグによる絞り込み
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DgFilter {
    #[default]
    All,
    OnlyDg,
    OnlyNonDg,
}

impl DgFilter {
    /// セレクトボックスの値
    pub fn as_str(&self) -> &'static str {
        match self {
            DgFilter::All => "all",
            DgFilter::OnlyDg => "dg",
            DgFilter::OnlyNonDg => "non-dg",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DgFilter::All => "All",
            DgFilter::OnlyDg => "DG only",
            DgFilter::OnlyNonDg => "Non-DG only",
        }
    }

    pub fn all() -> [DgFilter; 3] {
        [DgFilter::All, DgFilter::OnlyDg, DgFilter::OnlyNonDg]
    }

    pub fn matches(&self, dg: bool) -> bool {
        match self {
            DgFilter::All => true,
            DgFilter::OnlyDg => dg,
            DgFilter::OnlyNonDg => !dg,
        }
    }
}

impl std::str::FromStr for DgFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "" => Ok(DgFilter::All),
            "dg" | "only-dg" | "yes" => Ok(DgFilter::OnlyDg),
            "non-dg" | "only-non-dg" | "no" => Ok(DgFilter::OnlyNonDg),
            _ => Err(format!("Unknown DG filter: {}. Use all, dg, or non-dg", s)),
        }
    }
}

impl std::fmt::Display for DgFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// フィルタ状態（画面表示中のみ保持）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// ファイル名の部分一致（大文字小文字を区別しない）
    pub search: String,
    /// 種類の完全一致。Noneは制約なし
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
    pub dg_filter: DgFilter,
    /// 最低信頼度（パーセント, 0..=100）
    pub min_confidence: u8,
}

impl FilterState {
    pub const MAX_CONFIDENCE: u8 = 100;

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// 空文字は「制約なし」
    pub fn set_type(&mut self, doc_type: Option<String>) {
        self.doc_type = doc_type.filter(|t| !t.is_empty());
    }

    pub fn set_dg_filter(&mut self, dg_filter: DgFilter) {
        self.dg_filter = dg_filter;
    }

    pub fn set_min_confidence(&mut self, min_confidence: u8) {
        self.min_confidence = min_confidence.min(Self::MAX_CONFIDENCE);
    }

    /// 「Clear Filters」: 4項目をまとめて既定値へ戻す
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// 4条件すべてを満たすか
    pub fn matches(&self, doc: &DocumentRecord) -> bool {
        self.matches_search(doc)
            && self.matches_type(doc)
            && self.matches_dg(doc)
            && self.matches_confidence(doc)
    }

    pub fn matches_search(&self, doc: &DocumentRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        doc.file_name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }

    pub fn matches_type(&self, doc: &DocumentRecord) -> bool {
        match &self.doc_type {
            Some(t) => doc.doc_type == *t,
            None => true,
        }
    }

    pub fn matches_dg(&self, doc: &DocumentRecord) -> bool {
        self.dg_filter.matches(doc.dg)
    }

    /// 表示と同じパーセント単位で比較（閾値を含む）
    pub fn matches_confidence(&self, doc: &DocumentRecord) -> bool {
        doc.confidence * 100.0 >= f64::from(self.min_confidence)
    }
}

/// 条件に一致するドキュメントを入力順のまま返す
pub fn filter_documents<'a>(
    documents: &'a [DocumentRecord],
    filters: &FilterState,
) -> Vec<&'a DocumentRecord> {
    documents.iter().filter(|doc| filters.matches(doc)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn doc(id: u64, file_name: &str, doc_type: &str, dg: bool, confidence: f64) -> DocumentRecord {
        DocumentRecord {
            id,
            file_name: file_name.to_string(),
            page: 1,
            doc_type: doc_type.to_string(),
            dg,
            confidence,
            fields: BTreeMap::new(),
            preview: None,
        }
    }

    fn scenario() -> Vec<DocumentRecord> {
        vec![
            doc(1, "invoice1.pdf", "Invoice", false, 0.95),
            doc(2, "msds.pdf", "Safety Sheet", true, 0.86),
        ]
    }

    fn names(docs: &[&DocumentRecord]) -> Vec<String> {
        docs.iter().map(|d| d.file_name.clone()).collect()
    }

    fn many() -> Vec<DocumentRecord> {
        vec![
            doc(1, "invoice1.pdf", "Invoice", false, 0.95),
            doc(2, "msds.pdf", "Safety Sheet", true, 0.86),
            doc(3, "INVOICE-2.PDF", "Invoice", false, 0.0),
            doc(4, "packing_list.pdf", "Packing List", true, 1.0),
            doc(5, "dgd-form.pdf", "DG Declaration", true, 0.5),
            doc(6, "scan.png", "Uploaded", false, 0.33),
        ]
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let filters = FilterState::default();
        let docs = many();
        assert!(docs.iter().all(|d| filters.matches(d)));
        assert_eq!(filter_documents(&docs, &filters).len(), docs.len());
    }

    #[test]
    fn test_empty_search_never_excludes() {
        let filters = FilterState {
            search: String::new(),
            ..Default::default()
        };
        assert!(many().iter().all(|d| filters.matches_search(d)));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut filters = FilterState::default();
        filters.set_search("Invoice");
        let docs = many();
        assert_eq!(
            names(&filter_documents(&docs, &filters)),
            vec!["invoice1.pdf", "INVOICE-2.PDF"]
        );

        filters.set_search("oice-2");
        assert_eq!(names(&filter_documents(&docs, &filters)), vec!["INVOICE-2.PDF"]);

        filters.set_search("nothing-matches");
        assert!(filter_documents(&docs, &filters).is_empty());
    }

    #[test]
    fn test_type_filter_is_exact() {
        let mut filters = FilterState::default();
        filters.set_type(Some("Invoice".into()));
        let docs = many();
        let result = filter_documents(&docs, &filters);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|d| d.doc_type == "Invoice"));

        // 部分一致ではない
        filters.set_type(Some("Invo".into()));
        assert!(filter_documents(&docs, &filters).is_empty());

        // 空文字は制約なし
        filters.set_type(Some(String::new()));
        assert_eq!(filters.doc_type, None);
        assert_eq!(filter_documents(&docs, &filters).len(), docs.len());
    }

    #[test]
    fn test_dg_filter_partitions_records() {
        let docs = many();
        let mut filters = FilterState::default();

        filters.set_dg_filter(DgFilter::OnlyDg);
        let dg = filter_documents(&docs, &filters);
        assert_eq!(dg.len(), docs.iter().filter(|d| d.dg).count());
        assert!(dg.iter().all(|d| d.dg));

        filters.set_dg_filter(DgFilter::OnlyNonDg);
        let non_dg = filter_documents(&docs, &filters);
        assert_eq!(non_dg.len(), docs.iter().filter(|d| !d.dg).count());
        assert!(non_dg.iter().all(|d| !d.dg));

        filters.set_dg_filter(DgFilter::All);
        assert_eq!(filter_documents(&docs, &filters).len(), docs.len());
    }

    #[test]
    fn test_min_confidence_is_inclusive() {
        let docs = vec![doc(1, "a.pdf", "X", false, 0.86)];
        let mut filters = FilterState::default();

        filters.set_min_confidence(86);
        assert_eq!(filter_documents(&docs, &filters).len(), 1);

        filters.set_min_confidence(87);
        assert!(filter_documents(&docs, &filters).is_empty());
    }

    #[test]
    fn test_min_confidence_above_rounded_percent_excludes() {
        let filters_for = |min: u8| FilterState {
            min_confidence: min,
            ..Default::default()
        };
        for d in many() {
            let rounded = (d.confidence * 100.0).round() as u8;
            if rounded < FilterState::MAX_CONFIDENCE {
                assert!(!filters_for(rounded + 1).matches_confidence(&d), "{}", d.file_name);
            }
            assert!(filters_for(0).matches_confidence(&d));
        }
    }

    #[test]
    fn test_min_confidence_is_clamped() {
        let mut filters = FilterState::default();
        filters.set_min_confidence(250);
        assert_eq!(filters.min_confidence, 100);
        let docs = many();
        assert_eq!(names(&filter_documents(&docs, &filters)), vec!["packing_list.pdf"]);
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let docs = many();
        let filters = FilterState {
            search: "pdf".into(),
            doc_type: Some("Invoice".into()),
            dg_filter: DgFilter::OnlyNonDg,
            min_confidence: 50,
        };
        assert_eq!(names(&filter_documents(&docs, &filters)), vec!["invoice1.pdf"]);
    }

    #[test]
    fn test_output_preserves_input_order() {
        let mut docs = many();
        docs.reverse();
        let filters = FilterState {
            dg_filter: DgFilter::OnlyDg,
            ..Default::default()
        };
        let ids: Vec<u64> = filter_documents(&docs, &filters).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![5, 4, 2]);
    }

    #[test]
    fn test_scenario() {
        let docs = scenario();

        let only_dg = FilterState {
            dg_filter: DgFilter::OnlyDg,
            ..Default::default()
        };
        assert_eq!(names(&filter_documents(&docs, &only_dg)), vec!["msds.pdf"]);

        let search = FilterState {
            search: "invoice".into(),
            ..Default::default()
        };
        assert_eq!(names(&filter_documents(&docs, &search)), vec!["invoice1.pdf"]);

        let confident = FilterState {
            min_confidence: 90,
            ..Default::default()
        };
        assert_eq!(names(&filter_documents(&docs, &confident)), vec!["invoice1.pdf"]);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut filters = FilterState {
            search: "x".into(),
            doc_type: Some("Invoice".into()),
            dg_filter: DgFilter::OnlyDg,
            min_confidence: 42,
        };
        assert!(!filters.is_default());
        filters.reset();
        assert!(filters.is_default());
        assert_eq!(filters.search, "");
        assert_eq!(filters.doc_type, None);
        assert_eq!(filters.dg_filter, DgFilter::All);
        assert_eq!(filters.min_confidence, 0);
    }

    #[test]
    fn test_empty_collection_yields_no_rows() {
        let filters = FilterState::default();
        assert!(filter_documents(&[], &filters).is_empty());
    }

    #[test]
    fn test_dg_filter_from_str() {
        assert_eq!("all".parse::<DgFilter>(), Ok(DgFilter::All));
        assert_eq!("DG".parse::<DgFilter>(), Ok(DgFilter::OnlyDg));
        assert_eq!("non-dg".parse::<DgFilter>(), Ok(DgFilter::OnlyNonDg));
        assert!("maybe".parse::<DgFilter>().is_err());
        for f in DgFilter::all() {
            assert_eq!(f.as_str().parse::<DgFilter>(), Ok(f));
        }
    }
}
