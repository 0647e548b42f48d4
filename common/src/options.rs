//! 種類フィルタの選択肢抽出

use crate::types::DocumentRecord;
use std::collections::HashSet;

/// 読み込み済みドキュメントに含まれる種類を初出順・重複なしで返す
///
/// 状態を持たず毎回計算するので、ドキュメント集合の変化がそのまま反映される。
pub fn distinct_types(documents: &[DocumentRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut types = Vec::new();
    for doc in documents {
        if seen.insert(doc.doc_type.as_str()) {
            types.push(doc.doc_type.clone());
        }
    }
    types
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewDocument;

    fn typed(id: u64, doc_type: &str) -> DocumentRecord {
        let mut doc = NewDocument::uploaded(format!("{id}.pdf"));
        doc.doc_type = doc_type.to_string();
        doc.into_record(id)
    }

    #[test]
    fn test_distinct_types_first_occurrence_order() {
        let docs = vec![
            typed(1, "Invoice"),
            typed(2, "Safety Sheet"),
            typed(3, "Invoice"),
            typed(4, "Packing List"),
            typed(5, "Safety Sheet"),
        ];
        assert_eq!(
            distinct_types(&docs),
            vec!["Invoice", "Safety Sheet", "Packing List"]
        );
    }

    #[test]
    fn test_distinct_types_empty() {
        assert!(distinct_types(&[]).is_empty());
    }

    #[test]
    fn test_novel_type_adds_exactly_one_option() {
        let mut docs = vec![typed(1, "Invoice"), typed(2, "Safety Sheet")];
        let before = distinct_types(&docs);

        docs.push(typed(3, "Invoice"));
        assert_eq!(distinct_types(&docs), before);

        docs.push(typed(4, "Uploaded"));
        let after = distinct_types(&docs);
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last().map(String::as_str), Some("Uploaded"));
    }

    #[test]
    fn test_removed_type_disappears() {
        let mut docs = vec![typed(1, "Invoice"), typed(2, "Safety Sheet")];
        docs.retain(|d| d.doc_type != "Safety Sheet");
        assert_eq!(distinct_types(&docs), vec!["Invoice"]);
    }

    #[test]
    fn test_types_are_case_sensitive() {
        let docs = vec![typed(1, "invoice"), typed(2, "Invoice")];
        assert_eq!(distinct_types(&docs).len(), 2);
    }
}
