//! `documents`サブコマンドの表示
//!
//! ダッシュボードと同じフィルタ処理を端末上で実行する。

use dg_review_common::{DocumentsView, FilterState};

/// フィルタ済み一覧をテキスト表として整形
pub fn render_documents(view: &DocumentsView) -> String {
    let rows = view.visible();
    let name_width = rows
        .iter()
        .map(|d| d.file_name.chars().count())
        .chain(std::iter::once("Source".len()))
        .max()
        .unwrap_or(0);
    let type_width = rows
        .iter()
        .map(|d| d.doc_type.chars().count())
        .chain(std::iter::once("Type".len()))
        .max()
        .unwrap_or(0);

    let row = |source: &str, page: &str, doc_type: &str, dg: &str, confidence: &str| {
        format!(
            "{:<name_width$}  {:>4}  {:<type_width$}  {:<3}  {:>10}\n",
            source, page, doc_type, dg, confidence
        )
    };

    let mut out = row("Source", "Page", "Type", "DG", "Confidence");
    for doc in &rows {
        out.push_str(&row(
            &doc.file_name,
            &doc.page.to_string(),
            &doc.doc_type,
            doc.dg_label(),
            &doc.confidence_percent(),
        ));
    }
    out.push_str(&format!("{}\n", view.summary()));
    out.push_str(&format!("Types: {}\n", view.type_options().join(", ")));
    out
}

/// 有効なフィルタを1行で表示
pub fn describe_filters(filters: &FilterState) -> String {
    if filters.is_default() {
        return "filters: none".to_string();
    }
    let mut parts = Vec::new();
    if !filters.search.is_empty() {
        parts.push(format!("search={:?}", filters.search));
    }
    if let Some(t) = &filters.doc_type {
        parts.push(format!("type={:?}", t));
    }
    if filters.dg_filter != Default::default() {
        parts.push(format!("dg={}", filters.dg_filter));
    }
    if filters.min_confidence > 0 {
        parts.push(format!("min-confidence={}%", filters.min_confidence));
    }
    format!("filters: {}", parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SeedData;
    use dg_review_common::DgFilter;

    #[test]
    fn test_render_all_documents() {
        let view = DocumentsView::new(SeedData::default().documents);
        let out = render_documents(&view);
        assert!(out.contains("invoice1.pdf"));
        assert!(out.contains("msds.pdf"));
        assert!(out.contains("95.0%"));
        assert!(out.contains("Showing 2 of 2 documents"));
        assert!(out.contains("Types: Invoice, Safety Sheet"));
    }

    #[test]
    fn test_render_columns_aligned() {
        let view = DocumentsView::new(SeedData::default().documents);
        let out = render_documents(&view);
        let lines: Vec<&str> = out.lines().collect();

        // 見出し + 2行 + 件数 + 種類
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Source"));
        assert_eq!(lines[0].len(), lines[1].len());
        assert_eq!(lines[1].len(), lines[2].len());
        assert!(lines[1].ends_with("95.0%"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_render_filtered() {
        let mut view = DocumentsView::new(SeedData::default().documents);
        view.filters_mut().set_dg_filter(DgFilter::OnlyDg);
        let out = render_documents(&view);
        assert!(!out.contains("invoice1.pdf"));
        assert!(out.contains("msds.pdf"));
        assert!(out.contains("Showing 1 of 2 documents"));
        // 選択肢はフィルタ前の全件から
        assert!(out.contains("Types: Invoice, Safety Sheet"));
    }

    #[test]
    fn test_describe_filters() {
        let mut filters = FilterState::default();
        assert_eq!(describe_filters(&filters), "filters: none");

        filters.set_search("inv");
        filters.set_dg_filter(DgFilter::OnlyNonDg);
        filters.set_min_confidence(90);
        assert_eq!(
            describe_filters(&filters),
            "filters: search=\"inv\" dg=non-dg min-confidence=90%"
        );
    }
}
