//! 処理済みドキュメント画面
//!
//! 一覧は表示時に1回だけ取得し、以降のフィルタ・選択は
//! `DocumentsView`上で同期的に再計算する。

use leptos::prelude::*;
use leptos::task::spawn_local;
use dg_review_common::{DgFilter, DocumentRecord, DocumentsView, FilterState};
use crate::api;

#[component]
pub fn Documents() -> impl IntoView {
    let session = RwSignal::new(DocumentsView::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        match api::fetch_documents().await {
            Ok(docs) => session.set(DocumentsView::new(docs)),
            Err(e) => {
                // 取得失敗時は0件として扱う
                api::log_error("documents", &e);
                set_error.set(Some(e));
            }
        }
        set_loading.set(false);
    });

    let visible = move || {
        session.with(|s| s.visible().into_iter().cloned().collect::<Vec<DocumentRecord>>())
    };
    let selected = move || session.with(|s| s.selected().cloned());

    view! {
        <div class="documents">
            <h2>"Processed Documents"</h2>
            <FilterBar session=session />
            <Show when=move || error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <p class="text-muted">
                {move || if loading.get() { "Loading...".to_string() } else { session.with(|s| s.summary().to_string()) }}
            </p>
            <div class="documents-layout">
                <table>
                    <thead>
                        <tr>
                            <th>"Source"</th>
                            <th>"Page"</th>
                            <th>"Type"</th>
                            <th>"DG"</th>
                            <th>"Confidence"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=visible
                            key=|doc| doc.id
                            children=move |doc| {
                                let id = doc.id;
                                view! {
                                    <tr
                                        class="clickable"
                                        class:selected=move || session.with(|s| s.selection().is_selected(id))
                                        on:click=move |_| session.update(|s| {
                                            s.select(id);
                                        })
                                    >
                                        <td>{doc.file_name.clone()}</td>
                                        <td>{doc.page}</td>
                                        <td>{doc.doc_type.clone()}</td>
                                        <td>{doc.dg_label()}</td>
                                        <td>{doc.confidence_percent()}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                {move || selected().map(|doc| view! {
                    <DocumentDetail
                        doc=doc
                        on_close=move || session.update(|s| s.clear_selection())
                    />
                })}
            </div>
        </div>
    }
}

/// 種類セレクトの表示値。制約なしは「All types」の空文字
fn type_select_value(filters: &FilterState) -> String {
    filters.doc_type.clone().unwrap_or_default()
}

fn dg_select_value(filters: &FilterState) -> String {
    filters.dg_filter.as_str().to_string()
}

/// フィルタ操作部
///
/// セレクトは`prop:value`で状態に追従させる（Clear Filters後も表示が戻る）
#[component]
fn FilterBar(session: RwSignal<DocumentsView>) -> impl IntoView {
    let type_options = move || session.with(|s| s.type_options());
    let current_type = move || session.with(|s| s.filters().doc_type.clone());

    view! {
        <div class="filter-bar">
            <input
                type="text"
                placeholder="Search file name..."
                prop:value=move || session.with(|s| s.filters().search.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    session.update(|s| s.filters_mut().set_search(value));
                }
            />

            <select
                prop:value=move || session.with(|s| type_select_value(s.filters()))
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    session.update(|s| s.filters_mut().set_type(Some(value)));
                }
            >
                <option value="" selected=move || current_type().is_none()>"All types"</option>
                <For
                    each=type_options
                    key=|t| t.clone()
                    children=move |t| {
                        let label = t.clone();
                        let value = t.clone();
                        view! {
                            <option
                                value=value
                                selected=move || current_type().as_deref() == Some(t.as_str())
                            >
                                {label}
                            </option>
                        }
                    }
                />
            </select>

            <select
                prop:value=move || session.with(|s| dg_select_value(s.filters()))
                on:change=move |ev| {
                    let value: DgFilter = event_target_value(&ev).parse().unwrap_or_default();
                    session.update(|s| s.filters_mut().set_dg_filter(value));
                }
            >
                {DgFilter::all()
                    .into_iter()
                    .map(|f| view! {
                        <option
                            value=f.as_str()
                            selected=move || session.with(|s| s.filters().dg_filter == f)
                        >
                            {f.label()}
                        </option>
                    })
                    .collect_view()}
            </select>

            <label>
                "Min confidence (%) "
                <input
                    type="number"
                    min="0"
                    max="100"
                    prop:value=move || session.with(|s| s.filters().min_confidence.to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev)
                            .parse::<u32>()
                            .map(|n| n.min(100) as u8)
                            .unwrap_or(0);
                        session.update(|s| s.filters_mut().set_min_confidence(value));
                    }
                />
            </label>

            <button
                class="btn btn-secondary"
                on:click=move |_| session.update(|s| s.clear_filters())
            >
                "Clear Filters"
            </button>
        </div>
    }
}

/// 詳細パネル。フィルタで非表示になっても最後に選択したものを表示し続ける
#[component]
fn DocumentDetail<F>(doc: DocumentRecord, on_close: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    let preview = match doc.preview.clone() {
        Some(src) => view! { <img class="preview" src=src alt=doc.file_name.clone() /> }.into_any(),
        None => view! { <p class="text-muted">"No preview available"</p> }.into_any(),
    };

    view! {
        <div class="detail-panel">
            <div class="detail-header">
                <h3>{doc.file_name.clone()}</h3>
                <button class="btn btn-small btn-tertiary" on:click=move |_| on_close()>
                    "Close"
                </button>
            </div>
            <p>{format!("Page {} | {} | DG: {}", doc.page, doc.doc_type, doc.dg_label())}</p>
            <p>{format!("Confidence: {}", doc.confidence_percent())}</p>
            <table>
                <thead>
                    <tr>
                        <th>"Field"</th>
                        <th>"Value"</th>
                        <th>"Confidence"</th>
                    </tr>
                </thead>
                <tbody>
                    {doc.fields
                        .iter()
                        .map(|(name, field)| view! {
                            <tr>
                                <td>{name.clone()}</td>
                                <td>{field.value.clone()}</td>
                                <td>{format!("{:.1}%", field.confidence * 100.0)}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
            {preview}
        </div>
    }
}
