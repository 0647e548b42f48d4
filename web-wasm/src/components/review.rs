//! レビューキュー

use leptos::prelude::*;
use leptos::task::spawn_local;
use dg_review_common::ReviewItem;
use std::collections::HashMap;
use crate::api;

const ACTIONS: [&str; 2] = ["approve", "reject"];

#[component]
pub fn Review() -> impl IntoView {
    let (items, set_items) = signal(Vec::<ReviewItem>::new());
    // レビューid → 記録された操作
    let (recorded, set_recorded) = signal(HashMap::<u64, String>::new());

    spawn_local(async move {
        match api::fetch_review_queue().await {
            Ok(list) => set_items.set(list),
            Err(e) => api::log_error("review", &e),
        }
    });

    let on_action = move |id: u64, action: &'static str| {
        spawn_local(async move {
            match api::record_review_action(id, action).await {
                Ok(res) => {
                    let action = res.action.unwrap_or_else(|| action.to_string());
                    set_recorded.update(|m| {
                        m.insert(id, format!("{}: {}", res.status, action));
                    });
                }
                Err(e) => api::log_error("review action", &e),
            }
        });
    };

    view! {
        <div>
            <h2>"Review Queue"</h2>
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item| {
                    let id = item.id;
                    view! {
                        <div class="review-item">
                            <strong>{item.file.clone()}</strong>
                            {format!(" page {} - {} ({})", item.page, item.reason, item.indicator)}
                            <div>{format!("Severity: {} | Confidence: {}", item.severity, item.confidence)}</div>
                            <div class="review-actions">
                                {ACTIONS
                                    .into_iter()
                                    .map(|action| view! {
                                        <button
                                            class="btn btn-small btn-secondary"
                                            on:click=move |_| on_action(id, action)
                                        >
                                            {action}
                                        </button>
                                    })
                                    .collect_view()}
                                <span class="text-muted">
                                    {move || recorded.with(|m| m.get(&id).cloned().unwrap_or_default())}
                                </span>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
