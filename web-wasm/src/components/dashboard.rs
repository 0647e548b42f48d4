//! ダッシュボード（集計値）

use leptos::prelude::*;
use leptos::task::spawn_local;
use dg_review_common::Analytics;
use crate::api;

#[component]
pub fn Dashboard() -> impl IntoView {
    let (data, set_data) = signal(None::<Analytics>);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        match api::fetch_analytics().await {
            Ok(analytics) => set_data.set(Some(analytics)),
            Err(e) => {
                api::log_error("analytics", &e);
                set_error.set(Some(e));
            }
        }
    });

    view! {
        <div>
            <h2>"Dashboard"</h2>
            {move || match (data.get(), error.get()) {
                (Some(d), _) => view! {
                    <p>{format!("Total files: {}", d.total_files)}</p>
                    <p>{format!("% DG: {}", d.percent_dg)}</p>
                }.into_any(),
                (None, Some(e)) => view! { <p class="error">{e}</p> }.into_any(),
                (None, None) => view! { <div>"Loading..."</div> }.into_any(),
            }}
        </div>
    }
}
