//! サイドバー（画面切り替えとダークモード）

use leptos::prelude::*;
use crate::app::Page;

#[component]
pub fn Sidebar(page: ReadSignal<Page>, set_page: WriteSignal<Page>) -> impl IntoView {
    let (dark, set_dark) = signal(false);

    Effect::new(move |_| {
        let class = if dark.get() { "dark" } else { "" };
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            body.set_class_name(class);
        }
    });

    view! {
        <div class="sidebar">
            {Page::all()
                .into_iter()
                .map(|p| {
                    view! {
                        <a
                            href="#"
                            class:active=move || page.get() == p
                            on:click=move |ev| {
                                ev.prevent_default();
                                set_page.set(p);
                            }
                        >
                            {p.title()}
                        </a>
                    }
                })
                .collect_view()}
            <hr />
            <button on:click=move |_| set_dark.update(|d| *d = !*d)>
                {move || if dark.get() { "Light Mode" } else { "Dark Mode" }}
            </button>
        </div>
    }
}
