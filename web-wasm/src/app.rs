//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use crate::components::{
    dashboard::Dashboard,
    documents::Documents,
    ingestion::Ingestion,
    placeholder::Placeholder,
    review::Review,
    sidebar::Sidebar,
    users::Users,
};

/// サイドバーから切り替える画面
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Dashboard,
    Ingestion,
    Documents,
    Schema,
    Review,
    Users,
    Analytics,
    Config,
}

impl Page {
    pub fn all() -> [Page; 8] {
        [
            Page::Dashboard,
            Page::Ingestion,
            Page::Documents,
            Page::Schema,
            Page::Review,
            Page::Users,
            Page::Analytics,
            Page::Config,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Ingestion => "Ingestion",
            Page::Documents => "Processed Documents",
            Page::Schema => "Schema Configuration",
            Page::Review => "Review Queue",
            Page::Users => "Users",
            Page::Analytics => "Analytics",
            Page::Config => "Configuration",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::default());

    // 画面を切り替えるたびに各コンポーネントを作り直す（= 再取得）
    let content = move || match page.get() {
        Page::Dashboard => view! { <Dashboard /> }.into_any(),
        Page::Ingestion => view! { <Ingestion /> }.into_any(),
        Page::Documents => view! { <Documents /> }.into_any(),
        Page::Review => view! { <Review /> }.into_any(),
        Page::Users => view! { <Users /> }.into_any(),
        other @ (Page::Schema | Page::Analytics | Page::Config) => {
            view! { <Placeholder title=other.title() /> }.into_any()
        }
    };

    view! {
        <div class="app">
            <Sidebar page=page set_page=set_page />
            <div class="content">{content}</div>
        </div>
    }
}
