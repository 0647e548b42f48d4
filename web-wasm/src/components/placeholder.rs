use leptos::prelude::*;

#[component]
pub fn Placeholder(title: &'static str) -> impl IntoView {
    view! {
        <div>
            <h2>{title}</h2>
            <p>"Coming soon..."</p>
        </div>
    }
}
