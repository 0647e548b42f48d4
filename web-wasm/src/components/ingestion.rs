//! 取り込み画面（手動アップロード・Kafka設定・接続状態）

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use dg_review_common::{KafkaConfig, KafkaStatus};
use crate::api;

fn refresh_status(set_status: WriteSignal<Option<KafkaStatus>>) {
    spawn_local(async move {
        match api::fetch_kafka_status().await {
            Ok(status) => set_status.set(Some(status)),
            Err(e) => api::log_error("ingestion status", &e),
        }
    });
}

#[component]
pub fn Ingestion() -> impl IntoView {
    let file_input = NodeRef::<Input>::new();
    let (upload_status, set_upload_status) = signal(String::new());
    let config = RwSignal::new(KafkaConfig::default());
    let (status, set_status) = signal(None::<KafkaStatus>);

    spawn_local(async move {
        match api::fetch_kafka_config().await {
            Ok(c) => config.set(c),
            Err(e) => api::log_error("ingestion config", &e),
        }
    });
    refresh_status(set_status);

    let on_upload = move |_| {
        let Some(file) = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
        else {
            return;
        };
        spawn_local(async move {
            match api::upload_file(&file).await {
                Ok(res) => {
                    set_upload_status.set(res.status);
                    refresh_status(set_status);
                }
                Err(e) => {
                    api::log_error("upload", &e);
                    set_upload_status.set(e);
                }
            }
        });
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = config.get();
        spawn_local(async move {
            match api::save_kafka_config(&current).await {
                Ok(saved) => config.set(saved),
                Err(e) => api::log_error("save config", &e),
            }
        });
    };

    view! {
        <div>
            <h2>"Ingestion"</h2>
            <section>
                <h3>"Manual Upload"</h3>
                <input type="file" node_ref=file_input />
                <button class="btn btn-primary" on:click=on_upload>"Upload"</button>
                <Show when=move || !upload_status.get().is_empty()>
                    <p>{move || format!("Status: {}", upload_status.get())}</p>
                </Show>
            </section>
            <section>
                <h3>"Kafka Configuration"</h3>
                <form class="kafka-form" on:submit=on_save>
                    <input
                        name="brokers"
                        placeholder="Brokers"
                        prop:value=move || config.with(|c| c.brokers.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            config.update(|c| c.brokers = value);
                        }
                    />
                    <input
                        name="topic"
                        placeholder="Topic"
                        prop:value=move || config.with(|c| c.topic.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            config.update(|c| c.topic = value);
                        }
                    />
                    <input
                        name="username"
                        placeholder="Username"
                        prop:value=move || config.with(|c| c.username.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            config.update(|c| c.username = value);
                        }
                    />
                    <input
                        name="password"
                        type="password"
                        placeholder="Password"
                        prop:value=move || config.with(|c| c.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            config.update(|c| c.password = value);
                        }
                    />
                    <button type="submit" class="btn btn-primary">"Save"</button>
                </form>
            </section>
            {move || status.get().map(|s| view! {
                <section>
                    <h3>"Connection Status"</h3>
                    <p>{format!("Connected: {}", if s.connected { "Yes" } else { "No" })}</p>
                    <p>{format!("Messages: {}", s.messages)}</p>
                    <p>{format!("Lag: {}", s.lag)}</p>
                    <p>{format!("Errors: {}", s.errors)}</p>
                </section>
            })}
        </div>
    }
}
