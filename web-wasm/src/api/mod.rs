//! モックAPI呼び出し
//!
//! fetchで`/api/*`を呼び出し、共通ライブラリの型へデコードする。

use dg_review_common::{
    Analytics, DocumentRecord, IngestResponse, KafkaConfig, KafkaStatus, NewUser,
    ReviewActionRequest, ReviewActionResponse, ReviewItem, User, UserPatch,
};
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// JsValueのエラーを表示用文字列へ
fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

async fn send(
    method: &str,
    url: &str,
    body: Option<&JsValue>,
    content_type: Option<&str>,
) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::SameOrigin);
    if let Some(body) = body {
        opts.set_body(body);
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    if let Some(content_type) = content_type {
        request
            .headers()
            .set("Content-Type", content_type)
            .map_err(js_error)?;
    }

    let window = web_sys::window().ok_or("windowが取得できません")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(format!("API error: {} ({} {})", resp.status(), method, url));
    }
    Ok(resp)
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, String> {
    let json = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = send("GET", url, None, None).await?;
    read_json(resp).await
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: &str,
    url: &str,
    body: &B,
) -> Result<T, String> {
    let body = serde_json::to_string(body).map_err(|e| e.to_string())?;
    let resp = send(method, url, Some(&JsValue::from_str(&body)), Some("application/json")).await?;
    read_json(resp).await
}

pub async fn fetch_documents() -> Result<Vec<DocumentRecord>, String> {
    get_json("/api/documents").await
}

pub async fn fetch_analytics() -> Result<Analytics, String> {
    get_json("/api/analytics").await
}

pub async fn fetch_users() -> Result<Vec<User>, String> {
    get_json("/api/users").await
}

pub async fn create_user(user: &NewUser) -> Result<User, String> {
    send_json("POST", "/api/users", user).await
}

pub async fn update_user(id: u64, patch: &UserPatch) -> Result<User, String> {
    send_json("PUT", &format!("/api/users/{}", id), patch).await
}

pub async fn delete_user(id: u64) -> Result<User, String> {
    let resp = send("DELETE", &format!("/api/users/{}", id), None, None).await?;
    read_json(resp).await
}

pub async fn fetch_kafka_config() -> Result<KafkaConfig, String> {
    get_json("/api/ingestion/config").await
}

pub async fn save_kafka_config(config: &KafkaConfig) -> Result<KafkaConfig, String> {
    send_json("POST", "/api/ingestion/config", config).await
}

pub async fn fetch_kafka_status() -> Result<KafkaStatus, String> {
    get_json("/api/ingestion/status").await
}

/// multipartでファイルを送信（Content-Typeはブラウザに任せる）
pub async fn upload_file(file: &File) -> Result<IngestResponse, String> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(js_error)?;
    let resp = send("POST", "/api/ingest", Some(form.as_ref()), None).await?;
    read_json(resp).await
}

pub async fn fetch_review_queue() -> Result<Vec<ReviewItem>, String> {
    get_json("/api/review").await
}

pub async fn record_review_action(id: u64, action: &str) -> Result<ReviewActionResponse, String> {
    let body = ReviewActionRequest {
        action: Some(action.to_string()),
    };
    send_json("POST", &format!("/api/review/{}/action", id), &body).await
}

/// コンソールへエラー出力
pub fn log_error(context: &str, message: &str) {
    web_sys::console::error_1(&JsValue::from_str(&format!("{}: {}", context, message)));
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_js_error_keeps_string_message() {
        assert_eq!(js_error(JsValue::from_str("network down")), "network down");
    }

    #[wasm_bindgen_test]
    fn wasm_js_error_formats_non_string() {
        assert!(!js_error(JsValue::from_f64(1.0)).is_empty());
    }
}
