//! Host Callback Wrappers
//!
//! Outbound bindings to the host process, organized by domain. Every call
//! is an HTTP POST with a JSON body to `https://<resource>/<endpoint>`;
//! failures are logged and swallowed — the worst case is that the action
//! simply does not complete.

mod banking;
mod menu;
mod settings;
mod shop;

use serde::Serialize;
use wasm_bindgen::JsCast;

// Re-export all public items
pub use banking::*;
pub use menu::*;
pub use settings::*;
pub use shop::*;

/// Endpoint used when nothing else applies: generic close / focus release
pub const CLOSE: &str = "close";

const FALLBACK_RESOURCE: &str = "nui-shell";

/// Resolve the host resource name through the injected global. Outside the
/// host (plain browser) the global is absent and a fallback keeps the URL
/// well-formed.
pub fn resource_name() -> String {
    let Some(window) = web_sys::window() else {
        return FALLBACK_RESOURCE.to_string();
    };
    js_sys::Reflect::get(&window, &"GetParentResourceName".into())
        .ok()
        .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
        .and_then(|function| function.call0(&wasm_bindgen::JsValue::NULL).ok())
        .and_then(|value| value.as_string())
        .unwrap_or_else(|| FALLBACK_RESOURCE.to_string())
}

pub(crate) fn endpoint_url(endpoint: &str) -> String {
    format!("https://{}/{}", resource_name(), endpoint)
}

/// POST a JSON body to a host endpoint, ignoring the response
pub async fn post_json<T: Serialize + ?Sized>(endpoint: &str, body: &T) {
    let url = endpoint_url(endpoint);
    if let Err(err) = reqwest::Client::new().post(&url).json(body).send().await {
        web_sys::console::error_1(&format!("host callback {endpoint} failed: {err}").into());
    }
}

/// POST an empty body to a host endpoint
pub async fn post(endpoint: &str) {
    post_json(endpoint, &serde_json::json!({})).await;
}

/// POST a JSON body and decode the JSON response
pub async fn post_for_json<T, R>(endpoint: &str, body: &T) -> Result<R, String>
where
    T: Serialize + ?Sized,
    R: serde::de::DeserializeOwned,
{
    let url = endpoint_url(endpoint);
    let response = reqwest::Client::new()
        .post(&url)
        .json(body)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    response.json::<R>().await.map_err(|e| e.to_string())
}
