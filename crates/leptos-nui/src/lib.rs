//! Leptos NUI Utilities
//!
//! Plumbing for pages embedded in a game client's NUI browser.
//! The host exposes `https://<resource>/<endpoint>` callbacks that accept a
//! JSON POST, and pushes messages into the page with `window.postMessage`.

use leptos::ev;
use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// Global injected by the host into every NUI page.
const RESOURCE_NAME_FN: &str = "GetParentResourceName";

/// Transport-level failures of a NUI callback
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NuiError {
    #[error("no browser window available")]
    NoWindow,
    #[error("could not build request: {0}")]
    Request(String),
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("host answered with status {0}")]
    Status(u16),
    #[error("could not read response body: {0}")]
    Body(String),
}

fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Name of the resource that owns this page.
///
/// Calls the host-injected `GetParentResourceName()`; outside the game
/// client (plain browser, tests) the global is missing and `fallback` is
/// returned.
pub fn resource_name(fallback: &str) -> String {
    let Some(window) = web_sys::window() else {
        return fallback.to_string();
    };
    js_sys::Reflect::get(&window, &JsValue::from_str(RESOURCE_NAME_FN))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        .and_then(|f| f.call0(&JsValue::NULL).ok())
        .and_then(|name| name.as_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Callback URL for `endpoint` on `resource`
pub fn endpoint_url(resource: &str, endpoint: &str) -> String {
    format!(
        "https://{}/{}",
        resource.trim_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// POST a JSON body to a NUI callback and return the raw response text.
pub async fn post_json(resource: &str, endpoint: &str, body: &str) -> Result<String, NuiError> {
    let window = web_sys::window().ok_or(NuiError::NoWindow)?;
    let url = endpoint_url(resource, endpoint);

    let headers = Headers::new().map_err(|e| NuiError::Request(js_error_text(&e)))?;
    headers
        .set("Content-Type", "application/json; charset=UTF-8")
        .map_err(|e| NuiError::Request(js_error_text(&e)))?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(&url, &init)
        .map_err(|e| NuiError::Request(js_error_text(&e)))?;

    log::debug!("[NUI] POST {}", url);
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| NuiError::Fetch(js_error_text(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| NuiError::Fetch(js_error_text(&e)))?;

    if !response.ok() {
        return Err(NuiError::Status(response.status()));
    }

    let text_promise = response.text().map_err(|e| NuiError::Body(js_error_text(&e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| NuiError::Body(js_error_text(&e)))?;
    Ok(text.as_string().unwrap_or_default())
}

/// Subscribe to messages the host pushes into the page.
///
/// The listener lives for the rest of the page's lifetime unless the
/// returned handle is removed.
pub fn on_nui_message<F>(handler: F) -> WindowListenerHandle
where
    F: Fn(JsValue) + 'static,
{
    window_event_listener(ev::message, move |event| handler(event.data()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url("UniqueDevelopment_StashCreator", "getStashes"),
            "https://UniqueDevelopment_StashCreator/getStashes"
        );
    }

    #[test]
    fn test_endpoint_url_strips_stray_slashes() {
        assert_eq!(endpoint_url("res/", "/close"), "https://res/close");
    }
}
