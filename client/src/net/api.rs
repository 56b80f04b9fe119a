//! Status-probe HTTP calls against the API service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the probe only runs in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Each probe resolves to its own display state. Failures never retry and
//! never touch the other probe's slot. Greeting failures are logged only.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use model::wire::PROBE_HELLO_NAME;
use model::{ConnectionStatus, GreetingStatus, MessageResponse, ProbeError};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// API base address, baked in at build time from `MAGNA_API_BASE_URL`.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("MAGNA_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

#[cfg(any(test, feature = "hydrate"))]
fn root_endpoint(base: &str) -> String {
    format!("{base}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn hello_endpoint(base: &str) -> String {
    format!("{base}/api/hello")
}

/// Turn a raw response into a message body.
#[cfg(any(test, feature = "hydrate"))]
fn decode_message(status: u16, body: &str) -> Result<MessageResponse, ProbeError> {
    if !(200..300).contains(&status) {
        return Err(ProbeError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| ProbeError::Decode(e.to_string()))
}

/// `GET {base}/`.
///
/// # Errors
///
/// Returns a [`ProbeError`] if the request fails, the status is not 2xx, or
/// the body has no `message` string.
pub async fn fetch_root_message(base: &str) -> Result<MessageResponse, ProbeError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&root_endpoint(base))
            .send()
            .await
            .map_err(|e| ProbeError::Request(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ProbeError::Request(e.to_string()))?;
        decode_message(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        Err(ProbeError::Request("not available on server".to_owned()))
    }
}

/// `GET {base}/api/hello?name={name}`.
///
/// # Errors
///
/// Same failure modes as [`fetch_root_message`].
pub async fn fetch_greeting(base: &str, name: &str) -> Result<MessageResponse, ProbeError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&hello_endpoint(base))
            .query([("name", name)])
            .send()
            .await
            .map_err(|e| ProbeError::Request(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ProbeError::Request(e.to_string()))?;
        decode_message(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, name);
        Err(ProbeError::Request("not available on server".to_owned()))
    }
}

/// Resolve the "Backend Status" slot from a finished request.
pub fn root_status(result: Result<MessageResponse, ProbeError>) -> ConnectionStatus {
    ConnectionStatus::from_result(result)
}

/// Resolve the "API Response" slot from a finished request. Failures are
/// logged and leave the slot loading.
pub fn greeting_status(result: Result<MessageResponse, ProbeError>) -> GreetingStatus {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = &result {
            log::error!("greeting request failed: {e}");
        }
    }
    GreetingStatus::from_result(result)
}

/// Run the root probe and resolve the "Backend Status" slot.
pub async fn probe_root(base: String) -> ConnectionStatus {
    root_status(fetch_root_message(&base).await)
}

/// Run the greeting probe and resolve the "API Response" slot.
pub async fn probe_greeting(base: String) -> GreetingStatus {
    greeting_status(fetch_greeting(&base, PROBE_HELLO_NAME).await)
}
