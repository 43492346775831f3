//! Authenticated HTTP client capability handed to views.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token read from `localStorage` and a `gloo-timers` deadline.
//! Server-side (SSR): every call fails with a transport error since the
//! protected API is only reachable from the browser session.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is folded into `Result<ApiResponse, FetchError>`; nothing
//! here panics, so callers decide how loudly to surface failures.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use serde_json::Value;

use super::error::FetchError;
use crate::config::ApiConfig;

/// A successful response from a protected resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub data: Value,
}

/// Capability for issuing GET requests that already carry the session credential.
///
/// Implementations own credential attachment; callers pass only a path.
pub trait AuthenticatedClient {
    fn get(&self, path: &str) -> LocalBoxFuture<'static, Result<ApiResponse, FetchError>>;
}

/// Shared handle injected into views. Read-only from the view's perspective.
pub type SharedClient = Arc<dyn AuthenticatedClient + Send + Sync>;

/// Production client backed by the browser `fetch` API.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: ApiConfig,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Wrap into the shared handle views expect.
    pub fn shared(self) -> SharedClient {
        Arc::new(self)
    }
}

impl AuthenticatedClient for HttpClient {
    fn get(&self, path: &str) -> LocalBoxFuture<'static, Result<ApiResponse, FetchError>> {
        let url = self.config.endpoint(path);
        let token = crate::util::storage::load_string(&self.config.access_token_key);
        let timeout_ms = self.config.timeout_ms;
        send_get(url, token, timeout_ms).boxed_local()
    }
}

/// `Authorization` header value for a stored access token.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer_value(token: &str) -> String {
    format!("Bearer {}", token.trim())
}

/// Map an HTTP status onto the failure taxonomy. 2xx passes.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn classify_status(status: u16, status_text: &str) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let message = if status_text.trim().is_empty() {
        format!("request failed with status {status}")
    } else {
        status_text.trim().to_owned()
    };
    match status {
        401 | 403 => Err(FetchError::Authorization { status, message }),
        _ => Err(FetchError::Server { status, message }),
    }
}

/// Interpret a response body as JSON. An empty body decodes to `null`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn decode_payload(body: &str) -> Result<Value, FetchError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| FetchError::decoding(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn timeout_message(timeout_ms: u32) -> String {
    format!("request timed out after {timeout_ms}ms")
}

async fn send_get(url: String, token: Option<String>, timeout_ms: u32) -> Result<ApiResponse, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        let request = Box::pin(send_request(url, token));
        let deadline = Box::pin(gloo_timers::future::TimeoutFuture::new(timeout_ms));
        match select(request, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(FetchError::transport(timeout_message(timeout_ms))),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, token, timeout_ms);
        Err(FetchError::transport("not available on server"))
    }
}

#[cfg(feature = "hydrate")]
async fn send_request(url: String, token: Option<String>) -> Result<ApiResponse, FetchError> {
    let mut request = gloo_net::http::Request::get(&url);
    if let Some(token) = token.as_deref() {
        request = request.header("Authorization", &bearer_value(token));
    }
    let resp = request.send().await.map_err(|e| FetchError::transport(e.to_string()))?;
    let status = resp.status();
    classify_status(status, &resp.status_text())?;
    let body = resp.text().await.map_err(|e| FetchError::decoding(e.to_string()))?;
    let data = decode_payload(&body)?;
    Ok(ApiResponse { status, data })
}
