//! HTTP implementation of the demo gateway.
//!
//! Thin reqwest client for the backend's four endpoints. Status-to-error
//! mapping lives here so the controller only deals in typed outcomes.

use std::sync::LazyLock;
use std::time::Instant;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response, StatusCode};

use crate::error::{DemoError, DemoResult};
use crate::traits::DemoGateway;
use crate::types::{ActionOutcome, ResolvePayload};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Shared HTTP client with configured timeout and redirect policy.
static HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .unwrap_or_default()
});

/// Gateway talking to a real demo backend over HTTP.
pub struct HttpDemoGateway {
    base_url: String,
}

impl HttpDemoGateway {
    /// Create a gateway for the backend at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Join a path-and-query onto the backend base URL.
    fn endpoint(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.base_url)
    }

    async fn get(&self, url: &str) -> DemoResult<Response> {
        debug!("[HTTP] GET {url}");
        let start = Instant::now();
        let response = HTTP_CLIENT
            .get(url)
            .send()
            .await
            .map_err(|e| DemoError::NetworkError(e.to_string()))?;
        debug!(
            "[HTTP] {} from {url} in {:?}",
            response.status(),
            start.elapsed()
        );
        Ok(response)
    }

    async fn action_call(&self, endpoint: &str, target_url: &str) -> DemoResult<ActionOutcome> {
        let url = self.endpoint(&format!(
            "{endpoint}?url={}",
            urlencoding::encode(target_url)
        ));
        let response = self.get(&url).await?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DemoError::NetworkError(e.to_string()))?;
        let message = extract_message(status, &body);
        if status.as_u16() > 399 {
            return Err(DemoError::ActionFailed {
                status: status.as_u16(),
                message,
            });
        }
        Ok(ActionOutcome {
            status: status.as_u16(),
            message,
        })
    }
}

/// Pull a human-readable message out of an action response body.
///
/// The backend answers `{"url","error","message"}` JSON, but the `message`
/// value is not always a string (proxied bodies, stringified exceptions),
/// and error pages may not be JSON at all.
fn extract_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        match value.get("message") {
            Some(serde_json::Value::String(s)) => return s.clone(),
            Some(serde_json::Value::Null) | None => {}
            Some(other) => return other.to_string(),
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.canonical_reason().unwrap_or("Unknown").to_string()
    } else {
        trimmed.to_string()
    }
}

#[async_trait]
impl DemoGateway for HttpDemoGateway {
    async fn resolve(&self, fqdn: &str) -> DemoResult<ResolvePayload> {
        let url = self.endpoint(&format!("/resolv?fqdn={}", urlencoding::encode(fqdn)));
        let response = self.get(&url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(DemoError::ServiceNotFound(fqdn.to_string()));
        }
        let body = response
            .text()
            .await
            .map_err(|e| DemoError::NetworkError(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| {
            DemoError::SerializationError(format!("bad resolve response for {fqdn}: {e}"))
        })
    }

    async fn web_proxy(&self, url: &str) -> DemoResult<ActionOutcome> {
        self.action_call("/webproxy", url).await
    }

    async fn db_connect(&self, url: &str) -> DemoResult<ActionOutcome> {
        self.action_call("/dbconnect", url).await
    }

    async fn fetch_dump(&self, path: &str) -> DemoResult<ActionOutcome> {
        let url = self.endpoint(path);
        let response = self.get(&url).await?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DemoError::NetworkError(e.to_string()))?;
        if status.as_u16() > 399 {
            return Err(DemoError::ActionFailed {
                status: status.as_u16(),
                message: extract_message(status, &body),
            });
        }
        Ok(ActionOutcome {
            status: status.as_u16(),
            message: body,
        })
    }
}
