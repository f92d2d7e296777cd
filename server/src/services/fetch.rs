//! Outbound JSON fetches for the content feeds.
//!
//! DESIGN
//! ======
//! Feed services talk to a [`JsonSource`] rather than to `reqwest` directly,
//! so tests substitute canned responses. The production [`HttpJsonSource`]
//! holds one pooled client with request and connect timeouts.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::time::Duration;

use crate::config::HttpTimeouts;

/// Errors produced while fetching external content.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Required configuration is unset or unusable.
    #[error("Invalid or missing credentials: {0}")]
    MissingCredentials(&'static str),

    /// The request could not be sent or its body could not be read.
    #[error("request failed: {0}")]
    Request(String),

    /// The provider returned a non-success HTTP status.
    #[error("API error: {status} - {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Provider-neutral async JSON GET. Enables mocking in tests.
#[async_trait::async_trait]
pub trait JsonSource: Send + Sync {
    /// Fetch `url` and decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`FeedError`] on transport failure, a non-2xx status, or a
    /// body that is not JSON.
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, FeedError>;
}

pub struct HttpJsonSource {
    http: reqwest::Client,
}

impl HttpJsonSource {
    /// # Errors
    ///
    /// Returns [`FeedError::HttpClientBuild`] if the TLS backend fails to initialise.
    pub fn new(timeouts: HttpTimeouts) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| FeedError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait::async_trait]
impl JsonSource for HttpJsonSource {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, FeedError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FeedError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| FeedError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(FeedError::Status { status: status.as_u16(), body: text });
        }

        serde_json::from_str(&text).map_err(|e| FeedError::Parse(e.to_string()))
    }
}

/// Build `base?k=v&...` with the pairs percent-encoded.
///
/// # Errors
///
/// Returns [`FeedError::Request`] if `base` is not an absolute URL.
pub fn url_with_params(base: &str, params: &[(&str, &str)]) -> Result<String, FeedError> {
    reqwest::Url::parse_with_params(base, params)
        .map(String::from)
        .map_err(|e| FeedError::Request(format!("bad url {base}: {e}")))
}

/// `error.message` from a Google API error body, if present.
#[must_use]
pub fn google_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_owned)
}

// =============================================================================
// TEST HELPERS
// =============================================================================
