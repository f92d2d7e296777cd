//! REST helpers for the portfolio's data sources.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these requests are only
//! issued from the browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics so a failed fetch
//! degrades one section to its placeholder state without breaking hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{BlogFeed, CertificateFeed, ContactRequest};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ContactResponse;

/// External contact backend.
pub const CONTACT_ENDPOINT: &str = "https://portfolio-v2-backend-xi.vercel.app/api/contact";

/// Blog feed served by `folio-server`.
pub const BLOG_FEED_PATH: &str = "/api/blog/posts";

/// Certificate listing served by `folio-server`.
pub const CERTIFICATES_PATH: &str = "/api/certificates";

#[cfg(any(test, feature = "hydrate"))]
fn feed_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

/// Turn a non-2xx contact response into the message the backend supplied.
#[cfg(any(test, feature = "hydrate"))]
fn contact_failure_message(body: &ContactResponse) -> String {
    body.message
        .as_deref()
        .filter(|m| !m.is_empty())
        .unwrap_or("Something went wrong")
        .to_owned()
}

/// Fetch posts (live or demo) from [`BLOG_FEED_PATH`].
///
/// # Errors
///
/// Returns an error string if the request fails or the body is not a feed.
pub async fn fetch_blog_feed() -> Result<BlogFeed, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(BLOG_FEED_PATH)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(feed_failed_message("blog", resp.status()));
        }
        resp.json::<BlogFeed>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the certificate listing from [`CERTIFICATES_PATH`].
///
/// # Errors
///
/// Returns an error string if the request fails or the body is not a listing.
pub async fn fetch_certificates() -> Result<CertificateFeed, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CERTIFICATES_PATH)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(feed_failed_message("certificates", resp.status()));
        }
        resp.json::<CertificateFeed>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Post a contact message to [`CONTACT_ENDPOINT`].
///
/// The response body is decoded before the status is checked, so a 2xx reply
/// without a JSON body also counts as a failure.
///
/// # Errors
///
/// Returns an error string on network failure, an undecodable body, or a
/// non-2xx status (carrying the backend's `message` when present).
pub async fn submit_contact(request: &ContactRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let ok = resp.ok();
        let body: ContactResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !ok {
            return Err(contact_failure_message(&body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
