//! JSON content endpoints consumed by the browser after hydration.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use axum::Json;
use axum::extract::State;
use folio::net::types::{BlogFeed, CertificateFeed};
use rand::SeedableRng;
use rand::rngs::StdRng;
use time::OffsetDateTime;

use crate::services::{blog, certificates};
use crate::state::AppState;

/// `GET /api/blog/posts`
pub async fn blog_posts(State(state): State<AppState>) -> Json<BlogFeed> {
    let mut rng = StdRng::from_os_rng();
    let feed = blog::load_feed(state.source.as_ref(), &state.config, &mut rng, OffsetDateTime::now_utc()).await;
    Json(feed)
}

/// `GET /api/certificates`
pub async fn certificate_listing(State(state): State<AppState>) -> Json<CertificateFeed> {
    Json(certificates::load_certificates(state.source.as_ref(), &state.config).await)
}
