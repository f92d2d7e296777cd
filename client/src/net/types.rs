//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Field names follow the upstream providers (Blogger, Drive) so the server
//! can pass their records through untouched and the browser decodes the same
//! shape whether a post is live or generated for demo mode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// BLOG
// =============================================================================

/// A blog post as rendered by the blog page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Provider identifier. Numeric ids from placeholder sources are stringified.
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// HTML body.
    #[serde(default)]
    pub content: String,
    /// RFC 3339 publish timestamp.
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<PostImage>>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub author: Option<PostAuthor>,
}

impl BlogPost {
    /// First image URL, if the post carries one.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images
            .as_deref()
            .and_then(<[PostImage]>::first)
            .map(|img| img.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostImage {
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAuthor {
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

/// Where the posts in a [`BlogFeed`] came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedSource {
    #[default]
    Live,
    Demo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Credentials are not configured; content is placeholder data.
    Demo,
    /// The provider failed or returned nothing.
    Error,
}

/// User-visible explanation attached to a feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedNotice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Which blog configuration values the server saw. Shown in the debug block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialStatus {
    pub api_key_set: bool,
    pub blog_id_set: bool,
}

/// Response of `GET /api/blog/posts`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogFeed {
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub source: FeedSource,
    #[serde(default)]
    pub notice: Option<FeedNotice>,
    #[serde(default)]
    pub credentials: CredentialStatus,
}

// =============================================================================
// CERTIFICATES
// =============================================================================

/// A file in the public certificates folder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateFile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "mimeType", default)]
    pub mime_type: Option<String>,
    #[serde(rename = "thumbnailLink", default)]
    pub thumbnail_link: Option<String>,
    #[serde(rename = "webViewLink", default)]
    pub web_view_link: Option<String>,
    #[serde(rename = "webContentLink", default)]
    pub web_content_link: Option<String>,
}

impl CertificateFile {
    #[must_use]
    pub fn is_pdf(&self) -> bool {
        self.mime_type.as_deref() == Some("application/pdf")
    }

    #[must_use]
    pub fn is_image(&self) -> bool {
        self.mime_type.as_deref().is_some_and(|mt| mt.starts_with("image/"))
    }

    /// Display name with a kind-specific default.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ if self.is_pdf() => "PDF Certificate",
            _ => "Certificate",
        }
    }
}

/// Response of `GET /api/certificates`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateFeed {
    pub files: Vec<CertificateFile>,
    #[serde(default)]
    pub notice: Option<String>,
}

// =============================================================================
// CONTACT
// =============================================================================

/// JSON body posted to the contact backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Contact backend response; `message` explains failures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub message: Option<String>,
}

fn deserialize_string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}
