//! Site configuration parsed from environment variables.
//!
//! Missing content credentials are an expected state: they select the demo
//! blog and an empty certificate strip. Only a malformed `PORT` stops start-up.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BLOG_MAX_RESULTS: u32 = 20;
pub const DEFAULT_DEMO_POST_LIMIT: u32 = 12;
pub const DEFAULT_PLACEHOLDER_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const DEFAULT_HTTP_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_HTTP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Blogger values shorter than this are treated as unset.
pub const MIN_CREDENTIAL_LEN: usize = 10;
pub const BLOGGER_KEY_PLACEHOLDER: &str = "YOUR_BLOGGER_API_KEY";
pub const BLOGGER_ID_PLACEHOLDER: &str = "YOUR_BLOG_ID";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Usable Blogger credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloggerCredentials {
    pub api_key: String,
    pub blog_id: String,
}

/// Usable Drive credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveCredentials {
    pub api_key: String,
    pub folder_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub blogger_api_key: Option<String>,
    pub blogger_blog_id: Option<String>,
    pub google_api_key: Option<String>,
    pub drive_folder_id: Option<String>,
    pub blog_max_results: u32,
    pub demo_post_limit: u32,
    pub placeholder_posts_url: String,
    pub timeouts: HttpTimeouts,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            blogger_api_key: None,
            blogger_blog_id: None,
            google_api_key: None,
            drive_folder_id: None,
            blog_max_results: DEFAULT_BLOG_MAX_RESULTS,
            demo_post_limit: DEFAULT_DEMO_POST_LIMIT,
            placeholder_posts_url: DEFAULT_PLACEHOLDER_POSTS_URL.to_owned(),
            timeouts: HttpTimeouts {
                request_secs: DEFAULT_HTTP_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
            },
        }
    }
}

impl SiteConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BLOGGER_API_KEY`, `BLOGGER_BLOG_ID`: live blog when both are usable
    /// - `GOOGLE_API_KEY`, `GOOGLE_DRIVE_FOLDER_ID`: certificate listing
    /// - `BLOG_MAX_RESULTS`: default 20
    /// - `DEMO_POST_LIMIT`: default 12
    /// - `PLACEHOLDER_POSTS_URL`: demo source, default JSONPlaceholder
    /// - `HTTP_REQUEST_TIMEOUT_SECS`: default 15
    /// - `HTTP_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNumber`] if `PORT` is set but not a port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNumber`] if `PORT` is set but not a port.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidNumber { var: "PORT", value: raw })?,
        };
        let defaults = Self::default();

        Ok(Self {
            port,
            blogger_api_key: get("BLOGGER_API_KEY"),
            blogger_blog_id: get("BLOGGER_BLOG_ID"),
            google_api_key: get("GOOGLE_API_KEY"),
            drive_folder_id: get("GOOGLE_DRIVE_FOLDER_ID"),
            blog_max_results: parse_count_or(get("BLOG_MAX_RESULTS"), defaults.blog_max_results),
            demo_post_limit: parse_count_or(get("DEMO_POST_LIMIT"), defaults.demo_post_limit),
            placeholder_posts_url: get("PLACEHOLDER_POSTS_URL")
                .map_or(defaults.placeholder_posts_url, |url| url.trim_end_matches('/').to_owned()),
            timeouts: HttpTimeouts {
                request_secs: parse_or(get("HTTP_REQUEST_TIMEOUT_SECS"), defaults.timeouts.request_secs),
                connect_secs: parse_or(get("HTTP_CONNECT_TIMEOUT_SECS"), defaults.timeouts.connect_secs),
            },
        })
    }

    /// Blogger credentials, or `None` when either value is unset, a
    /// placeholder, or too short to be real.
    #[must_use]
    pub fn blogger_credentials(&self) -> Option<BloggerCredentials> {
        let api_key = usable_credential(self.blogger_api_key.as_deref(), BLOGGER_KEY_PLACEHOLDER)?;
        let blog_id = usable_credential(self.blogger_blog_id.as_deref(), BLOGGER_ID_PLACEHOLDER)?;
        Some(BloggerCredentials { api_key: api_key.to_owned(), blog_id: blog_id.to_owned() })
    }

    /// Drive credentials.
    ///
    /// # Errors
    ///
    /// Returns the name of the first missing variable.
    pub fn drive_credentials(&self) -> Result<DriveCredentials, &'static str> {
        let api_key = self.google_api_key.clone().ok_or("GOOGLE_API_KEY")?;
        let folder_id = self.drive_folder_id.clone().ok_or("GOOGLE_DRIVE_FOLDER_ID")?;
        Ok(DriveCredentials { api_key, folder_id })
    }
}

fn usable_credential<'a>(value: Option<&'a str>, placeholder: &str) -> Option<&'a str> {
    value.filter(|v| *v != placeholder && v.len() >= MIN_CREDENTIAL_LEN)
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.parse().ok()).unwrap_or(default)
}

/// Like [`parse_or`], but zero also falls back: a post count of zero would
/// leave demo mode with nothing to show.
fn parse_count_or(raw: Option<String>, default: u32) -> u32 {
    raw.and_then(|v| v.parse().ok()).filter(|n| *n > 0).unwrap_or(default)
}
