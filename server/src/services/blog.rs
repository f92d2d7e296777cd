//! Blog feed: live Blogger posts, or generated demo posts.
//!
//! DESIGN
//! ======
//! The feed always renders something. Without usable Blogger credentials the
//! demo generator runs and the notice says so. A live fetch that fails also
//! falls back to demo posts, while an empty live blog returns an empty list
//! with an explanatory notice. The demo generator pulls placeholder text from
//! JSONPlaceholder and uses a built-in set when that is unreachable too.
//!
//! Randomness (publish dates, which posts get an image) comes from the caller's
//! RNG so tests can seed it.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use folio::net::types::{
    BlogFeed, BlogPost, CredentialStatus, FeedNotice, FeedSource, NoticeKind, PostAuthor, PostImage,
};
use folio::util::text::capitalize;
use rand::Rng;
use serde::Deserialize;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

use super::fetch::{FeedError, JsonSource, url_with_params};
use crate::config::SiteConfig;

pub const BLOGGER_API_BASE: &str = "https://www.googleapis.com/blogger/v3";

pub const DEMO_NOTICE: &str = "Demo mode: Configure BLOGGER_API_KEY and BLOGGER_BLOG_ID to use real blog data";
pub const EMPTY_BLOG_NOTICE: &str = "No blog posts found. Check if your blog has published posts.";

/// Demo publish dates fall within this many days before now.
pub const DEMO_WINDOW_DAYS: i64 = 30;
/// Share of demo posts that carry a cover image.
pub const DEMO_IMAGE_PROBABILITY: f64 = 0.7;

const DEMO_LABELS: [[&str; 3]; 3] = [
    ["Technology", "Programming", "JavaScript"],
    ["Design", "UI/UX", "Web Design"],
    ["Development", "Coding", "Frontend"],
];

/// Used when the placeholder API cannot be reached.
const OFFLINE_RECORDS: [(&str, &str); 12] = [
    ("shipping small changes often", "Small, frequent releases keep feedback loops short and rollbacks cheap."),
    ("notes on responsive layouts", "Fluid grids and a handful of breakpoints cover most screens without special cases."),
    ("why i like typed languages", "A compiler that checks the boring parts frees attention for the interesting ones."),
    ("designing calm interfaces", "Whitespace, restrained colour and clear hierarchy make dense screens readable."),
    ("a week with a new editor", "Muscle memory takes a few days to adjust; the payoff is fewer context switches."),
    ("testing the happy path first", "One end-to-end check of the main flow catches more regressions than a dozen mocks."),
    ("colour contrast in practice", "Checking contrast ratios early avoids a late redesign for accessibility."),
    ("profiling before optimising", "Measure first; the slow part is rarely where intuition points."),
    ("component libraries at scale", "Shared components pay off once naming and ownership are settled."),
    ("writing useful commit messages", "Say what changed and why in plain words; future readers have no context."),
    ("animations that respect users", "Motion should explain state changes and honour reduced-motion preferences."),
    ("lessons from a side project", "Finishing something small teaches more than starting something large."),
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceholderRecord {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Deserialize)]
struct BloggerPostList {
    #[serde(default)]
    items: Vec<BlogPost>,
}

/// Which Blogger values were configured at all, for the page's debug block.
#[must_use]
pub fn credential_status(config: &SiteConfig) -> CredentialStatus {
    CredentialStatus {
        api_key_set: config.blogger_api_key.is_some(),
        blog_id_set: config.blogger_blog_id.is_some(),
    }
}

/// Resolve the blog feed for one page load.
pub async fn load_feed<R: Rng + Send>(
    source: &dyn JsonSource,
    config: &SiteConfig,
    rng: &mut R,
    now: OffsetDateTime,
) -> BlogFeed {
    let credentials = credential_status(config);

    if config.blogger_credentials().is_none() {
        tracing::warn!("blogger credentials missing or placeholder; serving demo posts");
        return BlogFeed {
            posts: demo_posts(source, config, rng, now).await,
            source: FeedSource::Demo,
            notice: Some(FeedNotice { kind: NoticeKind::Demo, message: DEMO_NOTICE.to_owned() }),
            credentials,
        };
    }

    match fetch_live(source, config).await {
        Ok(posts) if posts.is_empty() => {
            tracing::warn!("blogger returned no posts");
            BlogFeed {
                posts,
                source: FeedSource::Live,
                notice: Some(FeedNotice { kind: NoticeKind::Error, message: EMPTY_BLOG_NOTICE.to_owned() }),
                credentials,
            }
        }
        Ok(posts) => {
            tracing::info!(count = posts.len(), "loaded live blog posts");
            BlogFeed { posts, source: FeedSource::Live, notice: None, credentials }
        }
        Err(e) => {
            tracing::warn!(error = %e, "blogger fetch failed");
            let (posts, source) = if matches!(e, FeedError::MissingCredentials(_)) {
                (Vec::new(), FeedSource::Live)
            } else {
                (demo_posts(source, config, rng, now).await, FeedSource::Demo)
            };
            BlogFeed {
                posts,
                source,
                notice: Some(FeedNotice { kind: NoticeKind::Error, message: format!("Failed to fetch blog posts: {e}") }),
                credentials,
            }
        }
    }
}

/// Blogger list-posts URL for the configured blog.
///
/// # Errors
///
/// Returns [`FeedError::MissingCredentials`] when the credentials are unusable.
pub fn blogger_posts_url(config: &SiteConfig) -> Result<String, FeedError> {
    let creds = config
        .blogger_credentials()
        .ok_or(FeedError::MissingCredentials("BLOGGER_API_KEY / BLOGGER_BLOG_ID"))?;
    let max_results = config.blog_max_results.to_string();
    url_with_params(
        &format!("{BLOGGER_API_BASE}/blogs/{}/posts", creds.blog_id),
        &[
            ("key", creds.api_key.as_str()),
            ("maxResults", max_results.as_str()),
            ("status", "LIVE"),
            ("fetchImages", "true"),
        ],
    )
}

/// Published posts from Blogger. A response without `items` is an empty blog.
///
/// # Errors
///
/// Returns a [`FeedError`] if credentials are unusable or the request fails.
pub async fn fetch_live(source: &dyn JsonSource, config: &SiteConfig) -> Result<Vec<BlogPost>, FeedError> {
    let url = blogger_posts_url(config)?;
    let value = source.get_json(&url).await?;
    let list: BloggerPostList = serde_json::from_value(value).map_err(|e| FeedError::Parse(e.to_string()))?;
    Ok(list.items)
}

/// Generated posts over placeholder text.
pub async fn demo_posts<R: Rng + Send>(
    source: &dyn JsonSource,
    config: &SiteConfig,
    rng: &mut R,
    now: OffsetDateTime,
) -> Vec<BlogPost> {
    let limit = config.demo_post_limit.max(1);
    let records = match fetch_placeholder_records(source, config, limit).await {
        Ok(records) if !records.is_empty() => records,
        Ok(_) => offline_records(limit),
        Err(e) => {
            tracing::warn!(error = %e, "placeholder posts unavailable; using built-in records");
            offline_records(limit)
        }
    };
    records
        .iter()
        .enumerate()
        .map(|(index, record)| demo_post(index, record, rng, now))
        .collect()
}

async fn fetch_placeholder_records(
    source: &dyn JsonSource,
    config: &SiteConfig,
    limit: u32,
) -> Result<Vec<PlaceholderRecord>, FeedError> {
    let limit = limit.to_string();
    let url = url_with_params(&config.placeholder_posts_url, &[("_limit", limit.as_str())])?;
    let value = source.get_json(&url).await?;
    serde_json::from_value(value).map_err(|e| FeedError::Parse(e.to_string()))
}

/// The built-in records, at most `limit` of them.
#[must_use]
pub fn offline_records(limit: u32) -> Vec<PlaceholderRecord> {
    OFFLINE_RECORDS
        .iter()
        .zip(1u64..)
        .take(usize::try_from(limit).unwrap_or(usize::MAX))
        .map(|((title, body), id)| PlaceholderRecord { id, title: (*title).to_owned(), body: (*body).to_owned() })
        .collect()
}

/// Shape one placeholder record as a blog post.
pub fn demo_post<R: Rng>(index: usize, record: &PlaceholderRecord, rng: &mut R, now: OffsetDateTime) -> BlogPost {
    let window_ms = DEMO_WINDOW_DAYS * 24 * 60 * 60 * 1000;
    let published = now - Duration::milliseconds(rng.random_range(0..window_ms));
    let images = rng
        .random_bool(DEMO_IMAGE_PROBABILITY)
        .then(|| vec![PostImage { url: format!("https://picsum.photos/400/240?random={}", record.id) }]);

    BlogPost {
        id: record.id.to_string(),
        title: capitalize(&record.title),
        content: record.body.clone(),
        published: published.format(&Rfc3339).unwrap_or_default(),
        url: Some(format!("#post-{}", record.id)),
        images,
        labels: DEMO_LABELS[index % DEMO_LABELS.len()].iter().map(|l| (*l).to_owned()).collect(),
        author: Some(PostAuthor { display_name: Some(format!("Author {}", index % 3 + 1)) }),
    }
}
