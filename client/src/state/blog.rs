//! Blog list filtering and detail-view state.
//!
//! DESIGN
//! ======
//! The server decides where posts come from; the page only narrows the list
//! it received. Category filters are keyword heuristics over title, body and
//! labels, matched case-insensitively as substrings.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use time::{Duration, OffsetDateTime, format_description::well_known::Rfc3339};

use crate::net::types::BlogPost;

/// Age limit for the `Recent` filter.
pub const RECENT_WINDOW_DAYS: i64 = 30;
/// Number of leading posts treated as featured.
pub const FEATURED_COUNT: usize = 3;
/// Fixed nav height; the detail title sticks once its top crosses this line.
pub const STICKY_TITLE_OFFSET_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlogFilter {
    #[default]
    All,
    Recent,
    Featured,
    Technology,
    Design,
    Development,
}

impl BlogFilter {
    pub const ALL: [BlogFilter; 6] = [
        BlogFilter::All,
        BlogFilter::Recent,
        BlogFilter::Featured,
        BlogFilter::Technology,
        BlogFilter::Design,
        BlogFilter::Development,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Recent => "Recent",
            Self::Featured => "Featured",
            Self::Technology => "Technology",
            Self::Design => "Design",
            Self::Development => "Development",
        }
    }

    /// Keywords for the category filters; empty for the others.
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Technology => &["tech", "programming", "code", "javascript"],
            Self::Design => &["design", "ui", "ux"],
            Self::Development => &["development", "coding", "programming"],
            Self::All | Self::Recent | Self::Featured => &[],
        }
    }
}

/// Parse a post's RFC 3339 publish timestamp.
#[must_use]
pub fn published_at(post: &BlogPost) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(&post.published, &Rfc3339).ok()
}

fn is_recent(post: &BlogPost, now: OffsetDateTime) -> bool {
    published_at(post).is_some_and(|at| now - at <= Duration::days(RECENT_WINDOW_DAYS))
}

fn matches_keywords(post: &BlogPost, keywords: &[&str]) -> bool {
    let haystack = format!("{} {} {}", post.title, post.content, post.labels.join(" ")).to_lowercase();
    keywords.iter().any(|kw| haystack.contains(kw))
}

/// Posts visible under `filter`, in feed order.
#[must_use]
pub fn filter_posts<'a>(posts: &'a [BlogPost], filter: BlogFilter, now: OffsetDateTime) -> Vec<&'a BlogPost> {
    match filter {
        BlogFilter::All => posts.iter().collect(),
        BlogFilter::Featured => posts.iter().take(FEATURED_COUNT).collect(),
        BlogFilter::Recent => posts.iter().filter(|p| is_recent(p, now)).collect(),
        BlogFilter::Technology | BlogFilter::Design | BlogFilter::Development => {
            let keywords = filter.keywords();
            posts.iter().filter(|p| matches_keywords(p, keywords)).collect()
        }
    }
}

/// Whether the card at `index` of the filtered list wears the featured badge.
#[must_use]
pub fn is_featured(index: usize, filter: BlogFilter) -> bool {
    filter == BlogFilter::Featured && index < FEATURED_COUNT
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Counter above the grid.
#[must_use]
pub fn count_summary(shown: usize, filter: BlogFilter) -> String {
    match filter {
        BlogFilter::All => format!("Found {shown} post{}", plural(shown)),
        other => format!("Found {shown} post{} ({} filter)", plural(shown), other.label()),
    }
}

/// Hint under the "No blog posts found" heading.
#[must_use]
pub fn empty_hint(filter: BlogFilter) -> String {
    match filter {
        BlogFilter::All => "Check back later for new content".to_owned(),
        other => format!("No posts match the \"{}\" filter", other.label()),
    }
}

/// Totals line under the empty-state hint.
#[must_use]
pub fn empty_totals(total: usize, matching: usize, filter: BlogFilter) -> String {
    format!("Found {total} total post{}, {matching} matching filter \"{}\"", plural(total), filter.label())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlogView {
    pub filter: BlogFilter,
    /// Id of the post open in the detail view.
    pub selected: Option<String>,
    pub sticky_title: bool,
}

impl BlogView {
    pub fn set_filter(&mut self, filter: BlogFilter) {
        self.filter = filter;
    }

    pub fn open(&mut self, post_id: &str) {
        self.selected = Some(post_id.to_owned());
        self.sticky_title = false;
    }

    pub fn close(&mut self) {
        self.selected = None;
        self.sticky_title = false;
    }

    /// Recompute the sticky flag from the detail title's viewport top.
    pub fn observe_title(&mut self, title_top: f64) {
        self.sticky_title = self.selected.is_some() && title_top <= STICKY_TITLE_OFFSET_PX;
    }

    /// The selected post, if it still exists in `posts`.
    #[must_use]
    pub fn selected_post<'a>(&self, posts: &'a [BlogPost]) -> Option<&'a BlogPost> {
        let id = self.selected.as_deref()?;
        posts.iter().find(|p| p.id == id)
    }
}
