use time::macros::datetime;

use super::*;

fn post(id: &str, title: &str, content: &str, published: &str, labels: &[&str]) -> BlogPost {
    BlogPost {
        id: id.to_owned(),
        title: title.to_owned(),
        content: content.to_owned(),
        published: published.to_owned(),
        url: None,
        images: None,
        labels: labels.iter().map(|l| (*l).to_owned()).collect(),
        author: None,
    }
}

fn sample() -> Vec<BlogPost> {
    vec![
        post("1", "Rust tips", "<p>Code samples</p>", "2025-03-01T10:00:00Z", &[]),
        post("2", "Colour theory", "Palettes", "2025-01-01T10:00:00Z", &["Design"]),
        post("3", "Shipping", "Release notes", "2025-02-20T10:00:00+02:00", &["Coding"]),
        post("4", "Weekend", "Hiking trip", "not a date", &[]),
    ]
}

const NOW: OffsetDateTime = datetime!(2025-03-10 12:00 UTC);

fn ids(posts: &[&BlogPost]) -> Vec<String> {
    posts.iter().map(|p| p.id.clone()).collect()
}

// =============================================================
// filter_posts
// =============================================================

#[test]
fn all_keeps_feed_order() {
    let posts = sample();
    assert_eq!(ids(&filter_posts(&posts, BlogFilter::All, NOW)), ["1", "2", "3", "4"]);
}

#[test]
fn featured_is_first_three() {
    let posts = sample();
    assert_eq!(ids(&filter_posts(&posts, BlogFilter::Featured, NOW)), ["1", "2", "3"]);
    assert!(is_featured(2, BlogFilter::Featured));
    assert!(!is_featured(3, BlogFilter::Featured));
    assert!(!is_featured(0, BlogFilter::All));
}

#[test]
fn recent_uses_thirty_day_window_and_skips_bad_dates() {
    let posts = sample();
    assert_eq!(ids(&filter_posts(&posts, BlogFilter::Recent, NOW)), ["1", "3"]);
}

#[test]
fn category_filters_match_title_body_and_labels() {
    let posts = sample();
    assert_eq!(ids(&filter_posts(&posts, BlogFilter::Technology, NOW)), ["1"]);
    assert_eq!(ids(&filter_posts(&posts, BlogFilter::Design, NOW)), ["2"]);
    assert_eq!(ids(&filter_posts(&posts, BlogFilter::Development, NOW)), ["3"]);
}

#[test]
fn keyword_match_is_case_insensitive_substring() {
    let posts = vec![post("9", "JAVASCRIPT Everywhere", "", "", &[])];
    assert_eq!(filter_posts(&posts, BlogFilter::Technology, NOW).len(), 1);
    // "ui" also appears inside "build"; substring semantics accept it.
    let posts = vec![post("10", "How we build", "", "", &[])];
    assert_eq!(filter_posts(&posts, BlogFilter::Design, NOW).len(), 1);
}

#[test]
fn empty_feed_filters_to_empty() {
    for filter in BlogFilter::ALL {
        assert!(filter_posts(&[], filter, NOW).is_empty());
    }
}

#[test]
fn only_category_filters_have_keywords() {
    assert!(BlogFilter::All.keywords().is_empty());
    assert!(BlogFilter::Recent.keywords().is_empty());
    assert!(BlogFilter::Featured.keywords().is_empty());
    assert!(BlogFilter::Development.keywords().contains(&"programming"));
}

#[test]
fn count_summary_pluralises() {
    assert_eq!(count_summary(1, BlogFilter::All), "Found 1 post");
    assert_eq!(count_summary(4, BlogFilter::Design), "Found 4 posts (Design filter)");
}

#[test]
fn empty_state_text_names_the_filter() {
    assert_eq!(empty_hint(BlogFilter::All), "Check back later for new content");
    assert_eq!(empty_hint(BlogFilter::Recent), "No posts match the \"Recent\" filter");
    assert_eq!(empty_totals(1, 0, BlogFilter::Design), "Found 1 total post, 0 matching filter \"Design\"");
}

// =============================================================
// BlogView
// =============================================================

#[test]
fn open_and_close_detail() {
    let posts = sample();
    let mut view = BlogView::default();
    view.open("3");
    assert_eq!(view.selected_post(&posts).map(|p| p.title.as_str()), Some("Shipping"));
    view.close();
    assert!(view.selected_post(&posts).is_none());
}

#[test]
fn unknown_selection_resolves_to_none() {
    let mut view = BlogView::default();
    view.open("missing");
    assert!(view.selected_post(&sample()).is_none());
}

#[test]
fn sticky_title_flips_at_nav_height() {
    let mut view = BlogView::default();
    view.observe_title(10.0);
    assert!(!view.sticky_title, "list view never sticks");
    view.open("1");
    view.observe_title(120.0);
    assert!(!view.sticky_title);
    view.observe_title(50.0);
    assert!(view.sticky_title);
    view.observe_title(51.0);
    assert!(!view.sticky_title);
}

#[test]
fn changing_filter_keeps_selection() {
    let mut view = BlogView::default();
    view.open("1");
    view.set_filter(BlogFilter::Recent);
    assert_eq!(view.filter, BlogFilter::Recent);
    assert_eq!(view.selected.as_deref(), Some("1"));
}
