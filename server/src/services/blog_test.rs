use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use time::macros::datetime;

use super::*;
use crate::config::DEFAULT_PLACEHOLDER_POSTS_URL;
use crate::services::fetch::test_helpers::MockSource;

const NOW: OffsetDateTime = datetime!(2025-03-10 12:00 UTC);

fn placeholder_json(n: u64) -> serde_json::Value {
    let records: Vec<_> = (1..=n)
        .map(|id| json!({ "userId": 1, "id": id, "title": format!("post number {id}"), "body": "lorem ipsum" }))
        .collect();
    serde_json::Value::Array(records)
}

fn live_config() -> SiteConfig {
    SiteConfig {
        blogger_api_key: Some("AIzaSyExample123".into()),
        blogger_blog_id: Some("1234567890123".into()),
        ..SiteConfig::default()
    }
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

// =========================================================================
// load_feed
// =========================================================================

#[tokio::test]
async fn missing_credentials_serve_demo_posts_with_notice() {
    let source = MockSource::new(vec![(DEFAULT_PLACEHOLDER_POSTS_URL, Ok(placeholder_json(12)))]);
    let feed = load_feed(&source, &SiteConfig::default(), &mut rng(), NOW).await;

    assert_eq!(feed.source, FeedSource::Demo);
    assert_eq!(feed.posts.len(), 12);
    let notice = feed.notice.unwrap();
    assert_eq!(notice.kind, NoticeKind::Demo);
    assert_eq!(notice.message, DEMO_NOTICE);
    assert!(!feed.credentials.api_key_set);
    assert!(source.requested().iter().all(|u| !u.starts_with(BLOGGER_API_BASE)));
    assert!(source.requested()[0].ends_with("?_limit=12"));
}

#[tokio::test]
async fn placeholder_credentials_are_treated_as_missing() {
    let config = SiteConfig {
        blogger_api_key: Some("YOUR_BLOGGER_API_KEY".into()),
        blogger_blog_id: Some("YOUR_BLOG_ID".into()),
        ..SiteConfig::default()
    };
    let source = MockSource::new(vec![(DEFAULT_PLACEHOLDER_POSTS_URL, Ok(placeholder_json(2)))]);
    let feed = load_feed(&source, &config, &mut rng(), NOW).await;
    assert_eq!(feed.source, FeedSource::Demo);
    assert!(feed.credentials.api_key_set && feed.credentials.blog_id_set);
}

#[tokio::test]
async fn live_posts_pass_through_without_notice() {
    let items = json!({ "items": [
        { "id": "9001", "title": "Hello", "content": "<p>Hi</p>", "published": "2025-03-01T10:00:00-08:00",
          "labels": ["Rust"], "author": { "displayName": "Ada", "id": "1" }, "kind": "blogger#post" }
    ]});
    let source = MockSource::new(vec![(BLOGGER_API_BASE, Ok(items))]);
    let feed = load_feed(&source, &live_config(), &mut rng(), NOW).await;

    assert_eq!(feed.source, FeedSource::Live);
    assert!(feed.notice.is_none());
    assert_eq!(feed.posts.len(), 1);
    assert_eq!(feed.posts[0].id, "9001");
    assert_eq!(feed.posts[0].author.as_ref().and_then(|a| a.display_name.as_deref()), Some("Ada"));

    let url = &source.requested()[0];
    assert!(url.starts_with("https://www.googleapis.com/blogger/v3/blogs/1234567890123/posts?"));
    assert!(url.contains("maxResults=20"));
    assert!(url.contains("status=LIVE"));
    assert!(url.contains("fetchImages=true"));
}

#[tokio::test]
async fn empty_live_blog_returns_empty_list_and_notice() {
    let source = MockSource::new(vec![(BLOGGER_API_BASE, Ok(json!({ "kind": "blogger#postList" })))]);
    let feed = load_feed(&source, &live_config(), &mut rng(), NOW).await;

    assert!(feed.posts.is_empty());
    let notice = feed.notice.unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, EMPTY_BLOG_NOTICE);
}

#[tokio::test]
async fn failed_live_fetch_falls_back_to_demo_posts() {
    let source = MockSource::new(vec![
        (BLOGGER_API_BASE, Err(500)),
        (DEFAULT_PLACEHOLDER_POSTS_URL, Ok(placeholder_json(12))),
    ]);
    let feed = load_feed(&source, &live_config(), &mut rng(), NOW).await;

    assert_eq!(feed.source, FeedSource::Demo);
    assert_eq!(feed.posts.len(), 12);
    let notice = feed.notice.unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.message.starts_with("Failed to fetch blog posts: "), "{}", notice.message);
    assert!(notice.message.contains("500"));
}

#[tokio::test]
async fn unreachable_placeholder_api_uses_builtin_records() {
    let source = MockSource::new(vec![]);
    let feed = load_feed(&source, &SiteConfig::default(), &mut rng(), NOW).await;
    assert_eq!(feed.posts.len(), 12);
    assert_eq!(feed.posts[0].title, "Shipping small changes often");
}

#[tokio::test]
async fn zero_demo_limit_still_serves_posts() {
    let config = SiteConfig { demo_post_limit: 0, ..SiteConfig::default() };
    let source = MockSource::new(vec![(DEFAULT_PLACEHOLDER_POSTS_URL, Ok(placeholder_json(0)))]);
    let feed = load_feed(&source, &config, &mut rng(), NOW).await;
    assert_eq!(feed.source, FeedSource::Demo);
    assert!(!feed.posts.is_empty());
    assert!(source.requested()[0].ends_with("?_limit=1"));

    let feed = load_feed(&MockSource::new(vec![]), &config, &mut rng(), NOW).await;
    assert_eq!(feed.posts.len(), 1);
}

#[tokio::test]
async fn fetch_live_without_credentials_is_an_error() {
    let source = MockSource::new(vec![]);
    let err = fetch_live(&source, &SiteConfig::default()).await.unwrap_err();
    assert!(matches!(err, FeedError::MissingCredentials(_)));
    assert!(source.requested().is_empty());
}

// =========================================================================
// demo_post
// =========================================================================

#[test]
fn demo_post_shapes_record() {
    let record = PlaceholderRecord { id: 4, title: "sunt aut facere".into(), body: "quia et suscipit".into() };
    let post = demo_post(4, &record, &mut rng(), NOW);

    assert_eq!(post.id, "4");
    assert_eq!(post.title, "Sunt aut facere");
    assert_eq!(post.content, "quia et suscipit");
    assert_eq!(post.url.as_deref(), Some("#post-4"));
    assert_eq!(post.labels, ["Design", "UI/UX", "Web Design"]);
    assert_eq!(post.author.and_then(|a| a.display_name).as_deref(), Some("Author 2"));
    if let Some(images) = post.images {
        assert_eq!(images[0].url, "https://picsum.photos/400/240?random=4");
    }
}

#[test]
fn demo_dates_fall_within_window() {
    let mut rng = rng();
    let record = PlaceholderRecord { id: 1, title: "t".into(), body: "b".into() };
    for i in 0..50 {
        let post = demo_post(i, &record, &mut rng, NOW);
        let at = OffsetDateTime::parse(&post.published, &Rfc3339).unwrap();
        assert!(at <= NOW);
        assert!(NOW - at <= Duration::days(DEMO_WINDOW_DAYS));
    }
}

#[test]
fn demo_images_are_mixed() {
    let mut rng = rng();
    let record = PlaceholderRecord { id: 1, title: "t".into(), body: "b".into() };
    let with_image = (0..200).filter(|i| demo_post(*i, &record, &mut rng, NOW).images.is_some()).count();
    assert!((100..190).contains(&with_image), "{with_image}");
}

#[test]
fn offline_records_respect_limit() {
    assert_eq!(offline_records(5).len(), 5);
    assert_eq!(offline_records(100).len(), 12);
    assert_eq!(offline_records(3)[2].id, 3);
}
