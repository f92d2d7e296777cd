use super::*;

// =============================================================
// BlogPost
// =============================================================

#[test]
fn blog_post_decodes_blogger_item() {
    let raw = serde_json::json!({
        "kind": "blogger#post",
        "id": "7706273476706534553",
        "published": "2025-01-15T10:30:00-08:00",
        "url": "https://example.blogspot.com/2025/01/hello.html",
        "title": "Hello",
        "content": "<p>Body</p>",
        "author": { "displayName": "Jane", "id": "1" },
        "labels": ["Rust", "Web"],
        "images": [{ "url": "https://img.example/1.png" }]
    });
    let post: BlogPost = serde_json::from_value(raw).unwrap();
    assert_eq!(post.id, "7706273476706534553");
    assert_eq!(post.labels, vec!["Rust".to_owned(), "Web".to_owned()]);
    assert_eq!(post.author.unwrap().display_name.as_deref(), Some("Jane"));
    assert_eq!(post.images.unwrap()[0].url, "https://img.example/1.png");
}

#[test]
fn blog_post_accepts_numeric_id_and_missing_optionals() {
    let post: BlogPost = serde_json::from_value(serde_json::json!({ "id": 42 })).unwrap();
    assert_eq!(post.id, "42");
    assert!(post.title.is_empty());
    assert!(post.labels.is_empty());
    assert!(post.images.is_none());
    assert!(post.author.is_none());
}

#[test]
fn blog_post_rejects_object_id() {
    let result = serde_json::from_value::<BlogPost>(serde_json::json!({ "id": { "x": 1 } }));
    assert!(result.is_err());
}

#[test]
fn cover_image_skips_empty_urls() {
    let mut post: BlogPost = serde_json::from_value(serde_json::json!({ "id": "1" })).unwrap();
    assert_eq!(post.cover_image(), None);
    post.images = Some(vec![PostImage { url: String::new() }]);
    assert_eq!(post.cover_image(), None);
    post.images = Some(vec![PostImage { url: "https://img/1".to_owned() }]);
    assert_eq!(post.cover_image(), Some("https://img/1"));
}

// =============================================================
// BlogFeed
// =============================================================

#[test]
fn blog_feed_serializes_snake_case_enums() {
    let feed = BlogFeed {
        posts: vec![],
        source: FeedSource::Demo,
        notice: Some(FeedNotice { kind: NoticeKind::Demo, message: "demo".to_owned() }),
        credentials: CredentialStatus::default(),
    };
    let json = serde_json::to_value(&feed).unwrap();
    assert_eq!(json["source"], "demo");
    assert_eq!(json["notice"]["kind"], "demo");
    assert_eq!(json["credentials"]["api_key_set"], false);
}

#[test]
fn blog_feed_defaults_missing_fields() {
    let feed: BlogFeed = serde_json::from_str(r#"{"posts":[]}"#).unwrap();
    assert_eq!(feed.source, FeedSource::Live);
    assert!(feed.notice.is_none());
}

// =============================================================
// CertificateFile
// =============================================================

fn file(name: Option<&str>, mime: Option<&str>) -> CertificateFile {
    CertificateFile {
        id: "f1".to_owned(),
        name: name.map(str::to_owned),
        mime_type: mime.map(str::to_owned),
        thumbnail_link: None,
        web_view_link: None,
        web_content_link: None,
    }
}

#[test]
fn certificate_file_decodes_drive_fields() {
    let raw = r#"{"id":"abc","name":"AWS.pdf","mimeType":"application/pdf","thumbnailLink":"https://lh3/x=s220"}"#;
    let f: CertificateFile = serde_json::from_str(raw).unwrap();
    assert!(f.is_pdf());
    assert!(!f.is_image());
    assert_eq!(f.thumbnail_link.as_deref(), Some("https://lh3/x=s220"));
}

#[test]
fn certificate_display_name_defaults_by_kind() {
    assert_eq!(file(Some("GCP"), Some("image/png")).display_name(), "GCP");
    assert_eq!(file(None, Some("application/pdf")).display_name(), "PDF Certificate");
    assert_eq!(file(Some(""), Some("image/jpeg")).display_name(), "Certificate");
}

#[test]
fn certificate_is_image_matches_prefix() {
    assert!(file(None, Some("image/svg+xml")).is_image());
    assert!(!file(None, None).is_image());
}

// =============================================================
// Contact
// =============================================================

#[test]
fn contact_request_serializes_four_fields() {
    let req = ContactRequest {
        name: "A".to_owned(),
        email: "a@b.co".to_owned(),
        subject: "Hi".to_owned(),
        message: "Hello".to_owned(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({"name":"A","email":"a@b.co","subject":"Hi","message":"Hello"}));
}

#[test]
fn contact_response_message_is_optional() {
    let resp: ContactResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.message.is_none());
    let resp: ContactResponse = serde_json::from_str(r#"{"message":"bad"}"#).unwrap();
    assert_eq!(resp.message.as_deref(), Some("bad"));
}
