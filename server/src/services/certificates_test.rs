use serde_json::json;

use super::*;
use crate::services::fetch::test_helpers::MockSource;

fn drive_config() -> SiteConfig {
    SiteConfig {
        google_api_key: Some("drive-key".into()),
        drive_folder_id: Some("folder123".into()),
        ..SiteConfig::default()
    }
}

#[test]
fn list_url_queries_folder_children() {
    let url = drive_list_url("abc", "k").unwrap();
    assert!(url.starts_with("https://www.googleapis.com/drive/v3/files?q=%27abc%27+in+parents+and+trashed%3Dfalse"));
    assert!(url.contains("fields=files%28id%2Cname%2CmimeType%2CthumbnailLink%2CwebViewLink%2CwebContentLink%29"));
    assert!(url.ends_with("&key=k"));
}

#[tokio::test]
async fn listing_keeps_images_and_pdfs_only() {
    let listing = json!({ "files": [
        { "id": "1", "name": "aws.png", "mimeType": "image/png", "thumbnailLink": "https://lh3/1" },
        { "id": "2", "name": "notes.txt", "mimeType": "text/plain" },
        { "id": "3", "name": "cert.pdf", "mimeType": "application/pdf" },
        { "id": "4", "name": "logo.svg", "mimeType": "image/svg+xml" },
        { "id": "5", "name": "folder", "mimeType": "application/vnd.google-apps.folder" },
        { "id": "6" }
    ]});
    let source = MockSource::new(vec![(DRIVE_FILES_URL, Ok(listing))]);
    let feed = load_certificates(&source, &drive_config()).await;

    let ids: Vec<&str> = feed.files.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, ["1", "3", "4"]);
    assert!(feed.notice.is_none());
    assert_eq!(feed.files[0].thumbnail_link.as_deref(), Some("https://lh3/1"));
}

#[tokio::test]
async fn missing_key_yields_notice_and_no_request() {
    let source = MockSource::new(vec![]);
    let feed = load_certificates(&source, &SiteConfig::default()).await;
    assert!(feed.files.is_empty());
    assert_eq!(feed.notice.as_deref(), Some("Missing GOOGLE_API_KEY"));
    assert!(source.requested().is_empty());
}

#[tokio::test]
async fn missing_folder_yields_notice() {
    let config = SiteConfig { google_api_key: Some("drive-key".into()), ..SiteConfig::default() };
    let feed = load_certificates(&MockSource::new(vec![]), &config).await;
    assert_eq!(feed.notice.as_deref(), Some("Missing GOOGLE_DRIVE_FOLDER_ID"));
}

#[tokio::test]
async fn api_failure_yields_status_notice() {
    let source = MockSource::new(vec![(DRIVE_FILES_URL, Err(403))]);
    let feed = load_certificates(&source, &drive_config()).await;
    assert!(feed.files.is_empty());
    assert_eq!(feed.notice.as_deref(), Some("Drive API error: 403 - Unknown error"));
}

#[test]
fn status_notice_uses_google_message() {
    let err = FeedError::Status { status: 404, body: r#"{"error":{"message":"File not found: folder123."}}"#.into() };
    assert_eq!(notice_for(&err), "Drive API error: 404 - File not found: folder123.");
}

#[tokio::test]
async fn listing_without_files_key_is_empty() {
    let source = MockSource::new(vec![(DRIVE_FILES_URL, Ok(json!({})))]);
    let feed = load_certificates(&source, &drive_config()).await;
    assert!(feed.files.is_empty());
    assert!(feed.notice.is_none());
}
