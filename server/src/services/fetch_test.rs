use super::*;

#[test]
fn url_with_params_encodes_query() {
    let url = url_with_params("https://example.test/files", &[("q", "'abc' in parents"), ("key", "k&1")]).unwrap();
    assert_eq!(url, "https://example.test/files?q=%27abc%27+in+parents&key=k%261");
}

#[test]
fn url_with_params_rejects_relative_base() {
    let err = url_with_params("/files", &[]).unwrap_err();
    assert!(matches!(err, FeedError::Request(_)));
}

#[test]
fn google_error_message_reads_nested_message() {
    let body = r#"{"error":{"code":403,"message":"The caller does not have permission"}}"#;
    assert_eq!(google_error_message(body).as_deref(), Some("The caller does not have permission"));
}

#[test]
fn google_error_message_tolerates_other_bodies() {
    assert_eq!(google_error_message("<html>oops</html>"), None);
    assert_eq!(google_error_message(r#"{"error":"flat"}"#), None);
}

#[test]
fn status_error_display_includes_body() {
    let err = FeedError::Status { status: 404, body: "Not Found".into() };
    assert_eq!(err.to_string(), "API error: 404 - Not Found");
}

#[test]
fn http_source_builds_with_timeouts() {
    assert!(HttpJsonSource::new(HttpTimeouts { request_secs: 1, connect_secs: 1 }).is_ok());
}
