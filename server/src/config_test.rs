use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    SiteConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn empty_environment_uses_defaults() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg, SiteConfig::default());
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.placeholder_posts_url, DEFAULT_PLACEHOLDER_POSTS_URL);
    assert!(cfg.blogger_credentials().is_none());
}

#[test]
fn overrides_are_parsed() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("BLOG_MAX_RESULTS", "5"),
        ("DEMO_POST_LIMIT", "3"),
        ("PLACEHOLDER_POSTS_URL", "http://localhost:9000/posts/"),
        ("HTTP_REQUEST_TIMEOUT_SECS", "42"),
        ("HTTP_CONNECT_TIMEOUT_SECS", "7"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.blog_max_results, 5);
    assert_eq!(cfg.demo_post_limit, 3);
    assert_eq!(cfg.placeholder_posts_url, "http://localhost:9000/posts");
    assert_eq!(cfg.timeouts, HttpTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn bad_port_is_an_error() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { var: "PORT", value: "eighty".into() });
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn bad_optional_numbers_fall_back() {
    let cfg = config_from(&[("BLOG_MAX_RESULTS", "many"), ("HTTP_CONNECT_TIMEOUT_SECS", "-1")]).unwrap();
    assert_eq!(cfg.blog_max_results, DEFAULT_BLOG_MAX_RESULTS);
    assert_eq!(cfg.timeouts.connect_secs, DEFAULT_HTTP_CONNECT_TIMEOUT_SECS);
}

#[test]
fn zero_post_counts_fall_back() {
    let cfg = config_from(&[("DEMO_POST_LIMIT", "0"), ("BLOG_MAX_RESULTS", "0")]).unwrap();
    assert_eq!(cfg.demo_post_limit, DEFAULT_DEMO_POST_LIMIT);
    assert_eq!(cfg.blog_max_results, DEFAULT_BLOG_MAX_RESULTS);
    let cfg = config_from(&[("DEMO_POST_LIMIT", "1")]).unwrap();
    assert_eq!(cfg.demo_post_limit, 1);
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = config_from(&[("BLOGGER_API_KEY", "   "), ("GOOGLE_API_KEY", "")]).unwrap();
    assert!(cfg.blogger_api_key.is_none());
    assert!(cfg.google_api_key.is_none());
}

#[test]
fn real_looking_blogger_values_are_usable() {
    let cfg = config_from(&[("BLOGGER_API_KEY", "AIzaSyExample123"), ("BLOGGER_BLOG_ID", "1234567890123")]).unwrap();
    let creds = cfg.blogger_credentials().unwrap();
    assert_eq!(creds.api_key, "AIzaSyExample123");
    assert_eq!(creds.blog_id, "1234567890123");
}

#[test]
fn placeholder_or_short_blogger_values_are_rejected() {
    let placeholder = config_from(&[("BLOGGER_API_KEY", BLOGGER_KEY_PLACEHOLDER), ("BLOGGER_BLOG_ID", "1234567890123")]);
    assert!(placeholder.unwrap().blogger_credentials().is_none());

    let short = config_from(&[("BLOGGER_API_KEY", "AIzaSyExample123"), ("BLOGGER_BLOG_ID", "123456789")]);
    assert!(short.unwrap().blogger_credentials().is_none());

    let only_key = config_from(&[("BLOGGER_API_KEY", "AIzaSyExample123")]);
    assert!(only_key.unwrap().blogger_credentials().is_none());
}

#[test]
fn drive_credentials_name_the_missing_variable() {
    assert_eq!(config_from(&[]).unwrap().drive_credentials(), Err("GOOGLE_API_KEY"));
    let key_only = config_from(&[("GOOGLE_API_KEY", "key")]).unwrap();
    assert_eq!(key_only.drive_credentials(), Err("GOOGLE_DRIVE_FOLDER_ID"));
    let both = config_from(&[("GOOGLE_API_KEY", "key"), ("GOOGLE_DRIVE_FOLDER_ID", "folder")]).unwrap();
    assert_eq!(both.drive_credentials().unwrap().folder_id, "folder");
}
