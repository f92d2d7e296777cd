//! Text shaping for blog cards and the post detail view.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use time::{OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description};

/// Excerpt length for blog cards, in characters.
pub const EXCERPT_CHARS: usize = 150;
/// Word limit for truncated titles.
pub const TITLE_WORDS: usize = 8;
/// Reading speed used for the "min read" estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Drop markup and decode the handful of entities blog bodies commonly carry.
#[must_use]
pub fn strip_html_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    decode_entities(&out)
}

fn decode_entities(text: &str) -> String {
    const ENTITIES: [(&str, &str); 6] =
        [("&nbsp;", " "), ("&lt;", "<"), ("&gt;", ">"), ("&quot;", "\""), ("&#39;", "'"), ("&amp;", "&")];
    ENTITIES.iter().fold(text.to_owned(), |acc, (from, to)| acc.replace(from, to))
}

/// Cut `text` to `max_chars` characters and append `...` when anything was cut.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

/// Keep the first `max_words` space-separated words, appending `...` when cut.
#[must_use]
pub fn truncate_title(title: &str, max_words: usize) -> String {
    let words: Vec<&str> = title.split(' ').collect();
    if words.len() <= max_words {
        return title.to_owned();
    }
    format!("{}...", words[..max_words].join(" "))
}

/// `"{n} min read"` for an HTML body. Never below one minute.
#[must_use]
pub fn estimate_read_time(html: &str) -> String {
    let words = strip_html_tags(html).split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}

/// `"January 5, 2025"` for an RFC 3339 timestamp; the input unchanged if it does not parse.
#[must_use]
pub fn format_long_date(rfc3339: &str) -> String {
    let format = format_description!("[month repr:long] [day padding:none], [year]");
    OffsetDateTime::parse(rfc3339, &Rfc3339)
        .ok()
        .and_then(|at| at.format(&format).ok())
        .unwrap_or_else(|| rfc3339.to_owned())
}

/// Upper-case the first character.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
