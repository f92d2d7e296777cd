//! Preview and link URLs for certificate files hosted on Google Drive.
//!
//! DESIGN
//! ======
//! Drive previews fail in several ways (private files, rate limits, PDFs
//! without thumbnails). Each view gets an ordered list of candidate sources
//! and a [`FallbackImage`] cursor; an `error` event on the `<img>` advances
//! the cursor and the view re-renders from state. Running off the end of the
//! list means "show the icon tile".

#[cfg(test)]
#[path = "drive_test.rs"]
mod drive_test;

use crate::net::types::CertificateFile;

const DRIVE: &str = "https://drive.google.com";

#[must_use]
pub fn thumbnail_url(id: &str, size: &str) -> String {
    format!("{DRIVE}/thumbnail?id={id}&sz={size}")
}

/// Direct image bytes.
#[must_use]
pub fn direct_view_url(id: &str) -> String {
    format!("{DRIVE}/uc?export=view&id={id}")
}

#[must_use]
pub fn download_url(id: &str) -> String {
    format!("{DRIVE}/uc?export=download&id={id}")
}

/// Drive's own viewer page.
#[must_use]
pub fn file_view_url(id: &str) -> String {
    format!("{DRIVE}/file/d/{id}/view")
}

/// Embeddable PDF viewer.
#[must_use]
pub fn pdf_preview_url(id: &str) -> String {
    format!("{DRIVE}/file/d/{id}/preview")
}

/// Best first preview for the strip tile.
#[must_use]
pub fn preview_src(file: &CertificateFile) -> String {
    if file.is_image() {
        return thumbnail_url(&file.id, "w400-h300");
    }
    match file.thumbnail_link.as_deref() {
        Some(link) if !link.is_empty() => link.replace("=s220", "=s400"),
        _ => thumbnail_url(&file.id, "w400-h300"),
    }
}

/// Candidate sources for a strip tile, best first.
#[must_use]
pub fn tile_sources(file: &CertificateFile) -> Vec<String> {
    if file.is_pdf() {
        return vec![thumbnail_url(&file.id, "w400-h300")];
    }
    let last_resort = match file.thumbnail_link.as_deref() {
        Some(link) if !link.is_empty() => link.to_owned(),
        _ => thumbnail_url(&file.id, "w300"),
    };
    vec![preview_src(file), direct_view_url(&file.id), last_resort]
}

/// Candidate sources for the full-size modal image.
#[must_use]
pub fn modal_sources(file: &CertificateFile) -> Vec<String> {
    vec![direct_view_url(&file.id), thumbnail_url(&file.id, "w1200-h900")]
}

/// Cursor into a list of candidate image sources.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FallbackImage {
    attempt: usize,
}

impl FallbackImage {
    /// Source to render now, or `None` once every candidate has failed.
    #[must_use]
    pub fn current<'a>(&self, sources: &'a [String]) -> Option<&'a str> {
        sources.get(self.attempt).map(String::as_str)
    }

    /// The current source failed to load.
    pub fn fail(&mut self) {
        self.attempt = self.attempt.saturating_add(1);
    }

    #[must_use]
    pub fn exhausted(&self, sources: &[String]) -> bool {
        self.attempt >= sources.len()
    }
}
