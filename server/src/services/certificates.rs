//! Certificate listing from a public Drive folder.
//!
//! Failures never reach the client as errors: the listing comes back empty
//! with a notice, and the strip renders its placeholder.

#[cfg(test)]
#[path = "certificates_test.rs"]
mod certificates_test;

use folio::net::types::{CertificateFeed, CertificateFile};
use serde::Deserialize;

use super::fetch::{FeedError, JsonSource, google_error_message, url_with_params};
use crate::config::SiteConfig;

pub const DRIVE_FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";
const DRIVE_FIELDS: &str = "files(id,name,mimeType,thumbnailLink,webViewLink,webContentLink)";

#[derive(Deserialize)]
struct DriveFileList {
    #[serde(default)]
    files: Vec<CertificateFile>,
}

/// Drive list URL for the non-trashed children of `folder_id`.
///
/// # Errors
///
/// Never in practice; the base URL is absolute.
pub fn drive_list_url(folder_id: &str, api_key: &str) -> Result<String, FeedError> {
    let query = format!("'{folder_id}' in parents and trashed=false");
    url_with_params(DRIVE_FILES_URL, &[("q", query.as_str()), ("fields", DRIVE_FIELDS), ("key", api_key)])
}

/// Images and PDFs are shown; everything else in the folder is skipped.
#[must_use]
pub fn is_supported(file: &CertificateFile) -> bool {
    file.is_image() || file.is_pdf()
}

/// Resolve the certificate listing for one page load.
pub async fn load_certificates(source: &dyn JsonSource, config: &SiteConfig) -> CertificateFeed {
    match list_files(source, config).await {
        Ok(files) => {
            tracing::info!(count = files.len(), "loaded certificate listing");
            CertificateFeed { files, notice: None }
        }
        Err(e) => {
            tracing::warn!(error = %e, "certificate listing failed");
            CertificateFeed { files: Vec::new(), notice: Some(notice_for(&e)) }
        }
    }
}

/// Supported files in the configured folder.
///
/// # Errors
///
/// Returns a [`FeedError`] if config is missing or the Drive request fails.
pub async fn list_files(source: &dyn JsonSource, config: &SiteConfig) -> Result<Vec<CertificateFile>, FeedError> {
    let creds = config.drive_credentials().map_err(FeedError::MissingCredentials)?;
    let url = drive_list_url(&creds.folder_id, &creds.api_key)?;
    let value = source.get_json(&url).await?;
    let list: DriveFileList = serde_json::from_value(value).map_err(|e| FeedError::Parse(e.to_string()))?;
    Ok(list.files.into_iter().filter(is_supported).collect())
}

/// User-visible text for a listing failure.
#[must_use]
pub fn notice_for(error: &FeedError) -> String {
    match error {
        FeedError::MissingCredentials(var) => format!("Missing {var}"),
        FeedError::Status { status, body } => {
            let detail = google_error_message(body).unwrap_or_else(|| "Unknown error".to_owned());
            format!("Drive API error: {status} - {detail}")
        }
        other => format!("Failed to load certifications: {other}"),
    }
}
