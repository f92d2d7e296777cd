//! Content services used by the JSON routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the external API calls and their fallback policy so
//! route handlers stay focused on HTTP translation.

pub mod blog;
pub mod certificates;
pub mod fetch;
