//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed site configuration and the outbound JSON source. There is
//! no mutable state: every request fetches fresh content.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::services::fetch::JsonSource;

/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub source: Arc<dyn JsonSource>,
}

impl AppState {
    #[must_use]
    pub fn new(config: SiteConfig, source: Arc<dyn JsonSource>) -> Self {
        Self { config: Arc::new(config), source }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::services::fetch::test_helpers::MockSource;

    /// State over `config` whose outbound requests are answered by `source`.
    #[must_use]
    pub fn test_app_state(config: SiteConfig, source: MockSource) -> AppState {
        AppState::new(config, Arc::new(source))
    }
}
