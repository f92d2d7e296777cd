//! Application chrome state (loading screen).
//!
//! DESIGN
//! ======
//! The loading overlay is a fixed three-phase sequence driven by two
//! timeouts in the shell. Keeping the phase here lets the shell render from
//! one value instead of juggling a pair of booleans.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// How long the overlay stays fully visible after mount.
pub const LOADING_VISIBLE_MS: u32 = 1000;
/// Length of the fade-out transition.
pub const LOADING_FADE_MS: u32 = 500;

/// Loading overlay lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingPhase {
    #[default]
    Visible,
    FadingOut,
    /// Overlay removed from the tree.
    Done,
}

impl LoadingPhase {
    /// Next phase; `Done` is terminal.
    #[must_use]
    pub fn advance(self) -> Self {
        match self {
            Self::Visible => Self::FadingOut,
            Self::FadingOut | Self::Done => Self::Done,
        }
    }

    /// Delay before this phase should advance, if it advances at all.
    #[must_use]
    pub fn dwell_ms(self) -> Option<u32> {
        match self {
            Self::Visible => Some(LOADING_VISIBLE_MS),
            Self::FadingOut => Some(LOADING_FADE_MS),
            Self::Done => None,
        }
    }

    #[must_use]
    pub fn is_mounted(self) -> bool {
        self != Self::Done
    }

    /// CSS class for the overlay root.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Visible => "loading-screen",
            Self::FadingOut | Self::Done => "loading-screen loading-screen--fade",
        }
    }
}

/// Shell-level UI state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub loading: LoadingPhase,
}
