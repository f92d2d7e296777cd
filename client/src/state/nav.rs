//! Section-aware navigation state.
//!
//! DESIGN
//! ======
//! The root `App` owns one `NavState` and hands read-only signals plus
//! callbacks to the navbar and the home page. The navbar's window scroll
//! listener runs on every route and feeds [`NavState::observe_flags`]; the
//! home page adds section bounds through [`NavState::observe_sections`]. Nav
//! clicks go through
//! [`NavState::request`] and are resolved by the home page, which owns the
//! section node refs, via [`NavState::navigate_to`].
//!
//! A programmatic smooth scroll passes through every section between origin
//! and target. For `NAV_SUPPRESS_MS` after a click the scroll-driven
//! recompute is skipped so the clicked item stays highlighted. A later click
//! replaces the window rather than extending or queueing behind it.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Height reserved for the fixed header when deciding which section is in view.
pub const HEADER_OFFSET_PX: f64 = 80.0;
/// How long scroll-driven recompute stays disabled after a nav click.
pub const NAV_SUPPRESS_MS: f64 = 1000.0;
/// Offset past which the navbar switches to its condensed style.
pub const SCROLLED_THRESHOLD_PX: f64 = 10.0;
/// Offset past which scrolling up reveals the compact profile bar.
pub const SCROLL_UP_REVEAL_PX: f64 = 400.0;

/// Sections on the home page, top to bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Skills,
    Projects,
    Certifications,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] =
        [Section::Home, Section::Skills, Section::Projects, Section::Certifications, Section::Contact];

    /// Sections listed as regular nav items. Contact gets its own button.
    pub const NAV_ITEMS: [Section; 3] = [Section::Home, Section::Skills, Section::Projects];

    /// DOM id of the section element.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Certifications => "Certifications",
            Self::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Measured position of a rendered section, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.top && offset < self.top + self.height
    }
}

/// Section whose `[top, top + height)` range contains `scroll_y` plus the
/// header offset, if any.
#[must_use]
pub fn section_at(scroll_y: f64, bounds: &[SectionBounds]) -> Option<Section> {
    let probe = scroll_y + HEADER_OFFSET_PX;
    bounds.iter().find(|b| b.contains(probe)).map(|b| b.section)
}

/// Scroll target for a section: its top minus the header, never negative.
#[must_use]
pub fn scroll_target(bounds: &SectionBounds) -> f64 {
    (bounds.top - HEADER_OFFSET_PX).max(0.0)
}

/// A nav click waiting for the home page to resolve it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub section: Section,
    pub seq: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub active: Section,
    pub scrolled: bool,
    pub menu_open: bool,
    pub scroll_up_visible: bool,
    pub pending: Option<ScrollRequest>,
    last_scroll_y: f64,
    suppress_until_ms: Option<f64>,
    next_seq: u64,
}

impl NavState {
    /// Record a nav click. The most recent request wins.
    pub fn request(&mut self, section: Section) -> ScrollRequest {
        self.next_seq += 1;
        let request = ScrollRequest { section, seq: self.next_seq };
        self.pending = Some(request);
        self.menu_open = false;
        request
    }

    /// Take the pending request, if any.
    pub fn take_pending(&mut self) -> Option<ScrollRequest> {
        self.pending.take()
    }

    /// Commit a navigation to `section`.
    ///
    /// `target` is the section's measured bounds, or `None` when its element
    /// is not rendered, in which case nothing changes. Returns the scroll
    /// offset to animate to.
    pub fn navigate_to(&mut self, section: Section, target: Option<SectionBounds>, now_ms: f64) -> Option<f64> {
        let bounds = target.filter(|b| b.section == section)?;
        self.active = section;
        self.menu_open = false;
        self.suppress_until_ms = Some(now_ms + NAV_SUPPRESS_MS);
        Some(scroll_target(&bounds))
    }

    #[must_use]
    pub fn is_suppressed(&self, now_ms: f64) -> bool {
        self.suppress_until_ms.is_some_and(|until| now_ms < until)
    }

    /// Update the scrolled and scroll-up flags. Needs no section bounds.
    pub fn observe_flags(&mut self, scroll_y: f64) {
        let moving_up = scroll_y < self.last_scroll_y;
        self.last_scroll_y = scroll_y;
        self.scrolled = scroll_y > SCROLLED_THRESHOLD_PX;
        self.scroll_up_visible = moving_up && scroll_y > SCROLL_UP_REVEAL_PX;
    }

    /// Recompute the active section, except inside a suppression window.
    pub fn observe_sections(&mut self, scroll_y: f64, bounds: &[SectionBounds], now_ms: f64) {
        if self.is_suppressed(now_ms) {
            return;
        }
        self.suppress_until_ms = None;
        if let Some(section) = section_at(scroll_y, bounds) {
            self.active = section;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
