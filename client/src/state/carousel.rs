//! Autoplay carousel state machine.
//!
//! DESIGN
//! ======
//! The component owns the interval; this type only decides what a tick,
//! click or drag does. Every manual action that should restart the autoplay
//! countdown bumps `timer_epoch`, and the component re-arms its interval
//! whenever the epoch or `is_playing()` changes.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Autoplay period.
pub const AUTOPLAY_INTERVAL_MS: u32 = 5000;
/// Horizontal travel a drag must exceed to change slides.
pub const DRAG_THRESHOLD_PX: f64 = 50.0;

/// What a completed drag did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    Next,
    Previous,
    Ignored,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    pub index: usize,
    pub paused: bool,
    pub gallery_open: bool,
    pub drag_origin: Option<f64>,
    pub timer_epoch: u64,
    len: usize,
}

impl CarouselState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, paused: false, gallery_open: false, drag_origin: None, timer_epoch: 0, len }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One dot per slide.
    #[must_use]
    pub fn dot_count(&self) -> usize {
        self.len
    }

    /// Whether the autoplay interval should be armed.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        !self.paused && !self.gallery_open && self.len > 1
    }

    /// Autoplay tick. Returns `true` if the slide changed.
    pub fn tick(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
        self.restart_timer();
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
        self.restart_timer();
    }

    /// Jump to `index`. Out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.index = index;
        self.restart_timer();
    }

    pub fn toggle_play(&mut self) {
        self.paused = !self.paused;
        self.restart_timer();
    }

    /// Open the screenshot gallery for the current slide; autoplay stops.
    pub fn open_gallery(&mut self) {
        self.gallery_open = true;
        self.paused = true;
        self.restart_timer();
    }

    /// Close the gallery; autoplay resumes.
    pub fn close_gallery(&mut self) {
        self.gallery_open = false;
        self.paused = false;
        self.restart_timer();
    }

    pub fn drag_start(&mut self, x: f64) {
        self.drag_origin = Some(x);
    }

    /// Finish a drag at `x`. Leftward travel beyond the threshold advances.
    pub fn drag_end(&mut self, x: f64) -> DragOutcome {
        let Some(origin) = self.drag_origin.take() else {
            return DragOutcome::Ignored;
        };
        let travel = origin - x;
        if travel > DRAG_THRESHOLD_PX {
            self.next();
            DragOutcome::Next
        } else if travel < -DRAG_THRESHOLD_PX {
            self.prev();
            DragOutcome::Previous
        } else {
            DragOutcome::Ignored
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    fn restart_timer(&mut self) {
        self.timer_epoch = self.timer_epoch.wrapping_add(1);
    }
}
