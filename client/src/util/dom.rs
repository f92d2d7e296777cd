//! Thin window/document helpers.
//!
//! Every function is a no-op (or returns a neutral value) on the server, so
//! components can call them from event handlers and effects without their
//! own cfg gates.

#[cfg(feature = "hydrate")]
use crate::state::nav::{Section, SectionBounds};

/// Current vertical scroll offset of the window.
#[must_use]
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smooth-scroll the window to an absolute offset.
pub fn smooth_scroll_to(top: f64) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = top;
    }
}

/// Smooth-scroll an element horizontally by `dx` pixels.
#[cfg(feature = "hydrate")]
pub fn smooth_scroll_by_x(el: &web_sys::Element, dx: f64) {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_left(dx);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_by_with_scroll_to_options(&opts);
}

/// Document-absolute bounds of a section element.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn section_bounds(section: Section, el: &web_sys::Element) -> SectionBounds {
    let rect = el.get_bounding_client_rect();
    SectionBounds { section, top: rect.top() + scroll_y(), height: rect.height() }
}

/// Lock or unlock page scrolling while a modal is open.
pub fn set_scroll_lock(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

/// Cursor shown over the whole page while a carousel drag is in progress.
pub fn set_grabbing_cursor(grabbing: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let _ = body.style().set_property("cursor", if grabbing { "grabbing" } else { "" });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = grabbing;
    }
}

/// Horizontal pointer position of a mouse event.
#[must_use]
pub fn mouse_x(ev: &leptos::ev::MouseEvent) -> f64 {
    #[cfg(feature = "hydrate")]
    {
        f64::from(ev.client_x())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        0.0
    }
}

/// Horizontal position of the first active touch (`touchstart`).
#[must_use]
pub fn touch_start_x(ev: &leptos::ev::TouchEvent) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        ev.touches().get(0).map(|t| f64::from(t.client_x()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}

/// Horizontal position of the touch that just lifted (`touchend`).
#[must_use]
pub fn touch_end_x(ev: &leptos::ev::TouchEvent) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        ev.changed_touches().get(0).map(|t| f64::from(t.client_x()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}
