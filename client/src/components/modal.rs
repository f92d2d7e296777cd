//! Shared modal behaviour: Escape to close and page scroll lock.
//!
//! Both hooks tie their effect to the calling component's owner, so a modal
//! rendered under `<Show>` releases them as soon as it is hidden.

use leptos::prelude::*;

use crate::util::dom;

/// Run `on_close` when Escape is pressed anywhere in the window.
pub fn use_escape(on_close: Callback<()>) {
    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());
}

/// Disable page scrolling for the lifetime of the calling component.
pub fn use_scroll_lock() {
    dom::set_scroll_lock(true);
    on_cleanup(|| dom::set_scroll_lock(false));
}
