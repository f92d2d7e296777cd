//! Mount-liveness token for async completions.
//!
//! A fetch started by a component may resolve after the component is gone.
//! Completions check [`MountGuard::is_alive`] before touching signals.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use leptos::prelude::on_cleanup;

#[derive(Clone, Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    /// Create a token that flips to dead when the current reactive owner is cleaned up.
    #[must_use]
    pub fn new() -> Self {
        let guard = Self::detached();
        let alive = Arc::clone(&guard.alive);
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
        guard
    }

    /// Token with no owner attached; only [`MountGuard::release`] kills it.
    #[must_use]
    pub fn detached() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn release(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
