//! Timer and animation-frame handles tied to a component's reactive owner.
//!
//! DESIGN
//! ======
//! An interval that outlives its component keeps writing into disposed
//! signals. Both handles are held in owner-scoped `StoredValue`s, so
//! disposing the owner cancels the browser timer. Re-arming replaces (and so
//! cancels) the previous timer.
//!
//! On the server both types are inert; nothing is scheduled during SSR.

#[cfg(feature = "hydrate")]
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

// =============================================================================
// CLOCK
// =============================================================================

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        #[allow(clippy::cast_precision_loss)]
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_millis() as f64)
    }
}

/// Current wall-clock time.
#[must_use]
pub fn now_utc() -> time::OffsetDateTime {
    #[allow(clippy::cast_possible_truncation)]
    let nanos = (now_ms() * 1_000_000.0) as i128;
    time::OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(time::OffsetDateTime::UNIX_EPOCH)
}

// =============================================================================
// INTERVAL
// =============================================================================

/// Owner-scoped slot holding at most one repeating timer.
#[derive(Clone, Copy)]
pub struct IntervalSlot {
    #[cfg(feature = "hydrate")]
    inner: StoredValue<Option<Interval>, LocalStorage>,
}

impl IntervalSlot {
    #[must_use]
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            inner: StoredValue::new_local(None),
        }
    }

    /// Start calling `tick` every `period_ms`, cancelling any previous timer.
    pub fn arm(&self, period_ms: u32, tick: impl FnMut() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            let interval = Interval::new(period_ms, tick);
            self.inner.set_value(Some(interval));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (period_ms, tick);
        }
    }

    pub fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            let _ = self.inner.try_update_value(|slot| slot.take());
        }
    }
}

impl Default for IntervalSlot {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// ANIMATION FRAMES
// =============================================================================

#[cfg(feature = "hydrate")]
struct FrameLoopInner {
    running: Cell<bool>,
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

#[cfg(feature = "hydrate")]
impl FrameLoopInner {
    fn schedule(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return;
        };
        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            self.handle.set(Some(id));
        }
    }
}

/// A `requestAnimationFrame` loop that runs until dropped.
pub struct FrameLoop {
    #[cfg(feature = "hydrate")]
    inner: Rc<FrameLoopInner>,
}

impl FrameLoop {
    /// Call `step` once per animation frame. `None` outside a browser.
    #[must_use]
    pub fn start(step: impl FnMut() + 'static) -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()?;
            let inner = Rc::new(FrameLoopInner {
                running: Cell::new(true),
                handle: Cell::new(None),
                callback: RefCell::new(None),
            });
            let weak = Rc::downgrade(&inner);
            let mut step = step;
            let cb = Closure::wrap(Box::new(move |_ts: f64| {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                if !inner.running.get() {
                    return;
                }
                step();
                inner.schedule();
            }) as Box<dyn FnMut(f64)>);
            *inner.callback.borrow_mut() = Some(cb);
            inner.schedule();
            Some(Self { inner })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = step;
            None
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            self.inner.running.set(false);
            if let (Some(id), Some(window)) = (self.inner.handle.take(), web_sys::window()) {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}
