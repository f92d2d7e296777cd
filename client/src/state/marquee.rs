//! Infinite horizontal auto-scroll strip.
//!
//! The strip renders its items several times over so one full copy is always
//! off-screen to the right. Each animation frame advances the offset; once it
//! passes the width of one copy it is pulled back by exactly that width, which
//! lands on an identical frame. The offset is kept as a float here and applied
//! as a transform, since element scroll positions are integral.

#[cfg(test)]
#[path = "marquee_test.rs"]
mod marquee_test;

/// Per-frame advance in pixels.
pub const BASE_SPEED_PX: f64 = 1.2;
/// Per-frame advance while the pointer is over the strip.
pub const HOVER_SPEED_PX: f64 = 0.3;
/// Minimum number of rendered items across all copies.
pub const MIN_RENDERED_ITEMS: usize = 20;
/// Minimum number of copies regardless of item count.
pub const MIN_COPIES: usize = 3;

/// How many times `item_count` items are repeated.
#[must_use]
pub fn copies_for(item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    MIN_COPIES.max(MIN_RENDERED_ITEMS.div_ceil(item_count))
}

/// Items repeated [`copies_for`] times, in order.
#[must_use]
pub fn duplicate<T: Clone>(items: &[T]) -> Vec<T> {
    let copies = copies_for(items.len());
    let mut out = Vec::with_capacity(items.len() * copies);
    for _ in 0..copies {
        out.extend_from_slice(items);
    }
    out
}

/// Width of one unduplicated set, given the rendered strip's scroll width.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn set_width(scroll_width: f64, item_count: usize) -> f64 {
    let rendered = item_count * copies_for(item_count);
    if rendered == 0 {
        return 0.0;
    }
    scroll_width / rendered as f64 * item_count as f64
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarqueeState {
    pub offset: f64,
    pub hovering: bool,
    /// Index into the unduplicated items of the item shown in the modal.
    pub selected: Option<usize>,
    item_count: usize,
}

impl MarqueeState {
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        Self { item_count, ..Self::default() }
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Whether the per-frame loop should exist at all.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.item_count > 0 && self.selected.is_none()
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        if self.hovering { HOVER_SPEED_PX } else { BASE_SPEED_PX }
    }

    /// Advance one frame. Returns the new offset.
    pub fn advance(&mut self, set_width: f64) -> f64 {
        if !self.is_running() {
            return self.offset;
        }
        self.offset += self.speed();
        if set_width > 0.0 {
            self.offset %= set_width;
        }
        self.offset
    }

    /// Open the detail modal for a rendered item; the index wraps to the source set.
    pub fn open(&mut self, rendered_index: usize) {
        if self.item_count == 0 {
            return;
        }
        self.selected = Some(rendered_index % self.item_count);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }
}
