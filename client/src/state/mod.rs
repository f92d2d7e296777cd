//! Client-side UI state machines.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every type here is plain data with methods, free of Leptos and the DOM.
//! Components wrap them in `RwSignal`s and feed in timer ticks, scroll offsets
//! and pointer coordinates; the state types decide what those inputs mean.

pub mod blog;
pub mod carousel;
pub mod contact;
pub mod marquee;
pub mod nav;
pub mod ui;
