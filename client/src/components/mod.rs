//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and the home-page sections. Each owns
//! its local UI state as signals over the pure machines in `crate::state`;
//! navigation state is handed in as a prop from the root `App`.

pub mod certifications;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod loading_screen;
pub mod modal;
pub mod navbar;
pub mod project_showcase;
pub mod scroll_up_nav;
pub mod skills;
