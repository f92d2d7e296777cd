//! Static site content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything the site says about its owner that is not fetched at runtime:
//! identity and links, the project catalogue, the skills catalogue and the
//! about-page proficiency bars. Components render these tables directly.

pub mod profile;
pub mod projects;
pub mod skills;
