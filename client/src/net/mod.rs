//! Networking modules for the portfolio's HTTP calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues browser requests (contact backend, server feeds) and `types`
//! defines the wire schema shared with `folio-server`.

pub mod api;
pub mod types;
