//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the server's REST endpoints; `types` holds the JSON shapes both
//! sides agree on.

pub mod api;
pub mod types;
