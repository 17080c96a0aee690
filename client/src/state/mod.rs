//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `contact`, `ui`) so each section
//! depends on a small focused model provided through Leptos context.

pub mod contact;
pub mod theme;
pub mod ui;
