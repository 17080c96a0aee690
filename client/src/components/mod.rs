//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections render static content from `content` and read/write shared state
//! from Leptos context providers set up in `app`.

pub mod about;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod projects;
pub mod skills;
