//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `sidebar`) so widgets depend on small
//! focused models provided through Leptos context.

pub mod auth;
pub mod sidebar;
