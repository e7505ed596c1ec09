//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page composes widgets from `components`; pages own no shared state.

pub mod landing;
pub mod login;
