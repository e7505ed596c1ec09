//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure presentation
//! math from components to improve reuse and testability.

pub mod breakpoints;
pub mod card_motion;
pub mod carousel;
pub mod image_fallback;
pub mod nav;
pub mod session_storage;
pub mod viewport;
