//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render landing widgets and navigation chrome while reading
//! shared state from Leptos context providers.

pub mod app_header;
pub mod app_sidebar;
pub mod home_card;
pub mod home_swiper;
pub mod icons;
