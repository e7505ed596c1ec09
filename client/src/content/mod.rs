//! Static display content for the landing page and navigation.

pub mod app_header;
pub mod home;
