//! Top-level site links shared by the header and the mobile sidebar.

#[cfg(test)]
#[path = "app_header_test.rs"]
mod app_header_test;

use crate::components::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderLink {
    pub id: u32,
    pub name: &'static str,
    pub path: &'static str,
}

pub const APP_HEADER_LINKS: [HeaderLink; 6] = [
    HeaderLink { id: 1, name: "Home", path: "/" },
    HeaderLink { id: 2, name: "About us", path: "/about" },
    HeaderLink { id: 3, name: "Courses", path: "/courses" },
    HeaderLink { id: 4, name: "Batches", path: "/batches" },
    HeaderLink { id: 5, name: "Blog", path: "/blog" },
    HeaderLink { id: 6, name: "Contact us", path: "/contact" },
];

/// Icon shown next to a header link in the sidebar, chosen by link name.
pub fn header_link_icon(name: &str) -> Option<Icon> {
    match name {
        "Home" => Some(Icon::Home),
        "About us" | "Contact us" => Some(Icon::Users),
        "Courses" | "Blog" => Some(Icon::BookOpen),
        "Batches" => Some(Icon::GraduationCap),
        _ => None,
    }
}
