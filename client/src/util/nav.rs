//! Navigation menu assembly and active-route matching.
//!
//! DESIGN
//! ======
//! Menu contents are a pure function of the user's role, and route matching is
//! a pure function of the current pathname. The sidebar component supplies
//! both inputs from context so these helpers stay testable without a router.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::components::icons::Icon;

/// User role used to personalize the feature menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Instructor,
    Teacher,
    Student,
    Other(String),
}

impl Role {
    /// Parse the role string stored on the current user. Matching is exact.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Admin" => Self::Admin,
            "Instructor" => Self::Instructor,
            "Teacher" => Self::Teacher,
            "Student" => Self::Student,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Admin => "Admin",
            Self::Instructor => "Instructor",
            Self::Teacher => "Teacher",
            Self::Student => "Student",
            Self::Other(raw) => raw.as_str(),
        }
    }

    /// Roles that manage students and issue certificates.
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Admin | Self::Instructor | Self::Teacher)
    }
}

/// A single sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: Icon,
}

/// Feature menu entry, tagged by where it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    /// Present for every role.
    Base(NavItem),
    /// Inserted because of the user's role.
    RoleSpecific(NavItem),
}

impl MenuEntry {
    pub fn item(&self) -> &NavItem {
        match self {
            Self::Base(item) | Self::RoleSpecific(item) => item,
        }
    }
}

const DASHBOARD: NavItem = NavItem { label: "Dashboard", path: "/dashboard", icon: Icon::Home };
const COURSES: NavItem = NavItem { label: "Courses", path: "/courses", icon: Icon::BookOpen };
const PROJECTS: NavItem = NavItem { label: "Projects", path: "/projects", icon: Icon::Briefcase };
const CALENDAR: NavItem = NavItem { label: "Calendar", path: "/calendar", icon: Icon::Calendar };
const STUDENTS: NavItem = NavItem { label: "Students", path: "/students", icon: Icon::Users };
const CERTIFICATES: NavItem = NavItem { label: "Certificates", path: "/certificates", icon: Icon::Award };
const MY_LEARNING: NavItem = NavItem { label: "My Learning", path: "/my-learning", icon: Icon::GraduationCap };
const SETTINGS: NavItem = NavItem { label: "Settings", path: "/settings", icon: Icon::Settings };

/// Build the ordered feature menu for `role`.
///
/// Staff roles get Students and Certificates after Courses; students get
/// My Learning in the same slot. Settings always closes the list.
pub fn role_nav_items(role: &Role) -> Vec<MenuEntry> {
    let mut items = vec![
        MenuEntry::Base(DASHBOARD),
        MenuEntry::Base(COURSES),
        MenuEntry::Base(PROJECTS),
        MenuEntry::Base(CALENDAR),
    ];

    if role.is_staff() {
        items.insert(2, MenuEntry::RoleSpecific(STUDENTS));
        items.insert(3, MenuEntry::RoleSpecific(CERTIFICATES));
    }
    if *role == Role::Student {
        items.insert(2, MenuEntry::RoleSpecific(MY_LEARNING));
    }

    items.push(MenuEntry::Base(SETTINGS));
    items
}

/// Whether `path` should be highlighted for the current `pathname`.
///
/// Matches exactly, or as a segment prefix once a single trailing slash is
/// stripped from `path`: `/courses` is active for `/courses/123` but not for
/// `/course-archive`.
pub fn is_active(pathname: &str, path: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    if pathname == path {
        return true;
    }
    let normalized = path.strip_suffix('/').unwrap_or(path);
    pathname
        .strip_prefix(normalized)
        .is_some_and(|rest| rest.starts_with('/'))
}
