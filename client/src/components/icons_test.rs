use super::*;

#[test]
fn every_icon_has_at_least_one_path() {
    for icon in [
        Icon::Home,
        Icon::Users,
        Icon::Calendar,
        Icon::Settings,
        Icon::BookOpen,
        Icon::GraduationCap,
        Icon::Briefcase,
        Icon::Award,
        Icon::Globe,
        Icon::ChevronDown,
        Icon::LogOut,
        Icon::Menu,
    ] {
        assert!(!icon.paths().is_empty(), "{icon:?} has no paths");
        assert!(icon.paths().iter().all(|d| d.starts_with('M')));
    }
}
