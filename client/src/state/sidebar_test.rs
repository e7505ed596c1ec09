use super::*;

#[test]
fn sidebar_starts_closed() {
    assert!(!SidebarState::default().mobile_open);
}

#[test]
fn toggle_flips_open_flag() {
    let mut state = SidebarState::default();
    state.toggle();
    assert!(state.mobile_open);
    state.toggle();
    assert!(!state.mobile_open);
}

#[test]
fn close_after_navigation_closes_open_sidebar() {
    let mut state = SidebarState { mobile_open: true };
    state.close_after_navigation();
    assert!(!state.mobile_open);
}

#[test]
fn close_after_navigation_leaves_closed_sidebar_closed() {
    let mut state = SidebarState::default();
    state.close_after_navigation();
    assert!(!state.mobile_open);
}
