use super::*;

#[test]
fn panel_is_translated_off_screen_when_closed() {
    let class = panel_class(false);
    assert!(class.contains("translate-x-full"));
    assert!(!class.contains("translate-x-0"));
}

#[test]
fn panel_slides_in_when_open() {
    let class = panel_class(true);
    assert!(class.contains("translate-x-0"));
    assert!(!class.contains("translate-x-full"));
    assert!(class.ends_with("lg:hidden"));
}

#[test]
fn active_link_is_highlighted() {
    assert!(link_class(true).contains("border-blue-500"));
    assert!(!link_class(false).contains("border-blue-500"));
}

#[test]
fn first_header_tab_is_selected() {
    assert!(tab_class(true).contains("bg-gray-900"));
    assert!(!tab_class(false).contains("bg-gray-900"));
}

#[test]
fn features_heading_names_role() {
    assert_eq!(features_heading(&Role::Instructor), "Instructor Features");
    assert_eq!(features_heading(&Role::Other("Guest".to_owned())), "Guest Features");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn logout_clears_session_outside_browser() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState {
            user: Some(crate::state::auth::CurrentUser {
                id: "u1".to_owned(),
                email: "ada@example.com".to_owned(),
                name: "Ada".to_owned(),
                role: "Admin".to_owned(),
            }),
            token: Some("t0k".to_owned()),
        });
        logout(auth);
        assert_eq!(auth.get_untracked(), AuthState::default());
    });
}
