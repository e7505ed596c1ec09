use super::*;

fn user(role: &str) -> CurrentUser {
    CurrentUser {
        id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        name: "Ada".to_owned(),
        role: role.to_owned(),
    }
}

#[test]
fn auth_state_default_has_no_user_or_token() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

#[test]
fn role_defaults_to_student_without_user() {
    assert_eq!(AuthState::default().role(), "Student");
}

#[test]
fn role_reads_from_current_user() {
    let state = AuthState { user: Some(user("Instructor")), token: None };
    assert_eq!(state.role(), "Instructor");
}

#[test]
fn role_defaults_to_student_for_blank_role() {
    let state = AuthState { user: Some(user("")), token: Some("t0k".to_owned()) };
    assert_eq!(state.role(), "Student");

    let role = crate::util::nav::Role::parse(state.role());
    let labels: Vec<_> = crate::util::nav::role_nav_items(&role)
        .iter()
        .map(|entry| entry.item().label)
        .collect();
    assert!(labels.contains(&"My Learning"));
}

#[test]
fn clear_drops_user_and_token() {
    let mut state = AuthState { user: Some(user("Admin")), token: Some("t0k".to_owned()) };
    state.clear();
    assert_eq!(state, AuthState::default());
}

#[test]
fn current_user_deserializes_from_stored_json() {
    let raw = r#"{"id":"u1","email":"ada@example.com","name":"Ada","role":"Teacher"}"#;
    let parsed: CurrentUser = serde_json::from_str(raw).expect("stored user should parse");
    assert_eq!(parsed, user("Teacher"));
}
