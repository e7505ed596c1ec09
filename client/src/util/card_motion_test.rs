use super::*;

// =============================================================
// Rotation by viewport
// =============================================================

#[test]
fn small_screens_never_rotate() {
    for tilt in [Tilt::Left, Tilt::Right, Tilt::None] {
        assert_eq!(target_rotation(false, tilt), 0.0);
        assert_eq!(card_pose(true, false, false, tilt).rotate_deg, 0.0);
        assert_eq!(card_pose(true, true, false, tilt).rotate_deg, 0.0);
    }
}

#[test]
fn large_screens_rotate_by_tilt_hint() {
    assert_eq!(target_rotation(true, Tilt::Left), -10.0);
    assert_eq!(target_rotation(true, Tilt::Right), 10.0);
    assert_eq!(target_rotation(true, Tilt::None), 0.0);
}

// =============================================================
// Visibility and hover poses
// =============================================================

#[test]
fn out_of_view_pose_is_hidden_and_upright() {
    assert_eq!(card_pose(false, false, true, Tilt::Right), CardPose::HIDDEN);
}

#[test]
fn in_view_pose_is_full_size_and_opaque() {
    let pose = card_pose(true, false, true, Tilt::Left);
    assert_eq!(pose, CardPose { rotate_deg: -10.0, scale: 1.0, opacity: 1.0 });
}

#[test]
fn hover_adds_lean_in_tilt_direction() {
    assert_eq!(card_pose(true, true, true, Tilt::Left).rotate_deg, -12.0);
    assert_eq!(card_pose(true, true, true, Tilt::Right).rotate_deg, 12.0);
    assert_eq!(card_pose(true, true, true, Tilt::None).rotate_deg, 0.0);
    assert_eq!(card_pose(true, true, true, Tilt::None).scale, HOVER_SCALE);
}

#[test]
fn tilt_defaults_to_none() {
    assert_eq!(Tilt::default(), Tilt::None);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn spring_settle_time_tracks_damping() {
    assert!((spring_settle_secs(SPRING_DAMPING) - 0.8).abs() < f64::EPSILON);
    assert_eq!(spring_settle_secs(0.0), 0.0);
}

#[test]
fn entrance_delay_staggers_by_index_only_in_view() {
    assert!(card_transition(true, false, 3).contains(" 0.3s"));
    assert!(card_transition(false, false, 3).contains(" 0.0s"));
}

#[test]
fn hover_transition_is_short() {
    let transition = card_transition(true, true, 5);
    assert!(transition.starts_with("transform 0.2s"));
}

#[test]
fn card_style_renders_pose() {
    let style = card_style(CardPose { rotate_deg: 10.0, scale: 1.0, opacity: 1.0 }, "none");
    assert_eq!(style, "transform: rotate(10deg) scale(1); opacity: 1; transition: none;");
}
