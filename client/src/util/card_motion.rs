//! Pose and transition math for the landing promo cards.
//!
//! Cards rest hidden and slightly shrunk, spring into place once visible, and
//! lean by their tilt hint on large screens only. The component renders the
//! resulting pose as inline CSS so the browser drives the interpolation.

#[cfg(test)]
#[path = "card_motion_test.rs"]
mod card_motion_test;

/// Rotation applied to tilted cards once in view, in degrees.
pub const TILT_DEGREES: f64 = 10.0;
/// Extra lean added while hovered, in degrees.
pub const HOVER_TILT_DEGREES: f64 = 2.0;
pub const HIDDEN_SCALE: f64 = 0.95;
pub const HOVER_SCALE: f64 = 1.02;
/// Stagger between consecutive cards entering view, in seconds.
pub const STAGGER_SECS: f64 = 0.1;
pub const HOVER_TRANSITION_SECS: f64 = 0.2;
pub const SPRING_STIFFNESS: f64 = 300.0;
pub const SPRING_DAMPING: f64 = 10.0;
/// Overshooting curve standing in for the underdamped spring.
pub const SPRING_EASING: &str = "cubic-bezier(0.34, 1.56, 0.64, 1)";

/// Presentation-only lean direction for a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tilt {
    Left,
    Right,
    #[default]
    None,
}

impl Tilt {
    /// Sign of the lean: -1 for left, +1 for right, 0 for none.
    fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
            Self::None => 0.0,
        }
    }
}

/// Rendered transform and opacity of a card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    pub rotate_deg: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl CardPose {
    /// Initial pose before the card has ever been seen.
    pub const HIDDEN: Self = Self { rotate_deg: 0.0, scale: HIDDEN_SCALE, opacity: 0.0 };
}

/// Rotation the card settles to while in view.
pub fn target_rotation(large_screen: bool, tilt: Tilt) -> f64 {
    if large_screen { TILT_DEGREES * tilt.sign() } else { 0.0 }
}

/// Resolve the pose for the current visibility, hover and viewport state.
pub fn card_pose(in_view: bool, hovered: bool, large_screen: bool, tilt: Tilt) -> CardPose {
    let target = target_rotation(large_screen, tilt);
    let mut pose = if in_view {
        CardPose { rotate_deg: target, scale: 1.0, opacity: 1.0 }
    } else {
        CardPose::HIDDEN
    };
    if hovered {
        pose.scale = HOVER_SCALE;
        pose.rotate_deg = if large_screen { target + HOVER_TILT_DEGREES * tilt.sign() } else { 0.0 };
    }
    pose
}

/// Approximate settling time of a unit-mass damped spring: four time
/// constants of the decay envelope `exp(-damping / 2 * t)`.
pub fn spring_settle_secs(damping: f64) -> f64 {
    if damping <= 0.0 {
        return 0.0;
    }
    4.0 / (damping / 2.0)
}

/// CSS `transition` value for the current state.
pub fn card_transition(in_view: bool, hovered: bool, index: usize) -> String {
    if hovered {
        return format!(
            "transform {HOVER_TRANSITION_SECS}s ease-out, opacity {HOVER_TRANSITION_SECS}s ease-out"
        );
    }
    let duration = spring_settle_secs(SPRING_DAMPING);
    #[allow(clippy::cast_precision_loss)]
    let delay = if in_view { index as f64 * STAGGER_SECS } else { 0.0 };
    format!(
        "transform {duration}s {SPRING_EASING} {delay:.1}s, opacity {duration}s {SPRING_EASING} {delay:.1}s"
    )
}

/// Inline style for the animated card wrapper.
pub fn card_style(pose: CardPose, transition: &str) -> String {
    format!(
        "transform: rotate({}deg) scale({}); opacity: {}; transition: {transition};",
        pose.rotate_deg, pose.scale, pose.opacity
    )
}
