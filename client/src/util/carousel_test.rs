use super::*;

#[test]
fn new_carousel_starts_at_first_slide() {
    let state = CarouselState::new(12);
    assert_eq!(state.index(), 0);
    assert!(state.animate());
    assert!(!state.paused());
}

#[test]
fn tick_advances_one_slide() {
    let mut state = CarouselState::new(3);
    assert!(state.tick(0));
    assert_eq!(state.index(), 1);
    assert_eq!(state.active_slide(), 1);
}

#[test]
fn paused_carousel_ignores_ticks() {
    let mut state = CarouselState::new(3);
    state.set_paused(true);
    assert!(!state.tick(state.generation()));
    assert_eq!(state.index(), 0);
}

#[test]
fn resume_starts_new_generation_and_stales_old_run() {
    let mut state = CarouselState::new(3);
    let before_hover = state.generation();
    state.set_paused(true);
    state.set_paused(false);

    assert_ne!(state.generation(), before_hover);
    assert!(!state.is_current(before_hover));
    assert!(!state.tick(before_hover));
    assert_eq!(state.index(), 0);

    let resumed = state.generation();
    assert!(state.tick(resumed));
    assert_eq!(state.index(), 1);
}

#[test]
fn repeated_set_paused_keeps_generation_and_reports_no_change() {
    let mut state = CarouselState::new(3);
    assert!(!state.set_paused(false));
    assert_eq!(state.generation(), 0);
    assert!(state.set_paused(true));
    assert!(!state.set_paused(true));
    assert_eq!(state.generation(), 1);
}

#[test]
fn first_advance_of_run_waits_bare_delay() {
    assert_eq!(autoplay_wait_ms(0), AUTOPLAY_DELAY_MS);
    assert_eq!(autoplay_wait_ms(1), AUTOPLAY_DELAY_MS + TRANSITION_MS);
    assert_eq!(autoplay_wait_ms(7), AUTOPLAY_PERIOD_MS);
}

#[test]
fn own_transition_requires_matching_target() {
    assert!(is_own_transition(Some("track"), Some("track")));
    assert!(!is_own_transition(Some("tile"), Some("track")));
    assert!(!is_own_transition::<&str>(None, None));
}

#[test]
fn single_slide_never_moves() {
    let mut state = CarouselState::new(1);
    assert!(!state.tick(0));
    assert_eq!(state.index(), 0);
}

#[test]
fn advancing_past_last_slide_enters_duplicate_then_settles() {
    let mut state = CarouselState::new(3);
    state.tick(0);
    state.tick(0);
    state.tick(0);
    assert_eq!(state.index(), 3);
    assert_eq!(state.active_slide(), 0);

    state.settle();
    assert_eq!(state.index(), 0);
    assert!(!state.animate());

    state.tick(0);
    assert_eq!(state.index(), 1);
    assert!(state.animate());
}

#[test]
fn settle_is_noop_inside_original_copy() {
    let mut state = CarouselState::new(3);
    state.tick(0);
    state.settle();
    assert_eq!(state.index(), 1);
    assert!(state.animate());
}

#[test]
fn advance_recovers_when_settle_was_missed() {
    let mut state = CarouselState::new(2);
    state.tick(0);
    state.tick(0);
    assert_eq!(state.index(), 2);
    state.tick(0);
    assert_eq!(state.index(), 1);
}

#[test]
fn track_styles_reflect_index_and_animation() {
    assert_eq!(track_transform(2, 4), "translateX(calc(-2 * ((100% + 28px) / 4)))");
    assert_eq!(track_transition(true), "transform 700ms ease");
    assert_eq!(track_transition(false), "none");
    assert_eq!(slide_width(4), "calc((100% - 84px) / 4)");
    assert_eq!(slide_width(0), "calc((100% - 0px) / 1)");
}
