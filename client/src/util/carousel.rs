//! Looping autoplay index for the logo carousel.
//!
//! DESIGN
//! ======
//! The track renders the slide list twice. Advancing walks into the duplicate
//! copy, and once that transition has finished `settle` jumps back to the
//! matching original slide with animation disabled, so the loop never shows a
//! rewind.
//!
//! Every pause or resume bumps a generation counter. An autoplay run carries
//! the generation it started under and stops once that goes stale, so a
//! resume always waits a full delay before the next slide.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Pause between slide transitions.
pub const AUTOPLAY_DELAY_MS: u32 = 1800;
/// Duration of one slide transition.
pub const TRANSITION_MS: u32 = 700;
/// Wait between advances once running: one transition plus one pause.
pub const AUTOPLAY_PERIOD_MS: u32 = AUTOPLAY_DELAY_MS + TRANSITION_MS;
/// Gap between tiles in pixels.
pub const SPACE_BETWEEN_PX: u32 = 28;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    index: usize,
    animate: bool,
    paused: bool,
    generation: u64,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0, animate: true, paused: false, generation: 0 }
    }

    /// Position of the leading slide within the doubled track.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the next transform change should be animated.
    pub fn animate(&self) -> bool {
        self.animate
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Current autoplay generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Pause or resume autoplay. A change of state starts a new generation;
    /// returns whether the state changed.
    pub fn set_paused(&mut self, paused: bool) -> bool {
        if self.paused == paused {
            return false;
        }
        self.paused = paused;
        self.generation = self.generation.wrapping_add(1);
        true
    }

    /// Whether an autoplay run started under `generation` should keep going.
    pub fn is_current(&self, generation: u64) -> bool {
        !self.paused && self.generation == generation
    }

    /// Autoplay tick from a run started under `generation`. Returns `true` if
    /// the carousel moved.
    pub fn tick(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) || self.len < 2 {
            return false;
        }
        self.advance();
        true
    }

    /// Move one slide forward, wrapping through the duplicate copy.
    pub fn advance(&mut self) {
        if self.len == 0 {
            return;
        }
        if self.index >= self.len {
            self.index -= self.len;
        }
        self.index += 1;
        self.animate = true;
    }

    /// Called when a transition ends. Snaps back from the duplicate copy.
    pub fn settle(&mut self) {
        if self.len > 0 && self.index >= self.len {
            self.index -= self.len;
            self.animate = false;
        }
    }

    /// Logical slide currently leading the view.
    pub fn active_slide(&self) -> usize {
        if self.len == 0 { 0 } else { self.index % self.len }
    }
}

/// Wait before the next autoplay advance. The first advance of a run comes
/// after the bare delay; later ones also wait out the preceding transition.
pub fn autoplay_wait_ms(advances_in_run: usize) -> u32 {
    if advances_in_run == 0 { AUTOPLAY_DELAY_MS } else { AUTOPLAY_PERIOD_MS }
}

/// Whether a `transitionend` was raised by the listening element itself
/// rather than bubbled up from a child.
pub fn is_own_transition<T: PartialEq>(target: Option<T>, current_target: Option<T>) -> bool {
    target.is_some() && target == current_target
}

/// CSS `transform` for the track given the leading slide and tiles per view.
pub fn track_transform(index: usize, slides_per_view: usize) -> String {
    let per_view = slides_per_view.max(1);
    format!(
        "translateX(calc(-{index} * ((100% + {SPACE_BETWEEN_PX}px) / {per_view})))"
    )
}

/// CSS `transition` for the track.
pub fn track_transition(animate: bool) -> String {
    if animate { format!("transform {TRANSITION_MS}ms ease") } else { "none".to_owned() }
}

/// Width of one tile slot, accounting for the gaps inside the viewport.
pub fn slide_width(slides_per_view: usize) -> String {
    let per_view = slides_per_view.max(1);
    let gaps = (per_view - 1) * SPACE_BETWEEN_PX as usize;
    format!("calc((100% - {gaps}px) / {per_view})")
}
