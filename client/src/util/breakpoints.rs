//! Viewport breakpoints shared by the landing widgets.

#[cfg(test)]
#[path = "breakpoints_test.rs"]
mod breakpoints_test;

/// Minimum viewport width treated as a large screen.
pub const LARGE_SCREEN_MIN_WIDTH: f64 = 1024.0;

/// Carousel breakpoints as `(min_width, slides_per_view)`, ascending.
pub const SLIDES_PER_VIEW_BREAKPOINTS: [(f64, usize); 6] = [
    (0.0, 2),
    (480.0, 3),
    (640.0, 4),
    (768.0, 6),
    (1024.0, 8),
    (1280.0, 10),
];

pub fn is_large_screen(width: f64) -> bool {
    width >= LARGE_SCREEN_MIN_WIDTH
}

/// Number of carousel tiles visible at `width`.
pub fn slides_per_view(width: f64) -> usize {
    SLIDES_PER_VIEW_BREAKPOINTS
        .iter()
        .rev()
        .find(|(min_width, _)| width >= *min_width)
        .map_or(SLIDES_PER_VIEW_BREAKPOINTS[0].1, |(_, count)| *count)
}
