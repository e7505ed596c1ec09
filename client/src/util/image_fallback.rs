//! One-shot image fallback for carousel tiles.
//!
//! ERROR HANDLING
//! ==============
//! A failed load swaps in a fixed placeholder once. A guard flag keeps a
//! broken placeholder from triggering another swap, so there is no retry and
//! nothing is reported.

#[cfg(test)]
#[path = "image_fallback_test.rs"]
mod image_fallback_test;

/// Placeholder shown when a tile image fails to load.
pub const FALLBACK_IMAGE_PATH: &str = "/images/error/fallback.png";

/// Current source of an image plus whether the fallback has been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSource {
    src: String,
    fallback_applied: bool,
}

impl ImageSource {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into(), fallback_applied: false }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn fallback_applied(&self) -> bool {
        self.fallback_applied
    }

    /// Handle a load error. Returns `true` when the source changed.
    pub fn on_error(&mut self) -> bool {
        if self.fallback_applied {
            return false;
        }
        self.fallback_applied = true;
        FALLBACK_IMAGE_PATH.clone_into(&mut self.src);
        true
    }
}
