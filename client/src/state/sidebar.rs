//! Mobile sidebar open/closed state.
//!
//! DESIGN
//! ======
//! Kept separate from auth so the header toggle and the sidebar panel can share
//! it without touching session data.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub mobile_open: bool,
}

impl SidebarState {
    pub fn toggle(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    /// Close after a navigation click. No-op when already closed.
    pub fn close_after_navigation(&mut self) {
        if self.mobile_open {
            self.toggle();
        }
    }
}
