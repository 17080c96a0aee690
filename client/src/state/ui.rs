//! Local UI chrome state (header style, mobile menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the theme and contact models
//! so header controls can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Vertical scroll offset (px) past which the header switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// UI state for the fixed header.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub mobile_menu_open: bool,
    pub scrolled: bool,
}

impl UiState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Record the latest scroll offset. Returns whether the style changed.
    pub fn set_scroll_offset(&mut self, scroll_y: f64) -> bool {
        let scrolled = is_scrolled(scroll_y);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}
