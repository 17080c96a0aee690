use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_menu_closed_and_unscrolled() {
    let state = UiState::default();
    assert!(!state.mobile_menu_open);
    assert!(!state.scrolled);
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn toggle_mobile_menu_flips() {
    let mut state = UiState::default();
    state.toggle_mobile_menu();
    assert!(state.mobile_menu_open);
    state.toggle_mobile_menu();
    assert!(!state.mobile_menu_open);
}

#[test]
fn close_mobile_menu_is_idempotent() {
    let mut state = UiState { mobile_menu_open: true, scrolled: false };
    state.close_mobile_menu();
    state.close_mobile_menu();
    assert!(!state.mobile_menu_open);
}

// =============================================================
// Scroll threshold
// =============================================================

#[test]
fn is_scrolled_is_strictly_past_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(SCROLL_THRESHOLD));
    assert!(is_scrolled(SCROLL_THRESHOLD + 0.5));
}

#[test]
fn set_scroll_offset_reports_changes_only() {
    let mut state = UiState::default();
    assert!(!state.set_scroll_offset(10.0));
    assert!(state.set_scroll_offset(120.0));
    assert!(state.scrolled);
    assert!(!state.set_scroll_offset(300.0));
    assert!(state.set_scroll_offset(0.0));
    assert!(!state.scrolled);
}
