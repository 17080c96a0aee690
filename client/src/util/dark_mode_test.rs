#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::theme::ThemeStore;

#[test]
fn load_is_empty_in_non_hydrate_tests() {
    assert_eq!(BrowserThemeHost.load(), Ok(None));
}

#[test]
fn save_reports_unavailable_storage() {
    assert_eq!(BrowserThemeHost.save("dark"), Err(StorageError::Unavailable));
}

#[test]
fn prefers_dark_is_false_without_browser() {
    assert!(!BrowserThemeHost.prefers_dark());
}

#[test]
fn apply_is_noop_but_callable() {
    BrowserThemeHost.apply(ThemeMode::Light);
    BrowserThemeHost.apply(ThemeMode::Dark);
}

#[test]
fn store_over_browser_host_stays_in_memory() {
    let mut store = ThemeStore::initialize(BrowserThemeHost);
    assert!(!store.is_dark());
    assert!(!store.is_persisted());
    assert!(store.toggle());
    assert!(!store.toggle());
}
