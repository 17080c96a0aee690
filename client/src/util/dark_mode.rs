//! Browser host for the theme store.
//!
//! Reads and writes the preference in `localStorage`, queries
//! `prefers-color-scheme`, and toggles the `dark` class on the `<html>`
//! element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR and native
//! paths no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
use crate::state::theme::STORAGE_KEY;
use crate::state::theme::{StorageError, ThemeHost, ThemeMode, ThemeStore};

/// Class added to the document root while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Theme store provided to the page through context.
pub type BrowserThemeStore = ThemeStore<BrowserThemeHost>;

/// [`ThemeHost`] backed by `window`. Stateless: every call looks the browser
/// objects up again, so it is cheap to copy into signals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserThemeHost;

impl ThemeHost for BrowserThemeHost {
    fn load(&self) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(STORAGE_KEY)
                .map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(STORAGE_KEY, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
            Err(StorageError::Unavailable)
        }
    }

    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn apply(&self, mode: ThemeMode) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            {
                let _ = el.class_list().toggle_with_force(DARK_CLASS, mode.is_dark());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = mode;
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}
