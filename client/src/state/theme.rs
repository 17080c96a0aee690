//! Light/dark theme preference.
//!
//! DESIGN
//! ======
//! `ThemeStore` is the single writer of the preference. Every change, the
//! initial one included, is pushed through a `ThemeHost`, which applies the
//! document marker and persists the value. The browser host lives in
//! `util::dark_mode`; SSR starts from a detached store and tests plug in an
//! in-memory host.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures never surface to the page. The store logs them and keeps
//! the in-memory value for the rest of the session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "theme";

/// Displayed visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Value written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to read theme preference: {0}")]
    Read(String),
    #[error("failed to write theme preference: {0}")]
    Write(String),
}

/// Environment the theme store runs against.
pub trait ThemeHost {
    /// Read the persisted preference, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when storage cannot be reached.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persist `value` under [`STORAGE_KEY`].
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when storage cannot be reached or rejects the write.
    fn save(&self, value: &str) -> Result<(), StorageError>;

    /// Whether the system reports a dark color-scheme preference.
    fn prefers_dark(&self) -> bool;

    /// Reflect `mode` onto the document root.
    fn apply(&self, mode: ThemeMode);
}

/// Decide the starting mode from the persisted value and the system signal.
///
/// A present, non-empty stored value wins: it selects dark iff it equals
/// `"dark"`. Otherwise the system preference decides.
pub fn resolve_initial(stored: Option<&str>, prefers_dark: impl FnOnce() -> bool) -> ThemeMode {
    match stored {
        Some(raw) if !raw.is_empty() => ThemeMode::from_dark(raw == ThemeMode::Dark.as_str()),
        _ => ThemeMode::from_dark(prefers_dark()),
    }
}

/// Page-wide theme preference.
#[derive(Clone, Debug)]
pub struct ThemeStore<H> {
    host: H,
    mode: ThemeMode,
    persisted: bool,
}

impl<H: ThemeHost> ThemeStore<H> {
    /// Read the starting preference from `host`, then apply and persist it.
    pub fn initialize(host: H) -> Self {
        let stored = host.load().unwrap_or_else(|e| {
            log::warn!("theme preference unreadable, using system preference: {e}");
            None
        });
        let mode = resolve_initial(stored.as_deref(), || host.prefers_dark());
        let mut store = Self { host, mode, persisted: false };
        store.sync();
        store
    }

    /// Light store that has not touched its host. Rendered on the server
    /// until the browser replaces it with [`ThemeStore::initialize`].
    pub fn detached(host: H) -> Self {
        Self { host, mode: ThemeMode::Light, persisted: false }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// `false` when the last write did not reach storage, meaning the
    /// preference only lives for this session.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// Flip the preference. Returns the new `is_dark` value.
    pub fn toggle(&mut self) -> bool {
        self.mode = self.mode.toggled();
        self.sync();
        self.is_dark()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn sync(&mut self) {
        self.host.apply(self.mode);
        match self.host.save(self.mode.as_str()) {
            Ok(()) => self.persisted = true,
            Err(e) => {
                log::warn!("theme preference kept in memory only: {e}");
                self.persisted = false;
            }
        }
    }
}
