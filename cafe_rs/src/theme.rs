//! Light/dark theme preference.
//!
//! The page keeps a single persisted value under [`THEME_STORAGE_KEY`].
//! Storage is abstracted behind [`PreferenceStore`] so the browser can back it
//! with `localStorage` while tests use [`MemoryStore`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Key the theme is persisted under.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Failure writing a preference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("preference store unavailable: {0}")]
pub struct StoreError(pub String);

/// Key/value persistence for user preferences.
pub trait PreferenceStore {
    /// Stored value for `key`, if any.
    fn read(&self, key: &str) -> Option<String>;
    /// Persist `value` under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Page color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Default scheme.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl Theme {
    /// Value written to `data-theme` and to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon shown on the toggle button: the theme you would switch to.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fa-moon",
            Theme::Dark => "fa-sun",
        }
    }

    /// Stored preference, or [`Theme::Light`] when missing or unrecognized.
    pub fn load(store: &impl PreferenceStore) -> Self {
        match store.read(THEME_STORAGE_KEY) {
            None => Theme::default(),
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "unknown stored theme, using light");
                Theme::default()
            }),
        }
    }

    /// Persist this theme. Failures are logged; the page keeps working.
    pub fn persist(self, store: &mut impl PreferenceStore) {
        if let Err(e) = store.write(THEME_STORAGE_KEY, self.as_str()) {
            warn!(theme = self.as_str(), error = %e, "theme not persisted");
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme `{other}`")),
        }
    }
}

/// In-memory [`PreferenceStore`].
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    /// Store that rejects writes, like a browser with storage disabled.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Seed a value.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError("read-only".into()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
