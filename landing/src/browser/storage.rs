// localStorage-backed preferences and document-level class/attribute helpers

use cafe::Theme;
use cafe::theme::{PreferenceStore, StoreError};
use tracing::debug;
use web_sys::Storage;

use super::js_error;

/// `window.localStorage`, if the browser allows it.
pub struct LocalStore(Option<Storage>);

impl LocalStore {
    pub fn open() -> Self {
        Self(web_sys::window().and_then(|w| w.local_storage().ok().flatten()))
    }
}

impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self
            .0
            .as_ref()
            .ok_or_else(|| StoreError("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError(js_error(key, &e)))
    }
}

/// Set `data-theme` on `<html>` and remember the choice.
pub fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    theme.persist(&mut LocalStore::open());
    debug!(%theme, "theme applied");
}

/// Add or remove a class on `<body>`.
pub fn set_body_class(class: &str, on: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.class_list().toggle_with_force(class, on);
    }
}
