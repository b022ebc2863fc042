// Browser bindings: DOM render target, setInterval scheduler, storage, observers

pub mod carousel;
mod observer;
mod slides;
mod storage;
mod timer;

pub use observer::observe_sections;
pub use storage::{LocalStore, apply_theme, set_body_class};

use wasm_bindgen::JsValue;

/// Readable text for a thrown JS value.
pub(crate) fn js_error(context: &str, err: &JsValue) -> String {
    match err.as_string() {
        Some(msg) => format!("{context}: {msg}"),
        None => format!("{context}: {err:?}"),
    }
}
