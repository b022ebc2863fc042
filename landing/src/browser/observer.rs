// Section visibility tracking for menu highlighting

use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of a section that must be on screen to count as current.
const VISIBLE_RATIO: f64 = 0.5;

/// Call `on_visible` with the `data-section` id of every section that
/// becomes at least half visible.
pub fn observe_sections(on_visible: impl Fn(String) + 'static) -> Result<usize, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if let Some(id) = entry.target().get_attribute("data-section") {
                    on_visible(id);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBLE_RATIO));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let sections = document.query_selector_all(".section[data-section]")?;
    let mut observed = 0;
    for i in 0..sections.length() {
        if let Some(section) = sections.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&section);
            observed += 1;
        }
    }

    callback.forget();
    Ok(observed)
}
