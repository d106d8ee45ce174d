// src/fade_in.rs
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const FADE_IN_CLASS: &str = "animate-fadeIn";

/// Adds `FADE_IN_CLASS` to observed elements the first time they scroll
/// into view. Disconnects on drop.
pub struct FadeInObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl FadeInObserver {
    pub fn observe(selector: &str, threshold: f64) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let _ = entry.target().class_list().add_1(FADE_IN_CLASS);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        let nodes = gloo_utils::document().query_selector_all(selector)?;
        let mut count = 0;
        for idx in 0..nodes.length() {
            if let Some(element) = nodes.item(idx).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&element);
                count += 1;
            }
        }
        log::debug!("Fade-in observing {} elements matching '{}'", count, selector);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for FadeInObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
