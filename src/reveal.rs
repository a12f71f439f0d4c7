//! Scroll-triggered reveal engine. Product cards get their entrance class the
//! first time they cross the visibility threshold, then stop being watched,
//! so the transition happens at most once per page load.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom;

pub const REVEAL_CLASS: &str = "bounce-in";
pub const CARD_SELECTOR: &str =
    r#".col[id^="puerta"], .col[id^="ventana"], .col[id^="espejo"]"#;
/// Fraction of a card that must be visible before it reveals.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;
/// Shrinks the effective viewport so cards reveal slightly after entering it.
pub const VIEWPORT_MARGIN: &str = "0px 0px -100px 0px";

/// Visibility watcher seam. Production wraps the browser's
/// `IntersectionObserver`; tests substitute a deterministic fake.
pub trait ViewportObserver {
    fn watch(&self, element: &Element);
    fn unwatch(&self, element: &Element);
}

impl ViewportObserver for IntersectionObserver {
    fn watch(&self, element: &Element) {
        self.observe(element);
    }

    fn unwatch(&self, element: &Element) {
        self.unobserve(element);
    }
}

/// Marks `element` revealed, then stops watching it. Once unwatched, no
/// further visibility callbacks arrive, so the transition is irreversible.
pub fn reveal(element: &Element, observer: &dyn ViewportObserver) {
    let _ = element.class_list().add_1(REVEAL_CLASS);
    observer.unwatch(element);
}

pub fn init() {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    reveal(&entry.target(), &observer);
                }
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(VISIBILITY_THRESHOLD));
    options.set_root_margin(VIEWPORT_MARGIN);
    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();
    dom::for_each_selected(CARD_SELECTOR, |card| observer.watch(&card));
}
