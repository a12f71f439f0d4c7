//! Smooth scrolling for same-page anchor links. Only anchors whose target
//! actually exists are intercepted; everything else keeps default navigation.

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;

pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;
/// Keeps the fixed header from covering the scroll target.
pub const HEADER_OFFSET: f64 = 80.0;

/// Placeholder anchors that never navigate anywhere.
pub fn is_placeholder_anchor(href: &str) -> bool {
    matches!(href, "#" | "#!")
}

pub fn init() {
    dom::for_each_selected(ANCHOR_SELECTOR, |anchor| {
        let clicked = anchor.clone();
        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(href) = clicked.get_attribute("href") else {
                    return;
                };
                if is_placeholder_anchor(&href) {
                    return;
                }
                let Some(document) = dom::document() else {
                    return;
                };
                let Ok(Some(target)) = document.query_selector(&href) else {
                    return;
                };
                let Ok(target) = target.dyn_into::<HtmlElement>() else {
                    return;
                };
                event.prevent_default();
                let Some(window) = dom::window() else {
                    return;
                };
                let options = ScrollToOptions::new();
                options.set_top(f64::from(target.offset_top()) - HEADER_OFFSET);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            },
        )
        .forget();
    });
}
