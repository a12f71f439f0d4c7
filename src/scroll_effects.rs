//! Scroll-bound decorations: hero parallax, navbar state and the back-to-top
//! button. Each binds its own window scroll listener and recomputes from the
//! current scroll position on every event, with no throttling.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom;

pub const HERO_SELECTOR: &str = r#"[style*="background-image"]"#;
pub const NAVBAR_SELECTOR: &str = ".navbar-clone";
pub const SCROLL_TOP_SELECTOR: &str = ".btn-scroll-top";
pub const NAVBAR_SCROLLED_CLASS: &str = "scrolled";

pub const PARALLAX_RATE: f64 = 0.5;
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Vertical hero offset for the current scroll position. None once the page
/// has scrolled past the first viewport; the transform is then left as-is.
pub fn parallax_offset(scrolled: f64, viewport_height: f64) -> Option<f64> {
    (scrolled < viewport_height).then(|| scrolled * PARALLAX_RATE)
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

pub fn apply_parallax(hero: &HtmlElement, scrolled: f64, viewport_height: f64) {
    if let Some(offset) = parallax_offset(scrolled, viewport_height) {
        let _ = hero
            .style()
            .set_property("transform", &format!("translateY({offset}px)"));
    }
}

pub fn apply_navbar_state(navbar: &Element, scroll_y: f64) {
    let classes = navbar.class_list();
    if navbar_scrolled(scroll_y) {
        let _ = classes.add_1(NAVBAR_SCROLLED_CLASS);
    } else {
        let _ = classes.remove_1(NAVBAR_SCROLLED_CLASS);
    }
}

pub fn apply_scroll_top_state(button: &HtmlElement, scroll_y: f64) {
    let style = button.style();
    if scroll_top_visible(scroll_y) {
        let _ = style.set_property("opacity", "1");
        let _ = style.set_property("visibility", "visible");
    } else {
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("visibility", "hidden");
    }
}

pub fn init_parallax() {
    let Some(window) = dom::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Ok(Some(element)) = document.query_selector(HERO_SELECTOR) else {
        return;
    };
    let Ok(hero) = element.dyn_into::<HtmlElement>() else {
        return;
    };
    let scroll_window = window.clone();
    EventListener::new(&window, "scroll", move |_| {
        let scrolled = scroll_window.page_y_offset().unwrap_or(0.0);
        let viewport_height = scroll_window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        apply_parallax(&hero, scrolled, viewport_height);
    })
    .forget();
}

pub fn init_navbar() {
    let Some(window) = dom::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Ok(Some(navbar)) = document.query_selector(NAVBAR_SELECTOR) else {
        return;
    };
    let scroll_window = window.clone();
    EventListener::new(&window, "scroll", move |_| {
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
        apply_navbar_state(&navbar, scroll_y);
    })
    .forget();
}

/// The button is re-queried on every scroll event, so one added after page
/// load still picks up the behavior.
pub fn init_scroll_top() {
    let Some(window) = dom::window() else {
        return;
    };
    let scroll_window = window.clone();
    EventListener::new(&window, "scroll", move |_| {
        let Some(document) = scroll_window.document() else {
            return;
        };
        let Ok(Some(element)) = document.query_selector(SCROLL_TOP_SELECTOR) else {
            return;
        };
        let Ok(button) = element.dyn_into::<HtmlElement>() else {
            return;
        };
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
        apply_scroll_top_state(&button, scroll_y);
    })
    .forget();
}
