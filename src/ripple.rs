//! Click ripples on buttons. Each click synthesizes a circle centered on the
//! click point; cleanup is a fixed 600 ms timer, not an animation-end event,
//! so a ripple on a removed button still cleans up harmlessly.

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::dom;

pub const BUTTON_SELECTOR: &str = ".btn";
pub const RIPPLE_LIFETIME_MS: u32 = 600;
pub const RIPPLE_KEYFRAMES_ID: &str = "ripple-keyframes";

const RIPPLE_KEYFRAMES_CSS: &str = "\
@keyframes ripple {
    to {
        transform: scale(4);
        opacity: 0;
    }
}";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    /// Diameter: the larger of the button's width and height.
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

/// Positions the ripple so its center sits at the click point.
pub fn ripple_geometry(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
    width: f64,
    height: f64,
) -> RippleGeometry {
    let size = width.max(height);
    RippleGeometry {
        size,
        x: client_x - rect_left - size / 2.0,
        y: client_y - rect_top - size / 2.0,
    }
}

pub fn ripple_css(geometry: &RippleGeometry) -> String {
    format!(
        "position: absolute; width: {size}px; height: {size}px; border-radius: 50%; \
         background: rgba(255, 255, 255, 0.5); left: {x}px; top: {y}px; \
         transform: scale(0); animation: ripple 0.6s ease-out; pointer-events: none;",
        size = geometry.size,
        x = geometry.x,
        y = geometry.y,
    )
}

/// Exposed so tests can trigger a ripple without synthesizing click events.
pub fn spawn_ripple(button: &HtmlElement, event: &MouseEvent) {
    let Some(document) = dom::document() else {
        return;
    };
    let Ok(ripple) = document.create_element("span") else {
        return;
    };
    let Ok(ripple) = ripple.dyn_into::<HtmlElement>() else {
        return;
    };
    let rect = button.get_bounding_client_rect();
    let geometry = ripple_geometry(
        f64::from(event.client_x()),
        f64::from(event.client_y()),
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
    );
    ripple.style().set_css_text(&ripple_css(&geometry));

    let host_style = button.style();
    let _ = host_style.set_property("position", "relative");
    let _ = host_style.set_property("overflow", "hidden");
    if button.append_child(&ripple).is_err() {
        return;
    }
    Timeout::new(RIPPLE_LIFETIME_MS, move || ripple.remove()).forget();
}

pub fn init() {
    dom::inject_style_once(RIPPLE_KEYFRAMES_ID, RIPPLE_KEYFRAMES_CSS);
    dom::for_each_selected(BUTTON_SELECTOR, |element| {
        let Ok(button) = element.dyn_into::<HtmlElement>() else {
            return;
        };
        let clicked = button.clone();
        EventListener::new(&button, "click", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                spawn_ripple(&clicked, event);
            }
        })
        .forget();
    });
}
