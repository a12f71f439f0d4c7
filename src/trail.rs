//! Subtle mouse trail: at most one fading dot per animation frame, each
//! removed on a fixed timer like the ripple nodes.

use std::cell::RefCell;

use gloo::events::EventListener;
use gloo::render::{AnimationFrame, request_animation_frame};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::dom;

pub const TRAIL_DOT_LIFETIME_MS: u32 = 1000;
pub const TRAIL_KEYFRAMES_ID: &str = "trail-keyframes";

const TRAIL_KEYFRAMES_CSS: &str = "\
@keyframes fadeOut {
    to {
        opacity: 0;
        transform: translate(-50%, -50%) scale(2);
    }
}";

thread_local! {
    // Also acts as the per-frame gate: while a frame is pending, further
    // mousemove events are ignored.
    static TRAIL_FRAME: RefCell<Option<AnimationFrame>> = RefCell::new(None);
}

pub fn trail_dot_css(x: f64, y: f64) -> String {
    format!(
        "position: fixed; width: 8px; height: 8px; \
         background: radial-gradient(circle, rgba(22, 54, 69, 0.3), transparent); \
         border-radius: 50%; pointer-events: none; left: {x}px; top: {y}px; \
         transform: translate(-50%, -50%); z-index: 9999; \
         animation: fadeOut 1s ease-out forwards;"
    )
}

/// Exposed so tests can spawn a dot without synthesizing pointer movement.
pub fn spawn_dot(x: f64, y: f64) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(dot) = document.create_element("div") else {
        return;
    };
    let Ok(dot) = dot.dyn_into::<HtmlElement>() else {
        return;
    };
    dot.style().set_css_text(&trail_dot_css(x, y));
    if body.append_child(&dot).is_err() {
        return;
    }
    Timeout::new(TRAIL_DOT_LIFETIME_MS, move || dot.remove()).forget();
}

pub fn init() {
    dom::inject_style_once(TRAIL_KEYFRAMES_ID, TRAIL_KEYFRAMES_CSS);
    let Some(document) = dom::document() else {
        return;
    };
    EventListener::new(&document, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let pending = TRAIL_FRAME.with(|slot| slot.borrow().is_some());
        if pending {
            return;
        }
        let x = f64::from(event.client_x());
        let y = f64::from(event.client_y());
        let handle = request_animation_frame(move |_| {
            TRAIL_FRAME.with(|slot| {
                slot.borrow_mut().take();
            });
            spawn_dot(x, y);
        });
        TRAIL_FRAME.with(|slot| *slot.borrow_mut() = Some(handle));
    })
    .forget();
}
