//! 3D tilt for product cards: the card's image leans toward the pointer and
//! snaps back to identity when the pointer leaves.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use crate::dom;

pub const CARD_SELECTOR: &str = r#".col[data-cues="zoomIn"]"#;
/// Larger divisor, gentler tilt.
pub const TILT_DIVISOR: f64 = 20.0;
pub const IDENTITY_TRANSFORM: &str = "perspective(1000px) rotateX(0) rotateY(0) scale(1)";

/// Transform for a pointer at (x, y) within a card of the given size.
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let rotate_x = (y - center_y) / TILT_DIVISOR;
    let rotate_y = (center_x - x) / TILT_DIVISOR;
    format!("perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) scale(1.05)")
}

fn card_image(card: &Element) -> Option<HtmlElement> {
    card.query_selector("img").ok()??.dyn_into::<HtmlElement>().ok()
}

pub fn init() {
    dom::for_each_selected(CARD_SELECTOR, |card| {
        let moved_over = card.clone();
        EventListener::new(&card, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let Some(image) = card_image(&moved_over) else {
                return;
            };
            let rect = moved_over.get_bounding_client_rect();
            let x = f64::from(event.client_x()) - rect.left();
            let y = f64::from(event.client_y()) - rect.top();
            let _ = image
                .style()
                .set_property("transform", &tilt_transform(x, y, rect.width(), rect.height()));
        })
        .forget();

        let left = card.clone();
        EventListener::new(&card, "mouseleave", move |_| {
            let Some(image) = card_image(&left) else {
                return;
            };
            let _ = image.style().set_property("transform", IDENTITY_TRANSFORM);
        })
        .forget();
    });
}
