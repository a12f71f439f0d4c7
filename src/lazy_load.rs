//! Lazy-image polish: lifted-card images stay blurred until their pixels have
//! actually arrived, then sharpen with a short filter transition.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use crate::dom;

pub const IMAGE_SELECTOR: &str = r#"img[loading="lazy"], img.card-lift"#;
pub const LOADED_CLASS: &str = "loaded";
pub const LAZY_STYLES_ID: &str = "lazy-load-styles";

const LAZY_STYLES_CSS: &str = "\
img.card-lift {
    filter: blur(0);
    transition: filter 0.3s ease-in-out;
}
img.card-lift:not(.loaded) {
    filter: blur(5px);
}";

pub fn init() {
    dom::for_each_selected(IMAGE_SELECTOR, |element| {
        let Ok(image) = element.dyn_into::<HtmlImageElement>() else {
            return;
        };
        if image.complete() {
            // Cache-resident images never fire a load event.
            let _ = image.class_list().add_1(LOADED_CLASS);
        } else {
            let loaded = image.clone();
            EventListener::once(&image, "load", move |_| {
                let _ = loaded.class_list().add_1(LOADED_CLASS);
            })
            .forget();
        }
    });
    dom::inject_style_once(LAZY_STYLES_ID, LAZY_STYLES_CSS);
}
