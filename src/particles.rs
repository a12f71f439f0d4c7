//! Floating-particle backdrop for the hero section. Injected once per page
//! load, guarded by marker ids on both the container and the keyframe block.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::dom;

pub const HERO_SELECTOR: &str = ".hero-section, .py-md-10";
pub const PARTICLE_COUNT: usize = 30;
pub const CONTAINER_ID: &str = "particles-js";
pub const PARTICLE_KEYFRAMES_ID: &str = "particle-keyframes";

const CONTAINER_CSS: &str = "position: absolute; width: 100%; height: 100%; top: 0; \
     left: 0; z-index: 0; pointer-events: none;";

const FLOAT_UP_CSS: &str = "\
@keyframes floatUp {
    0% {
        transform: translateY(0) translateX(0) scale(1);
        opacity: 0;
    }
    10% {
        opacity: 1;
    }
    90% {
        opacity: 1;
    }
    100% {
        transform: translateY(-100vh) translateX(50px) scale(0);
        opacity: 0;
    }
}";

pub fn splitmix64(mut value: u64) -> u64 {
    value = value.wrapping_add(0x9e3779b97f4a7c15);
    let mut z = value;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

pub fn rand_unit(seed: u64, salt: u64) -> f64 {
    let mixed = splitmix64(seed ^ salt);
    let top = mixed >> 11;
    top as f64 / ((1u64 << 53) as f64)
}

pub fn rand_range(seed: u64, salt: u64, min: f64, max: f64) -> f64 {
    min + (max - min) * rand_unit(seed, salt)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleParams {
    /// Diameter in px, 2..6.
    pub size: f64,
    /// Animation duration in seconds, 10..30.
    pub duration: f64,
    /// Animation delay in seconds, 0..5.
    pub delay: f64,
    /// Horizontal start position in percent, 0..100.
    pub start_x: f64,
    /// Horizontal drift in percent, -10..10. Feeds parameter generation only;
    /// the shared keyframe carries a fixed drift.
    pub drift: f64,
}

pub fn particle_params(seed: u64, index: usize) -> ParticleParams {
    let salt = (index as u64) * 8;
    ParticleParams {
        size: rand_range(seed, salt, 2.0, 6.0),
        duration: rand_range(seed, salt + 1, 10.0, 30.0),
        delay: rand_range(seed, salt + 2, 0.0, 5.0),
        start_x: rand_range(seed, salt + 3, 0.0, 100.0),
        drift: rand_range(seed, salt + 4, -10.0, 10.0),
    }
}

pub fn particle_css(params: &ParticleParams) -> String {
    format!(
        "position: absolute; width: {size}px; height: {size}px; \
         background: rgba(255, 255, 255, 0.3); border-radius: 50%; left: {start_x}%; \
         bottom: -10px; animation: floatUp {duration}s {delay}s infinite ease-in-out; \
         box-shadow: 0 0 10px rgba(255, 255, 255, 0.5);",
        size = params.size,
        start_x = params.start_x,
        duration = params.duration,
        delay = params.delay,
    )
}

pub fn init() {
    let Some(document) = dom::document() else {
        return;
    };
    let Ok(Some(hero)) = document.query_selector(HERO_SELECTOR) else {
        return;
    };
    let Ok(hero) = hero.dyn_into::<HtmlElement>() else {
        return;
    };
    if document.get_element_by_id(CONTAINER_ID).is_some() {
        return;
    }
    let Ok(container) = document.create_element("div") else {
        return;
    };
    container.set_id(CONTAINER_ID);
    let Ok(container) = container.dyn_into::<HtmlElement>() else {
        return;
    };
    container.style().set_css_text(CONTAINER_CSS);
    let _ = hero.style().set_property("position", "relative");
    if hero
        .insert_before(&container, hero.first_child().as_ref())
        .is_err()
    {
        return;
    }

    let seed = splitmix64(js_sys::Date::now() as u64);
    for index in 0..PARTICLE_COUNT {
        let Ok(particle) = document.create_element("div") else {
            continue;
        };
        let Ok(particle) = particle.dyn_into::<HtmlElement>() else {
            continue;
        };
        particle
            .style()
            .set_css_text(&particle_css(&particle_params(seed, index)));
        let _ = container.append_child(&particle);
    }

    dom::inject_style_once(PARTICLE_KEYFRAMES_ID, FLOAT_UP_CSS);
}
