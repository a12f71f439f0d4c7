//! Page-ready wiring. Runs the initializer pass exactly once per page load,
//! deferring behind `DOMContentLoaded` when the document is still parsing.

use std::cell::Cell;

use gloo::events::EventListener;

use crate::{
    counters, dom, lazy_load, particles, reveal, ripple, scroll_effects, smooth_scroll, tilt,
    trail,
};

thread_local! {
    static BOOTED: Cell<bool> = Cell::new(false);
}

pub fn run() {
    let Some(document) = dom::document() else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", move |_| init_all()).forget();
    } else {
        init_all();
    }
}

/// Fixed, non-interacting initializer order. Each feature checks for its own
/// markup and silently no-ops when absent.
fn init_all() {
    let already_booted = BOOTED.with(|flag| {
        if flag.get() {
            true
        } else {
            flag.set(true);
            false
        }
    });
    if already_booted {
        return;
    }

    scroll_effects::init_parallax();
    smooth_scroll::init();
    scroll_effects::init_navbar();
    reveal::init();
    particles::init();
    tilt::init();
    ripple::init();
    counters::init();
    lazy_load::init();
    scroll_effects::init_scroll_top();
    trail::init();

    gloo::console::log!("Fabri Ventanas custom enhancements loaded");
    gloo::console::log!(
        "features: parallax, smooth scroll, particles, tilt, ripple, counters, lazy images"
    );
}
