//! Counter animation: elements carrying `data-counter` count up from zero to
//! their target the first time they become visible. Each counter owns its own
//! visibility observer and its own animation-frame loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

use crate::dom;

pub const COUNTER_SELECTOR: &str = "[data-counter]";
pub const COUNTER_ATTR: &str = "data-counter";
pub const COUNT_DURATION_MS: f64 = 2000.0;
/// Nominal frame quantum the per-step increment is derived from.
pub const FRAME_INTERVAL_MS: f64 = 16.0;

/// Outcome of one animation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CounterFrame {
    /// Keep animating; show the floored running value.
    Continue { current: f64, display: i64 },
    /// Target reached (or was never ahead); show it exactly and stop.
    Done,
}

pub fn counter_increment(target: i64) -> f64 {
    target as f64 / (COUNT_DURATION_MS / FRAME_INTERVAL_MS)
}

/// Advances the running value by one increment. The check happens after the
/// advance, so non-positive targets finish on the very first step.
pub fn counter_step(current: f64, target: i64, increment: f64) -> CounterFrame {
    let next = current + increment;
    if next < target as f64 {
        CounterFrame::Continue {
            current: next,
            display: next.floor() as i64,
        }
    } else {
        CounterFrame::Done
    }
}

struct CounterRun {
    element: Element,
    target: i64,
    increment: f64,
    current: Cell<f64>,
    frame: RefCell<Option<AnimationFrame>>,
}

fn advance(run: Rc<CounterRun>) {
    match counter_step(run.current.get(), run.target, run.increment) {
        CounterFrame::Continue { current, display } => {
            run.current.set(current);
            run.element.set_text_content(Some(&display.to_string()));
            let next = Rc::clone(&run);
            let handle = request_animation_frame(move |_| {
                next.frame.borrow_mut().take();
                advance(Rc::clone(&next));
            });
            *run.frame.borrow_mut() = Some(handle);
        }
        CounterFrame::Done => {
            run.element.set_text_content(Some(&run.target.to_string()));
        }
    }
}

/// Starts counting immediately. Exposed so tests can skip the visibility
/// trigger.
pub fn start(element: Element, target: i64) {
    let run = Rc::new(CounterRun {
        increment: counter_increment(target),
        element,
        target,
        current: Cell::new(0.0),
        frame: RefCell::new(None),
    });
    advance(run);
}

fn observe_start(element: Element, target: i64) {
    let subject = element.clone();
    let trigger = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() else {
                return;
            };
            if entry.is_intersecting() {
                start(subject.clone(), target);
                observer.disconnect();
            }
        },
    );
    let Ok(observer) = IntersectionObserver::new(trigger.as_ref().unchecked_ref()) else {
        return;
    };
    trigger.forget();
    observer.observe(&element);
}

pub fn init() {
    dom::for_each_selected(COUNTER_SELECTOR, |element| {
        let Some(raw) = element.get_attribute(COUNTER_ATTR) else {
            return;
        };
        let Ok(target) = raw.trim().parse::<i64>() else {
            return;
        };
        observe_start(element, target);
    });
}
