//! Cosmetic enhancements for the Fabri Ventanas storefront pages.
//!
//! Every feature is an independent, best-effort DOM decoration: it checks for
//! its target elements once, wires browser events, and never reports failure
//! to the user. Missing markup is a silent no-op.

pub mod boot;
pub mod counters;
pub mod dom;
pub mod lazy_load;
pub mod particles;
pub mod reveal;
pub mod ripple;
pub mod scroll_effects;
pub mod smooth_scroll;
pub mod tilt;
pub mod trail;

pub use boot::run;
