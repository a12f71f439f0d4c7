use ventanas_enhance::counters::{
    COUNT_DURATION_MS, CounterFrame, FRAME_INTERVAL_MS, counter_increment, counter_step,
};
use ventanas_enhance::particles::{
    PARTICLE_COUNT, ParticleParams, particle_css, particle_params, rand_unit,
};
use ventanas_enhance::ripple::{ripple_css, ripple_geometry};
use ventanas_enhance::scroll_effects::{navbar_scrolled, parallax_offset, scroll_top_visible};
use ventanas_enhance::smooth_scroll::is_placeholder_anchor;
use ventanas_enhance::tilt::{IDENTITY_TRANSFORM, tilt_transform};

fn run_counter(target: i64) -> (Vec<i64>, usize) {
    let increment = counter_increment(target);
    let mut current = 0.0;
    let mut displays = Vec::new();
    let mut frames = 0;
    loop {
        frames += 1;
        match counter_step(current, target, increment) {
            CounterFrame::Continue {
                current: next,
                display,
            } => {
                current = next;
                displays.push(display);
            }
            CounterFrame::Done => break,
        }
        assert!(frames < 1000, "counter for target {target} never finished");
    }
    (displays, frames)
}

#[test]
fn counter_display_is_non_decreasing_and_below_target() {
    let (displays, _) = run_counter(137);
    for pair in displays.windows(2) {
        assert!(pair[0] <= pair[1], "display went backwards: {pair:?}");
    }
    assert!(displays.iter().all(|value| *value < 137));
}

#[test]
fn counter_finishes_within_duration_window() {
    let nominal_frames = (COUNT_DURATION_MS / FRAME_INTERVAL_MS) as usize;
    let (_, frames) = run_counter(250);
    // One frame of slack for float accumulation in the running value.
    assert!(
        frames <= nominal_frames + 1,
        "took {frames} frames, expected about {nominal_frames}"
    );
}

#[test]
fn counter_zero_target_finishes_on_first_step() {
    assert_eq!(counter_step(0.0, 0, counter_increment(0)), CounterFrame::Done);
}

#[test]
fn counter_negative_target_finishes_on_first_step() {
    assert_eq!(
        counter_step(0.0, -25, counter_increment(-25)),
        CounterFrame::Done
    );
}

#[test]
fn parallax_applies_below_one_viewport() {
    assert_eq!(parallax_offset(100.0, 800.0), Some(50.0));
    assert_eq!(parallax_offset(0.0, 800.0), Some(0.0));
}

#[test]
fn parallax_stops_past_one_viewport() {
    assert_eq!(parallax_offset(800.0, 800.0), None);
    assert_eq!(parallax_offset(2400.0, 800.0), None);
}

#[test]
fn navbar_threshold_is_exclusive() {
    assert!(!navbar_scrolled(100.0));
    assert!(navbar_scrolled(100.5));
}

#[test]
fn scroll_top_threshold_is_exclusive() {
    assert!(!scroll_top_visible(300.0));
    assert!(scroll_top_visible(300.5));
}

#[test]
fn placeholder_anchors_are_ignored() {
    assert!(is_placeholder_anchor("#"));
    assert!(is_placeholder_anchor("#!"));
    assert!(!is_placeholder_anchor("#contacto"));
}

#[test]
fn tilt_is_flat_at_card_center() {
    assert_eq!(
        tilt_transform(50.0, 50.0, 100.0, 100.0),
        "perspective(1000px) rotateX(0deg) rotateY(0deg) scale(1.05)"
    );
}

#[test]
fn tilt_leans_toward_the_pointer() {
    // Bottom-right corner: positive rotateX, negative rotateY.
    assert_eq!(
        tilt_transform(100.0, 100.0, 100.0, 100.0),
        "perspective(1000px) rotateX(2.5deg) rotateY(-2.5deg) scale(1.05)"
    );
}

#[test]
fn identity_transform_matches_reset_contract() {
    assert_eq!(
        IDENTITY_TRANSFORM,
        "perspective(1000px) rotateX(0) rotateY(0) scale(1)"
    );
}

#[test]
fn ripple_is_centered_on_the_click_point() {
    let geometry = ripple_geometry(150.0, 120.0, 100.0, 100.0, 80.0, 40.0);
    assert_eq!(geometry.size, 80.0);
    assert_eq!(geometry.x, 10.0);
    assert_eq!(geometry.y, -20.0);
}

#[test]
fn ripple_css_carries_geometry_and_animation() {
    let geometry = ripple_geometry(150.0, 120.0, 100.0, 100.0, 80.0, 40.0);
    let css = ripple_css(&geometry);
    assert!(css.contains("width: 80px"));
    assert!(css.contains("left: 10px"));
    assert!(css.contains("top: -20px"));
    assert!(css.contains("animation: ripple 0.6s ease-out"));
    assert!(css.contains("pointer-events: none"));
}

#[test]
fn particle_params_are_deterministic_per_seed() {
    for index in 0..PARTICLE_COUNT {
        assert_eq!(
            particle_params(0x5EED, index),
            particle_params(0x5EED, index)
        );
    }
}

#[test]
fn particle_params_stay_in_their_ranges() {
    for seed in [1u64, 0x5EED, u64::MAX / 3] {
        for index in 0..PARTICLE_COUNT {
            let ParticleParams {
                size,
                duration,
                delay,
                start_x,
                drift,
            } = particle_params(seed, index);
            assert!((2.0..6.0).contains(&size), "size {size}");
            assert!((10.0..30.0).contains(&duration), "duration {duration}");
            assert!((0.0..5.0).contains(&delay), "delay {delay}");
            assert!((0.0..100.0).contains(&start_x), "start_x {start_x}");
            assert!((-10.0..10.0).contains(&drift), "drift {drift}");
        }
    }
}

#[test]
fn particles_vary_across_the_flock() {
    let first = particle_params(0x5EED, 0);
    let second = particle_params(0x5EED, 1);
    assert_ne!(first, second);
}

#[test]
fn particle_css_references_the_shared_keyframe() {
    let css = particle_css(&particle_params(7, 3));
    assert!(css.contains("animation: floatUp "));
    assert!(css.contains("bottom: -10px"));
    assert!(css.contains("border-radius: 50%"));
}

#[test]
fn rand_unit_stays_in_the_unit_interval() {
    for salt in 0..512u64 {
        let value = rand_unit(0xDEAD_BEEF, salt);
        assert!((0.0..1.0).contains(&value), "salt {salt} gave {value}");
    }
}
