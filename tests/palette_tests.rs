// Host-side tests for the pure palette math.
// The main crate is wasm-only, so the pure modules are included directly.

#![allow(dead_code)]
mod palette {
    include!("../src/palette.rs");
}

use palette::*;

#[test]
fn endpoints_match_first_and_last_stop() {
    assert_eq!(background_color(0.0), BACKGROUND_STOPS[0]);
    assert_eq!(
        background_color(1.0),
        BACKGROUND_STOPS[BACKGROUND_STOPS.len() - 1]
    );
}

#[test]
fn full_scroll_resolves_to_last_segment_pair() {
    // f = 1.0 lands exactly on a stop boundary; the segment index must clamp
    // to the last pair instead of indexing past the palette.
    let end = background_color(1.0);
    assert_eq!(end, Rgb::new(10, 14, 39));

    // halfway through the last segment
    assert_eq!(background_color(0.875), Rgb::new(10, 17, 40));
}

#[test]
fn mid_segment_interpolation_matches_hand_computation() {
    // f = 0.3 lands in segment 1 with local t = 0.2:
    // (15,10,45) -> (20,15,50) gives (16, 11, 46)
    assert_eq!(background_color(0.3), Rgb::new(16, 11, 46));
}

#[test]
fn out_of_range_fractions_saturate() {
    assert_eq!(background_color(-0.5), BACKGROUND_STOPS[0]);
    assert_eq!(
        background_color(2.0),
        BACKGROUND_STOPS[BACKGROUND_STOPS.len() - 1]
    );
}

#[test]
fn channels_transition_monotonically_between_stops() {
    let segments = BACKGROUND_STOPS.len() - 1;
    for segment in 0..segments {
        let start = BACKGROUND_STOPS[segment];
        let end = BACKGROUND_STOPS[segment + 1];
        let mut prev = background_color(segment as f32 / segments as f32);
        for step in 1..=20 {
            let f = (segment as f32 + step as f32 / 20.0) / segments as f32;
            let c = background_color(f);
            assert_monotonic(start.r, end.r, prev.r, c.r);
            assert_monotonic(start.g, end.g, prev.g, c.g);
            assert_monotonic(start.b, end.b, prev.b, c.b);
            prev = c;
        }
    }
}

fn assert_monotonic(start: u8, end: u8, prev: u8, current: u8) {
    if end >= start {
        assert!(current >= prev, "expected rising channel: {prev} -> {current}");
    } else {
        assert!(current <= prev, "expected falling channel: {prev} -> {current}");
    }
}

#[test]
fn scroll_fraction_guards_zero_range() {
    // content height == viewport height must not divide by zero
    assert_eq!(scroll_fraction(100.0, 0.0), 0.0);
    assert_eq!(scroll_fraction(100.0, -50.0), 0.0);
    assert_eq!(scroll_fraction(0.0, 0.0), 0.0);
}

#[test]
fn scroll_fraction_normalizes_and_clamps() {
    assert!((scroll_fraction(250.0, 1000.0) - 0.25).abs() < 1e-6);
    assert_eq!(scroll_fraction(1500.0, 1000.0), 1.0);
    assert_eq!(scroll_fraction(-10.0, 1000.0), 0.0);
}

#[test]
fn css_form_is_browser_ready() {
    assert_eq!(Rgb::new(10, 14, 39).css(), "rgb(10, 14, 39)");
}

#[test]
fn hsl_gradient_is_blue_heavy() {
    let rgb = hsl_to_rgb(0.6, 0.8, 0.6);
    assert!(rgb[2] > rgb[0], "particle band should lean blue: {rgb:?}");
    assert!(rgb.iter().all(|c| (0.0..=1.0).contains(c)));
}

#[test]
fn desaturated_hsl_is_gray() {
    assert_eq!(hsl_to_rgb(0.25, 0.0, 0.4), [0.4, 0.4, 0.4]);
}
