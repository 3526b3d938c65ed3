// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn grid_falloff_peaks_where_expected() {
    assert!(GRID_STRIDE > 0.0);
    assert!(GRID_MAX_DISTANCE > GRID_STRIDE);
    assert!((GRID_BASE_OPACITY + GRID_OPACITY_GAIN - 0.55).abs() < 1e-12);
    assert_eq!(GRID_BASE_RADIUS + GRID_RADIUS_GAIN, 3.0);
    assert!(GRID_OVERLAY_OPACITY < GRID_BASE_OPACITY);
    assert!(GRID_LINK_OPACITY_RATIO > 0.0 && GRID_LINK_OPACITY_RATIO <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_consistent() {
    assert_eq!(COUNTER_DURATION_MS % COUNTER_STEPS, 0);
    assert!(LOADER_RELEASE_MS < LOADER_HIDE_MS);
    assert!(CARD_SETTLE_MS > 0);
    assert!(CAROUSEL_PERIOD_MS > CARD_SETTLE_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_factors_stay_subtle() {
    assert!(MAGNETIC_STRENGTH > 0.0 && MAGNETIC_STRENGTH < 1.0);
    assert!(TILT_DIVISOR > 1.0);
    assert!(HERO_FADE_SPAN > 0.0 && HERO_FADE_SPAN < 1.0);
    assert!(WORK_ITEM_DIM_OPACITY > 0.0 && WORK_ITEM_DIM_OPACITY < 1.0);
    assert!(CARD_EXPAND_SCALE > 1.0);
}
