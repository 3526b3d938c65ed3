// Host-side tests for pointer/scroll motion math and the frame latches.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod motion {
    include!("../src/core/motion.rs");
}
mod gate {
    include!("../src/core/gate.rs");
}

use gate::*;
use glam::DVec2;
use motion::*;

const EPS: f64 = 1e-9;

#[test]
fn magnetic_moves_ten_percent_toward_pointer() {
    let center = DVec2::new(100.0, 50.0);
    let off = magnetic_offset(DVec2::new(140.0, 30.0), center);
    assert!((off.x - 4.0).abs() < EPS);
    assert!((off.y + 2.0).abs() < EPS);
    assert_eq!(magnetic_offset(center, center), DVec2::ZERO);
    assert_eq!(magnetic_transform(DVec2::new(4.0, -2.0)), "translate(4px, -2px)");
}

#[test]
fn tilt_is_small_angle_and_signed() {
    let (rx, ry) = tilt_angles(DVec2::new(40.0, 20.0));
    assert!((rx + 1.0).abs() < EPS, "pointer below center tips back");
    assert!((ry - 2.0).abs() < EPS);
    assert_eq!(
        tilt_transform(DVec2::new(40.0, -20.0)),
        "perspective(1000px) rotateX(1deg) rotateY(2deg)"
    );
    assert_eq!(tilt_reset(), "perspective(1000px) rotateX(0deg) rotateY(0deg)");
}

#[test]
fn hero_parallax_fades_and_drifts_until_hero_height() {
    let top = hero_parallax(0.0, 800.0).unwrap();
    assert_eq!(top.opacity, 1.0);
    assert_eq!(top.translate_y, 0.0);

    let half = hero_parallax(400.0, 800.0).unwrap();
    assert!((half.opacity - 0.75).abs() < EPS);
    assert!((half.translate_y - 120.0).abs() < EPS);

    assert!(hero_parallax(800.0, 800.0).is_none());
    assert!(hero_parallax(1200.0, 800.0).is_none());
    assert!(hero_parallax(10.0, 0.0).is_none());
}

#[test]
fn image_parallax_is_zero_at_viewport_center() {
    assert_eq!(image_parallax(400.0, 800.0, 0.1), 0.0);
    assert!((image_parallax(600.0, 800.0, 0.1) + 20.0).abs() < EPS);
    assert!((image_parallax(200.0, 800.0, 0.2) - 40.0).abs() < EPS);
}

#[test]
fn parallax_speed_falls_back_to_default() {
    assert_eq!(parallax_speed(Some("0.25")), 0.25);
    assert_eq!(parallax_speed(Some(" -0.1 ")), -0.1);
    assert_eq!(parallax_speed(Some("fast")), 0.1);
    assert_eq!(parallax_speed(Some("NaN")), 0.1);
    assert_eq!(parallax_speed(None), 0.1);
}

#[test]
fn frame_latch_coalesces_requests() {
    let mut latch = FrameLatch::default();
    assert!(latch.request());
    assert!(!latch.request());
    assert!(!latch.request());
    assert!(latch.is_pending());
    latch.release();
    assert!(latch.request());
}

#[test]
fn gate_runs_until_paused() {
    let mut gate = FrameGate::new();
    assert!(gate.start());
    assert!(!gate.start(), "one loop only");
    assert!(gate.on_frame());
    assert!(gate.on_frame());
}

#[test]
fn gate_pause_then_resume_schedules_exactly_one_frame() {
    let mut gate = FrameGate::new();
    gate.start();
    assert!(gate.on_frame());
    gate.pause();
    // The frame already in flight fires but neither draws nor reschedules.
    assert!(!gate.on_frame());
    assert!(gate.is_paused());

    assert!(gate.resume());
    assert!(!gate.resume(), "second resume must not start a second loop");
    assert!(gate.on_frame());
}

#[test]
fn gate_quick_hide_show_keeps_pending_frame() {
    let mut gate = FrameGate::new();
    gate.start();
    gate.pause();
    // Shown again before the pending frame fired: nothing new to request.
    assert!(!gate.resume());
    assert!(gate.on_frame());
}

#[test]
fn gate_started_hidden_waits_for_resume() {
    let mut gate = FrameGate::new();
    gate.pause();
    assert!(!gate.start());
    assert!(gate.resume());
    assert!(gate.on_frame());
}
