// Host-side tests for the section background and the service carousel.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod backdrop {
    include!("../src/core/backdrop.rs");
}
mod carousel {
    include!("../src/core/carousel.rs");
}

use backdrop::*;
use carousel::*;

#[test]
fn first_section_recolors() {
    let mut b = Backdrop::new();
    assert_eq!(
        b.enter(0, "#101820"),
        Some(BackdropChange::Recolor {
            color: "#101820".into()
        })
    );
    assert_eq!(b.color(), Some("#101820"));
    assert!(b.blob_active());
}

#[test]
fn same_color_is_skipped() {
    let mut b = Backdrop::new();
    b.enter(0, "#fff");
    assert_eq!(b.enter(1, "#fff"), None);
    assert_eq!(b.enter(1, " #fff "), None);
    assert_eq!(b.color(), Some("#fff"));
}

#[test]
fn different_color_takes_over() {
    let mut b = Backdrop::new();
    b.enter(0, "#fff");
    assert_eq!(
        b.enter(1, "#000"),
        Some(BackdropChange::Recolor {
            color: "#000".into()
        })
    );
    // The old owner leaving no longer affects the blob.
    assert_eq!(b.exit(0), None);
    assert!(b.blob_active());
}

#[test]
fn owner_exit_deactivates_blob_once() {
    let mut b = Backdrop::new();
    b.enter(2, "tomato");
    assert_eq!(b.exit(2), Some(BackdropChange::DeactivateBlob));
    assert_eq!(b.exit(2), None);
    assert!(!b.blob_active());
    // Color is kept.
    assert_eq!(b.color(), Some("tomato"));
}

#[test]
fn same_color_returning_reactivates_blob_only() {
    let mut b = Backdrop::new();
    b.enter(0, "#fff");
    assert_eq!(b.exit(0), Some(BackdropChange::DeactivateBlob));
    assert_eq!(b.enter(0, "#fff"), Some(BackdropChange::ActivateBlob));
    assert!(b.blob_active());
    assert_eq!(b.color(), Some("#fff"));
    // Already active again: nothing to do.
    assert_eq!(b.enter(1, "#fff"), None);
    assert_eq!(b.exit(1), Some(BackdropChange::DeactivateBlob));
}

#[test]
fn empty_color_is_ignored() {
    let mut b = Backdrop::new();
    assert_eq!(b.enter(0, "  "), None);
    assert_eq!(b.color(), None);
}

#[test]
fn carousel_starts_at_zero_and_wraps() {
    let mut c = Carousel::new(3);
    assert_eq!(c.advance(), None, "not running yet");
    assert_eq!(c.start(), Some(0));
    assert_eq!(c.start(), None, "already running");
    assert_eq!(c.advance(), Some(1));
    assert_eq!(c.advance(), Some(2));
    assert_eq!(c.advance(), Some(0));
}

#[test]
fn carousel_stop_resets_index() {
    let mut c = Carousel::new(4);
    c.start();
    c.advance();
    c.advance();
    c.stop();
    assert!(!c.is_running());
    assert_eq!(c.index(), 0);
    assert_eq!(c.start(), Some(0));
}

#[test]
fn empty_carousel_never_runs() {
    let mut c = Carousel::new(0);
    assert_eq!(c.start(), None);
    assert_eq!(c.advance(), None);
}
