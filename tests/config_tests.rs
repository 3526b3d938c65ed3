// Host-side tests for runtime feature switches and key mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod config {
    include!("../src/core/config.rs");
}
mod keys {
    include!("../src/core/keys.rs");
}

use config::*;
use keys::*;

#[test]
fn defaults_enable_everything_but_cursor() {
    let f = Features::from_attr(None);
    assert_eq!(f, Features::default());
    assert!(f.grid && f.tilt && f.parallax && f.magnetic);
    assert!(!f.cursor);
}

#[test]
fn tokens_toggle_features() {
    let f = Features::from_attr(Some("cursor  no-grid\tNO-TILT bogus"));
    assert!(f.cursor);
    assert!(!f.grid);
    assert!(!f.tilt);
    assert!(f.parallax);
    assert!(f.magnetic);
}

#[test]
fn later_tokens_win() {
    let f = Features::from_attr(Some("cursor no-cursor"));
    assert!(!f.cursor);
}

#[test]
fn log_level_parses_case_insensitively() {
    assert_eq!(log_level(Some("debug")), log::Level::Debug);
    assert_eq!(log_level(Some(" WARN ")), log::Level::Warn);
    assert_eq!(log_level(Some("loud")), log::Level::Info);
    assert_eq!(log_level(None), log::Level::Info);
}

#[test]
fn escape_dismisses() {
    assert_eq!(action_for_key("Escape"), Some(KeyAction::Dismiss));
    assert_eq!(action_for_key("Esc"), Some(KeyAction::Dismiss));
    assert_eq!(action_for_key("Enter"), None);
    assert_eq!(action_for_key("e"), None);
}
