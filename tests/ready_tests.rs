// Host-side tests for start-up ordering against document.readyState.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod ready {
    include!("../src/core/ready.rs");
}

use ready::*;

#[test]
fn loading_defers_init_until_dom_ready() {
    let state = ReadyState::parse("loading");
    assert_eq!(state, ReadyState::Loading);
    assert!(state.awaits_dom());
    assert!(!state.is_loaded());
}

#[test]
fn interactive_inits_now_and_waits_for_load() {
    let state = ReadyState::parse("interactive");
    assert!(!state.awaits_dom());
    assert!(!state.is_loaded());
}

#[test]
fn complete_inits_now_and_marks_loaded() {
    let state = ReadyState::parse("complete");
    assert!(!state.awaits_dom());
    assert!(state.is_loaded());
}

#[test]
fn unknown_state_is_treated_as_interactive() {
    assert_eq!(ReadyState::parse(""), ReadyState::Interactive);
    assert_eq!(ReadyState::parse("Loading"), ReadyState::Interactive);
}
