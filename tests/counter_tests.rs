// Host-side tests for stat counter parsing and stepping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod counter {
    include!("../src/core/counter.rs");
}

use counter::*;

fn numeric(text: &str, suffix: &str) -> i64 {
    text.strip_suffix(suffix)
        .expect("suffix present")
        .parse()
        .expect("integer body")
}

#[test]
fn parses_like_parse_int() {
    assert_eq!(parse_leading_int("250"), Some(250));
    assert_eq!(parse_leading_int("  98%"), Some(98));
    assert_eq!(parse_leading_int("15+"), Some(15));
    assert_eq!(parse_leading_int("-7 days"), Some(-7));
    assert_eq!(parse_leading_int("+12"), Some(12));
    assert_eq!(parse_leading_int("12.9"), Some(12));
    assert_eq!(parse_leading_int("n/a"), None);
    assert_eq!(parse_leading_int(""), None);
    assert_eq!(parse_leading_int("-"), None);
    assert_eq!(parse_leading_int("007"), Some(7));
}

#[test]
fn oversized_numbers_saturate() {
    assert_eq!(parse_leading_int("12345678901234567890+"), Some(i64::MAX));
    assert_eq!(parse_leading_int("-99999999999999999999"), Some(-i64::MAX));
    let last = CountUp::new(i64::MAX, "+").last();
    assert_eq!(last.as_deref(), Some("9223372036854775807+"));
}

#[test]
fn counts_up_to_exact_target() {
    let texts: Vec<String> = CountUp::new(250, "+").collect();
    assert_eq!(texts.last().map(String::as_str), Some("250+"));
    assert_eq!(texts.len(), 50);

    let values: Vec<i64> = texts.iter().map(|t| numeric(t, "+")).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]), "non-decreasing");
    assert!(values.iter().all(|v| *v <= 250));
    assert_eq!(values[0], 5);
}

#[test]
fn small_targets_floor_intermediate_steps() {
    let texts: Vec<String> = CountUp::new(3, "+").collect();
    assert_eq!(texts.first().map(String::as_str), Some("0+"));
    assert_eq!(texts.last().map(String::as_str), Some("3+"));
    let values: Vec<i64> = texts.iter().map(|t| numeric(t, "+")).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn zero_target_finishes_immediately() {
    let texts: Vec<String> = CountUp::new(0, "+").collect();
    assert_eq!(texts, vec!["0+".to_string()]);
}

#[test]
fn custom_suffix_is_appended() {
    let mut steps = CountUp::new(40, "%");
    let last = steps.by_ref().last();
    assert_eq!(last.as_deref(), Some("40%"));
    assert!(steps.is_done());
    assert_eq!(steps.next(), None);
}

#[test]
fn step_period_spreads_over_duration() {
    assert_eq!(CountUp::step_ms(), 30);
}
