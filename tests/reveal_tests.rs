// Host-side tests for the reveal tracker.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::*;

fn reveal_spec(mode: RevealMode, cascade: Cascade, stagger_ms: u32) -> RevealSpec {
    RevealSpec {
        selector: ".scroll-reveal",
        class: "visible",
        threshold: 0.1,
        root_margin: "0px",
        stagger_ms,
        mode,
        cascade,
    }
}

fn shows(actions: &[RevealAction]) -> Vec<(usize, u32)> {
    actions
        .iter()
        .filter_map(|a| match *a {
            RevealAction::Show { target, delay_ms } => Some((target, delay_ms)),
            _ => None,
        })
        .collect()
}

#[test]
fn group_ids_follow_first_appearance() {
    assert_eq!(group_ids(&["a", "a", "b", "a", "c", "b"]), vec![0, 0, 1, 0, 2, 1]);
    assert!(group_ids::<u8>(&[]).is_empty());
}

#[test]
fn stagger_uses_sibling_position_not_arrival_order() {
    // Two parents: targets 0,1,2 under the first, 3,4 under the second.
    let s = reveal_spec(RevealMode::OneShot, Cascade::Own, 100);
    let mut t = RevealTracker::new(&s, vec![0, 0, 0, 1, 1]);

    // Callbacks arrive out of document order.
    assert_eq!(shows(&t.intersect(2, true)), vec![(2, 200)]);
    assert_eq!(shows(&t.intersect(4, true)), vec![(4, 100)]);
    assert_eq!(shows(&t.intersect(0, true)), vec![(0, 0)]);
    assert_eq!(shows(&t.intersect(3, true)), vec![(3, 0)]);
}

#[test]
fn one_shot_unobserves_and_is_idempotent() {
    let s = reveal_spec(RevealMode::OneShot, Cascade::Own, 100);
    let mut t = RevealTracker::new(&s, vec![0, 0]);

    let first = t.intersect(1, true);
    assert_eq!(
        first,
        vec![
            RevealAction::Show {
                target: 1,
                delay_ms: 100
            },
            RevealAction::Unobserve { target: 1 },
        ]
    );
    assert_eq!(t.state(1), Some(TargetState::Revealed));

    // A late duplicate callback schedules nothing.
    assert!(t.intersect(1, true).is_empty());
    // Leaving never hides a one-shot target.
    assert!(t.intersect(1, false).is_empty());
    assert_eq!(t.state(1), Some(TargetState::Revealed));
}

#[test]
fn non_intersecting_pending_target_does_nothing() {
    let s = reveal_spec(RevealMode::OneShot, Cascade::Own, 100);
    let mut t = RevealTracker::new(&s, vec![0]);
    assert!(t.intersect(0, false).is_empty());
    assert_eq!(t.state(0), Some(TargetState::Pending));
}

#[test]
fn group_cascade_reveals_all_siblings_in_order() {
    let s = reveal_spec(RevealMode::OneShot, Cascade::Group, 100);
    let mut t = RevealTracker::new(&s, vec![0, 0, 0, 1]);

    let actions = t.intersect(1, true);
    assert_eq!(shows(&actions), vec![(0, 0), (1, 100), (2, 200)]);
    let unobserved: Vec<usize> = actions
        .iter()
        .filter_map(|a| match *a {
            RevealAction::Unobserve { target } => Some(target),
            _ => None,
        })
        .collect();
    assert_eq!(unobserved, vec![0, 1, 2]);

    // Other group untouched; members already revealed stay quiet.
    assert_eq!(t.state(3), Some(TargetState::Pending));
    assert!(t.intersect(0, true).is_empty());
    assert_eq!(shows(&t.intersect(3, true)), vec![(3, 0)]);
}

#[test]
fn reversible_hides_on_exit_and_reveals_again() {
    let s = reveal_spec(RevealMode::Reversible, Cascade::Own, 0);
    let mut t = RevealTracker::new(&s, vec![0, 0]);

    assert_eq!(
        t.intersect(0, true),
        vec![RevealAction::Show {
            target: 0,
            delay_ms: 0
        }]
    );
    // Still in view: no redundant work.
    assert!(t.intersect(0, true).is_empty());

    assert_eq!(t.intersect(0, false), vec![RevealAction::Hide { target: 0 }]);
    assert!(t.intersect(0, false).is_empty());
    assert_eq!(t.state(0), Some(TargetState::Pending));

    assert_eq!(shows(&t.intersect(0, true)), vec![(0, 0)]);
}

#[test]
fn unknown_target_is_ignored() {
    let s = reveal_spec(RevealMode::OneShot, Cascade::Own, 100);
    let mut t = RevealTracker::new(&s, vec![0]);
    assert!(t.intersect(9, true).is_empty());
}
