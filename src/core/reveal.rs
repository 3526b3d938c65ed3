// Intersection-driven reveal bookkeeping.
//
// A [`RevealTracker`] owns one [`TargetState`] per observed element and turns
// raw intersection callbacks into staggered show/hide actions. Stagger order
// is derived from each target's position in its group (document order), never
// from the order in which callbacks arrive.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    /// Reveal once, then stop observing.
    OneShot,
    /// Hide again when the target leaves the viewport.
    Reversible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cascade {
    /// Only the intersecting target is revealed, delayed by its own index.
    Own,
    /// Any intersecting member reveals its whole group in order.
    Group,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub selector: &'static str,
    pub class: &'static str,
    pub threshold: f64,
    pub root_margin: &'static str,
    pub stagger_ms: u32,
    pub mode: RevealMode,
    pub cascade: Cascade,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TargetState {
    #[default]
    Pending,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    Show { target: usize, delay_ms: u32 },
    Hide { target: usize },
    Unobserve { target: usize },
}

#[derive(Clone, Debug)]
pub struct RevealTracker {
    mode: RevealMode,
    cascade: Cascade,
    stagger_ms: u32,
    groups: Vec<usize>,
    states: Vec<TargetState>,
}

impl RevealTracker {
    /// `groups[i]` is the group id of target `i`; targets are given in
    /// document order.
    pub fn new(spec: &RevealSpec, groups: Vec<usize>) -> Self {
        Self {
            mode: spec.mode,
            cascade: spec.cascade,
            stagger_ms: spec.stagger_ms,
            states: vec![TargetState::Pending; groups.len()],
            groups,
        }
    }

    pub fn state(&self, target: usize) -> Option<TargetState> {
        self.states.get(target).copied()
    }

    /// Position of `target` among the members of its own group.
    pub fn sibling_index(&self, target: usize) -> usize {
        let group = self.groups[target];
        self.groups[..target].iter().filter(|g| **g == group).count()
    }

    fn delay_for(&self, target: usize) -> u32 {
        self.stagger_ms * self.sibling_index(target) as u32
    }

    pub fn intersect(&mut self, target: usize, intersecting: bool) -> Vec<RevealAction> {
        let Some(state) = self.state(target) else {
            return Vec::new();
        };
        let mut actions = Vec::new();
        match (intersecting, state) {
            (true, TargetState::Pending) => match self.cascade {
                Cascade::Own => self.reveal(target, &mut actions),
                Cascade::Group => {
                    let group = self.groups[target];
                    let members: Vec<usize> = (0..self.groups.len())
                        .filter(|i| self.groups[*i] == group)
                        .collect();
                    for member in members {
                        if self.states[member] == TargetState::Pending {
                            self.reveal(member, &mut actions);
                        }
                    }
                }
            },
            (false, TargetState::Revealed) if self.mode == RevealMode::Reversible => {
                self.states[target] = TargetState::Pending;
                actions.push(RevealAction::Hide { target });
            }
            _ => {}
        }
        actions
    }

    fn reveal(&mut self, target: usize, actions: &mut Vec<RevealAction>) {
        self.states[target] = TargetState::Revealed;
        actions.push(RevealAction::Show {
            target,
            delay_ms: self.delay_for(target),
        });
        if self.mode == RevealMode::OneShot {
            actions.push(RevealAction::Unobserve { target });
        }
    }
}

/// Assign group ids by first appearance of equal keys.
pub fn group_ids<K: PartialEq>(keys: &[K]) -> Vec<usize> {
    let mut seen: Vec<&K> = Vec::new();
    keys.iter()
        .map(|k| match seen.iter().position(|s| *s == k) {
            Some(i) => i,
            None => {
                seen.push(k);
                seen.len() - 1
            }
        })
        .collect()
}
