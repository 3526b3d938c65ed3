// Expand/collapse state machine for the image-card overlay.
//
// The deck never touches the DOM. Every transition returns the list of
// [`CardEffect`]s the caller must apply, in order.

use super::constants::{CARD_EXPAND_SCALE, CARD_SETTLE_MS};

/// Viewport-relative box, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Scale by `scale` and center inside a `viewport_w` x `viewport_h`
    /// viewport. No clamping: a large box overflows the viewport.
    pub fn centered_scaled(&self, scale: f64, viewport_w: f64, viewport_h: f64) -> Bounds {
        let width = self.width * scale;
        let height = self.height * scale;
        Bounds {
            top: (viewport_h - height) / 2.0,
            left: (viewport_w - width) / 2.0,
            width,
            height,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardPhase {
    #[default]
    Collapsed,
    /// Pinned at its original box, waiting for the next frame to grow.
    Expanding,
    Expanded,
    /// Animating back; inline styles are cleared on settle.
    Collapsing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardEffect {
    /// Fix the card at `bounds` and mark it `expanding`.
    Pin { card: usize, bounds: Bounds },
    ShowOverlay,
    LockScroll,
    /// Call [`CardDeck::on_frame`] for `card` on the next animation frame.
    RequestFrame { card: usize },
    /// Move the card to `bounds` and mark it `expanded`.
    Grow { card: usize, bounds: Bounds },
    /// Move the card back to `bounds` and drop the `expanded` mark.
    Shrink { card: usize, bounds: Bounds },
    HideOverlay,
    /// Call [`CardDeck::settle`] with these arguments after `delay_ms`.
    ScheduleSettle {
        card: usize,
        generation: u64,
        delay_ms: u32,
    },
    /// Drop every inline positioning override and the `expanding` mark.
    ClearInline { card: usize },
    UnlockScroll,
}

#[derive(Clone, Copy, Debug, Default)]
struct CardSlot {
    phase: CardPhase,
    origin: Option<Bounds>,
    generation: u64,
}

/// Tracks which card (if any) is expanded. At most one card is current.
#[derive(Clone, Debug)]
pub struct CardDeck {
    slots: Vec<CardSlot>,
    current: Option<usize>,
    scale: f64,
    settle_ms: u32,
    next_generation: u64,
}

impl CardDeck {
    pub fn new(card_count: usize) -> Self {
        Self {
            slots: vec![CardSlot::default(); card_count],
            current: None,
            scale: CARD_EXPAND_SCALE,
            settle_ms: CARD_SETTLE_MS,
            next_generation: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn phase(&self, card: usize) -> Option<CardPhase> {
        self.slots.get(card).map(|s| s.phase)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Begin expanding `card` from its on-screen box `rect`.
    ///
    /// Re-expanding the current card is a no-op. Expanding another card while
    /// one is current collapses the previous one first; overlay and scroll
    /// lock carry over to the new card.
    pub fn expand(&mut self, card: usize, rect: Bounds) -> Vec<CardEffect> {
        if card >= self.slots.len() || self.current == Some(card) {
            return Vec::new();
        }
        let mut effects = Vec::new();
        let handover = self.current.is_some();
        if let Some(prev) = self.current {
            self.collapse_card(prev, false, &mut effects);
        }

        self.next_generation += 1;
        let slot = &mut self.slots[card];
        // A card caught mid-collapse is still fixed; keep its in-flow box.
        if slot.phase != CardPhase::Collapsing || slot.origin.is_none() {
            slot.origin = Some(rect);
        }
        slot.phase = CardPhase::Expanding;
        slot.generation = self.next_generation;
        self.current = Some(card);

        effects.push(CardEffect::Pin { card, bounds: rect });
        if !handover {
            effects.push(CardEffect::ShowOverlay);
            effects.push(CardEffect::LockScroll);
        }
        effects.push(CardEffect::RequestFrame { card });
        effects
    }

    /// Second half of an expansion, run one frame after [`CardDeck::expand`]
    /// so the pinned position is committed before the transition starts.
    pub fn on_frame(&mut self, card: usize, viewport_w: f64, viewport_h: f64) -> Vec<CardEffect> {
        let Some(slot) = self.slots.get_mut(card) else {
            return Vec::new();
        };
        if slot.phase != CardPhase::Expanding {
            return Vec::new();
        }
        let Some(origin) = slot.origin else {
            return Vec::new();
        };
        slot.phase = CardPhase::Expanded;
        vec![CardEffect::Grow {
            card,
            bounds: origin.centered_scaled(self.scale, viewport_w, viewport_h),
        }]
    }

    /// Collapse the current card, if any.
    pub fn collapse(&mut self) -> Vec<CardEffect> {
        let mut effects = Vec::new();
        if let Some(card) = self.current {
            self.collapse_card(card, true, &mut effects);
        }
        effects
    }

    fn collapse_card(&mut self, card: usize, hide_overlay: bool, effects: &mut Vec<CardEffect>) {
        let slot = &mut self.slots[card];
        slot.phase = CardPhase::Collapsing;
        if let Some(origin) = slot.origin {
            effects.push(CardEffect::Shrink {
                card,
                bounds: origin,
            });
        }
        if hide_overlay {
            effects.push(CardEffect::HideOverlay);
        }
        effects.push(CardEffect::ScheduleSettle {
            card,
            generation: slot.generation,
            delay_ms: self.settle_ms,
        });
        if self.current == Some(card) {
            self.current = None;
        }
    }

    /// Finish a collapse once the transition has run. Stale settles (the card
    /// was expanded again meanwhile) are ignored.
    pub fn settle(&mut self, card: usize, generation: u64) -> Vec<CardEffect> {
        let Some(slot) = self.slots.get_mut(card) else {
            return Vec::new();
        };
        if slot.phase != CardPhase::Collapsing || slot.generation != generation {
            return Vec::new();
        }
        slot.phase = CardPhase::Collapsed;
        slot.origin = None;
        let mut effects = vec![CardEffect::ClearInline { card }];
        if self.current.is_none() {
            effects.push(CardEffect::UnlockScroll);
        }
        effects
    }
}
