use crate::constants::{CARD_CLOSE, CARD_OVERLAY_ID, EXPANDED, EXPANDING, EXPAND_CARD};
use crate::core::{Bounds, CardDeck, CardEffect};
use crate::{dom, overlay};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const PINNED_Z_INDEX: &str = "1000";
const INLINE_PROPS: [&str; 7] = [
    "position", "top", "left", "width", "height", "margin", "z-index",
];

/// Owns the card elements, the overlay, and the expand/collapse state.
pub struct CardController {
    document: web::Document,
    overlay: web::HtmlElement,
    cards: Vec<web::HtmlElement>,
    deck: CardDeck,
    settles: Vec<Option<Timeout>>,
}

pub type SharedCards = Rc<RefCell<CardController>>;

impl CardController {
    pub fn current(&self) -> Option<usize> {
        self.deck.current()
    }
}

fn px(v: f64) -> String {
    format!("{v}px")
}

fn place(el: &web::HtmlElement, b: &Bounds) {
    dom::set_style(el, "top", &px(b.top));
    dom::set_style(el, "left", &px(b.left));
    dom::set_style(el, "width", &px(b.width));
    dom::set_style(el, "height", &px(b.height));
}

fn bounds_of(el: &web::Element) -> Bounds {
    let r = el.get_bounding_client_rect();
    Bounds::new(r.top(), r.left(), r.width(), r.height())
}

/// Run a deck transition and apply what it asks for.
fn run(ctl: &SharedCards, step: impl FnOnce(&mut CardDeck) -> Vec<CardEffect>) {
    let effects = step(&mut ctl.borrow_mut().deck);
    for effect in effects {
        apply(ctl, effect);
    }
}

fn apply(ctl: &SharedCards, effect: CardEffect) {
    match effect {
        CardEffect::Pin { card, bounds } => {
            let c = ctl.borrow();
            let el = &c.cards[card];
            dom::set_style(el, "position", "fixed");
            place(el, &bounds);
            dom::set_style(el, "margin", "0");
            dom::set_style(el, "z-index", PINNED_Z_INDEX);
            dom::add_class(el, EXPANDING);
        }
        CardEffect::ShowOverlay => overlay::show(&ctl.borrow().overlay),
        CardEffect::LockScroll => overlay::lock_scroll(&ctl.borrow().document),
        CardEffect::RequestFrame { card } => {
            let ctl = ctl.clone();
            dom::next_frame(move || {
                let (w, h) = dom::viewport_size();
                run(&ctl, |deck| deck.on_frame(card, w, h));
            });
        }
        CardEffect::Grow { card, bounds } => {
            let c = ctl.borrow();
            place(&c.cards[card], &bounds);
            dom::add_class(&c.cards[card], EXPANDED);
            log::debug!("[cards] card {card} expanded to {:.0}x{:.0}", bounds.width, bounds.height);
        }
        CardEffect::Shrink { card, bounds } => {
            let c = ctl.borrow();
            place(&c.cards[card], &bounds);
            dom::remove_class(&c.cards[card], EXPANDED);
        }
        CardEffect::HideOverlay => overlay::hide(&ctl.borrow().overlay),
        CardEffect::ScheduleSettle {
            card,
            generation,
            delay_ms,
        } => {
            let ctl_settle = ctl.clone();
            let timeout = Timeout::new(delay_ms, move || {
                run(&ctl_settle, |deck| deck.settle(card, generation));
            });
            // Replacing the handle cancels a superseded settle.
            ctl.borrow_mut().settles[card] = Some(timeout);
        }
        CardEffect::ClearInline { card } => {
            let c = ctl.borrow();
            let el = &c.cards[card];
            for prop in INLINE_PROPS {
                dom::clear_style(el, prop);
            }
            dom::remove_class(el, EXPANDING);
        }
        CardEffect::UnlockScroll => overlay::unlock_scroll(&ctl.borrow().document),
    }
}

pub fn expand(ctl: &SharedCards, card: usize) {
    let rect = {
        let c = ctl.borrow();
        match c.cards.get(card) {
            Some(el) => bounds_of(el),
            None => return,
        }
    };
    run(ctl, |deck| deck.expand(card, rect));
}

pub fn collapse(ctl: &SharedCards) {
    run(ctl, CardDeck::collapse);
}

/// Bind every `.expand-card`. The overlay element is required.
pub fn wire_cards(document: &web::Document) -> anyhow::Result<Option<SharedCards>> {
    let cards = dom::query_all(document, EXPAND_CARD);
    if cards.is_empty() {
        log::debug!("[cards] no expandable cards");
        return Ok(None);
    }
    let overlay = dom::by_id(document, CARD_OVERLAY_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CARD_OVERLAY_ID))?;

    let count = cards.len();
    let ctl: SharedCards = Rc::new(RefCell::new(CardController {
        document: document.clone(),
        overlay: overlay.clone(),
        cards: cards.clone(),
        deck: CardDeck::new(count),
        settles: (0..count).map(|_| None).collect(),
    }));

    for (i, card) in cards.iter().enumerate() {
        let ctl_open = ctl.clone();
        dom::add_click_listener(card, move |_| expand(&ctl_open, i));

        for close in dom::query_within(card, CARD_CLOSE) {
            let ctl_close = ctl.clone();
            dom::add_click_listener(&close, move |ev| {
                // Keep the card's own click handler from re-expanding it.
                ev.stop_propagation();
                collapse(&ctl_close);
            });
        }
    }

    let ctl_overlay = ctl.clone();
    let backdrop = overlay.clone();
    dom::add_click_listener(&overlay, move |ev| {
        let on_backdrop = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map_or(true, |t| js_sys::Object::is(t.as_ref(), backdrop.as_ref()));
        if on_backdrop {
            collapse(&ctl_overlay);
        }
    });

    log::info!("[cards] {} expandable cards", count);
    Ok(Some(ctl))
}
