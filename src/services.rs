use crate::constants::{ACTIVE, SERVICES_ID, SERVICES_THRESHOLD, SERVICE_CARD};
use crate::core::constants::CAROUSEL_PERIOD_MS;
use crate::core::Carousel;
use crate::{dom, observe};
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct ServiceCycle {
    cards: Vec<web::HtmlElement>,
    carousel: Carousel,
    ticker: Option<Interval>,
}

type SharedCycle = Rc<RefCell<ServiceCycle>>;

impl ServiceCycle {
    fn highlight(&self, index: usize) {
        for (i, card) in self.cards.iter().enumerate() {
            if i == index {
                dom::add_class(card, ACTIVE);
            } else {
                dom::remove_class(card, ACTIVE);
            }
        }
    }

    fn clear(&self) {
        for card in &self.cards {
            dom::remove_class(card, ACTIVE);
        }
    }
}

fn start(cycle: &SharedCycle) {
    let Some(first) = cycle.borrow_mut().carousel.start() else {
        return;
    };
    cycle.borrow().highlight(first);
    let tick = cycle.clone();
    let interval = Interval::new(CAROUSEL_PERIOD_MS, move || {
        let next = tick.borrow_mut().carousel.advance();
        if let Some(i) = next {
            tick.borrow().highlight(i);
        }
    });
    cycle.borrow_mut().ticker = Some(interval);
}

fn stop(cycle: &SharedCycle) {
    let mut c = cycle.borrow_mut();
    // Never called from inside the interval, so dropping cancels it safely.
    c.ticker = None;
    c.carousel.stop();
    c.clear();
}

/// Highlight service cards in turn while `#services` is on screen.
pub fn wire_service_cycle(document: &web::Document) -> anyhow::Result<()> {
    let Some(section) = dom::by_id(document, SERVICES_ID) else {
        log::debug!("[services] no #{SERVICES_ID}");
        return Ok(());
    };
    let cards = dom::query_all(document, SERVICE_CARD);
    let cycle = Rc::new(RefCell::new(ServiceCycle {
        carousel: Carousel::new(cards.len()),
        cards,
        ticker: None,
    }));

    let obs = observe::observer(SERVICES_THRESHOLD, "0px", move |_, _, intersecting| {
        if intersecting {
            start(&cycle);
        } else {
            stop(&cycle);
        }
    })?;
    obs.observe(&section);
    Ok(())
}
