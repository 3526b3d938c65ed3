use crate::constants::{ATTR_SUFFIX, COUNTER_THRESHOLD, STAT_NUMBER};
use crate::core::constants::COUNTER_DEFAULT_SUFFIX;
use crate::core::{parse_leading_int, CountUp};
use crate::{dom, observe};
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Count `el` up from zero to the number it currently displays.
fn animate(el: web::HtmlElement) {
    let text = el.text_content().unwrap_or_default();
    let Some(target) = parse_leading_int(&text) else {
        log::debug!("[counter] not a number: {text:?}");
        return;
    };
    let suffix = el
        .get_attribute(ATTR_SUFFIX)
        .unwrap_or_else(|| COUNTER_DEFAULT_SUFFIX.to_string());
    let mut steps = CountUp::new(target, suffix);

    // The slot lets the last tick cancel its own interval.
    let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let slot_tick = slot.clone();
    let interval = Interval::new(CountUp::step_ms(), move || {
        if let Some(text) = steps.next() {
            el.set_text_content(Some(&text));
        }
        if steps.is_done() {
            let done = slot_tick.borrow_mut().take();
            if let Some(done) = done {
                _ = done.cancel();
            }
        }
    });
    *slot.borrow_mut() = Some(interval);
}

pub fn wire_counters(document: &web::Document) -> anyhow::Result<()> {
    let stats = dom::query_all(document, STAT_NUMBER);
    if stats.is_empty() {
        return Ok(());
    }
    let obs = observe::observer(COUNTER_THRESHOLD, "0px", move |obs, el, intersecting| {
        if !intersecting {
            return;
        }
        obs.unobserve(&el);
        if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
            animate(el);
        }
    })?;
    observe::observe_all(&obs, &stats);
    log::info!("[counter] {} stat counters", stats.len());
    Ok(())
}
