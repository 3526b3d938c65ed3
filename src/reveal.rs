use crate::core::{group_ids, RevealAction, RevealSpec, RevealTracker};
use crate::{dom, observe};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Bind one reveal instance. Missing targets leave the instance unbound.
pub fn wire_reveal(document: &web::Document, spec: &RevealSpec) -> anyhow::Result<()> {
    let targets = dom::query_all(document, spec.selector);
    if targets.is_empty() {
        log::debug!("[reveal] no {} targets", spec.selector);
        return Ok(());
    }

    let parents: Vec<Option<web::Element>> = targets.iter().map(|t| t.parent_element()).collect();
    let tracker = Rc::new(RefCell::new(RevealTracker::new(spec, group_ids(&parents))));
    let targets = Rc::new(targets);
    let class = spec.class;

    let targets_cb = targets.clone();
    let obs = observe::observer(spec.threshold, spec.root_margin, move |obs, el, intersecting| {
        let Some(index) = dom::index_of(&targets_cb, &el) else {
            return;
        };
        let actions = tracker.borrow_mut().intersect(index, intersecting);
        apply(&actions, &targets_cb, obs, class);
    })?;
    observe::observe_all(&obs, &targets);
    log::info!("[reveal] {} -> .{} on {} targets", spec.selector, class, targets.len());
    Ok(())
}

fn apply(
    actions: &[RevealAction],
    targets: &[web::HtmlElement],
    obs: &web::IntersectionObserver,
    class: &'static str,
) {
    for action in actions {
        match *action {
            RevealAction::Show { target, delay_ms } => {
                let el = targets[target].clone();
                if delay_ms == 0 {
                    dom::add_class(&el, class);
                } else {
                    Timeout::new(delay_ms, move || dom::add_class(&el, class)).forget();
                }
            }
            RevealAction::Hide { target } => dom::remove_class(&targets[target], class),
            RevealAction::Unobserve { target } => obs.unobserve(&targets[target]),
        }
    }
}

/// Paint each `[data-bg]` card's image onto its background layer.
pub fn apply_card_backgrounds(document: &web::Document, card_selector: &str, layer_selector: &str) {
    for card in dom::query_all(document, card_selector) {
        let Some(url) = card.get_attribute(crate::constants::ATTR_BG) else {
            continue;
        };
        if url.is_empty() {
            continue;
        }
        if let Ok(Some(layer)) = card.query_selector(layer_selector) {
            if let Ok(layer) = layer.dyn_into::<web::HtmlElement>() {
                dom::set_style(&layer, "background-image", &format!("url({url})"));
            }
        }
    }
}
