#![cfg(target_arch = "wasm32")]
use crate::constants::{ATTR_FX, ATTR_LOG_LEVEL, CARD_BACKGROUNDS, REVEALS};
use crate::core::{log_level, Features, ReadyState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod backdrop;
mod cards;
mod constants;
mod core;
mod counters;
mod dom;
mod events;
mod frame;
mod grid;
mod lifecycle;
mod observe;
mod overlay;
mod reveal;
mod services;

fn body_attr(document: &web::Document, name: &str) -> Option<String> {
    document.body().and_then(|b| b.get_attribute(name))
}

/// Log and swallow a component's init failure so the rest of the page still
/// gets its effects.
fn report(component: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("[{component}] init error: {:?}", e);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let level = log_level(body_attr(&document, ATTR_LOG_LEVEL).as_deref());
    console_log::init_with_level(level).ok();
    log::info!("site-fx starting");

    if ReadyState::parse(&document.ready_state()).awaits_dom() {
        let doc = document.clone();
        let closure = Closure::once(move || init(&doc));
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            closure.as_ref().unchecked_ref(),
        )?;
        closure.forget();
    } else {
        init(&document);
    }
    lifecycle::wire_loaded(&document);
    Ok(())
}

fn init(document: &web::Document) {
    let features = Features::from_attr(body_attr(document, ATTR_FX).as_deref());
    log::info!("[init] {:?}", features);

    lifecycle::pause_entry_animations(document);
    lifecycle::run_loader(document);
    events::wire_nav_scroll(document);

    for entry in &REVEALS {
        report("reveal", reveal::wire_reveal(document, entry));
    }
    lifecycle::wire_smooth_scroll(document);
    if features.magnetic {
        events::wire_magnetic(document);
    }
    if features.tilt {
        events::wire_tilt(document);
    }
    for (card_sel, layer_sel) in CARD_BACKGROUNDS {
        reveal::apply_card_backgrounds(document, card_sel, layer_sel);
    }
    report("services", services::wire_service_cycle(document));
    events::wire_work_hover(document);
    if features.parallax {
        events::wire_parallax(document);
    }
    let menu = lifecycle::wire_mobile_menu(document);
    report("counter", counters::wire_counters(document));
    report("backdrop", backdrop::wire_backdrop(document));

    let card_ctl = match cards::wire_cards(document) {
        Ok(c) => c,
        Err(e) => {
            log::error!("[cards] init error: {:?}", e);
            None
        }
    };
    events::wire_global_keydown(card_ctl, menu);

    if features.grid {
        report("grid", grid::wire_grid(document));
    }
    if features.cursor {
        report("cursor", events::wire_cursor(document));
    }
}
