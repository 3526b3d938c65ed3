use crate::constants::{
    ACTIVE, ANCHOR_LINKS, HIDDEN, LOADED, LOADER_ID, LOADING, MOBILE_OPEN, NAV_LINKS,
    NAV_MENU_BTN, REVEAL_UP,
};
use crate::core::constants::{ANCHOR_HEADER_OFFSET, LOADER_HIDE_MS, LOADER_RELEASE_MS};
use crate::core::ReadyState;
use crate::dom;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn set_entry_animations(document: &web::Document, state: &str) {
    for el in dom::query_all(document, REVEAL_UP) {
        dom::set_style(&el, "animation-play-state", state);
    }
}

/// Hold the hero entry animations until the start-up loader has gone.
pub fn pause_entry_animations(document: &web::Document) {
    set_entry_animations(document, "paused");
}

pub fn run_loader(document: &web::Document) {
    if let Some(body) = document.body() {
        dom::add_class(&body, LOADING);
    }
    let doc = document.clone();
    Timeout::new(LOADER_HIDE_MS, move || {
        match dom::by_id(&doc, LOADER_ID) {
            Some(loader) => dom::add_class(&loader, HIDDEN),
            None => log::debug!("[loader] no #{LOADER_ID}"),
        }
        if let Some(body) = doc.body() {
            dom::remove_class(&body, LOADING);
        }
        Timeout::new(LOADER_RELEASE_MS, move || {
            set_entry_animations(&doc, "running");
            log::debug!("[loader] entry animations released");
        })
        .forget();
    })
    .forget();
}

/// Hamburger button and the link list it opens on small screens.
pub struct MobileMenu {
    button: web::HtmlElement,
    links: Option<web::HtmlElement>,
}

impl MobileMenu {
    pub fn toggle(&self) {
        _ = self.button.class_list().toggle(ACTIVE);
        if let Some(links) = &self.links {
            _ = links.class_list().toggle(MOBILE_OPEN);
        }
    }

    pub fn close(&self) {
        dom::remove_class(&self.button, ACTIVE);
        if let Some(links) = &self.links {
            dom::remove_class(links, MOBILE_OPEN);
        }
    }
}

pub fn wire_mobile_menu(document: &web::Document) -> Option<Rc<MobileMenu>> {
    let button = dom::query_one(document, NAV_MENU_BTN)?;
    let links = dom::query_one(document, NAV_LINKS);
    let menu = Rc::new(MobileMenu {
        button: button.clone(),
        links: links.clone(),
    });

    let m = menu.clone();
    dom::add_click_listener(&button, move |_| m.toggle());

    if let Some(links) = links {
        for a in dom::query_within(&links, "a") {
            let m = menu.clone();
            dom::add_click_listener(&a, move |_| m.close());
        }
    }
    Some(menu)
}

/// In-page anchors scroll smoothly, leaving room for the fixed header.
pub fn wire_smooth_scroll(document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_LINKS) {
        let doc = document.clone();
        let a = anchor.clone();
        dom::add_click_listener(&anchor, move |ev| {
            ev.prevent_default();
            let Some(href) = a.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector.
            if href.len() < 2 {
                return;
            }
            let Ok(Some(target)) = doc.query_selector(&href) else {
                return;
            };
            let Some(w) = web::window() else {
                return;
            };
            let top = target.get_bounding_client_rect().top() + dom::scroll_y() - ANCHOR_HEADER_OFFSET;
            let opts = web::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            w.scroll_to_with_scroll_to_options(&opts);
        });
    }
}

/// Mark `<body>` once every resource has loaded.
pub fn wire_loaded(document: &web::Document) {
    let mark = |doc: &web::Document| {
        if let Some(body) = doc.body() {
            dom::add_class(&body, LOADED);
        }
    };
    if ReadyState::parse(&document.ready_state()).is_loaded() {
        mark(document);
        return;
    }
    let doc = document.clone();
    let closure = wasm_bindgen::closure::Closure::once(move || {
        mark(&doc);
        log::info!("[lifecycle] loaded");
    });
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
