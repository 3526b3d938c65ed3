use crate::constants::{
    CURSOR_HOVER, CURSOR_TARGETS, CUSTOM_CURSOR, MAGNETIC_BTN, TILT_CARD, WORK_ITEM,
};
use crate::core::constants::WORK_ITEM_DIM_OPACITY;
use crate::core::{magnetic_offset, magnetic_transform, tilt_reset, tilt_transform, MAGNETIC_RESET};
use crate::dom;
use glam::DVec2;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::MouseEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Buttons drift toward the cursor while hovered.
pub fn wire_magnetic(document: &web::Document) {
    let buttons = dom::query_all(document, MAGNETIC_BTN);
    for btn in &buttons {
        let el = btn.clone();
        dom::listen(btn, "mousemove", move |ev: web::MouseEvent| {
            let offset = magnetic_offset(client_pos(&ev), dom::rect_center(&el));
            dom::set_style(&el, "transform", &magnetic_transform(offset));
        });
        let el = btn.clone();
        dom::listen(btn, "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&el, "transform", MAGNETIC_RESET);
        });
    }
    log::debug!("[pointer] magnetic buttons: {}", buttons.len());
}

/// Cards rotate slightly toward the cursor.
pub fn wire_tilt(document: &web::Document) {
    let cards = dom::query_all(document, TILT_CARD);
    for card in &cards {
        let el = card.clone();
        dom::listen(card, "mousemove", move |ev: web::MouseEvent| {
            let offset = client_pos(&ev) - dom::rect_center(&el);
            dom::set_style(&el, "transform", &tilt_transform(offset));
        });
        let el = card.clone();
        dom::listen(card, "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&el, "transform", &tilt_reset());
        });
    }
    log::debug!("[pointer] tilt cards: {}", cards.len());
}

/// Hovering one work item dims all the others.
pub fn wire_work_hover(document: &web::Document) {
    let items = Rc::new(dom::query_all(document, WORK_ITEM));
    let dim = WORK_ITEM_DIM_OPACITY.to_string();
    for (i, item) in items.iter().enumerate() {
        let all = items.clone();
        let dim = dim.clone();
        dom::listen(item, "mouseenter", move |_: web::MouseEvent| {
            for (j, other) in all.iter().enumerate() {
                if j != i {
                    dom::set_style(other, "opacity", &dim);
                }
            }
        });
        let all = items.clone();
        dom::listen(item, "mouseleave", move |_: web::MouseEvent| {
            for other in all.iter() {
                dom::set_style(other, "opacity", "1");
            }
        });
    }
}

/// Custom cursor dot following the pointer.
pub fn wire_cursor(document: &web::Document) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    let cursor = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    cursor.set_class_name(CUSTOM_CURSOR);
    body.append_child(&cursor)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let c = cursor.clone();
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        dom::set_style(&c, "left", &format!("{}px", ev.client_x()));
        dom::set_style(&c, "top", &format!("{}px", ev.client_y()));
    });

    for el in dom::query_all(document, CURSOR_TARGETS) {
        let c = cursor.clone();
        dom::listen(&el, "mouseenter", move |_: web::MouseEvent| {
            dom::add_class(&c, CURSOR_HOVER)
        });
        let c = cursor.clone();
        dom::listen(&el, "mouseleave", move |_: web::MouseEvent| {
            dom::remove_class(&c, CURSOR_HOVER)
        });
    }
    log::info!("[pointer] custom cursor on");
    Ok(())
}
