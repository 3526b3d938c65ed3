use crate::constants::{ATTR_SPEED, HERO, HERO_CONTENT, NAV, PARALLAX_IMG, SCROLLED};
use crate::core::constants::NAV_SCROLLED_OFFSET;
use crate::core::{hero_parallax, image_parallax, parallax_speed, FrameLatch};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_nav_scroll(document: &web::Document) {
    let Some(nav) = dom::query_one(document, NAV) else {
        log::debug!("[scroll] no nav");
        return;
    };
    let update = move || {
        if dom::scroll_y() > NAV_SCROLLED_OFFSET {
            dom::add_class(&nav, SCROLLED);
        } else {
            dom::remove_class(&nav, SCROLLED);
        }
    };
    update();
    dom::on_window("scroll", move |_: web::Event| update());
}

struct Parallax {
    hero: Option<(web::HtmlElement, web::HtmlElement)>,
    images: Vec<(web::HtmlElement, f64)>,
}

impl Parallax {
    fn update(&self) {
        let scrolled = dom::scroll_y();
        if let Some((hero, content)) = &self.hero {
            if let Some(f) = hero_parallax(scrolled, hero.offset_height() as f64) {
                dom::set_style(content, "opacity", &f.opacity.to_string());
                dom::set_style(content, "transform", &format!("translateY({}px)", f.translate_y));
            }
        }
        if self.images.is_empty() {
            return;
        }
        let (_, viewport_h) = dom::viewport_size();
        for (img, speed) in &self.images {
            let center_y = dom::rect_center(img).y;
            let shift = image_parallax(center_y, viewport_h, *speed);
            dom::set_style(img, "transform", &format!("translateY({shift}px)"));
        }
    }
}

/// Hero fade/drift and image drift, at most once per animation frame.
pub fn wire_parallax(document: &web::Document) {
    let hero = dom::query_one(document, HERO).zip(dom::query_one(document, HERO_CONTENT));
    let images: Vec<_> = dom::query_all(document, PARALLAX_IMG)
        .into_iter()
        .map(|img| {
            let speed = parallax_speed(img.get_attribute(ATTR_SPEED).as_deref());
            (img, speed)
        })
        .collect();
    if hero.is_none() && images.is_empty() {
        log::debug!("[scroll] nothing to parallax");
        return;
    }
    let parallax = Rc::new(Parallax { hero, images });
    let latch = Rc::new(RefCell::new(FrameLatch::default()));

    dom::on_window("scroll", move |_: web::Event| {
        if !latch.borrow_mut().request() {
            return;
        }
        let parallax = parallax.clone();
        let latch = latch.clone();
        dom::next_frame(move || {
            parallax.update();
            latch.borrow_mut().release();
        });
    });
}
