use crate::constants::ACTIVE;
use web_sys as web;

// Backdrop behind an expanded card, plus the page scroll lock that goes with it.

#[inline]
pub fn show(overlay: &web::Element) {
    _ = overlay.class_list().add_1(ACTIVE);
}

#[inline]
pub fn hide(overlay: &web::Element) {
    _ = overlay.class_list().remove_1(ACTIVE);
}

pub fn lock_scroll(document: &web::Document) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("overflow", "hidden");
    }
}

pub fn unlock_scroll(document: &web::Document) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("overflow", "");
    }
}
