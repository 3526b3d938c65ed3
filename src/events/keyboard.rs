use crate::cards::{self, SharedCards};
use crate::core::{action_for_key, KeyAction};
use crate::lifecycle::MobileMenu;
use std::rc::Rc;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    cards: Option<&SharedCards>,
    menu: Option<&MobileMenu>,
) {
    match action_for_key(&ev.key()) {
        Some(KeyAction::Dismiss) => {
            if let Some(ctl) = cards {
                let expanded = ctl.borrow().current().is_some();
                if expanded {
                    cards::collapse(ctl);
                    log::debug!("[keys] collapsed card");
                }
            }
            if let Some(menu) = menu {
                menu.close();
            }
        }
        None => {}
    }
}

pub fn wire_global_keydown(cards: Option<SharedCards>, menu: Option<Rc<MobileMenu>>) {
    crate::dom::on_window("keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, cards.as_ref(), menu.as_deref());
    });
}
