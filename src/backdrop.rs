use crate::constants::{ACTIVE, ATTR_BG_COLOR, BG_BAND_MARGIN, BG_BLOB, BG_LAYER, BG_SECTION, BLOB_COLOR_PROP};
use crate::core::{Backdrop, BackdropChange};
use crate::{dom, observe};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct BackdropLayer {
    root: Option<web::HtmlElement>,
    layer: Option<web::HtmlElement>,
    blob: Option<web::HtmlElement>,
}

impl BackdropLayer {
    fn restart_blob(&self) {
        if let Some(blob) = &self.blob {
            // Force a reflow so the entry animation runs again.
            dom::remove_class(blob, ACTIVE);
            _ = blob.offset_width();
            dom::add_class(blob, ACTIVE);
        }
    }

    fn apply(&self, change: &BackdropChange) {
        match change {
            BackdropChange::Recolor { color } => {
                if let Some(layer) = &self.layer {
                    dom::set_style(layer, "background-color", color);
                }
                if let Some(root) = &self.root {
                    dom::set_style(root, BLOB_COLOR_PROP, color);
                }
                self.restart_blob();
            }
            BackdropChange::ActivateBlob => self.restart_blob(),
            BackdropChange::DeactivateBlob => {
                if let Some(blob) = &self.blob {
                    dom::remove_class(blob, ACTIVE);
                }
            }
        }
    }
}

/// Recolor the page background as `[data-bg-color]` sections pass through
/// the central band of the viewport.
pub fn wire_backdrop(document: &web::Document) -> anyhow::Result<()> {
    let sections = dom::query_all(document, BG_SECTION);
    if sections.is_empty() {
        log::debug!("[backdrop] no colored sections");
        return Ok(());
    }
    let out = BackdropLayer {
        root: document
            .document_element()
            .and_then(|e| e.dyn_into::<web::HtmlElement>().ok()),
        layer: dom::query_one(document, BG_LAYER),
        blob: dom::query_one(document, BG_BLOB),
    };
    let state = Rc::new(RefCell::new(Backdrop::new()));
    let sections = Rc::new(sections);

    let sections_cb = sections.clone();
    let obs = observe::observer(0.0, BG_BAND_MARGIN, move |_, el, intersecting| {
        let Some(index) = dom::index_of(&sections_cb, &el) else {
            return;
        };
        let change = if intersecting {
            let color = el.get_attribute(ATTR_BG_COLOR).unwrap_or_default();
            state.borrow_mut().enter(index, &color)
        } else {
            state.borrow_mut().exit(index)
        };
        if let Some(change) = change {
            log::debug!("[backdrop] section {index}: {:?}", change);
            out.apply(&change);
        }
    })?;
    observe::observe_all(&obs, &sections);
    log::info!("[backdrop] watching {} sections", sections.len());
    Ok(())
}
