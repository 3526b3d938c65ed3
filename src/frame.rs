use crate::core::FrameGate;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Anything redrawn once per animation frame.
pub trait FrameDriver {
    fn frame(&mut self);
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request(tick: &TickSlot) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `driver` every frame while the page is visible.
///
/// Hiding the page drops the pending frame instead of rescheduling; showing it
/// again requests a single frame, so there is never more than one loop.
pub fn start_loop<D: FrameDriver + 'static>(driver: Rc<RefCell<D>>) {
    let gate = Rc::new(RefCell::new(FrameGate::new()));
    let tick: TickSlot = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let gate_tick = gate.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !gate_tick.borrow_mut().on_frame() {
            return;
        }
        driver.borrow_mut().frame();
        request(&tick_clone);
    }) as Box<dyn FnMut()>));

    if let Some(document) = crate::dom::window_document() {
        if document.hidden() {
            gate.borrow_mut().pause();
        }
        let doc = document.clone();
        let gate_vis = gate.clone();
        let tick_vis = tick.clone();
        crate::dom::listen(&document, "visibilitychange", move |_: web::Event| {
            if doc.hidden() {
                gate_vis.borrow_mut().pause();
                log::debug!("[frame] paused");
            } else if gate_vis.borrow_mut().resume() {
                log::debug!("[frame] resumed");
                request(&tick_vis);
            }
        });
    }

    if gate.borrow_mut().start() {
        request(&tick);
    }
}
