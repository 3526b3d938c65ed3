use crate::core::constants::{GRID_LINE_WIDTH, GRID_OVERLAY_OPACITY};
use crate::core::{axis, lattice, GridParams};
use crate::dom;
use crate::frame::{self, FrameDriver};
use glam::DVec2;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Full-viewport dotted grid that brightens around the pointer.
pub struct GridRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    params: GridParams,
    pointer: DVec2,
}

#[inline]
fn rgba_black(alpha: f64) -> String {
    format!("rgba(0, 0, 0, {alpha})")
}

impl GridRenderer {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            canvas,
            ctx,
            params: GridParams::default(),
            pointer: DVec2::ZERO,
        }
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = DVec2::new(x, y);
    }

    pub fn resize_to_viewport(&self) {
        let (w, h) = dom::viewport_size();
        self.canvas.set_width(w.max(0.0) as u32);
        self.canvas.set_height(h.max(0.0) as u32);
    }

    fn size(&self) -> DVec2 {
        DVec2::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn stroke_line(&self, from: DVec2, to: DVec2) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn draw_dots(&self, size: DVec2) {
        let ctx = &self.ctx;
        let stride = self.params.stride;
        for dot in lattice(size, self.pointer, self.params) {
            ctx.begin_path();
            _ = ctx.arc(dot.pos.x, dot.pos.y, dot.radius, 0.0, TAU);
            ctx.set_fill_style_str(&rgba_black(dot.opacity));
            ctx.fill();

            if !dot.near {
                continue;
            }
            ctx.set_stroke_style_str(&rgba_black(dot.link_opacity()));
            ctx.set_line_width(GRID_LINE_WIDTH);
            if dot.link_right {
                self.stroke_line(dot.pos, dot.pos + DVec2::new(stride, 0.0));
            }
            if dot.link_down {
                self.stroke_line(dot.pos, dot.pos + DVec2::new(0.0, stride));
            }
        }
    }

    fn draw_overlay(&self, size: DVec2) {
        self.ctx.set_stroke_style_str(&rgba_black(GRID_OVERLAY_OPACITY));
        self.ctx.set_line_width(GRID_LINE_WIDTH);
        for x in axis(size.x, self.params.stride) {
            self.stroke_line(DVec2::new(x, 0.0), DVec2::new(x, size.y));
        }
        for y in axis(size.y, self.params.stride) {
            self.stroke_line(DVec2::new(0.0, y), DVec2::new(size.x, y));
        }
    }
}

impl FrameDriver for GridRenderer {
    fn frame(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.x, size.y);
        self.draw_dots(size);
        self.draw_overlay(size);
    }
}

/// Start the grid background on `#grid-canvas`. Without the canvas or a 2D
/// context nothing starts.
pub fn wire_grid(document: &web::Document) -> anyhow::Result<()> {
    let Some(canvas) = document
        .get_element_by_id(crate::constants::GRID_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        log::debug!("[grid] no canvas");
        return Ok(());
    };
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
    else {
        log::debug!("[grid] no 2d context");
        return Ok(());
    };

    let renderer = Rc::new(RefCell::new(GridRenderer::new(canvas, ctx)));
    renderer.borrow().resize_to_viewport();

    let r = renderer.clone();
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        r.borrow_mut()
            .set_pointer(ev.client_x() as f64, ev.client_y() as f64);
    });

    let r = renderer.clone();
    dom::on_window("resize", move |_: web::Event| {
        r.borrow().resize_to_viewport();
    });

    frame::start_loop(renderer);
    log::info!("[grid] started");
    Ok(())
}
