pub mod keyboard;
pub mod pad;
pub mod picker;
pub mod pointer;

use crate::core::StrokeState;
use crate::{overlay, render};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Paint canvas handles shared by the stroke and note handlers.
#[derive(Clone)]
pub struct PaintTarget {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub stroke: Rc<RefCell<StrokeState>>,
}

impl PaintTarget {
    /// Hide the placeholder hint and blank the canvas, once per app lifetime.
    pub fn dismiss_hint(&self) {
        if !self.stroke.borrow_mut().dismiss_hint() {
            return;
        }
        if !overlay::is_draw_hint_hidden(&self.document) {
            overlay::hide_draw_hint(&self.document);
        }
        render::fill_background(&self.ctx, &self.canvas);
        log::info!("[paint] hint dismissed");
    }
}
