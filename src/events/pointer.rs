use super::PaintTarget;
use crate::core::{raster_point, ColorPicker};
use crate::dom::Listener;
use crate::render;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    raster_point(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

/// Freehand stroke handlers on the paint canvas.
pub fn wire_stroke_handlers(target: &PaintTarget, picker: &Rc<RefCell<ColorPicker>>) -> Vec<Listener> {
    vec![
        wire_mousedown(target),
        wire_mousemove(target, picker),
        wire_mouseup(target),
    ]
}

fn wire_mousedown(target: &PaintTarget) -> Listener {
    let t = target.clone();
    Listener::attached(&target.canvas, "mousedown", move |ev: web::MouseEvent| {
        ev.prevent_default();
        t.dismiss_hint();
        t.stroke.borrow_mut().begin();
    })
}

fn wire_mousemove(target: &PaintTarget, picker: &Rc<RefCell<ColorPicker>>) -> Listener {
    let t = target.clone();
    let picker = picker.clone();
    Listener::attached(&target.canvas, "mousemove", move |ev: web::MouseEvent| {
        if !t.stroke.borrow().is_drawing() {
            return;
        }
        let Some(p) = pointer_canvas_px(&ev, &t.canvas) else {
            return;
        };
        let segment = t.stroke.borrow_mut().extend(p);
        if let Some(seg) = segment {
            render::draw_segment(&t.ctx, seg, picker.borrow().color);
        }
    })
}

// Listens on the window so releasing outside the canvas still ends the stroke.
fn wire_mouseup(target: &PaintTarget) -> Listener {
    let t = target.clone();
    let window: web::EventTarget = match web::window() {
        Some(w) => w.into(),
        None => target.canvas.clone().into(),
    };
    Listener::attached(&window, "mouseup", move |_ev: web::MouseEvent| {
        t.stroke.borrow_mut().end();
    })
}
