use crate::core::ColorPicker;
use crate::dom::Listener;
use crate::render;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PickerWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub picker: Rc<RefCell<ColorPicker>>,
}

impl PickerWiring {
    /// Pointer position relative to the widget center, in CSS pixels.
    fn local_point(&self, ev: &web::MouseEvent) -> Vec2 {
        let rect = self.canvas.get_bounding_client_rect();
        let center = self.picker.borrow().geometry.center;
        Vec2::new(
            ev.client_x() as f32 - rect.left() as f32 - center,
            ev.client_y() as f32 - rect.top() as f32 - center,
        )
    }

    fn redraw(&self) {
        render::draw_picker(&self.ctx, &self.picker.borrow());
    }
}

struct DragListeners {
    mousemove: Listener,
    mouseup: Listener,
}

type DragSlot = Rc<RefCell<Option<DragListeners>>>;

fn set_drag_attached(slot: &DragSlot, on: bool) {
    if let Some(d) = slot.borrow().as_ref() {
        if on {
            d.mousemove.attach();
            d.mouseup.attach();
        } else {
            d.mousemove.detach();
            d.mouseup.detach();
        }
    }
}

/// Live picker wiring. Document-level drag listeners are attached only
/// while a gesture has focus; `teardown` (or drop) removes everything.
pub struct PickerHandle {
    mousedown: Option<Listener>,
    drag: DragSlot,
}

impl PickerHandle {
    pub fn is_dragging(&self) -> bool {
        self.drag
            .borrow()
            .as_ref()
            .map(|d| d.mousemove.is_attached())
            .unwrap_or(false)
    }

    pub fn teardown(&mut self) {
        self.mousedown.take();
        // breaks the slot <-> handler cycle
        self.drag.borrow_mut().take();
    }
}

impl Drop for PickerHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

pub fn wire_picker(w: PickerWiring) -> PickerHandle {
    w.redraw();
    let drag: DragSlot = Rc::new(RefCell::new(None));

    let w_move = w.clone();
    let mousemove = Listener::detached(&w.document, "mousemove", move |ev: web::MouseEvent| {
        let p = w_move.local_point(&ev);
        let changed = w_move.picker.borrow_mut().drag(p);
        if changed {
            w_move.redraw();
        }
    });

    let w_up = w.clone();
    let drag_up = drag.clone();
    let mouseup = Listener::detached(&w.document, "mouseup", move |_ev: web::MouseEvent| {
        w_up.picker.borrow_mut().release();
        set_drag_attached(&drag_up, false);
    });
    *drag.borrow_mut() = Some(DragListeners { mousemove, mouseup });

    let w_down = w.clone();
    let drag_down = drag.clone();
    let mousedown = Listener::attached(&w.canvas, "mousedown", move |ev: web::MouseEvent| {
        ev.prevent_default();
        let p = w_down.local_point(&ev);
        let (changed, focus) = {
            let mut picker = w_down.picker.borrow_mut();
            let changed = picker.press(p);
            (changed, picker.focus())
        };
        if changed {
            w_down.redraw();
        }
        if let Some(focus) = focus {
            log::debug!("[picker] drag {:?}", focus);
            set_drag_attached(&drag_down, true);
        }
    });

    PickerHandle {
        mousedown: Some(mousedown),
        drag,
    }
}
