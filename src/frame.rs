use crate::core::NotePad;
use crate::surface::CanvasSurface;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub pad: Rc<RefCell<NotePad>>,
    pub surface: CanvasSurface,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.frames += 1;
        let finished = self.pad.borrow_mut().render_frame(&mut self.surface);
        if finished > 0 {
            log::debug!(
                "[frame] {} finished {} effect(s), {} active",
                self.frames,
                finished,
                self.pad.borrow().effects().len()
            );
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to the running `requestAnimationFrame` loop. Cancelling (or
/// dropping) it removes the pending frame request and frees the callback.
pub struct AnimationLoop {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    pub fn is_running(&self) -> bool {
        self.tick.borrow().is_some()
    }

    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        if self.tick.borrow_mut().take().is_some() {
            log::info!("[frame] loop stopped");
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        // re-arm only while the loop has not been cancelled
        pending_clone.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));
    pending.set(request_frame(&tick));
    AnimationLoop { tick, pending }
}
