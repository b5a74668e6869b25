use std::cell::Cell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// An event listener that stays registered until detached or dropped.
///
/// Never drop a `Listener` from inside its own handler; detach it instead.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
    attached: Cell<bool>,
}

impl Listener {
    /// Build the listener without registering it.
    pub fn detached<E: JsCast + 'static>(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            handler(ev.unchecked_into::<E>());
        }) as Box<dyn FnMut(web::Event)>);
        Self {
            target: target.clone(),
            event,
            closure,
            attached: Cell::new(false),
        }
    }

    pub fn attached<E: JsCast + 'static>(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(E) + 'static,
    ) -> Self {
        let listener = Self::detached(target, event, handler);
        listener.attach();
        listener
    }

    pub fn attach(&self) {
        if self.attached.get() {
            return;
        }
        match self
            .target
            .add_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            Ok(()) => self.attached.set(true),
            Err(e) => log::error!("add {} listener: {:?}", self.event, e),
        }
    }

    pub fn detach(&self) {
        if !self.attached.replace(false) {
            return;
        }
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.detach();
    }
}
