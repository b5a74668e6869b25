#![cfg(target_arch = "wasm32")]
use crate::core::{
    lifecycle_action, ColorPicker, KeyMap, LifecycleAction, NotePad, PageTransition, PaintConfig,
    StrokeState,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod surface;

use constants::*;

/// Everything that must be released when the page is unmounted.
struct AppHandle {
    animation: frame::AnimationLoop,
    picker: events::picker::PickerHandle,
    listeners: Vec<dom::Listener>,
}

impl Drop for AppHandle {
    fn drop(&mut self) {
        self.animation.cancel();
        if self.picker.is_dragging() {
            log::debug!("[picker] drag interrupted by teardown");
        }
        self.picker.teardown();
        self.listeners.clear();
        log::info!("[app] torn down");
    }
}

thread_local! {
    static APP: RefCell<Option<AppHandle>> = RefCell::new(None);
}

fn read_config(document: &web::Document) -> PaintConfig {
    let mut config = PaintConfig::default();
    if let Some(root) = document.get_element_by_id(APP_ROOT_ID) {
        config.apply_overrides(
            root.get_attribute(ATTR_ASSET_BASE).as_deref(),
            root.get_attribute(ATTR_SEED).as_deref(),
            root.get_attribute(ATTR_PICKER_SIZE).as_deref(),
        );
    }
    config
}

fn is_mounted() -> bool {
    APP.with(|app| app.borrow().is_some())
}

// Never owned by `AppHandle`: teardown runs inside these handlers.
fn wire_page_lifecycle() {
    let Some(window) = web::window() else {
        return;
    };
    for (event, transition) in [
        ("pagehide", PageTransition::Hide),
        ("pageshow", PageTransition::Show),
    ] {
        let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
            let persisted = ev.persisted();
            match lifecycle_action(transition, persisted, is_mounted()) {
                LifecycleAction::Teardown => teardown(),
                LifecycleAction::Mount => {
                    log::info!("[app] restored from back/forward cache");
                    mount();
                }
                LifecycleAction::Keep => {}
            }
        }) as Box<dyn FnMut(web::PageTransitionEvent)>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("paint-pad starting");

    wire_page_lifecycle();
    mount();
    Ok(())
}

/// (Re)build the page: any previous instance is torn down first.
#[wasm_bindgen]
pub fn mount() {
    teardown();
    match init() {
        Ok(handle) => APP.with(|app| *app.borrow_mut() = Some(handle)),
        Err(e) => log::error!("init error: {:?}", e),
    }
}

/// Stop the render loop and detach every listener.
#[wasm_bindgen]
pub fn teardown() {
    let previous = APP.with(|app| app.borrow_mut().take());
    drop(previous);
}

fn init() -> anyhow::Result<AppHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = read_config(&document);
    log::info!(
        "[app] canvas={}x{} picker={} assets={} seed={:?}",
        config.canvas_width,
        config.canvas_height,
        config.picker_size,
        config.asset_base,
        config.seed
    );

    // Paint canvas
    let paint_canvas: web::HtmlCanvasElement = dom::element_by_id(&document, PAINT_CANVAS_ID)?;
    paint_canvas.set_width(config.canvas_width);
    paint_canvas.set_height(config.canvas_height);
    let paint_ctx = dom::context_2d(&paint_canvas)?;

    let stroke = Rc::new(RefCell::new(StrokeState::new()));
    if overlay::is_draw_hint_hidden(&document) {
        stroke.borrow_mut().dismiss_hint();
    }
    let paint = events::PaintTarget {
        document: document.clone(),
        canvas: paint_canvas.clone(),
        ctx: paint_ctx.clone(),
        stroke,
    };

    // Color picker
    let picker_canvas: web::HtmlCanvasElement = dom::element_by_id(&document, PICKER_CANVAS_ID)?;
    let picker_px = config.picker_size.round().max(1.0) as u32;
    picker_canvas.set_width(picker_px);
    picker_canvas.set_height(picker_px);
    let picker = Rc::new(RefCell::new(ColorPicker::new(
        config.picker_size,
        config.initial_color,
    )));
    let picker_handle = events::picker::wire_picker(events::picker::PickerWiring {
        document: document.clone(),
        canvas: picker_canvas.clone(),
        ctx: dom::context_2d(&picker_canvas)?,
        picker: picker.clone(),
    });

    // Music pad
    let keymap = Rc::new(KeyMap::standard());
    let pad = Rc::new(RefCell::new(NotePad::new(keymap.clone(), config.seed)));
    let player = Rc::new(RefCell::new(audio::SampleBank::new(&config.sounds_base())));
    let pad_container: web::Element = dom::element_by_id(&document, PAD_KEYS_ID)?;
    pad_container.set_inner_html("");
    let buttons = events::pad::build_buttons(&document, &pad_container, &pad.borrow(), &config)?;
    let pad_wiring = events::pad::PadWiring {
        pad: pad.clone(),
        player,
        buttons: Rc::new(buttons),
        paint: paint.clone(),
    };
    log::info!("[pad] {} notes wired", keymap.len());

    let mut listeners = events::pointer::wire_stroke_handlers(&paint, &picker);
    listeners.extend(events::pad::wire_buttons(&pad_wiring));
    listeners.extend(events::keyboard::wire_global_keydown(pad_wiring));

    // Effect render loop on the paint canvas
    let atlas = surface::SpriteAtlas::load(&config)?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        pad,
        surface: surface::CanvasSurface::new(paint_canvas, paint_ctx, atlas),
        frames: 0,
    }));
    let animation = frame::start_loop(frame_ctx);
    if !animation.is_running() {
        log::warn!("[frame] animation loop did not start");
    }

    Ok(AppHandle {
        animation,
        picker: picker_handle,
        listeners,
    })
}
