use super::pad::PadWiring;
use crate::dom::Listener;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, pad: &PadWiring) {
    if ev.ctrl_key() || ev.meta_key() {
        return;
    }
    if pad.press_key(&ev.key()) {
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(pad: PadWiring) -> Option<Listener> {
    let window = web::window()?;
    Some(Listener::attached(&window, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &pad);
    }))
}
