use super::PaintTarget;
use crate::audio::SampleBank;
use crate::constants::{JUMPING_CLASS, NOTE_INDEX_ATTR, PAD_BUTTON_CLASS};
use crate::core::{button_placement, NoteIndex, NotePad, PaintConfig};
use crate::dom::Listener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything a note trigger touches: pad state, audio, buttons and the paint hint.
#[derive(Clone)]
pub struct PadWiring {
    pub pad: Rc<RefCell<NotePad>>,
    pub player: Rc<RefCell<SampleBank>>,
    pub buttons: Rc<Vec<web::Element>>,
    pub paint: PaintTarget,
}

impl PadWiring {
    pub fn play(&self, index: NoteIndex) {
        let played = {
            let mut player = self.player.borrow_mut();
            self.pad.borrow_mut().trigger(index, &mut *player)
        };
        if played {
            self.after_trigger(index);
        }
    }

    /// Handle a `KeyboardEvent.key` value. Returns whether it was a pad key.
    pub fn press_key(&self, key: &str) -> bool {
        let index = {
            let mut player = self.player.borrow_mut();
            self.pad.borrow_mut().press_key(key, &mut *player)
        };
        match index {
            Some(i) => {
                self.after_trigger(i);
                true
            }
            None => false,
        }
    }

    fn after_trigger(&self, index: NoteIndex) {
        if let Some(button) = self.buttons.get(index) {
            _ = button.class_list().add_1(JUMPING_CLASS);
        }
        self.paint.dismiss_hint();
    }

    fn end_jump(&self, index: NoteIndex) {
        self.pad.borrow_mut().clear_jump(index);
        if let Some(button) = self.buttons.get(index) {
            _ = button.class_list().remove_1(JUMPING_CLASS);
        }
    }
}

/// Create one button per note inside `container`, positioned by the pad layout.
pub fn build_buttons(
    document: &web::Document,
    container: &web::Element,
    pad: &NotePad,
    config: &PaintConfig,
) -> anyhow::Result<Vec<web::Element>> {
    let mut buttons = Vec::with_capacity(pad.keymap().len());
    for key in pad.keymap().configs() {
        let button = document
            .create_element("button")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let place = button_placement(key.index);
        let style = format!(
            "--x: {}%; --y: {}%; width: {}%; height: {}%; background-image: url({}); \
             background-size: auto 100%; background-repeat: no-repeat; background-position: center",
            place.x,
            place.y,
            place.width,
            place.height,
            config.sprite_url(key.sprite)
        );
        _ = button.set_attribute("class", PAD_BUTTON_CLASS);
        _ = button.set_attribute("style", &style);
        _ = button.set_attribute(NOTE_INDEX_ATTR, &key.index.to_string());
        if let Some(symbol) = key.symbol {
            _ = button.set_attribute("aria-label", &format!("note {} ({})", key.index, symbol));
        }
        container
            .append_child(&button)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        buttons.push(button);
    }
    Ok(buttons)
}

/// Click and animation-end handlers for every pad button.
pub fn wire_buttons(w: &PadWiring) -> Vec<Listener> {
    let mut listeners = Vec::with_capacity(w.buttons.len() * 2);
    for (index, button) in w.buttons.iter().enumerate() {
        let w_click = w.clone();
        listeners.push(Listener::attached(button, "click", move |_ev: web::MouseEvent| {
            w_click.play(index);
        }));
        let w_end = w.clone();
        listeners.push(Listener::attached(button, "animationend", move |_ev: web::Event| {
            w_end.end_jump(index);
        }));
    }
    listeners
}
