// Shared harness for host-side tests.
// The main crate is wasm-only, so the pure core modules are included directly.

#![allow(dead_code)]

pub mod core {
    pub mod arena {
        include!("../../src/core/arena.rs");
    }
    pub mod color {
        include!("../../src/core/color.rs");
    }
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod effects {
        include!("../../src/core/effects.rs");
    }
    pub mod keymap {
        include!("../../src/core/keymap.rs");
    }
    pub mod lifecycle {
        include!("../../src/core/lifecycle.rs");
    }
    pub mod pad {
        include!("../../src/core/pad.rs");
    }
    pub mod picker {
        include!("../../src/core/picker.rs");
    }
    pub mod stroke {
        include!("../../src/core/stroke.rs");
    }
}

use self::core::effects::{SpriteDraw, Surface};
use self::core::pad::SamplePlayer;
use glam::Vec2;

/// Surface that records every call instead of drawing.
pub struct RecordingSurface {
    pub size: Vec2,
    pub washes: Vec<String>,
    pub draws: Vec<SpriteDraw>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            washes: Vec::new(),
            draws: Vec::new(),
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn wash(&mut self, style: &str) {
        self.washes.push(style.to_string());
    }

    fn draw_sprite(&mut self, draw: &SpriteDraw) {
        self.draws.push(*draw);
    }
}

#[derive(Default)]
pub struct RecordingPlayer {
    pub played: Vec<String>,
}

impl SamplePlayer for RecordingPlayer {
    fn play(&mut self, sample: &str) {
        self.played.push(sample.to_string());
    }
}
