// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Ratios of the picker diameter
    assert!(PICKER_INNER_RATIO > 0.0 && PICKER_INNER_RATIO < 1.0);
    assert!(PICKER_SWATCH_RATIO > 0.0 && PICKER_SWATCH_RATIO < 0.5);
    assert!(PICKER_HUE_OFFSET_DEG >= 0.0 && PICKER_HUE_OFFSET_DEG < 360.0);

    // Effect timing
    assert!(REFERENCE_FRAME_RATE > 0.0);
    assert!(SLIDE_SPEED_PER_FRAME > 0.0 && SLIDE_SPEED_PER_FRAME < 1.0);
    assert!(SPRITE_SIZE_RATIO > 0.0 && SPRITE_SIZE_RATIO < 1.0);
    assert!(FADE_HALF_RATE > 0.0 && FADE_HALF_RATE <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn picker_tips_fit_inside_the_ring() {
    // Tips are drawn on the ring's midline and must not spill past it
    let ring = (1.0 - PICKER_INNER_RATIO) / 2.0;
    assert!(PICKER_HUE_TIP_RATIO < ring / 2.0);
    assert!(PICKER_SV_TIP_RATIO < PICKER_HUE_TIP_RATIO);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Slides start off-screen and stop inside it
    assert!(SLIDE_START_X < 0.0);
    assert!(SLIDE_TARGET_X_MAX > 0.0 && SLIDE_TARGET_X_MAX < 1.0);

    // Sweeps start and end off-screen
    assert!(SWEEP_START_X > 1.0);
    assert!(SWEEP_START_X - SWEEP_SPAN_X < 0.0);

    // Delays are fractions of effect progress
    assert!(LAUNCH_DELAY > 0.0 && LAUNCH_DELAY < 1.0);
    assert!(VIVID_HUE_DELAY > 0.0 && VIVID_HUE_DELAY < 1.0);
}

#[test]
fn pad_grid_covers_every_note() {
    assert_eq!(NOTE_COUNT % NOTES_PER_ROW, 0);
    assert_eq!(PAD_BUTTON_X.len() * PAD_BUTTON_Y.len(), NOTE_COUNT);
    assert!(PAD_BUTTON_X.windows(2).all(|w| w[0] < w[1]));
    assert!(PAD_BUTTON_Y.windows(2).all(|w| w[0] < w[1]));
    // neighbouring buttons never overlap
    let min_gap = PAD_BUTTON_X
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold(f32::INFINITY, f32::min);
    assert!(min_gap >= PAD_BUTTON_WIDTH);
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [APP_ROOT_ID, PAINT_CANVAS_ID, PICKER_CANVAS_ID, PAD_KEYS_ID, DRAW_HINT_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(ATTR_SEED.starts_with("data-"));
    assert!(NOTE_INDEX_ATTR.starts_with("data-"));
    assert!(PAD_BUTTON_CLASS.split(' ').any(|c| c == "jumpable"));
}
