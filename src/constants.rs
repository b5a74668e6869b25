// DOM contract with the host page.

pub const APP_ROOT_ID: &str = "paint-app";
pub const PAINT_CANVAS_ID: &str = "paint-canvas";
pub const PICKER_CANVAS_ID: &str = "picker-canvas";
pub const PAD_KEYS_ID: &str = "pad-keys";
pub const DRAW_HINT_ID: &str = "draw-hint";

// Optional overrides read from the app root
pub const ATTR_ASSET_BASE: &str = "data-asset-base";
pub const ATTR_SEED: &str = "data-seed";
pub const ATTR_PICKER_SIZE: &str = "data-picker-size";

// Pad button styling hooks
pub const PAD_BUTTON_CLASS: &str = "btn btn-basic jumpable";
pub const JUMPING_CLASS: &str = "jumping";
pub const NOTE_INDEX_ATTR: &str = "data-note";
