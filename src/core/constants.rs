// Tuning constants shared by the picker, the effect engine and the stroke layer.

// Animation timing
pub const REFERENCE_FRAME_RATE: f32 = 60.0; // frames per second assumed by effect durations

// Color picker geometry, as fractions of the widget diameter / outer radius
pub const PICKER_INNER_RATIO: f32 = 0.8; // inner ring radius relative to outer
pub const PICKER_HUE_OFFSET_DEG: f32 = 150.0; // hue at angle 0 of the ring
pub const PICKER_HUE_TIP_RATIO: f32 = 0.02;
pub const PICKER_SV_TIP_RATIO: f32 = 0.015;
pub const PICKER_SWATCH_RATIO: f32 = 0.1; // swatch side relative to size
pub const PICKER_SWATCH_MARGIN_RATIO: f32 = 0.05; // swatch margin relative to center
pub const PICKER_RING_SEGMENTS: u32 = 360;
pub const PICKER_SIZE_MAX: f32 = 4096.0; // largest accepted widget diameter in pixels
pub const PICKER_TIP_LINE_WIDTH: f64 = 2.0;
pub const PICKER_TIP_SHADOW_BLUR: f64 = 3.0;
pub const PICKER_TIP_STROKE: &str = "#fff";
pub const PICKER_TIP_SHADOW: &str = "rgba(0, 0, 0, 0.5)";

// Sprite effects
pub const SPRITE_SIZE_RATIO: f32 = 0.15; // sprite side relative to surface width
pub const SLIDE_SPEED_PER_FRAME: f32 = 0.03;
pub const SLIDE_START_X: f32 = -0.2;
pub const SLIDE_TARGET_X_MAX: f32 = 0.8;
pub const BACK_EASE_OVERSHOOT: f32 = 1.70158;
pub const OVERSHOOT_DRIFT: f32 = 0.75;
pub const LAUNCH_WOBBLE: f32 = 0.15;
pub const LAUNCH_DELAY: f32 = 0.3; // progress before the launch sprite takes off
pub const LAUNCH_TARGET: [f32; 2] = [3.0, -5.0];
pub const VIVID_HUE_DELAY: f32 = 0.3; // progress before vivid sprites start hue-shifting
pub const SWEEP_START_X: f32 = 1.2;
pub const SWEEP_SPAN_X: f32 = 2.4;
pub const FADE_HALF_RATE: f32 = 0.5;

// Render loop
pub const WASH_STYLE: &str = "rgba(255, 255, 255, 0.02)"; // trail fade painted every frame
pub const CANVAS_BACKGROUND: &str = "#fff";

// Freehand strokes
pub const STROKE_LINE_WIDTH: f64 = 5.0;
pub const STROKE_LINE_JOIN: &str = "round";

// Pad layout
pub const NOTE_COUNT: usize = 32;
pub const NOTES_PER_ROW: usize = 8;
pub const PAD_BUTTON_X: [f32; NOTES_PER_ROW] = [-40.0, -30.0, -20.0, -10.0, 10.0, 20.0, 30.0, 40.0];
pub const PAD_BUTTON_Y: [f32; NOTE_COUNT / NOTES_PER_ROW] = [-36.0, -12.0, 12.0, 36.0];
pub const PAD_BUTTON_WIDTH: f32 = 9.0;
pub const PAD_BUTTON_HEIGHT: f32 = 21.0;
