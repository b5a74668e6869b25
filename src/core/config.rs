use super::color::HsvColor;
use super::constants::PICKER_SIZE_MAX;
use super::effects::Sprite;

/// Startup configuration for the paint page.
///
/// Defaults describe the stock page; the web front-end overrides individual
/// fields from `data-*` attributes on the app root.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintConfig {
    /// Native raster size of the paint canvas.
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Diameter of the color picker widget in pixels.
    pub picker_size: f32,
    pub initial_color: HsvColor,
    /// Prefix for sprite and sound URLs, with trailing slash.
    pub asset_base: String,
    /// Seed for effect randomness; `None` draws one from the platform.
    pub seed: Option<u64>,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1920,
            canvas_height: 1080,
            picker_size: 200.0,
            initial_color: HsvColor::default(),
            asset_base: "assets/".to_string(),
            seed: None,
        }
    }
}

impl PaintConfig {
    pub fn sprite_url(&self, sprite: Sprite) -> String {
        format!("{}{}", self.asset_base, sprite.file_name())
    }

    pub fn sounds_base(&self) -> String {
        format!("{}sounds/", self.asset_base)
    }

    /// Apply string overrides as read from the DOM. Unparseable values are
    /// logged and ignored.
    pub fn apply_overrides(
        &mut self,
        asset_base: Option<&str>,
        seed: Option<&str>,
        picker_size: Option<&str>,
    ) {
        if let Some(base) = asset_base.map(str::trim).filter(|b| !b.is_empty()) {
            self.asset_base = if base.ends_with('/') {
                base.to_string()
            } else {
                format!("{}/", base)
            };
        }
        if let Some(raw) = seed {
            match raw.trim().parse::<u64>() {
                Ok(s) => self.seed = Some(s),
                Err(e) => log::warn!("[config] ignoring seed {:?}: {}", raw, e),
            }
        }
        if let Some(raw) = picker_size {
            match raw.trim().parse::<f32>() {
                Ok(s) if s.is_finite() && s > 0.0 && s <= PICKER_SIZE_MAX => {
                    self.picker_size = s
                }
                Ok(s) => log::warn!("[config] ignoring picker size {}", s),
                Err(e) => log::warn!("[config] ignoring picker size {:?}: {}", raw, e),
            }
        }
    }
}
