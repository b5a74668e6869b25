use super::color::{wrap_degrees, HsvColor};
use super::constants::*;
use glam::Vec2;
use std::f32::consts::{PI, SQRT_2};

/// Which channel(s) a pointer gesture on the picker is editing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Hue,
    SaturationValue,
}

/// One 1°-wide arc of the hue ring. Angles are canvas radians.
#[derive(Clone, Copy, Debug)]
pub struct RingSegment {
    pub start_rad: f32,
    pub end_rad: f32,
    pub color: HsvColor,
}

/// Axis-aligned rectangle in widget pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Rasterized saturation/value square, ready for `putImageData`.
pub struct SquareRaster {
    pub origin: i32,
    pub side: u32,
    pub rgba: Vec<u8>,
}

/// Fixed layout of a picker widget of diameter `size`.
///
/// Points passed to the hit-testing helpers are relative to the widget
/// center (x right, y down). Points returned by the drawing helpers are in
/// widget pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickerGeometry {
    pub size: f32,
    pub center: f32,
    pub radius_outside: f32,
    pub radius_inside: f32,
    pub square_half: f32,
    pub hue_tip_radius: f32,
    pub sv_tip_radius: f32,
}

impl PickerGeometry {
    pub fn new(size: f32) -> Self {
        let radius_outside = size / 2.0;
        let radius_inside = radius_outside * PICKER_INNER_RATIO;
        Self {
            size,
            center: size / 2.0,
            radius_outside,
            radius_inside,
            square_half: radius_inside / SQRT_2,
            hue_tip_radius: size * PICKER_HUE_TIP_RATIO,
            sv_tip_radius: size * PICKER_SV_TIP_RATIO,
        }
    }

    #[inline]
    pub fn ring_width(&self) -> f32 {
        self.radius_outside - self.radius_inside
    }

    /// Radius at which the ring strokes and the hue indicator are drawn.
    #[inline]
    pub fn ring_mid_radius(&self) -> f32 {
        self.radius_inside + self.ring_width() / 2.0
    }

    pub fn classify(&self, p: Vec2) -> Option<Focus> {
        if p.length() > self.radius_inside {
            Some(Focus::Hue)
        } else if p.x.abs() <= self.square_half && p.y.abs() <= self.square_half {
            Some(Focus::SaturationValue)
        } else {
            None
        }
    }

    pub fn hue_at(&self, p: Vec2) -> f32 {
        wrap_degrees(p.y.atan2(p.x).to_degrees() + PICKER_HUE_OFFSET_DEG)
    }

    /// Saturation and value for a point, clamped to [0, 100] however far
    /// outside the square it lies.
    pub fn sat_val_at(&self, p: Vec2) -> (f32, f32) {
        let side = self.square_half * 2.0;
        let s = 100.0 * (p.x / side + 0.5);
        let v = 100.0 * (0.5 - p.y / side);
        (s.clamp(0.0, 100.0), v.clamp(0.0, 100.0))
    }

    /// Write the focused channel(s) for point `p` into `color`.
    pub fn apply(&self, focus: Focus, p: Vec2, color: HsvColor) -> HsvColor {
        match focus {
            Focus::Hue => HsvColor {
                h: self.hue_at(p),
                ..color
            },
            Focus::SaturationValue => {
                let (s, v) = self.sat_val_at(p);
                HsvColor { s, v, ..color }
            }
        }
    }

    pub fn ring_segments(&self) -> impl Iterator<Item = RingSegment> {
        (0..PICKER_RING_SEGMENTS).map(|i| {
            let deg = i as f32;
            RingSegment {
                start_rad: (deg - 1.0).to_radians(),
                end_rad: deg.to_radians(),
                color: HsvColor::new(wrap_degrees(deg + PICKER_HUE_OFFSET_DEG), 100.0, 100.0),
            }
        })
    }

    /// Pixel range covered by the square, in widget pixels (end exclusive).
    pub fn square_pixel_range(&self) -> (i32, i32) {
        let start = (self.center - self.square_half).round() as i32;
        let end = (self.center + self.square_half).round() as i32;
        (start, end)
    }

    pub fn square_pixel_color(&self, h: f32, x: i32, y: i32) -> HsvColor {
        let side = self.square_half * 2.0;
        let dx = x as f32 - self.center;
        let dy = y as f32 - self.center;
        HsvColor::new(h, 100.0 * (dx / side + 0.5), 100.0 * (0.5 - dy / side))
    }

    pub fn rasterize_square(&self, h: f32) -> SquareRaster {
        let (start, end) = self.square_pixel_range();
        let side = (end - start).max(0) as u32;
        let mut rgba = Vec::with_capacity(side as usize * side as usize * 4);
        for y in start..end {
            for x in start..end {
                let rgb = self.square_pixel_color(h, x, y).to_rgb();
                rgba.extend_from_slice(&[rgb.r, rgb.g, rgb.b, 255]);
            }
        }
        SquareRaster {
            origin: start,
            side,
            rgba,
        }
    }

    pub fn hue_indicator(&self, h: f32) -> Vec2 {
        let angle = (h - PICKER_HUE_OFFSET_DEG) * PI / 180.0;
        let r = self.ring_mid_radius();
        Vec2::new(self.center + r * angle.cos(), self.center + r * angle.sin())
    }

    pub fn sat_val_indicator(&self, s: f32, v: f32) -> Vec2 {
        let side = self.square_half * 2.0;
        Vec2::new(
            self.center - self.square_half + (s / 100.0) * side,
            self.center + self.square_half - (v / 100.0) * side,
        )
    }

    pub fn swatch_rect(&self) -> Rect {
        let side = self.size * PICKER_SWATCH_RATIO;
        let margin = self.center * PICKER_SWATCH_MARGIN_RATIO;
        Rect {
            x: margin,
            y: self.size - margin - side,
            w: side,
            h: side,
        }
    }
}

/// Picker state: geometry, current color and the active drag focus.
#[derive(Clone, Debug)]
pub struct ColorPicker {
    pub geometry: PickerGeometry,
    pub color: HsvColor,
    focus: Option<Focus>,
}

impl ColorPicker {
    pub fn new(size: f32, color: HsvColor) -> Self {
        Self {
            geometry: PickerGeometry::new(size),
            color,
            focus: None,
        }
    }

    pub fn focus(&self) -> Option<Focus> {
        self.focus
    }

    /// Start a gesture at `p` (center-relative). Returns true when the color changed.
    ///
    /// Presses outside both the ring and the square set no focus and are ignored.
    pub fn press(&mut self, p: Vec2) -> bool {
        self.focus = self.geometry.classify(p);
        self.update(p)
    }

    /// Continue the current gesture. No-op without focus.
    pub fn drag(&mut self, p: Vec2) -> bool {
        self.update(p)
    }

    pub fn release(&mut self) {
        self.focus = None;
    }

    fn update(&mut self, p: Vec2) -> bool {
        let Some(focus) = self.focus else {
            return false;
        };
        let next = self.geometry.apply(focus, p, self.color);
        let changed = next != self.color;
        self.color = next;
        changed
    }
}
