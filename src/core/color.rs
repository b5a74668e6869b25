use std::fmt;

/// Picker color. `h` in degrees [0, 360), `s` and `v` in percent [0, 100].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HsvColor {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Default for HsvColor {
    fn default() -> Self {
        Self {
            h: 0.0,
            s: 100.0,
            v: 100.0,
        }
    }
}

/// Same color expressed with a lightness axis, all channels in the units CSS expects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HslColor {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HsvColor {
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    pub fn to_hsl(self) -> HslColor {
        let s = self.s / 100.0;
        let v = self.v / 100.0;
        let l = v * (1.0 - s / 2.0);
        let s_hsl = if l == 0.0 || l == 1.0 {
            0.0
        } else {
            (v - l) / l.min(1.0 - l)
        };
        HslColor {
            h: self.h,
            s: s_hsl * 100.0,
            l: l * 100.0,
        }
    }

    /// CSS color string for canvas fill/stroke styles.
    pub fn css(self) -> String {
        self.to_hsl().to_string()
    }

    pub fn to_rgb(self) -> RgbColor {
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let v = (self.v / 100.0).clamp(0.0, 1.0);
        let c = v * s;
        let h6 = wrap_degrees(self.h) / 60.0;
        let x = c * (1.0 - (h6 % 2.0 - 1.0).abs());
        let m = v - c;
        let (r1, g1, b1) = match h6 as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let to_byte = |f: f32| round_half_up((f + m) * 255.0).clamp(0, 255) as u8;
        RgbColor {
            r: to_byte(r1),
            g: to_byte(g1),
            b: to_byte(b1),
        }
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            round_half_up(self.h),
            round_half_up(self.s),
            round_half_up(self.l)
        )
    }
}

/// Wrap an angle in degrees into [0, 360).
#[inline]
pub fn wrap_degrees(deg: f32) -> f32 {
    let w = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if w >= 360.0 {
        0.0
    } else {
        w
    }
}

// Ties go towards +inf.
#[inline]
fn round_half_up(x: f32) -> i32 {
    (x + 0.5).floor() as i32
}
