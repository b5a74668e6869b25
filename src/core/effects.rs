use super::constants::*;
use glam::Vec2;
use rand::prelude::*;
use std::fmt;

/// Character image drawn by an effect; one per row of the pad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Onion,
    Miku,
    Bread,
    Teto,
}

impl Sprite {
    pub const ALL: [Sprite; 4] = [Sprite::Onion, Sprite::Miku, Sprite::Bread, Sprite::Teto];

    /// Sprite for a note index: one character per group of eight notes.
    pub fn for_note(index: usize) -> Sprite {
        Self::ALL[(index / NOTES_PER_ROW).min(Self::ALL.len() - 1)]
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Sprite::Onion => "onion.png",
            Sprite::Miku => "miku.png",
            Sprite::Bread => "bread.png",
            Sprite::Teto => "teto.png",
        }
    }
}

/// CSS filter triple applied to a sprite blit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorFilter {
    pub sepia: f32,
    pub saturate: f32,
    pub hue_rotate_deg: f32,
}

impl fmt::Display for ColorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sepia({}) saturate({}) hue-rotate({}deg)",
            self.sepia, self.saturate, self.hue_rotate_deg
        )
    }
}

/// One sprite blit: a `size`-sided square centered on `center` (surface
/// pixels), rotated, scaled and faded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteDraw {
    pub sprite: Sprite,
    pub center: Vec2,
    pub size: f32,
    pub rotation_deg: f32,
    pub scale: Vec2,
    pub alpha: f32,
    pub filter: Option<ColorFilter>,
}

/// Raster target the render loop and effects draw into.
pub trait Surface {
    /// Native pixel size of the surface.
    fn size(&self) -> Vec2;
    /// Paint `style` over the whole surface.
    fn wash(&mut self, style: &str);
    fn draw_sprite(&mut self, draw: &SpriteDraw);
}

// ---------------- Descriptors ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PositionKind {
    /// Fixed random point.
    Anchored,
    /// Fresh random point on every sub-step.
    Scatter,
    /// Springs into a random point from a random direction (back ease-out).
    Overshoot,
    /// Rests near the lower-left, then flies off towards the upper right.
    Launch,
    /// Crosses right to left on a horizontal lane drawn from [lane_min, lane_max).
    Sweep { lane_min: f32, lane_max: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RotationKind {
    /// Random start angle plus 450..900 degrees over the effect.
    Spin,
    /// Random start angle plus up to 360 degrees over the effect.
    Drift,
    /// Uniform random angle in [min, max) on every evaluation.
    Jitter { min: f32, max: f32 },
    Still,
    /// Sawtooth rock with a random period on every evaluation.
    Wobble,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleKind {
    /// Random base `u` on every evaluation, grown to `2u` by the end.
    Pulse,
    Fixed(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OpacityKind {
    Opaque,
    /// Fades linearly to half opacity.
    FadeHalf,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FilterKind {
    /// sepia 0.4, saturate 3, random hue in ±90.
    Tinted,
    /// saturate 7, random sepia below `sepia_max`, hue in ±`hue_range`
    /// once past the start delay.
    Vivid { sepia_max: f32, hue_range: f32 },
}

/// Pure description of a parametric motion effect. Holds no random state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionDescriptor {
    /// Sprite draws per frame; fractional values draw every few frames.
    pub frequency: f32,
    pub duration_sec: f32,
    pub position: PositionKind,
    pub rotation: RotationKind,
    pub scale: ScaleKind,
    pub opacity: OpacityKind,
    pub filter: FilterKind,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EffectDescriptor {
    Slide,
    Motion(MotionDescriptor),
}

// ---------------- Instances ----------------

/// Position curve with its coefficients drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PositionCurve {
    Anchored(Vec2),
    Scatter,
    Overshoot { target: Vec2, from: Vec2 },
    Launch { rest: Vec2, wobble: f32 },
    Sweep { lane: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RotationCurve {
    Spin { base: f32, sweep: f32 },
    Drift { base: f32, sweep: f32 },
    Jitter { min: f32, max: f32 },
    Still,
    Wobble,
}

/// Evaluated state of a motion effect at one progress value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    /// Center as a fraction of the surface size.
    pub position: Vec2,
    pub rotation_deg: f32,
    pub scale: Vec2,
    pub alpha: f32,
    pub filter: ColorFilter,
}

/// Slides a sprite in from off-screen left to a random point, fading in.
#[derive(Clone, Debug)]
pub struct SlideEffect {
    pub sprite: Sprite,
    pub y_fraction: f32,
    pub target_x: f32,
    progress: f32,
}

impl SlideEffect {
    pub fn new<R: Rng + ?Sized>(sprite: Sprite, rng: &mut R) -> Self {
        Self {
            sprite,
            y_fraction: rng.gen::<f32>(),
            target_x: rng.gen::<f32>() * SLIDE_TARGET_X_MAX,
            progress: 0.0,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn alpha(&self) -> f32 {
        (self.progress * 2.0).min(1.0)
    }

    /// Advance one frame and draw. The frame that reaches the end is still drawn.
    pub fn advance_and_render(&mut self, surface: &mut dyn Surface) -> bool {
        self.progress += SLIDE_SPEED_PER_FRAME;
        let active = self.progress < 1.0;

        let dims = surface.size();
        let size = dims.x * SPRITE_SIZE_RATIO;
        let eased = ease_out_quart(self.progress.min(1.0));
        let x = (SLIDE_START_X + (self.target_x - SLIDE_START_X) * eased) * dims.x;
        let y = self.y_fraction * (dims.y - size);
        surface.draw_sprite(&SpriteDraw {
            sprite: self.sprite,
            center: Vec2::new(x + size / 2.0, y + size / 2.0),
            size,
            rotation_deg: 0.0,
            scale: Vec2::ONE,
            alpha: self.alpha(),
            filter: None,
        });
        active
    }
}

/// Sprite driven by five progress-parameterized curves.
///
/// Progress advances once per frame towards `target_frames`; the sprite is
/// drawn once per whole unit of `frequency` accumulated, so a frequency
/// below one leaves gaps between draws.
#[derive(Clone, Debug)]
pub struct MotionEffect {
    pub sprite: Sprite,
    pub frequency: f32,
    pub target_frames: u32,
    pub position: PositionCurve,
    pub rotation: RotationCurve,
    pub scale: ScaleKind,
    pub opacity: OpacityKind,
    pub filter: FilterKind,
    current_frame: u32,
    substeps: f32,
    jitter: StdRng,
}

impl MotionEffect {
    pub fn new<R: Rng + ?Sized>(desc: &MotionDescriptor, sprite: Sprite, rng: &mut R) -> Self {
        let position = match desc.position {
            PositionKind::Anchored => PositionCurve::Anchored(Vec2::new(rng.gen(), rng.gen())),
            PositionKind::Scatter => PositionCurve::Scatter,
            PositionKind::Overshoot => PositionCurve::Overshoot {
                target: Vec2::new(rng.gen(), rng.gen()),
                from: Vec2::new(uniform(rng, -1.0, 1.0), uniform(rng, -1.0, 1.0)),
            },
            PositionKind::Launch => PositionCurve::Launch {
                rest: Vec2::new(rng.gen(), rng.gen()),
                wobble: uniform(rng, -1.0, 1.0),
            },
            PositionKind::Sweep { lane_min, lane_max } => PositionCurve::Sweep {
                lane: uniform(rng, lane_min, lane_max),
            },
        };
        let rotation = match desc.rotation {
            RotationKind::Spin => RotationCurve::Spin {
                base: rng.gen::<f32>() * 360.0,
                sweep: 450.0 + rng.gen::<f32>() * 450.0,
            },
            RotationKind::Drift => RotationCurve::Drift {
                base: rng.gen::<f32>() * 360.0,
                sweep: rng.gen::<f32>() * 360.0,
            },
            RotationKind::Jitter { min, max } => RotationCurve::Jitter { min, max },
            RotationKind::Still => RotationCurve::Still,
            RotationKind::Wobble => RotationCurve::Wobble,
        };
        let target_frames = (desc.duration_sec * REFERENCE_FRAME_RATE).round().max(1.0) as u32;
        Self {
            sprite,
            frequency: desc.frequency,
            target_frames,
            position,
            rotation,
            scale: desc.scale,
            opacity: desc.opacity,
            filter: desc.filter,
            current_frame: 0,
            substeps: 0.0,
            jitter: StdRng::seed_from_u64(rng.gen()),
        }
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    pub fn progress(&self) -> f32 {
        (self.current_frame as f32 / self.target_frames as f32).min(1.0)
    }

    /// Evaluate all curves at progress `t`. Curves with per-evaluation
    /// randomness consume the effect's own jitter source.
    pub fn sample(&mut self, t: f32) -> MotionSample {
        let rng = &mut self.jitter;
        let position = match self.position {
            PositionCurve::Anchored(p) => p,
            PositionCurve::Scatter => Vec2::new(rng.gen(), rng.gen()),
            PositionCurve::Overshoot { target, from } => {
                let pull = (1.0 - back_ease_out(t)) * OVERSHOOT_DRIFT;
                target - from * pull
            }
            PositionCurve::Launch { rest, wobble } => {
                let settle = (1.0 - back_ease_out(t)) * LAUNCH_WOBBLE * wobble;
                let start = Vec2::new(rest.x * 0.5, 1.0 - (rest.y + settle) * 0.5);
                if t > LAUNCH_DELAY {
                    let target = start + Vec2::from(LAUNCH_TARGET);
                    start + (start + target) * (t - LAUNCH_DELAY)
                } else {
                    start
                }
            }
            PositionCurve::Sweep { lane } => Vec2::new(SWEEP_START_X - t * SWEEP_SPAN_X, lane),
        };
        let rotation_deg = match self.rotation {
            RotationCurve::Spin { base, sweep } | RotationCurve::Drift { base, sweep } => {
                base + t * sweep
            }
            RotationCurve::Jitter { min, max } => uniform(rng, min, max),
            RotationCurve::Still => 0.0,
            RotationCurve::Wobble => -30.0 + (t * 600.0) % uniform(rng, 40.0, 80.0),
        };
        let scale = match self.scale {
            ScaleKind::Pulse => {
                let u = rng.gen::<f32>();
                Vec2::splat(u + t * u)
            }
            ScaleKind::Fixed(s) => Vec2::splat(s),
        };
        let alpha = match self.opacity {
            OpacityKind::Opaque => 1.0,
            OpacityKind::FadeHalf => 1.0 - t * FADE_HALF_RATE,
        };
        let filter = match self.filter {
            FilterKind::Tinted => ColorFilter {
                sepia: 0.4,
                saturate: 3.0,
                hue_rotate_deg: uniform(rng, -90.0, 90.0),
            },
            FilterKind::Vivid {
                sepia_max,
                hue_range,
            } => ColorFilter {
                sepia: uniform(rng, 0.0, sepia_max),
                saturate: 7.0,
                hue_rotate_deg: if t < VIVID_HUE_DELAY {
                    0.0
                } else {
                    uniform(rng, -hue_range, hue_range)
                },
            },
        };
        MotionSample {
            position,
            rotation_deg,
            scale,
            alpha,
            filter,
        }
    }

    pub fn advance_and_render(&mut self, surface: &mut dyn Surface) -> bool {
        self.current_frame += 1;
        let t = self.progress();

        self.substeps += self.frequency;
        let dims = surface.size();
        let size = dims.x * SPRITE_SIZE_RATIO;
        while self.substeps >= 1.0 {
            let s = self.sample(t);
            surface.draw_sprite(&SpriteDraw {
                sprite: self.sprite,
                center: s.position * dims,
                size,
                rotation_deg: s.rotation_deg,
                scale: s.scale,
                alpha: s.alpha,
                filter: Some(s.filter),
            });
            self.substeps -= 1.0;
        }

        self.current_frame < self.target_frames
    }
}

/// A live effect. `Active` until `advance_and_render` first returns false.
#[derive(Clone, Debug)]
pub enum Effect {
    Slide(SlideEffect),
    Motion(MotionEffect),
}

impl Effect {
    /// Build a fresh instance from `desc`, drawing every random coefficient from `rng`.
    pub fn spawn<R: Rng + ?Sized>(desc: &EffectDescriptor, sprite: Sprite, rng: &mut R) -> Self {
        match desc {
            EffectDescriptor::Slide => Effect::Slide(SlideEffect::new(sprite, rng)),
            EffectDescriptor::Motion(m) => Effect::Motion(MotionEffect::new(m, sprite, rng)),
        }
    }

    pub fn sprite(&self) -> Sprite {
        match self {
            Effect::Slide(e) => e.sprite,
            Effect::Motion(e) => e.sprite,
        }
    }

    /// Advance one frame, drawing into `surface`. Returns whether the effect is still active.
    pub fn advance_and_render(&mut self, surface: &mut dyn Surface) -> bool {
        match self {
            Effect::Slide(e) => e.advance_and_render(surface),
            Effect::Motion(e) => e.advance_and_render(surface),
        }
    }
}

#[inline]
pub fn ease_out_quart(x: f32) -> f32 {
    1.0 - (1.0 - x).powi(4)
}

#[inline]
pub fn back_ease_out(t: f32) -> f32 {
    let s = BACK_EASE_OVERSHOOT;
    let u = t - 1.0;
    u * u * ((s + 1.0) * u + s) + 1.0
}

// Uniform in [min, max); tolerates an empty range.
#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.gen::<f32>()
}
