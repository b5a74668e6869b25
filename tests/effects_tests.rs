// Host-side tests for sprite effect curves and lifetimes.

#![allow(dead_code)]
mod common;

use common::core::effects::*;
use common::core::keymap::COLUMN_EFFECTS;
use common::RecordingSurface;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn motion(column: usize, seed: u64) -> MotionEffect {
    match &COLUMN_EFFECTS[column] {
        EffectDescriptor::Motion(desc) => MotionEffect::new(desc, Sprite::Onion, &mut rng(seed)),
        EffectDescriptor::Slide => panic!("column {} is a slide", column),
    }
}

fn descriptor(frequency: f32, duration_sec: f32) -> MotionDescriptor {
    MotionDescriptor {
        frequency,
        duration_sec,
        position: PositionKind::Anchored,
        rotation: RotationKind::Still,
        scale: ScaleKind::Fixed(1.0),
        opacity: OpacityKind::Opaque,
        filter: FilterKind::Tinted,
    }
}

/// Run an effect until it reports inactive; returns frames taken.
fn run_to_end(effect: &mut Effect, surface: &mut RecordingSurface) -> usize {
    let mut frames = 0;
    loop {
        frames += 1;
        assert!(frames < 10_000, "effect never finished");
        if !effect.advance_and_render(surface) {
            return frames;
        }
    }
}

#[test]
fn slide_fades_in_at_twice_its_progress() {
    let mut slide = SlideEffect::new(Sprite::Miku, &mut rng(1));
    let mut surface = RecordingSurface::new(1920.0, 1080.0);
    for _ in 0..40 {
        slide.advance_and_render(&mut surface);
        assert!((slide.alpha() - (slide.progress() * 2.0).min(1.0)).abs() < 1e-6);
    }
    assert_eq!(slide.alpha(), 1.0);
}

#[test]
fn slide_draws_every_frame_including_the_last() {
    let mut effect = Effect::spawn(&EffectDescriptor::Slide, Sprite::Miku, &mut rng(2));
    let mut surface = RecordingSurface::new(1920.0, 1080.0);
    let frames = run_to_end(&mut effect, &mut surface);
    // 0.03 per frame reaches 1 on the 34th frame
    assert_eq!(frames, 34);
    assert_eq!(surface.draws.len(), 34);
    assert!(surface.draws.iter().all(|d| d.sprite == Sprite::Miku && d.filter.is_none()));
}

#[test]
fn slide_enters_from_the_left_and_settles_on_target() {
    let mut slide = SlideEffect::new(Sprite::Bread, &mut rng(3));
    let mut surface = RecordingSurface::new(1000.0, 500.0);
    while slide.advance_and_render(&mut surface) {}

    let size = 1000.0 * 0.15;
    let first = surface.draws.first().map(|d| d.center.x).unwrap_or_default();
    let last = surface.draws.last().map(|d| d.center);
    assert!(first < slide.target_x * 1000.0 + size / 2.0);
    let last = last.unwrap_or_default();
    assert!((last.x - (slide.target_x * 1000.0 + size / 2.0)).abs() < 1e-2);
    assert!((last.y - (slide.y_fraction * (500.0 - size) + size / 2.0)).abs() < 1e-2);
    assert!((0.0..0.8).contains(&slide.target_x));
}

#[test]
fn one_second_effect_finishes_on_frame_sixty() {
    let mut effect = Effect::Motion(motion(0, 4));
    let mut surface = RecordingSurface::new(800.0, 600.0);
    assert_eq!(run_to_end(&mut effect, &mut surface), 60);
}

#[test]
fn five_second_effect_finishes_on_frame_three_hundred() {
    for column in [5, 6, 7] {
        let mut effect = Effect::Motion(motion(column, 5));
        let mut surface = RecordingSurface::new(800.0, 600.0);
        assert_eq!(run_to_end(&mut effect, &mut surface), 300, "column {}", column);
    }
}

#[test]
fn fractional_frequency_draws_on_a_subset_of_frames() {
    for (frequency, expected) in [(0.5, 30), (0.25, 15), (1.0, 60), (2.0, 120)] {
        let desc = EffectDescriptor::Motion(descriptor(frequency, 1.0));
        let mut effect = Effect::spawn(&desc, Sprite::Teto, &mut rng(6));
        let mut surface = RecordingSurface::new(100.0, 100.0);
        run_to_end(&mut effect, &mut surface);
        assert_eq!(surface.draws.len(), expected, "frequency {}", frequency);
    }
}

#[test]
fn half_frequency_skips_the_first_frame() {
    let desc = EffectDescriptor::Motion(descriptor(0.5, 1.0));
    let mut effect = Effect::spawn(&desc, Sprite::Teto, &mut rng(7));
    let mut surface = RecordingSurface::new(100.0, 100.0);
    effect.advance_and_render(&mut surface);
    assert!(surface.draws.is_empty());
    effect.advance_and_render(&mut surface);
    assert_eq!(surface.draws.len(), 1);
}

#[test]
fn progress_reaches_one_at_target_frame() {
    let mut m = motion(0, 8);
    let mut surface = RecordingSurface::new(100.0, 100.0);
    assert_eq!(m.target_frames, 60);
    for _ in 0..30 {
        m.advance_and_render(&mut surface);
    }
    assert!((m.progress() - 0.5).abs() < 1e-6);
    while m.advance_and_render(&mut surface) {}
    assert_eq!(m.current_frame(), 60);
    assert_eq!(m.progress(), 1.0);
}

#[test]
fn very_short_durations_still_last_one_frame() {
    let m = MotionEffect::new(&descriptor(1.0, 0.0), Sprite::Onion, &mut rng(9));
    assert_eq!(m.target_frames, 1);
}

#[test]
fn seeded_effects_are_reproducible() {
    for column in 0..COLUMN_EFFECTS.len() {
        let mut a = Effect::spawn(&COLUMN_EFFECTS[column], Sprite::Miku, &mut rng(42));
        let mut b = Effect::spawn(&COLUMN_EFFECTS[column], Sprite::Miku, &mut rng(42));
        let mut sa = RecordingSurface::new(640.0, 480.0);
        let mut sb = RecordingSurface::new(640.0, 480.0);
        run_to_end(&mut a, &mut sa);
        run_to_end(&mut b, &mut sb);
        assert_eq!(sa.draws, sb.draws, "column {}", column);
    }
}

#[test]
fn anchored_position_stays_fixed() {
    let mut m = motion(0, 10);
    let PositionCurve::Anchored(anchor) = m.position else {
        panic!("pinwheel should be anchored");
    };
    for t in [0.0, 0.3, 0.7, 1.0] {
        assert_eq!(m.sample(t).position, anchor);
    }
    assert!((0.0..1.0).contains(&anchor.x) && (0.0..1.0).contains(&anchor.y));
}

#[test]
fn spin_rotates_between_450_and_900_degrees() {
    let mut m = motion(0, 11);
    let start = m.sample(0.0).rotation_deg;
    let end = m.sample(1.0).rotation_deg;
    let sweep = end - start;
    assert!((450.0..900.0).contains(&sweep), "sweep {}", sweep);
    assert!((0.0..360.0).contains(&start));
}

#[test]
fn jitter_rotation_stays_in_range() {
    let mut m = motion(3, 12);
    for i in 0..200 {
        let r = m.sample(i as f32 / 200.0).rotation_deg;
        assert!((-170.0..-50.0).contains(&r), "rotation {}", r);
    }
}

#[test]
fn overshoot_lands_on_target() {
    let mut m = motion(3, 13);
    let PositionCurve::Overshoot { target, .. } = m.position else {
        panic!("pop should overshoot");
    };
    let end = m.sample(1.0).position;
    assert!((end - target).length() < 1e-5);
}

#[test]
fn launch_rests_until_delay_then_moves() {
    let mut m = motion(5, 14);
    let early = m.sample(0.3).position;
    let later = m.sample(0.6).position;
    assert!((later - early).length() > 0.1);
    assert_eq!(m.sample(0.0).rotation_deg, 0.0);
}

#[test]
fn sweep_crosses_right_to_left_on_its_lane() {
    let mut m = motion(7, 15);
    let PositionCurve::Sweep { lane } = m.position else {
        panic!("parade should sweep");
    };
    assert!((0.4..0.6).contains(&lane));
    let start = m.sample(0.0).position;
    let end = m.sample(1.0).position;
    assert!((start.x - 1.2).abs() < 1e-6);
    assert!((end.x + 1.2).abs() < 1e-6);
    assert_eq!(start.y, lane);
    assert_eq!(end.y, lane);
}

#[test]
fn parade_uses_fixed_scale_and_wobble() {
    let mut m = motion(7, 16);
    for i in 0..50 {
        let s = m.sample(i as f32 / 50.0);
        assert_eq!(s.scale, Vec2::splat(6.0));
        assert!((-30.0..50.0).contains(&s.rotation_deg), "rotation {}", s.rotation_deg);
        assert!((0.0..0.3).contains(&s.filter.sepia));
    }
}

#[test]
fn pulse_scale_grows_to_at_most_double() {
    let mut m = motion(2, 17);
    for i in 0..100 {
        let t = i as f32 / 99.0;
        let s = m.sample(t).scale;
        assert_eq!(s.x, s.y);
        assert!(s.x >= 0.0 && s.x < 1.0 + t + 1e-6);
    }
}

#[test]
fn fade_half_reaches_half_opacity() {
    let mut m = motion(4, 18);
    assert_eq!(m.sample(0.0).alpha, 1.0);
    assert!((m.sample(1.0).alpha - 0.5).abs() < 1e-6);
    let mut opaque = motion(3, 18);
    assert_eq!(opaque.sample(1.0).alpha, 1.0);
}

#[test]
fn vivid_hue_waits_for_delay() {
    let mut m = motion(6, 19);
    for i in 0..30 {
        let t = i as f32 / 100.0;
        let f = m.sample(t).filter;
        assert_eq!(f.hue_rotate_deg, 0.0, "t {}", t);
        assert_eq!(f.saturate, 7.0);
        assert_eq!(f.sepia, 0.0);
    }
    let moved = (30..100).any(|i| m.sample(i as f32 / 100.0).filter.hue_rotate_deg != 0.0);
    assert!(moved);
}

#[test]
fn tinted_filter_stays_in_range() {
    let mut m = motion(2, 20);
    for _ in 0..100 {
        let f = m.sample(0.5).filter;
        assert_eq!((f.sepia, f.saturate), (0.4, 3.0));
        assert!((-90.0..90.0).contains(&f.hue_rotate_deg));
    }
}

#[test]
fn filter_formats_as_css() {
    let f = ColorFilter {
        sepia: 0.4,
        saturate: 3.0,
        hue_rotate_deg: 12.5,
    };
    assert_eq!(f.to_string(), "sepia(0.4) saturate(3) hue-rotate(12.5deg)");
}

#[test]
fn motion_draws_are_scaled_to_the_surface() {
    let desc = EffectDescriptor::Motion(descriptor(1.0, 1.0));
    let mut effect = Effect::spawn(&desc, Sprite::Bread, &mut rng(21));
    let Effect::Motion(m) = &effect else {
        panic!("expected a motion effect");
    };
    let PositionCurve::Anchored(anchor) = m.position else {
        panic!("expected an anchored effect");
    };
    let mut surface = RecordingSurface::new(400.0, 200.0);
    effect.advance_and_render(&mut surface);
    let draw = surface.draws[0];
    assert_eq!(draw.center, anchor * Vec2::new(400.0, 200.0));
    assert!((draw.size - 60.0).abs() < 1e-4);
    assert_eq!(draw.sprite, Sprite::Bread);
    assert!(draw.filter.is_some());
}

#[test]
fn easing_endpoints() {
    assert_eq!(ease_out_quart(0.0), 0.0);
    assert_eq!(ease_out_quart(1.0), 1.0);
    assert!(ease_out_quart(0.5) > 0.9);
    assert!(back_ease_out(0.0).abs() < 1e-6);
    assert!((back_ease_out(1.0) - 1.0).abs() < 1e-6);
    // overshoots before settling
    assert!(back_ease_out(0.8) > 1.0);
}

#[test]
fn one_sprite_per_row_of_notes() {
    assert_eq!(Sprite::for_note(0), Sprite::Onion);
    assert_eq!(Sprite::for_note(7), Sprite::Onion);
    assert_eq!(Sprite::for_note(8), Sprite::Miku);
    assert_eq!(Sprite::for_note(16), Sprite::Bread);
    assert_eq!(Sprite::for_note(31), Sprite::Teto);
    assert_eq!(Sprite::Teto.file_name(), "teto.png");
}
