// Host-side tests for startup configuration overrides.

#![allow(dead_code)]
mod common;

use common::core::config::PaintConfig;
use common::core::effects::Sprite;

#[test]
fn defaults_describe_the_stock_page() {
    let config = PaintConfig::default();
    assert_eq!((config.canvas_width, config.canvas_height), (1920, 1080));
    assert_eq!(config.picker_size, 200.0);
    assert_eq!(config.seed, None);
    assert_eq!(config.sprite_url(Sprite::Onion), "assets/onion.png");
    assert_eq!(config.sounds_base(), "assets/sounds/");
}

#[test]
fn asset_base_gains_a_trailing_slash() {
    let mut config = PaintConfig::default();
    config.apply_overrides(Some(" /static "), None, None);
    assert_eq!(config.asset_base, "/static/");
    assert_eq!(config.sprite_url(Sprite::Miku), "/static/miku.png");

    config.apply_overrides(Some("cdn/"), None, None);
    assert_eq!(config.asset_base, "cdn/");
}

#[test]
fn blank_asset_base_is_ignored() {
    let mut config = PaintConfig::default();
    config.apply_overrides(Some("   "), None, None);
    assert_eq!(config.asset_base, "assets/");
}

#[test]
fn seed_and_picker_size_parse() {
    let mut config = PaintConfig::default();
    config.apply_overrides(None, Some("42"), Some("320.5"));
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.picker_size, 320.5);
}

#[test]
fn invalid_values_keep_previous_settings() {
    let mut config = PaintConfig::default();
    config.apply_overrides(None, Some("7"), Some("150"));
    let before = config.clone();

    config.apply_overrides(None, Some("not-a-seed"), Some("-20"));
    assert_eq!(config, before);
    config.apply_overrides(None, Some("-1"), Some("NaN"));
    assert_eq!(config, before);
    config.apply_overrides(None, None, Some("0"));
    assert_eq!(config, before);
    config.apply_overrides(None, None, Some("big"));
    assert_eq!(config, before);
}

#[test]
fn oversized_picker_is_rejected() {
    let mut config = PaintConfig::default();
    config.apply_overrides(None, None, Some("50000"));
    assert_eq!(config.picker_size, 200.0);
    config.apply_overrides(None, None, Some("inf"));
    assert_eq!(config.picker_size, 200.0);
    config.apply_overrides(None, None, Some("4096"));
    assert_eq!(config.picker_size, 4096.0);
}

#[test]
fn absent_overrides_change_nothing() {
    let mut config = PaintConfig::default();
    config.apply_overrides(None, None, None);
    assert_eq!(config, PaintConfig::default());
}
