use crate::core::constants::*;
use crate::core::{ColorPicker, HsvColor, PickerGeometry, Segment};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::Clamped;
use web_sys as web;

// ===================== Color picker =====================

/// Redraw the whole picker widget for its current color.
pub fn draw_picker(ctx: &web::CanvasRenderingContext2d, picker: &ColorPicker) {
    let g = &picker.geometry;
    let size = g.size as f64;
    ctx.clear_rect(0.0, 0.0, size, size);
    draw_hue_ring(ctx, g);
    draw_sat_val_square(ctx, g, picker.color.h);
    draw_tips(ctx, g, picker.color);
    draw_swatch(ctx, g, picker.color);
}

fn draw_hue_ring(ctx: &web::CanvasRenderingContext2d, g: &PickerGeometry) {
    let c = g.center as f64;
    let radius = g.ring_mid_radius() as f64;
    ctx.set_line_width(g.ring_width() as f64);
    for seg in g.ring_segments() {
        ctx.set_stroke_style_str(&seg.color.css());
        ctx.begin_path();
        _ = ctx.arc(c, c, radius, seg.start_rad as f64, seg.end_rad as f64);
        ctx.stroke();
    }
}

fn draw_sat_val_square(ctx: &web::CanvasRenderingContext2d, g: &PickerGeometry, h: f32) {
    let raster = g.rasterize_square(h);
    if raster.side == 0 {
        return;
    }
    match web::ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(raster.rgba.as_slice()),
        raster.side,
        raster.side,
    ) {
        Ok(image) => {
            _ = ctx.put_image_data(&image, raster.origin as f64, raster.origin as f64);
        }
        Err(e) => log::error!("[picker] ImageData error: {:?}", e),
    }
}

fn draw_tips(ctx: &web::CanvasRenderingContext2d, g: &PickerGeometry, color: HsvColor) {
    let fill = color.css();
    draw_tip(ctx, g.hue_indicator(color.h), g.hue_tip_radius, &fill);
    draw_tip(ctx, g.sat_val_indicator(color.s, color.v), g.sv_tip_radius, &fill);
}

fn draw_tip(ctx: &web::CanvasRenderingContext2d, at: Vec2, radius: f32, fill: &str) {
    ctx.save();
    ctx.begin_path();
    _ = ctx.arc(at.x as f64, at.y as f64, radius as f64, 0.0, TAU);
    ctx.set_fill_style_str(fill);
    ctx.set_stroke_style_str(PICKER_TIP_STROKE);
    ctx.set_line_width(PICKER_TIP_LINE_WIDTH);
    ctx.set_shadow_color(PICKER_TIP_SHADOW);
    ctx.set_shadow_blur(PICKER_TIP_SHADOW_BLUR);
    ctx.fill();
    ctx.stroke();
    ctx.restore();
}

fn draw_swatch(ctx: &web::CanvasRenderingContext2d, g: &PickerGeometry, color: HsvColor) {
    let r = g.swatch_rect();
    ctx.save();
    ctx.set_fill_style_str(&color.css());
    ctx.fill_rect(r.x as f64, r.y as f64, r.w as f64, r.h as f64);
    ctx.restore();
}

// ===================== Paint canvas =====================

pub fn draw_segment(ctx: &web::CanvasRenderingContext2d, seg: Segment, color: HsvColor) {
    ctx.set_line_join(STROKE_LINE_JOIN);
    ctx.set_line_width(STROKE_LINE_WIDTH);
    ctx.set_stroke_style_str(&color.css());
    ctx.begin_path();
    ctx.move_to(seg.from.x as f64, seg.from.y as f64);
    ctx.line_to(seg.to.x as f64, seg.to.y as f64);
    ctx.stroke();
}

/// Paint the blank-page background over the whole canvas.
pub fn fill_background(ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement) {
    ctx.save();
    ctx.set_fill_style_str(CANVAS_BACKGROUND);
    ctx.fill_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    ctx.restore();
}
