use crate::core::{PaintConfig, Sprite, SpriteDraw, Surface};
use fnv::FnvHashMap;
use glam::Vec2;
use web_sys as web;

/// Sprite images keyed by character. Images load asynchronously; sprites
/// are skipped until their image is complete.
pub struct SpriteAtlas {
    images: FnvHashMap<Sprite, web::HtmlImageElement>,
}

impl SpriteAtlas {
    pub fn load(config: &PaintConfig) -> anyhow::Result<Self> {
        let mut images = FnvHashMap::default();
        for sprite in Sprite::ALL {
            let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
            img.set_src(&config.sprite_url(sprite));
            images.insert(sprite, img);
        }
        Ok(Self { images })
    }

    fn ready(&self, sprite: Sprite) -> Option<&web::HtmlImageElement> {
        self.images.get(&sprite).filter(|img| img.complete() && img.natural_width() > 0)
    }
}

/// The paint canvas as an effect `Surface`.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    atlas: SpriteAtlas,
}

impl CanvasSurface {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        atlas: SpriteAtlas,
    ) -> Self {
        Self { canvas, ctx, atlas }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn wash(&mut self, style: &str) {
        self.ctx.set_fill_style_str(style);
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn draw_sprite(&mut self, draw: &SpriteDraw) {
        let Some(img) = self.atlas.ready(draw.sprite) else {
            return;
        };
        let ctx = &self.ctx;
        let half = draw.size as f64 / 2.0;
        ctx.save();
        _ = ctx.translate(draw.center.x as f64, draw.center.y as f64);
        _ = ctx.rotate((draw.rotation_deg as f64).to_radians());
        _ = ctx.scale(draw.scale.x as f64, draw.scale.y as f64);
        ctx.set_global_alpha(draw.alpha as f64);
        match draw.filter {
            Some(f) => ctx.set_filter(&f.to_string()),
            None => ctx.set_filter("none"),
        }
        _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img,
            -half,
            -half,
            draw.size as f64,
            draw.size as f64,
        );
        ctx.restore();
    }
}
