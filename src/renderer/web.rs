//! Browser backends: `CanvasRenderingContext2d` and DOM HUD elements

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, HtmlImageElement};

use super::canvas::{Canvas2d, Sprite};
use super::hud::Hud;
use crate::error::{GameError, Result};

/// An image plus a flag flipped by its onload handler
struct LoadedImage {
    image: HtmlImageElement,
    loaded: Rc<Cell<bool>>,
}

/// Sprite images, loading asynchronously in the background
pub struct SpriteAtlas {
    images: HashMap<Sprite, LoadedImage>,
}

impl SpriteAtlas {
    /// Start loading every sprite; drawing falls back until each one is ready
    pub fn load() -> Self {
        let mut images = HashMap::new();
        for sprite in Sprite::ALL {
            let image = match HtmlImageElement::new() {
                Ok(image) => image,
                Err(e) => {
                    log::error!("Failed to create image for {}: {:?}", sprite.path(), e);
                    continue;
                }
            };
            let loaded = Rc::new(Cell::new(false));

            {
                let loaded = loaded.clone();
                let path = sprite.path();
                let closure = Closure::<dyn FnMut()>::new(move || {
                    loaded.set(true);
                    log::info!("Sprite loaded: {path}");
                });
                image.set_onload(Some(closure.as_ref().unchecked_ref()));
                closure.forget();
            }
            {
                let loaded = loaded.clone();
                let path = sprite.path();
                let closure = Closure::<dyn FnMut()>::new(move || {
                    loaded.set(false);
                    log::error!("Failed to load sprite: {path}");
                });
                image.set_onerror(Some(closure.as_ref().unchecked_ref()));
                closure.forget();
            }

            image.set_src(sprite.path());
            images.insert(sprite, LoadedImage { image, loaded });
        }
        Self { images }
    }

    fn ready(&self, sprite: Sprite) -> Option<&HtmlImageElement> {
        self.images
            .get(&sprite)
            .filter(|img| img.loaded.get())
            .map(|img| &img.image)
    }
}

/// The page's 2D canvas
pub struct WebCanvas {
    ctx: CanvasRenderingContext2d,
    sprites: SpriteAtlas,
}

impl WebCanvas {
    /// Acquire the 2D context of `canvas`
    pub fn new(canvas: &HtmlCanvasElement, sprites: SpriteAtlas) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| GameError::Canvas(format!("{e:?}")))?
            .ok_or_else(|| GameError::Canvas("2d context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::Canvas("context is not CanvasRenderingContext2d".into()))?;
        Ok(Self { ctx, sprites })
    }
}

impl Canvas2d for WebCanvas {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }

    fn set_shadow(&mut self, color: &str, blur: f32) {
        self.ctx.set_shadow_color(color);
        self.ctx.set_shadow_blur(blur as f64);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_text_align(&mut self, align: &str) {
        self.ctx.set_text_align(align);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2) {
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn stroke_rect(&mut self, pos: Vec2, size: Vec2) {
        self.ctx
            .stroke_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn trace_polygon(&mut self, points: &[Vec2]) {
        self.ctx.begin_path();
        if let Some((first, rest)) = points.split_first() {
            self.ctx.move_to(first.x as f64, first.y as f64);
            for p in rest {
                self.ctx.line_to(p.x as f64, p.y as f64);
            }
        }
        self.ctx.close_path();
    }

    fn trace_circle(&mut self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
        }
    }

    fn fill_path(&mut self) {
        self.ctx.fill();
    }

    fn stroke_path(&mut self) {
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2) {
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2, size: Vec2) -> bool {
        let Some(image) = self.sprites.ready(sprite) else {
            return false;
        };
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                image,
                pos.x as f64,
                pos.y as f64,
                size.x as f64,
                size.y as f64,
            )
            .is_ok()
    }
}

/// HUD elements in the host page; missing elements are skipped
pub struct DomHud {
    health_fill: Option<HtmlElement>,
    score: Option<HtmlElement>,
    level: Option<HtmlElement>,
}

impl DomHud {
    pub fn new(document: &Document) -> Self {
        let find = |id: &str| {
            let el = document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if el.is_none() {
                log::warn!("HUD element #{id} not found");
            }
            el
        };
        Self {
            health_fill: find("health-bar-fill"),
            score: find("score"),
            level: find("level"),
        }
    }
}

impl Hud for DomHud {
    fn set_health_percent(&mut self, percent: f32) {
        if let Some(el) = &self.health_fill {
            let _ = el.style().set_property("width", &format!("{percent}%"));
        }
    }

    fn set_score_text(&mut self, text: &str) {
        if let Some(el) = &self.score {
            el.set_text_content(Some(text));
        }
    }

    fn set_level_text(&mut self, text: &str) {
        if let Some(el) = &self.level {
            el.set_text_content(Some(text));
        }
    }
}
