//! Drawing-surface abstraction
//!
//! A thin mirror of the browser's 2D canvas context. The scene code only talks
//! to this trait, so it runs the same against the real canvas and a recorder.

use glam::Vec2;

/// Image assets the scene may draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Player,
    Armored,
}

impl Sprite {
    pub const ALL: [Sprite; 2] = [Sprite::Player, Sprite::Armored];

    /// Asset path relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            Sprite::Player => "assets/player.svg",
            Sprite::Armored => "assets/armored.svg",
        }
    }
}

/// Imperative 2D drawing surface
pub trait Canvas2d {
    /// Clear the whole surface
    fn clear(&mut self, size: Vec2);

    /// Push/pop the style state
    fn save(&mut self);
    fn restore(&mut self);

    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f32);
    /// Shadow color and blur radius
    fn set_shadow(&mut self, color: &str, blur: f32);
    fn set_global_alpha(&mut self, alpha: f32);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: &str);

    fn fill_rect(&mut self, pos: Vec2, size: Vec2);
    fn stroke_rect(&mut self, pos: Vec2, size: Vec2);

    /// Start a new closed path through `points`
    fn trace_polygon(&mut self, points: &[Vec2]);
    /// Start a new full-circle path
    fn trace_circle(&mut self, center: Vec2, radius: f32);
    /// Fill/stroke the current path
    fn fill_path(&mut self);
    fn stroke_path(&mut self);

    fn fill_text(&mut self, text: &str, pos: Vec2);

    /// Draw a sprite if it has finished loading. Returns false when the
    /// caller should fall back to a procedural shape.
    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2, size: Vec2) -> bool;
}
