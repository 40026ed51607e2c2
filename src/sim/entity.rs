//! Shared rectangle state for every collidable game object

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned body shared by the player, projectiles, hostiles and pickups
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner (canvas pixels, y grows downward)
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Pixels moved per tick
    pub speed: f32,
    /// Cleared when collision resolution consumes the entity
    pub alive: bool,
}

impl Body {
    /// Create a live body. Panics if either dimension is not positive.
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        assert!(
            size.x > 0.0 && size.y > 0.0,
            "entity size must be positive, got {size}"
        );
        Self {
            pos,
            size,
            speed,
            alive: true,
        }
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Strict AABB intersection; rectangles that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.pos.x < b_max.x && a_max.x > other.pos.x && self.pos.y < b_max.y && a_max.y > other.pos.y
    }
}
