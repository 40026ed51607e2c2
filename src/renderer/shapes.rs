//! Outline generation for the procedural ship hulls

use glam::Vec2;

/// Diamond "fighter": top, right, bottom, left midpoints of the box
pub fn fighter_hull(pos: Vec2, size: Vec2) -> [Vec2; 4] {
    [
        pos + Vec2::new(size.x / 2.0, 0.0),
        pos + Vec2::new(size.x, size.y / 2.0),
        pos + Vec2::new(size.x / 2.0, size.y),
        pos + Vec2::new(0.0, size.y / 2.0),
    ]
}

/// Five-point "bomber": nose, wing tips at a third of the height, narrow tail
pub fn bomber_hull(pos: Vec2, size: Vec2) -> [Vec2; 5] {
    [
        pos + Vec2::new(size.x / 2.0, 0.0),
        pos + Vec2::new(size.x, size.y / 3.0),
        pos + Vec2::new(size.x * 3.0 / 4.0, size.y),
        pos + Vec2::new(size.x / 4.0, size.y),
        pos + Vec2::new(0.0, size.y / 3.0),
    ]
}

/// Fallback armored hull: a wide body with a turret on top, as (pos, size) rects
pub fn armored_blocks(pos: Vec2, size: Vec2) -> [(Vec2, Vec2); 2] {
    [
        (
            pos + Vec2::new(0.0, size.y / 4.0),
            Vec2::new(size.x, size.y / 2.0),
        ),
        (
            pos + Vec2::new(size.x / 4.0, 0.0),
            Vec2::new(size.x / 2.0, size.y / 4.0),
        ),
    ]
}
