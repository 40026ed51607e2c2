//! Descending hostiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Body;

/// Hostile variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HostileKind {
    #[default]
    Normal,
    Fast,
    Armored,
    Boss,
}

/// Per-variant stats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostileStats {
    pub speed: f32,
    pub size: Vec2,
    pub health: u32,
    /// Score awarded when destroyed
    pub score: u64,
}

impl HostileKind {
    pub fn stats(self) -> HostileStats {
        match self {
            HostileKind::Normal => HostileStats {
                speed: 2.0,
                size: Vec2::splat(30.0),
                health: 1,
                score: 100,
            },
            HostileKind::Fast => HostileStats {
                speed: 4.0,
                size: Vec2::splat(20.0),
                health: 1,
                score: 100,
            },
            HostileKind::Armored => HostileStats {
                speed: 1.0,
                size: Vec2::splat(40.0),
                health: 3,
                score: 100,
            },
            HostileKind::Boss => HostileStats {
                speed: 1.0,
                size: Vec2::splat(80.0),
                health: 100,
                score: 500,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HostileKind::Normal => "normal",
            HostileKind::Fast => "fast",
            HostileKind::Armored => "armored",
            HostileKind::Boss => "boss",
        }
    }
}

/// A hostile ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostile {
    pub body: Body,
    pub kind: HostileKind,
    pub health: u32,
}

impl Hostile {
    pub fn new(kind: HostileKind, pos: Vec2) -> Self {
        let stats = kind.stats();
        Self {
            body: Body::new(pos, stats.size, stats.speed),
            kind,
            health: stats.health,
        }
    }

    /// Move down. Returns true once past `floor_y` (escaped, no score).
    pub fn update(&mut self, floor_y: f32) -> bool {
        self.body.pos.y += self.body.speed;
        self.body.pos.y > floor_y
    }

    /// Take one hit. Returns true when destroyed.
    pub fn damage(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.health == 0
    }

    /// Score awarded for destroying this hostile
    pub fn score_value(&self) -> u64 {
        self.kind.stats().score
    }
}
