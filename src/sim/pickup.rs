//! Power-ups dropped by destroyed hostiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Body;
use super::player::Player;
use crate::consts::{HEALTH_PICKUP_AMOUNT, PICKUP_SIZE, PICKUP_SPEED};

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// Restores health
    Health,
    /// Raises the shot pattern by one power level
    Power,
}

/// A falling pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub body: Body,
    pub kind: PickupKind,
}

impl Pickup {
    pub fn new(kind: PickupKind, pos: Vec2) -> Self {
        Self {
            body: Body::new(pos, Vec2::splat(PICKUP_SIZE), PICKUP_SPEED),
            kind,
        }
    }

    /// Fall. Returns true once past `floor_y`.
    pub fn update(&mut self, floor_y: f32) -> bool {
        self.body.pos.y += self.body.speed;
        self.body.pos.y > floor_y
    }

    /// Grant this pickup's effect
    pub fn apply(&self, player: &mut Player) {
        match self.kind {
            PickupKind::Health => player.heal(HEALTH_PICKUP_AMOUNT),
            PickupKind::Power => player.power_up(),
        }
    }
}
