//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Body;
use super::input::KeyState;
use super::projectile::Projectile;
use crate::consts::*;

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Play-field size the ship is clamped to
    pub bounds: Vec2,
    pub health: u32,
    pub max_health: u32,
    /// 1..=3, governs the shot pattern
    pub power_level: u8,
    /// Ticks until the next shot is allowed
    pub shoot_cooldown: u32,
    pub invincible: bool,
    /// Ticks of invincibility remaining
    pub invincible_ticks: u32,
}

impl Player {
    /// Fresh ship centered near the bottom of a play field of size `bounds`
    pub fn new(bounds: Vec2) -> Self {
        assert!(
            bounds.x >= PLAYER_WIDTH && bounds.y >= PLAYER_HEIGHT,
            "play field {bounds} is smaller than the ship"
        );
        let pos = Vec2::new(
            bounds.x / 2.0 - PLAYER_WIDTH / 2.0,
            bounds.y - PLAYER_SPAWN_OFFSET,
        );
        Self {
            body: Body::new(pos, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT), PLAYER_SPEED),
            bounds,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            power_level: 1,
            shoot_cooldown: 0,
            invincible: false,
            invincible_ticks: 0,
        }
    }

    /// Move from held keys, clamp to the play field, run down timers
    pub fn update(&mut self, keys: &KeyState) {
        let speed = self.body.speed;
        if keys.left {
            self.body.pos.x -= speed;
        }
        if keys.right {
            self.body.pos.x += speed;
        }
        if keys.up {
            self.body.pos.y -= speed;
        }
        if keys.down {
            self.body.pos.y += speed;
        }

        let max = (self.bounds - self.body.size).max(Vec2::ZERO);
        self.body.pos = self.body.pos.clamp(Vec2::ZERO, max);

        self.shoot_cooldown = self.shoot_cooldown.saturating_sub(1);

        if self.invincible {
            self.invincible_ticks = self.invincible_ticks.saturating_sub(1);
            if self.invincible_ticks == 0 {
                self.invincible = false;
            }
        }
    }

    /// Fire if the cooldown allows; the pattern depends on power level
    pub fn shoot(&mut self) -> Vec<Projectile> {
        if self.shoot_cooldown > 0 {
            return Vec::new();
        }

        let Body { pos, size, .. } = self.body;
        let center = pos.x + size.x / 2.0;
        let left = pos.x + 10.0;
        let right = pos.x + size.x - 10.0;
        let level = self.power_level;

        let shots = match level {
            1 => vec![Projectile::new(center, pos.y, 0.0, level)],
            2 => vec![
                Projectile::new(left, pos.y, -0.5, level),
                Projectile::new(right, pos.y, 0.5, level),
            ],
            _ => vec![
                Projectile::new(center, pos.y, 0.0, level),
                Projectile::new(left, pos.y, -1.0, level),
                Projectile::new(right, pos.y, 1.0, level),
            ],
        };

        self.shoot_cooldown = SHOOT_COOLDOWN_FRAMES;
        shots
    }

    /// Take damage unless invincible. Returns true if this leaves the ship dead.
    pub fn damage(&mut self, amount: u32) -> bool {
        if self.invincible {
            return false;
        }
        self.health = self.health.saturating_sub(amount);
        self.invincible = true;
        self.invincible_ticks = INVINCIBLE_FRAMES;
        self.health == 0
    }

    /// Restore health, capped at max
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    /// Raise power level, capped at 3
    pub fn power_up(&mut self) {
        self.power_level = (self.power_level + 1).min(MAX_POWER_LEVEL);
    }

    /// Health as a fraction of max, for the health bar
    pub fn health_fraction(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn player() -> Player {
        Player::new(Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT))
    }

    #[test]
    fn test_spawn_position() {
        let p = player();
        assert_eq!(p.body.pos, Vec2::new(375.0, 540.0));
        assert_eq!(p.health, PLAYER_MAX_HEALTH);
        assert_eq!(p.power_level, 1);
    }

    #[test]
    fn test_diagonal_moves_full_speed_on_both_axes() {
        let mut p = player();
        let start = p.body.pos;
        let keys = KeyState {
            left: true,
            up: true,
            ..Default::default()
        };
        p.update(&keys);
        assert_eq!(p.body.pos, start - Vec2::splat(PLAYER_SPEED));
    }

    #[test]
    fn test_clamped_to_canvas() {
        let mut p = player();
        let keys = KeyState {
            right: true,
            down: true,
            ..Default::default()
        };
        for _ in 0..500 {
            p.update(&keys);
        }
        assert_eq!(
            p.body.pos,
            Vec2::new(CANVAS_WIDTH - PLAYER_WIDTH, CANVAS_HEIGHT - PLAYER_HEIGHT)
        );

        let keys = KeyState {
            left: true,
            up: true,
            ..Default::default()
        };
        for _ in 0..500 {
            p.update(&keys);
        }
        assert_eq!(p.body.pos, Vec2::ZERO);
    }

    #[test]
    fn test_shoot_cooldown() {
        let mut p = player();
        assert_eq!(p.shoot().len(), 1);
        assert!(p.shoot().is_empty());

        for _ in 0..SHOOT_COOLDOWN_FRAMES {
            p.update(&KeyState::default());
        }
        assert_eq!(p.shoot().len(), 1);
    }

    #[test]
    fn test_shot_patterns() {
        let mut p = player();
        p.body.pos = Vec2::new(100.0, 550.0);

        let shots = p.shoot();
        assert_eq!(shots.len(), 1);
        assert_eq!(shots[0].body.center().x, 125.0);
        assert_eq!(shots[0].drift, 0.0);

        p.power_level = 2;
        p.shoot_cooldown = 0;
        let shots = p.shoot();
        let drifts: Vec<f32> = shots.iter().map(|s| s.drift).collect();
        assert_eq!(drifts, vec![-0.5, 0.5]);
        assert_eq!(shots[0].body.center().x, 110.0);
        assert_eq!(shots[1].body.center().x, 140.0);
        assert!(shots.iter().all(|s| s.power_level == 2));

        p.power_level = 3;
        p.shoot_cooldown = 0;
        let shots = p.shoot();
        let drifts: Vec<f32> = shots.iter().map(|s| s.drift).collect();
        assert_eq!(drifts, vec![0.0, -1.0, 1.0]);
        assert!(shots.iter().all(|s| s.power_level == 3));
    }

    #[test]
    fn test_invincibility_blocks_second_hit() {
        let mut p = player();
        assert!(!p.damage(20));
        assert_eq!(p.health, 80);

        for _ in 0..30 {
            p.update(&KeyState::default());
        }
        assert!(!p.damage(20));
        assert_eq!(p.health, 80);

        for _ in 0..30 {
            p.update(&KeyState::default());
        }
        assert!(!p.invincible);
        p.damage(20);
        assert_eq!(p.health, 60);
    }

    #[test]
    fn test_lethal_damage() {
        let mut p = player();
        p.health = 15;
        assert!(p.damage(20));
        assert_eq!(p.health, 0);
    }

    #[test]
    fn test_pickup_effects_are_capped() {
        let mut p = player();
        p.health = 90;
        p.heal(30);
        assert_eq!(p.health, 100);

        p.power_up();
        p.power_up();
        p.power_up();
        assert_eq!(p.power_level, 3);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Damage(u32),
        Heal(u32),
        Tick,
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u32..250).prop_map(Op::Damage),
            (0u32..250).prop_map(Op::Heal),
            Just(Op::Tick),
        ]
    }

    proptest! {
        #[test]
        fn prop_health_stays_clamped(ops in prop::collection::vec(arb_op(), 0..100)) {
            let mut p = player();
            for op in ops {
                match op {
                    Op::Damage(n) => { p.damage(n); }
                    Op::Heal(n) => p.heal(n),
                    Op::Tick => p.update(&KeyState::default()),
                }
                prop_assert!(p.health <= p.max_health);
            }
        }
    }
}
