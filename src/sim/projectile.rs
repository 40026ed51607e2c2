//! Player projectiles

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::Body;
use super::particle::Particle;
use crate::consts::{PROJECTILE_SPEED, TRAIL_LENGTH};

/// A projectile fired by the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
    /// Power level of the player at the time of firing (1..=3)
    pub power_level: u8,
    /// Horizontal drift applied every tick
    pub drift: f32,
    /// Previous positions, oldest first
    #[serde(skip)]
    pub trail: VecDeque<Vec2>,
}

impl Projectile {
    /// Size for a power level: higher power fires bigger shots
    pub fn size_for_power(power_level: u8) -> Vec2 {
        match power_level {
            3 => Vec2::new(8.0, 15.0),
            2 => Vec2::new(6.0, 12.0),
            _ => Vec2::new(4.0, 10.0),
        }
    }

    /// Spawn centered horizontally on `center_x` with its top edge at `top_y`
    pub fn new(center_x: f32, top_y: f32, drift: f32, power_level: u8) -> Self {
        let size = Self::size_for_power(power_level);
        Self {
            body: Body::new(
                Vec2::new(center_x - size.x / 2.0, top_y),
                size,
                PROJECTILE_SPEED,
            ),
            power_level,
            drift,
            trail: VecDeque::with_capacity(TRAIL_LENGTH + 1),
        }
    }

    /// Record trail and move. Returns true once fully above the top edge.
    pub fn update(&mut self) -> bool {
        self.trail.push_back(self.body.pos);
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.pop_front();
        }

        self.body.pos.y -= self.body.speed;
        self.body.pos.x += self.drift;
        self.body.pos.y < -self.body.size.y
    }

    /// Explosion particles at the impact point, more for stronger shots
    pub fn explode<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Particle> {
        let center = self.body.center();
        let count = 5 * self.power_level as usize;
        (0..count).map(|_| Particle::burst(center, rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_sizes_per_power() {
        assert_eq!(Projectile::new(100.0, 0.0, 0.0, 1).body.size, Vec2::new(4.0, 10.0));
        assert_eq!(Projectile::new(100.0, 0.0, 0.0, 2).body.size, Vec2::new(6.0, 12.0));
        assert_eq!(Projectile::new(100.0, 0.0, 0.0, 3).body.size, Vec2::new(8.0, 15.0));
    }

    #[test]
    fn test_centered_on_spawn_x() {
        let p = Projectile::new(100.0, 50.0, 0.0, 3);
        assert_eq!(p.body.pos, Vec2::new(96.0, 50.0));
        assert_eq!(p.body.center().x, 100.0);
    }

    #[test]
    fn test_moves_up_with_drift() {
        let mut p = Projectile::new(100.0, 300.0, -0.5, 2);
        let start = p.body.pos;
        assert!(!p.update());
        assert_eq!(p.body.pos, start + Vec2::new(-0.5, -PROJECTILE_SPEED));
        assert_eq!(p.trail.back(), Some(&start));
    }

    #[test]
    fn test_expires_above_top_edge() {
        let mut p = Projectile::new(100.0, 5.0, 0.0, 1);
        // y: 5 -> -5 (still within its own height), -5 -> -15 (gone)
        assert!(!p.update());
        assert!(p.update());
    }

    #[test]
    fn test_explosion_count_scales_with_power() {
        let mut rng = Pcg32::seed_from_u64(1);
        for level in 1..=3u8 {
            let p = Projectile::new(50.0, 50.0, 0.0, level);
            let particles = p.explode(&mut rng);
            assert_eq!(particles.len(), 5 * level as usize);
            assert!(particles.iter().all(|pt| pt.pos == p.body.center()));
        }
    }

    proptest! {
        #[test]
        fn prop_trail_is_bounded_and_ordered(steps in 1usize..40) {
            let mut p = Projectile::new(400.0, 10_000.0, 1.0, 1);
            let mut history = Vec::new();
            for _ in 0..steps {
                history.push(p.body.pos);
                p.update();
            }
            prop_assert!(p.trail.len() <= TRAIL_LENGTH);
            let expected: Vec<Vec2> = history.iter().rev().take(TRAIL_LENGTH).rev().copied().collect();
            let actual: Vec<Vec2> = p.trail.iter().copied().collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
