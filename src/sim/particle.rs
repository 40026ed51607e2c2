//! Explosion particles (visual only, never collide)

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::PARTICLE_FADE;

/// A fading explosion particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// 1.0 at spawn, removed once it reaches 0
    pub alpha: f32,
}

impl Particle {
    /// Random particle at `pos`: radius in [2, 5), velocity in [-2, 2) per axis
    pub fn burst<R: Rng + ?Sized>(pos: Vec2, rng: &mut R) -> Self {
        Self {
            pos,
            vel: Vec2::new(rng.random_range(-2.0..2.0), rng.random_range(-2.0..2.0)),
            radius: rng.random_range(2.0..5.0),
            alpha: 1.0,
        }
    }

    /// Apply velocity and fade. Returns true once fully faded.
    pub fn update(&mut self) -> bool {
        self.pos += self.vel;
        self.alpha -= PARTICLE_FADE;
        self.alpha <= 0.0
    }
}

/// Age every particle and drop the faded ones
pub fn age_particles(particles: &mut Vec<Particle>) {
    particles.retain_mut(|p| !p.update());
}
