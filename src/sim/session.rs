//! Session state and core simulation types
//!
//! One `Session` owns every entity collection for a run. Restarting builds a
//! new `Session` rather than resetting fields in place.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::hostile::{Hostile, HostileKind};
use super::particle::Particle;
use super::pickup::{Pickup, PickupKind};
use super::player::Player;
use super::projectile::Projectile;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Simulation frozen, last frame shown with an overlay
    Paused,
    /// Run ended; only a restart leaves this phase
    GameOver,
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    HostileSpawned { kind: HostileKind },
    HostileDestroyed { kind: HostileKind, pos: Vec2, score: u64 },
    PlayerHit { health: u32 },
    PickupDropped { kind: PickupKind },
    PickupCollected { kind: PickupKind },
    LevelUp { level: u32 },
    GameOver { score: u64 },
}

/// Level for a score: one level per 1000 points, starting at 1
pub fn level_for_score(score: u64) -> u32 {
    (score / SCORE_PER_LEVEL) as u32 + 1
}

/// Frames between hostile spawns at a level, floored at 10
pub fn spawn_interval_for_level(level: u32) -> u32 {
    BASE_SPAWN_INTERVAL
        .saturating_sub(level.saturating_mul(SPAWN_INTERVAL_STEP))
        .max(MIN_SPAWN_INTERVAL)
}

/// Pick a hostile variant from a uniform roll in [0, 1)
///
/// Bosses only appear past the score threshold (10%); otherwise fast 20%,
/// armored 10%, normal for the rest.
pub fn choose_hostile_kind(score: u64, roll: f32) -> HostileKind {
    if score > BOSS_SCORE_THRESHOLD && roll < 0.1 {
        HostileKind::Boss
    } else if roll < 0.2 {
        HostileKind::Fast
    } else if roll < 0.3 {
        HostileKind::Armored
    } else {
        HostileKind::Normal
    }
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct Session {
    pub settings: Settings,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gameplay RNG (spawns, drops)
    pub rng: Pcg32,
    /// Visual-only RNG (particles) so effects never shift gameplay rolls
    pub fx_rng: Pcg32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub frame: u64,
    pub score: u64,
    /// Derived from score each tick
    pub level: u32,
    /// Derived from level each tick
    pub spawn_interval: u32,
    pub last_spawn_frame: u64,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub hostiles: Vec<Hostile>,
    pub pickups: Vec<Pickup>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Events from the most recent running tick
    pub events: Vec<GameEvent>,
}

impl Session {
    /// Create a new session with the given seed
    pub fn new(settings: Settings, seed: u64) -> Self {
        let player = Player::new(settings.canvas_size());
        Self {
            settings,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            fx_rng: Pcg32::seed_from_u64(seed.rotate_left(32) ^ 0x5EED),
            phase: GamePhase::Running,
            frame: 0,
            score: 0,
            level: 1,
            spawn_interval: spawn_interval_for_level(0),
            last_spawn_frame: 0,
            player,
            projectiles: Vec::new(),
            hostiles: Vec::new(),
            pickups: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
        }
    }

    /// A fresh session with the same settings, if this one is over
    pub fn restart(&self, seed: u64) -> Option<Self> {
        if self.phase != GamePhase::GameOver {
            return None;
        }
        log::info!("Restarting (previous score {}, seed {})", self.score, seed);
        Some(Self::new(self.settings.clone(), seed))
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// Flip between running and paused; no effect once the game is over
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            GamePhase::GameOver => GamePhase::GameOver,
        };
        log::debug!("Phase now {:?}", self.phase);
    }

    /// Enter the terminal phase
    pub fn end_run(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!(
            "Game over: score {} at level {} after {} frames",
            self.score,
            self.level,
            self.frame
        );
    }

    /// Bottom edge; hostiles and pickups past it expire
    pub fn floor_y(&self) -> f32 {
        self.settings.canvas_height
    }

    /// Spawn a hostile of a random kind at a random x above the screen
    pub fn spawn_hostile(&mut self) {
        let roll: f32 = self.rng.random();
        let kind = choose_hostile_kind(self.score, roll);
        // Player::new guarantees the field is wider than the margin
        let max_x = self.settings.canvas_width - HOSTILE_SPAWN_MARGIN;
        let x = self.rng.random_range(0.0..max_x);
        self.spawn_hostile_at(kind, Vec2::new(x, HOSTILE_SPAWN_Y));
    }

    /// Spawn a specific hostile
    pub fn spawn_hostile_at(&mut self, kind: HostileKind, pos: Vec2) {
        if kind == HostileKind::Boss {
            log::info!("Boss incoming at x={:.0}", pos.x);
        }
        self.hostiles.push(Hostile::new(kind, pos));
        self.events.push(GameEvent::HostileSpawned { kind });
    }

    /// Roll for a pickup where a hostile died (30%, even split health/power)
    pub fn try_drop_pickup(&mut self, pos: Vec2) {
        if !self.rng.random_bool(PICKUP_DROP_CHANCE) {
            return;
        }
        let kind = if self.rng.random_bool(0.5) {
            PickupKind::Health
        } else {
            PickupKind::Power
        };
        self.pickups.push(Pickup::new(kind, pos));
        self.events.push(GameEvent::PickupDropped { kind });
    }

    /// Add particles, dropping the oldest past the configured cap
    pub fn add_particles(&mut self, particles: impl IntoIterator<Item = Particle>) {
        let cap = self.settings.max_particles();
        if cap == 0 {
            return;
        }
        self.particles.extend(particles);
        if self.particles.len() > cap {
            let excess = self.particles.len() - cap;
            self.particles.drain(..excess);
        }
    }

    /// Recompute level and spawn interval from the score
    pub fn update_progression(&mut self) {
        let level = level_for_score(self.score);
        if level > self.level {
            log::info!("Level {} reached (score {})", level, self.score);
            self.events.push(GameEvent::LevelUp { level });
        }
        self.level = level;
        self.spawn_interval = spawn_interval_for_level(level);
    }
}
