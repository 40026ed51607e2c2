//! Sky Raid - a vertical shoot-'em-up on an HTML canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, session state)
//! - `renderer`: 2D canvas drawing and HUD updates
//! - `settings`: Data-driven configuration
//! - `error`: Fallible edges (settings, DOM, canvas)

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default play-field size (pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Player ship
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_MAX_HEALTH: u32 = 100;
    /// Distance of the ship's top edge above the bottom of the canvas at spawn
    pub const PLAYER_SPAWN_OFFSET: f32 = 60.0;
    pub const MAX_POWER_LEVEL: u8 = 3;

    /// Frames between shots
    pub const SHOOT_COOLDOWN_FRAMES: u32 = 10;
    /// Frames of invincibility after taking damage (~1s at 60 Hz)
    pub const INVINCIBLE_FRAMES: u32 = 60;

    /// Projectile speed (pixels per tick, upward)
    pub const PROJECTILE_SPEED: f32 = 10.0;
    /// Trail history capacity
    pub const TRAIL_LENGTH: usize = 5;

    /// Hostiles spawn just above the visible area
    pub const HOSTILE_SPAWN_Y: f32 = -30.0;
    /// Width reserved at the right edge when picking a spawn x
    pub const HOSTILE_SPAWN_MARGIN: f32 = 30.0;
    /// Damage dealt to the player on contact with a hostile
    pub const CONTACT_DAMAGE: u32 = 20;

    /// Pickups
    pub const PICKUP_SIZE: f32 = 20.0;
    pub const PICKUP_SPEED: f32 = 2.0;
    pub const PICKUP_DROP_CHANCE: f64 = 0.3;
    pub const HEALTH_PICKUP_AMOUNT: u32 = 30;

    /// Particles fade by this much alpha per tick
    pub const PARTICLE_FADE: f32 = 0.02;

    /// Score needed per level
    pub const SCORE_PER_LEVEL: u64 = 1000;
    /// Score above which bosses may appear
    pub const BOSS_SCORE_THRESHOLD: u64 = 5000;
    /// Spawn interval: base frames, reduction per level, floor
    pub const BASE_SPAWN_INTERVAL: u32 = 100;
    pub const SPAWN_INTERVAL_STEP: u32 = 5;
    pub const MIN_SPAWN_INTERVAL: u32 = 10;
}
