//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame
//! - Seeded RNG only
//! - Removals applied after each collision scan, never during it
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod hostile;
pub mod input;
pub mod particle;
pub mod pickup;
pub mod player;
pub mod projectile;
pub mod session;
pub mod tick;

pub use autopilot::autopilot_input;
pub use collision::resolve_collisions;
pub use entity::Body;
pub use hostile::{Hostile, HostileKind, HostileStats};
pub use input::{Key, KeyState, TickInput};
pub use particle::Particle;
pub use pickup::{Pickup, PickupKind};
pub use player::Player;
pub use projectile::Projectile;
pub use session::{
    GameEvent, GamePhase, Session, choose_hostile_kind, level_for_score, spawn_interval_for_level,
};
pub use tick::tick;
