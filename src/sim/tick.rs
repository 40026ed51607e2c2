//! Per-frame simulation tick
//!
//! Core game loop step: input, movement, spawning, collisions, progression.

use super::collision::resolve_collisions;
use super::input::TickInput;
use super::particle::age_particles;
use super::session::{GamePhase, Session};

/// Advance the session by one frame
pub fn tick(session: &mut Session, input: &TickInput) {
    // Handle pause toggle
    if input.pause {
        session.toggle_pause();
    }

    // Don't tick if paused or game over
    if session.phase != GamePhase::Running {
        return;
    }

    session.events.clear();

    if input.wants_fire() {
        let shots = session.player.shoot();
        session.projectiles.extend(shots);
    }

    session.frame += 1;

    session.player.update(&input.keys);

    session.projectiles.retain_mut(|p| !p.update());

    if session.frame - session.last_spawn_frame > u64::from(session.spawn_interval) {
        session.spawn_hostile();
        session.last_spawn_frame = session.frame;
    }

    let floor_y = session.floor_y();
    session.hostiles.retain_mut(|h| !h.update(floor_y));
    session.pickups.retain_mut(|p| !p.update(floor_y));

    resolve_collisions(session);

    session.update_progression();

    age_particles(&mut session.particles);
}
