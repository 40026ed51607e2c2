//! Collision resolution between entity collections
//!
//! Hits are marked on the bodies during the scan and removals are applied
//! with a single `retain` per collection afterwards, so no collection is
//! mutated while it is being iterated.

use glam::Vec2;

use super::session::{GameEvent, Session};
use crate::consts::CONTACT_DAMAGE;

/// Resolve every collision for this tick, in order:
/// projectiles vs hostiles, hostiles vs player, pickups vs player.
pub fn resolve_collisions(session: &mut Session) {
    projectiles_vs_hostiles(session);
    hostiles_vs_player(session);
    pickups_vs_player(session);
}

/// Each projectile hits at most one hostile; a hostile destroyed earlier in
/// the scan cannot absorb later projectiles.
fn projectiles_vs_hostiles(session: &mut Session) {
    // Deferred so the scan only borrows the collections
    let mut particles = Vec::new();
    let mut drops: Vec<Vec2> = Vec::new();

    for projectile in session.projectiles.iter_mut() {
        for hostile in session.hostiles.iter_mut() {
            if !hostile.body.alive || !projectile.body.overlaps(&hostile.body) {
                continue;
            }

            particles.extend(projectile.explode(&mut session.fx_rng));
            projectile.body.alive = false;

            if hostile.damage() {
                hostile.body.alive = false;
                let score = hostile.score_value();
                session.score += score;
                drops.push(hostile.body.pos);
                session.events.push(GameEvent::HostileDestroyed {
                    kind: hostile.kind,
                    pos: hostile.body.pos,
                    score,
                });
            }
            break;
        }
    }

    session.projectiles.retain(|p| p.body.alive);
    session.hostiles.retain(|h| h.body.alive);

    session.add_particles(particles);
    for pos in drops {
        session.try_drop_pickup(pos);
    }
}

/// Any hostile touching the ship is removed, even when the hit is absorbed by invincibility
fn hostiles_vs_player(session: &mut Session) {
    let mut fatal = false;

    for hostile in session.hostiles.iter_mut() {
        if !hostile.body.overlaps(&session.player.body) {
            continue;
        }
        let was_invincible = session.player.invincible;
        if session.player.damage(CONTACT_DAMAGE) {
            fatal = true;
        }
        if !was_invincible {
            session.events.push(GameEvent::PlayerHit {
                health: session.player.health,
            });
        }
        hostile.body.alive = false;
    }

    session.hostiles.retain(|h| h.body.alive);

    if fatal {
        session.end_run();
    }
}

fn pickups_vs_player(session: &mut Session) {
    for pickup in session.pickups.iter_mut() {
        if !pickup.body.overlaps(&session.player.body) {
            continue;
        }
        pickup.apply(&mut session.player);
        pickup.body.alive = false;
        session.events.push(GameEvent::PickupCollected { kind: pickup.kind });
    }

    session.pickups.retain(|p| p.body.alive);
}
