//! Idle/demo mode - the game plays itself
//!
//! Produces the same `TickInput` a keyboard would, so the simulation cannot
//! tell the difference.

use super::input::{KeyState, TickInput};
use super::session::Session;

/// Horizontal slack before the ship bothers to move
const AIM_TOLERANCE: f32 = 4.0;
/// How far above the ship a hostile counts as an incoming threat
const DANGER_HEIGHT: f32 = 120.0;

/// Steer under the lowest hostile and keep firing; dodge anything about to ram
pub fn autopilot_input(session: &Session) -> TickInput {
    let ship = &session.player.body;
    let ship_center = ship.center().x;
    let mut keys = KeyState {
        fire: true,
        ..Default::default()
    };

    // Incoming hostile directly above and close: sidestep away from it
    let threat = session.hostiles.iter().find(|h| {
        let b = &h.body;
        let horizontal = b.pos.x < ship.max().x + 10.0 && b.max().x > ship.pos.x - 10.0;
        let above = b.max().y <= ship.pos.y + 5.0 && ship.pos.y - b.max().y < DANGER_HEIGHT;
        horizontal && above
    });

    if let Some(h) = threat {
        let dodge_left = h.body.center().x >= ship_center;
        // Wall behind us: dodge the other way
        let at_right_wall = ship.max().x >= session.player.bounds.x;
        if (dodge_left && ship.pos.x > 0.0) || (!dodge_left && at_right_wall) {
            keys.left = true;
        } else {
            keys.right = true;
        }
        return TickInput {
            keys,
            ..Default::default()
        };
    }

    // Otherwise line up with the lowest hostile, or grab the nearest pickup
    let target_x = session
        .hostiles
        .iter()
        .filter(|h| h.body.max().y < ship.pos.y)
        .max_by(|a, b| a.body.pos.y.total_cmp(&b.body.pos.y))
        .map(|h| h.body.center().x)
        .or_else(|| {
            session
                .pickups
                .iter()
                .min_by(|a, b| {
                    let da = (a.body.center().x - ship_center).abs();
                    let db = (b.body.center().x - ship_center).abs();
                    da.total_cmp(&db)
                })
                .map(|p| p.body.center().x)
        });

    if let Some(x) = target_x {
        if x < ship_center - AIM_TOLERANCE {
            keys.left = true;
        } else if x > ship_center + AIM_TOLERANCE {
            keys.right = true;
        }
    }

    TickInput {
        keys,
        ..Default::default()
    }
}
