//! HUD text sinks outside the canvas

use crate::sim::Session;

/// Write-only HUD targets owned by the host page
pub trait Hud {
    /// Health bar fill, 0-100
    fn set_health_percent(&mut self, percent: f32);
    fn set_score_text(&mut self, text: &str);
    fn set_level_text(&mut self, text: &str);
}

/// Push the session's current numbers to the HUD
pub fn update_hud(hud: &mut impl Hud, session: &Session) {
    hud.set_health_percent(session.player.health_fraction() * 100.0);
    hud.set_score_text(&format!("Score: {}", session.score));
    hud.set_level_text(&format!("Level: {}", session.level));
}
