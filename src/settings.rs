//! Game settings
//!
//! Read from an optional inline JSON block in the host page; never written back.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::error::{GameError, Result};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play-field width in pixels
    pub canvas_width: f32,
    /// Play-field height in pixels (hostiles and pickups expire past it)
    pub canvas_height: f32,
    /// Fixed RNG seed (None = seed from the clock)
    pub seed: Option<u64>,

    // === Visual Effects ===
    /// Projectile trails
    pub trails: bool,
    /// Explosion particles
    pub particles: bool,
    /// Cap on live particles
    pub max_particles: usize,

    // === Behavior ===
    /// Pause when the window loses focus
    pub auto_pause: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            seed: None,

            trails: true,
            particles: true,
            max_particles: 512,

            auto_pause: true,
        }
    }
}

impl Settings {
    /// Play-field size as a vector
    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.canvas_width, self.canvas_height)
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.max_particles
        }
    }

    /// Parse settings from JSON and check them
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        // Player must fit inside the play field
        let min_w = crate::consts::PLAYER_WIDTH;
        let min_h = crate::consts::PLAYER_HEIGHT;
        if !(self.canvas_width.is_finite() && self.canvas_width >= min_w) {
            return Err(GameError::InvalidSettings(format!(
                "canvas_width must be at least {min_w}, got {}",
                self.canvas_width
            )));
        }
        if !(self.canvas_height.is_finite() && self.canvas_height >= min_h) {
            return Err(GameError::InvalidSettings(format!(
                "canvas_height must be at least {min_h}, got {}",
                self.canvas_height
            )));
        }
        Ok(())
    }

    /// DOM id of the inline settings block
    const SETTINGS_ELEMENT_ID: &'static str = "game-settings";

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::SETTINGS_ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = text {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", Self::SETTINGS_ELEMENT_ID);
                    return settings;
                }
                Err(e) => log::warn!("Ignoring page settings: {e}"),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        log::debug!("No #{} outside the browser", Self::SETTINGS_ELEMENT_ID);
        Self::default()
    }
}
