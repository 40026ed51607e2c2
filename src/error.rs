//! Error types
//!
//! The simulation itself never fails; only the edges that touch the outside
//! world (settings text, the DOM, the canvas context) return errors.

use thiserror::Error;

/// Errors surfaced while setting up or configuring the game
#[derive(Error, Debug)]
pub enum GameError {
    /// Settings JSON could not be parsed
    #[error("Settings parse error: {0}")]
    SettingsParse(#[from] serde_json::Error),

    /// Settings parsed but hold out-of-range values
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// A required DOM element is missing or has the wrong type
    #[error("DOM error: {0}")]
    Dom(String),

    /// The 2D drawing context could not be acquired
    #[error("Canvas error: {0}")]
    Canvas(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
