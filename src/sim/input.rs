//! Keyboard state and the per-tick input snapshot

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Fire,
    Pause,
    Restart,
    Autopilot,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` identifier; unknown keys map to None
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            " " => Some(Key::Fire),
            "p" => Some(Key::Pause),
            "r" | "R" => Some(Key::Restart),
            "i" => Some(Key::Autopilot),
            _ => None,
        }
    }
}

/// Which held keys are currently down
///
/// Key-down sets a key, key-up clears it; unknown keys never reach here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

impl KeyState {
    /// Record a key transition. Command keys (pause/restart) are not held state.
    pub fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Left => self.left = pressed,
            Key::Right => self.right = pressed,
            Key::Up => self.up = pressed,
            Key::Down => self.down = pressed,
            Key::Fire => self.fire = pressed,
            Key::Pause | Key::Restart | Key::Autopilot => {}
        }
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Up => self.up,
            Key::Down => self.down,
            Key::Fire => self.fire,
            Key::Pause | Key::Restart | Key::Autopilot => false,
        }
    }
}

/// Input commands for a single tick
///
/// Built once at the tick boundary and never mutated while the tick runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held movement/fire keys
    pub keys: KeyState,
    /// Fire was pressed since the last tick (catches taps shorter than a frame)
    pub fire_pressed: bool,
    /// Pause toggle
    pub pause: bool,
}

impl TickInput {
    /// Whether the player wants to shoot this tick
    pub fn wants_fire(&self) -> bool {
        self.keys.fire || self.fire_pressed
    }
}
