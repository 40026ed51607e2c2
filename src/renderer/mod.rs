//! 2D canvas rendering module
//!
//! The scene is drawn through the `Canvas2d` trait; the browser backend lives
//! in `web` and is only built for wasm32.

pub mod canvas;
pub mod hud;
pub mod scene;
pub mod shapes;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use canvas::{Canvas2d, Sprite};
pub use hud::{Hud, update_hud};
pub use scene::draw_frame;
