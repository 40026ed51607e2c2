//! Sky Raid entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use sky_raid::error::{GameError, Result};
    use sky_raid::renderer::draw_frame;
    use sky_raid::renderer::web::{DomHud, SpriteAtlas, WebCanvas};
    use sky_raid::sim::{GamePhase, Key, KeyState, Session, TickInput, autopilot_input, tick};
    use sky_raid::Settings;

    /// Game instance holding all state
    struct Game {
        session: Session,
        canvas: WebCanvas,
        hud: DomHud,
        /// Held keys, written by key events and sampled once per frame
        keys: KeyState,
        /// One-shot presses since the last tick
        fire_pressed: bool,
        pause_pressed: bool,
        autopilot: bool,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        last_phase: GamePhase,
    }

    impl Game {
        /// Snapshot input for this frame and clear one-shot presses
        fn take_input(&mut self) -> TickInput {
            let mut input = if self.autopilot {
                autopilot_input(&self.session)
            } else {
                TickInput {
                    keys: self.keys,
                    fire_pressed: self.fire_pressed,
                    ..Default::default()
                }
            };
            input.pause = self.pause_pressed;

            self.fire_pressed = false;
            self.pause_pressed = false;
            input
        }

        /// Run one simulation tick
        fn update(&mut self, time: f64) {
            let input = self.take_input();
            tick(&mut self.session, &input);

            for event in &self.session.events {
                log::debug!("{:?}", event);
            }

            // Track frame times for FPS
            let oldest_time = self.frame_times[self.frame_index];
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % self.frame_times.len();
            if oldest_time > 0.0 && self.frame_index == 0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    log::debug!("FPS: {}", (60000.0 / elapsed).round());
                }
            }

            let phase = self.session.phase;
            if phase != self.last_phase {
                log::info!("Phase {:?} -> {:?}", self.last_phase, phase);
                self.last_phase = phase;
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            draw_frame(&mut self.canvas, &mut self.hud, &self.session);
        }

        /// Swap in a fresh session if the run is over
        fn restart(&mut self, seed: u64) {
            if let Some(session) = self.session.restart(seed) {
                self.session = session;
                self.keys = KeyState::default();
                self.fire_pressed = false;
                self.pause_pressed = false;
                self.last_phase = self.session.phase;
                log::info!("Game restarted with seed: {}", seed);
            }
        }
    }

    pub fn run() -> Result<()> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {e}").into());
        }

        log::info!("Sky Raid starting...");

        let window = web_sys::window().ok_or_else(|| GameError::Dom("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| GameError::Dom("no document".into()))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| GameError::Dom("no #gameCanvas".into()))?
            .dyn_into()
            .map_err(|_| GameError::Dom("#gameCanvas is not a canvas".into()))?;

        let settings = Settings::load();
        canvas.set_width(settings.canvas_width as u32);
        canvas.set_height(settings.canvas_height as u32);

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let web_canvas = WebCanvas::new(&canvas, SpriteAtlas::load())?;
        let hud = DomHud::new(&document);
        let auto_pause = settings.auto_pause;

        let session = Session::new(settings, seed);
        let game = Rc::new(RefCell::new(Game {
            last_phase: session.phase,
            session,
            canvas: web_canvas,
            hud,
            keys: KeyState::default(),
            fire_pressed: false,
            pause_pressed: false,
            autopilot: false,
            frame_times: [0.0; 60],
            frame_index: 0,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone())?;
        if auto_pause {
            setup_auto_pause(game.clone())?;
        }

        // Start game loop
        request_animation_frame(game);

        log::info!("Sky Raid running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<()> {
        let window = web_sys::window().ok_or_else(|| GameError::Dom("no window".into()))?;

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(key) = Key::from_dom_key(&event.key()) else {
                    return;
                };
                let mut g = game.borrow_mut();
                g.keys.set(key, true);
                match key {
                    Key::Fire => g.fire_pressed = true,
                    Key::Pause => g.pause_pressed = true,
                    Key::Restart => {
                        let seed = js_sys::Date::now() as u64;
                        g.restart(seed);
                    }
                    Key::Autopilot => {
                        g.autopilot = !g.autopilot;
                        log::info!("Autopilot: {}", g.autopilot);
                    }
                    _ => {}
                }
            });
            window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                .map_err(|e| GameError::Dom(format!("keydown listener: {e:?}")))?;
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    game.borrow_mut().keys.set(key, false);
                }
            });
            window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())
                .map_err(|e| GameError::Dom(format!("keyup listener: {e:?}")))?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) -> Result<()> {
        let window = web_sys::window().ok_or_else(|| GameError::Dom("no window".into()))?;

        // Window blur (click outside, tab switch)
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            let mut g = game.borrow_mut();
            // Held keys never see their keyup once focus is gone
            g.keys = KeyState::default();
            if g.session.phase == GamePhase::Running {
                g.pause_pressed = true;
                log::info!("Auto-paused (window blur)");
            }
        });
        window
            .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())
            .map_err(|e| GameError::Dom(format!("blur listener: {e:?}")))?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; game loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Sky Raid failed to start: {e}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Sky Raid (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - use `trunk serve` for the web version");

    run_headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Let the autopilot play until it dies or the frame limit is hit
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo() {
    use sky_raid::Settings;
    use sky_raid::sim::{GameEvent, Session, autopilot_input, tick};

    const MAX_FRAMES: u64 = 60 * 60 * 5;

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });
    let mut session = Session::new(settings, seed);
    log::info!("Demo seed: {}", seed);

    let mut kills = 0u32;
    while !session.is_game_over() && session.frame < MAX_FRAMES {
        let input = autopilot_input(&session);
        tick(&mut session, &input);
        kills += session
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::HostileDestroyed { .. }))
            .count() as u32;
    }

    println!(
        "Demo finished after {} frames: score {}, level {}, {} kills, health {}",
        session.frame, session.score, session.level, kills, session.player.health
    );
}
