//! Hop Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use hop_runner::audio::{AudioManager, SoundEffect};
    use hop_runner::consts::*;
    use hop_runner::highscore::LocalStorageStore;
    use hop_runner::platform::{Command, command_for_key};
    use hop_runner::renderer::{CanvasRenderer, Hud, RenderSink};
    use hop_runner::sim::{SimEvent, SimStatus};
    use hop_runner::{GameConfig, Session, Settings};

    /// Game instance holding all state
    struct Game {
        session: Session<LocalStorageStore>,
        renderer: CanvasRenderer,
        audio: AudioManager,
        settings: Settings,
        accumulator: f32,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let events = self.session.tick();
                self.handle_events(&events);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        fn handle_events(&mut self, events: &[SimEvent]) {
            for event in events {
                match event {
                    SimEvent::LevelUp { level } => {
                        log::info!("Reached level {}", level);
                        if self.settings.level_up_flash() {
                            self.renderer.flash();
                        }
                    }
                    _ => {}
                }
                self.audio.play(SoundEffect::for_event(event));
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let snapshot = self.session.snapshot();
            let new_best = snapshot.status == SimStatus::Over && self.session.is_new_best();
            let hud = Hud::build(&snapshot, &self.settings, self.fps, new_best);
            self.renderer.present(&snapshot, &hud);
        }

        fn toggle_mute(&mut self) {
            self.settings.muted = !self.settings.muted;
            self.audio.apply_settings(&self.settings);
            self.settings.save();
            log::info!("Muted: {}", self.settings.muted);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Hop Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let mut config = GameConfig::load();
        // Keep a seed from the override so runs can be replayed
        let seed = *config.seed.get_or_insert_with(|| js_sys::Date::now() as u64);

        // Backing store matches the playfield aspect at device resolution
        let dpr = window.device_pixel_ratio();
        canvas.set_width((config.width as f64 * dpr) as u32);
        canvas.set_height((config.height as f64 * dpr) as u32);

        let renderer = CanvasRenderer::new(canvas, &config).expect("no 2d context");
        let settings = Settings::load();
        let audio = AudioManager::new(&settings);

        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            session: Session::new(config, LocalStorageStore),
            renderer,
            audio,
            settings,
            accumulator: 0.0,
            last_time: 0.0,
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }));

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Hop Runner running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if let Some(command) = command_for_key(&key) {
                    event.prevent_default();
                    g.session.command(command);
                } else if key == "m" || key == "M" {
                    g.toggle_mute();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Tap/click jumps, or restarts once the round is over
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::PointerEvent| {
                let mut g = game.borrow_mut();
                let command = match g.session.sim().status() {
                    SimStatus::Running => Command::Jump,
                    SimStatus::Over => Command::Restart,
                };
                g.session.command(command);
            });
            let _ = window
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Hop Runner (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    autopilot::run(3, 20_000);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: a simple bot plays a few rounds
#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use hop_runner::platform::Command;
    use hop_runner::sim::{SimEvent, SimStatus, Simulation};
    use hop_runner::{GameConfig, MemoryStore, Session};

    /// Jump when the nearest obstacle ahead is within reach
    fn wants_jump(sim: &Simulation) -> bool {
        let player = sim.player();
        let reach = sim.config().obstacle_speed * 8.0;
        sim.obstacles().iter().any(|o| {
            let gap = o.pos.x - (player.pos.x + player.size.x);
            (0.0..reach).contains(&gap)
        })
    }

    pub fn run(rounds: u32, max_ticks: u64) {
        let mut session = Session::new(GameConfig::load(), MemoryStore::new());

        for round in 1..=rounds {
            let mut ticks = 0;
            while session.sim().status() == SimStatus::Running && ticks < max_ticks {
                if wants_jump(session.sim()) {
                    session.command(Command::Jump);
                }
                for event in session.tick() {
                    if let SimEvent::LevelUp { level } = event {
                        log::info!("Round {}: level {}", round, level);
                    }
                }
                ticks += 1;
            }

            let sim = session.sim();
            println!(
                "Round {}: score {} (best {}) after {} ticks{}",
                round,
                sim.score(),
                sim.high_score(),
                sim.tick_count(),
                sim.progression()
                    .map(|p| format!(", level {}", p.level))
                    .unwrap_or_default()
            );

            session.command(Command::Restart);
            session.tick();
        }
    }
}
