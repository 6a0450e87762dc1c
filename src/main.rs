//! Brickfall entry point
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

    use brickfall::consts::*;
    use brickfall::platform::{TUNING_ELEMENT_ID, key_event_from_code, tuning_or_default};
    use brickfall::renderer::{RenderState, world_vertices};
    use brickfall::sim::{GameEvent, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        accumulator: f32,
        last_time: f64,
        /// Key events received since the last tick
        input: TickInput,
    }

    impl Game {
        fn new(state: GameState) -> Self {
            Self {
                state,
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
                input: TickInput::default(),
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = std::mem::take(&mut self.input);
                for event in tick(&mut self.state, &input) {
                    if matches!(event, GameEvent::BrickDestroyed { .. })
                        && self.state.brick_count() == 0
                    {
                        log::info!("All bricks cleared");
                    }
                }
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = world_vertices(self.state.world());
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brickfall starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let tuning_json = document
            .get_element_by_id(TUNING_ELEMENT_ID)
            .and_then(|el| el.text_content());
        let tuning = tuning_or_default(tuning_json.as_deref());

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let width = tuning.playfield_width as u32;
        let height = tuning.playfield_height as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let playfield = (tuning.playfield_width, tuning.playfield_height);
        let game = Rc::new(RefCell::new(Game::new(GameState::new(tuning))));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height, playfield).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Renderer unavailable, running without it: {}", e),
        }

        setup_input_handlers(game.clone());

        request_animation_frame(game);

        log::info!("Brickfall running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key_event) = key_event_from_code(&event.code(), pressed) {
                    game.borrow_mut().input.key_events.push(key_event);
                }
            });
            let _ = document
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
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

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
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
    log::info!("Brickfall (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    run_headless_demo(60 * 60);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play a scripted minute of game time and report what happened
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo(ticks: u64) {
    use brickfall::Tuning;
    use brickfall::sim::{GameEvent, GameState, Key, KeyEvent, TickInput, tick};

    let mut state = GameState::new(Tuning::default());
    let mut paddle_hits = 0;
    let mut resets = 0;

    for t in 0..ticks {
        // Sweep the paddle back and forth every 1.5 seconds
        let key_events = match t % 180 {
            0 => vec![KeyEvent::up(Key::Right), KeyEvent::down(Key::Left)],
            90 => vec![KeyEvent::up(Key::Left), KeyEvent::down(Key::Right)],
            _ => Vec::new(),
        };

        for event in tick(&mut state, &TickInput { key_events }) {
            match event {
                GameEvent::PaddleHit { .. } => paddle_hits += 1,
                GameEvent::BallReset => resets += 1,
                GameEvent::BrickDestroyed { row, col, .. } => {
                    log::info!("tick {}: brick ({}, {}) destroyed", t, row, col);
                }
                GameEvent::WallBounce { .. } => {}
            }
        }
    }

    println!(
        "After {} ticks: {} bricks left, {} paddle hits, {} resets",
        ticks,
        state.brick_count(),
        paddle_hits,
        resets
    );
}
