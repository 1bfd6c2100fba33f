//! Brickfall entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use brickfall::consts::*;
    use brickfall::renderer::Renderer;
    use brickfall::sim::{FrameInput, GameEvent, GamePhase, GameState, step};
    use brickfall::{HighScores, Settings};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Renderer,
        settings: Settings,
        highscores: HighScores,
        input: FrameInput,
        /// Last touch x (canvas CSS pixels) while a drag is in progress
        last_touch_x: Option<f32>,
        /// Whether an animation frame is currently scheduled
        loop_running: bool,
    }

    impl Game {
        fn new(renderer: Renderer, settings: Settings, highscores: HighScores) -> Self {
            let state = GameState::new(settings.effective_paddle_width());
            Self {
                state,
                renderer,
                settings,
                highscores,
                input: FrameInput::default(),
                last_touch_x: None,
                loop_running: false,
            }
        }

        /// Run one frame: step the simulation, draw, dispatch events
        fn frame(&mut self) {
            let events = step(&mut self.state, &self.input);
            self.renderer.draw(&self.state, &self.settings);
            for event in events {
                self.dispatch(&event);
            }
        }

        /// Route a simulation event to the DOM (HUD, overlays, leaderboard)
        fn dispatch(&mut self, event: &GameEvent) {
            match event {
                GameEvent::ScoreChanged(score) => set_text("hud-score", &score.to_string()),
                GameEvent::LivesChanged(lives) => set_text("hud-lives", &lives.to_string()),
                GameEvent::LevelChanged(level) => set_text("hud-level", &level.to_string()),
                GameEvent::LifeLost { remaining } => {
                    set_text("lives-remaining", &remaining.to_string());
                    show("life-lost", true);
                }
                GameEvent::GameOver {
                    score,
                    lives: _,
                    level,
                } => {
                    set_text("final-score", &score.to_string());
                    set_text("final-level", &level.to_string());

                    if let Some(rank) = self.highscores.add_score(
                        *score,
                        *level,
                        js_sys::Date::now(),
                    ) {
                        log::info!("new high score, rank {rank}");
                        self.highscores.save();
                    }
                    if let Some(best) = self.highscores.top_score() {
                        set_text("best-score", &best.to_string());
                    }

                    show("game-over", true);
                }
            }
        }

        /// Begin a fresh session and sync the HUD
        fn start(&mut self) {
            self.input = FrameInput::default();
            self.last_touch_x = None;
            let events = self.state.start();
            for event in events {
                self.dispatch(&event);
            }
            show("game-over", false);
            show("life-lost", false);
            show("start-screen", false);
        }

        /// Acknowledge a lost life and put the ball back in play
        fn respawn(&mut self) {
            self.state.respawn();
            show("life-lost", false);
        }
    }

    /// Set the text content of a DOM element by id
    fn set_text(id: &str, text: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }
    }

    /// Toggle an overlay element by id
    fn show(id: &str, visible: bool) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = document.get_element_by_id(id) {
                let class = if visible { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brickfall starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Missing canvas is a fatal no-op: log and bail
        let Some(renderer) = Renderer::from_canvas_id(&document, "canvas") else {
            return;
        };

        let settings = Settings::load();
        // Write back so the stored JSON always carries the full current schema
        settings.save();
        let highscores = HighScores::load();
        if let Some(best) = highscores.top_score() {
            set_text("best-score", &best.to_string());
        }

        let game = Rc::new(RefCell::new(Game::new(renderer, settings, highscores)));

        // Static first paint so the field is visible before start
        {
            let g = game.borrow();
            g.renderer.draw(&g.state, &g.settings);
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        setup_keyboard(game.clone());
        setup_touch(&canvas, game.clone());
        setup_buttons(game.clone());

        log::info!("Brickfall ready");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down: movement flags plus start/respawn shortcuts
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.left = true,
                    "ArrowRight" => g.input.right = true,
                    " " | "Enter" => match g.state.phase {
                        GamePhase::Paused => g.respawn(),
                        GamePhase::Idle | GamePhase::GameOver => {
                            g.start();
                            drop(g);
                            ensure_loop(&game);
                        }
                        GamePhase::Running => {}
                    },
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up: clear movement flags
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.left = false,
                    "ArrowRight" => g.input.right = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_touch(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Touch start: remember the anchor x
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                if !g.settings.touch_controls {
                    return;
                }
                if let Some(touch) = event.touches().get(0) {
                    g.last_touch_x = Some(touch.client_x() as f32);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move: horizontal delta scaled from CSS pixels to field units
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                if !g.settings.touch_controls {
                    return;
                }
                let (Some(last_x), Some(touch)) = (g.last_touch_x, event.touches().get(0)) else {
                    return;
                };
                let tx = touch.client_x() as f32;
                let css_width = canvas_clone.get_bounding_client_rect().width() as f32;
                if css_width > 0.0 {
                    let delta = (tx - last_x) * (FIELD_WIDTH / css_width);
                    g.state.nudge_paddle(delta);
                }
                g.last_touch_x = Some(tx);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end: drop the anchor
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                game.borrow_mut().last_touch_x = None;
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Start button (start screen and game-over modal share the flow)
        for id in ["start-btn", "restart-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                    game.borrow_mut().start();
                    ensure_loop(&game);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        // Life-lost acknowledgement
        if let Some(btn) = document.get_element_by_id("respawn-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().respawn();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Kick the animation-frame loop if it is not already scheduled
    fn ensure_loop(game: &Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.loop_running {
                return;
            }
            g.loop_running = true;
        }
        request_animation_frame(game.clone());
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let terminal = {
            let mut g = game.borrow_mut();
            g.frame();
            if g.state.is_terminal() {
                // Halt: no further frames until a restart kicks the loop
                g.loop_running = false;
                true
            } else {
                false
            }
        };

        if !terminal {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brickfall::consts::PADDLE_DEFAULT_WIDTH;
    use brickfall::sim::{FrameInput, GameEvent, GameState, step};

    env_logger::init();
    log::info!("Brickfall (native) starting headless session...");

    // Headless smoke run: hold no keys and let the session play out
    let mut state = GameState::new(PADDLE_DEFAULT_WIDTH);
    for event in state.start() {
        log::info!("event: {event:?}");
    }

    let input = FrameInput::default();
    let mut frames = 0u32;
    while !state.is_terminal() && frames < 100_000 {
        for event in step(&mut state, &input) {
            log::info!("event: {event:?}");
            if let GameEvent::LifeLost { .. } = event {
                state.respawn();
            }
        }
        frames += 1;
    }

    println!(
        "session ended after {} frames: score {} level {} lives {}",
        frames, state.score, state.level, state.lives
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
