//! Pot Shot entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlButtonElement, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use pot_shot::consts::*;
    use pot_shot::renderer::CanvasRenderer;
    use pot_shot::sim::{GameState, TickInput, tick};
    use pot_shot::{Settings, format_money};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        input: TickInput,
        /// Currently depressed keys, lowercased
        keys: HashSet<String>,
        /// Set by the insert button, consumed on the next frame so the
        /// economy sees the same clock as the simulation
        insert_requested: bool,
        last_time: f64,
    }

    impl Game {
        fn new(state: GameState, renderer: CanvasRenderer) -> Self {
            Self {
                state,
                renderer,
                input: TickInput::default(),
                keys: HashSet::new(),
                insert_requested: false,
                last_time: 0.0,
            }
        }

        /// Collapse the key-set into this frame's movement/cash-out intent
        fn sync_input(&mut self) {
            let held = |key: &str| self.keys.contains(key);
            self.input.up = held("w") || held("arrowup");
            self.input.down = held("s") || held("arrowdown");
            self.input.left = held("a") || held("arrowleft");
            self.input.right = held("d") || held("arrowright");
            self.input.cash_out_held = held("g");
        }

        /// One display-refresh step: delta scaling, simulation, render
        fn frame(&mut self, time: f64) {
            let delta = if self.last_time > 0.0 {
                ((time - self.last_time) / TICK_MS) as f32
            } else {
                1.0
            };
            self.last_time = time;

            if self.insert_requested {
                self.insert_requested = false;
                self.state.insert_and_spawn(time);
            }

            self.sync_input();
            tick(&mut self.state, &self.input, delta, time);
            self.renderer.render(&self.state, self.input.pointer, time);
        }

        /// Sync the DOM HUD: wallet/pot readouts, insert button, overlay
        fn update_hud(&self, document: &Document) {
            if let Some(el) = document.get_element_by_id("pot-value") {
                el.set_text_content(Some(&format_money(self.state.pot)));
            }
            if let Some(el) = document.get_element_by_id("wallet-value") {
                el.set_text_content(Some(&format_money(self.state.wallet)));
            }
            if let Some(btn) = document
                .get_element_by_id("insert-button")
                .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
            {
                btn.set_disabled(!self.state.can_enter());
            }

            if let Some(overlay_el) = document.get_element_by_id("overlay") {
                match &self.state.overlay {
                    Some(overlay) => {
                        let _ = overlay_el.set_attribute("class", "overlay");
                        if let Some(el) = document.get_element_by_id("overlay-title") {
                            el.set_text_content(Some(&overlay.title));
                        }
                        if let Some(el) = document.get_element_by_id("overlay-message") {
                            el.set_text_content(Some(&overlay.message));
                        }
                        if let Some(el) = document.get_element_by_id("overlay-list") {
                            let display = if overlay.show_list { "grid" } else { "none" };
                            let _ = el.set_attribute("style", &format!("display: {display}"));
                        }
                        if let Some(el) = document.get_element_by_id("overlay-hint") {
                            let hint = if overlay.show_list {
                                "Press the button above to insert $1 and enter the arena."
                            } else {
                                "Hit the insert button to rejoin the arena."
                            };
                            el.set_text_content(Some(hint));
                        }
                    }
                    None => {
                        let _ = overlay_el.set_attribute("class", "overlay hidden");
                    }
                }
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pot Shot starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .ok_or_else(|| JsValue::from_str("no #game-canvas element"))?
            .dyn_into()?;
        canvas.set_width(VIEW_WIDTH as u32);
        canvas.set_height(VIEW_HEIGHT as u32);

        let settings = Settings::load();
        log::info!("quality preset: {}", settings.quality.as_str());

        let seed = js_sys::Date::now() as u64;
        let mut state = GameState::new(seed, Vec2::new(VIEW_WIDTH, VIEW_HEIGHT));
        state.max_particles = settings.quality.max_particles();
        log::info!("Game initialized with seed: {seed}");

        let renderer = CanvasRenderer::new(&canvas, &settings)?;
        let game = Rc::new(RefCell::new(Game::new(state, renderer)));

        setup_input_handlers(&canvas, game.clone())?;
        setup_insert_button(&document, game.clone())?;

        request_animation_frame(game);
        log::info!("Pot Shot running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        // Keyboard: maintain the depressed key-set, lowercased so the
        // control scheme is case-insensitive
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.insert(event.key().to_lowercase());
            });
            document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.remove(&event.key().to_lowercase());
            });
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Pointer position in canvas pixels, scaled for CSS sizing
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let x = (event.client_x() as f64 - rect.left()) / rect.width()
                    * canvas_clone.width() as f64;
                let y = (event.client_y() as f64 - rect.top()) / rect.height()
                    * canvas_clone.height() as f64;
                game.borrow_mut().input.pointer = Vec2::new(x as f32, y as f32);
            });
            canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Left button fires, right button steers toward the pointer
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                match event.button() {
                    0 => g.input.fire_held = true,
                    2 => g.input.steer_held = true,
                    _ => {}
                }
            });
            canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                match event.button() {
                    0 => g.input.fire_held = false,
                    2 => g.input.steer_held = false,
                    _ => {}
                }
            });
            document
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // The right button doubles as a movement control
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
            });
            canvas.add_event_listener_with_callback(
                "contextmenu",
                closure.as_ref().unchecked_ref(),
            )?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_insert_button(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        if let Some(btn) = document.get_element_by_id("insert-button") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().insert_requested = true;
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.frame(time);
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_hud(&document);
            }
        }
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(err) = wasm_game::run() {
        log::error!("startup failed: {err:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pot Shot (native) starting...");
    log::info!("The game targets the browser - run with `trunk serve` for the web version");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
