//! BlockBlock entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent};

    use block_block::input::action_for_code;
    use block_block::{BlockBlock, Clock, GameConfig};

    /// Everything the host callbacks share
    struct Session {
        clock: Clock<BlockBlock>,
        game: BlockBlock,
    }

    /// Read `data-config` from the game container, falling back to defaults
    fn load_config(document: &Document) -> GameConfig {
        let json = document
            .get_element_by_id("game-container")
            .and_then(|el| el.get_attribute("data-config"));
        let Some(json) = json else {
            return GameConfig::default();
        };
        match GameConfig::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using defaults", e);
                GameConfig::default()
            }
        }
    }

    fn create_canvas(document: &Document, config: &GameConfig) -> Result<HtmlCanvasElement, JsValue> {
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| JsValue::from_str("not a canvas"))?;
        canvas.set_width(config.width);
        canvas.set_height(config.height);

        match document.get_element_by_id("game-container") {
            Some(container) => {
                container.insert_adjacent_element("afterbegin", &canvas)?;
            }
            None => {
                log::warn!("No #game-container, appending canvas to body");
                let body = document.body().ok_or("no body")?;
                body.append_child(&canvas)?;
            }
        }
        Ok(canvas)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("BlockBlock starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let mut config = load_config(&document);
        if config.seed.is_none() {
            config.seed = Some(js_sys::Date::now() as u64);
        }

        let canvas = create_canvas(&document, &config)?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()
            .map_err(|_| JsValue::from_str("not a 2d context"))?;

        let mut clock = Clock::new();
        let game = BlockBlock::new(&config, Box::new(ctx), &mut clock)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let session = Rc::new(RefCell::new(Session { clock, game }));

        setup_input_handlers(&window, session.clone())?;
        request_animation_frame(session);

        log::info!("BlockBlock running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, session: Rc<RefCell<Session>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let code = event.code();
            if action_for_code(&code).is_none() {
                return;
            }
            // Arrows and space would otherwise scroll the page
            event.prevent_default();
            let Ok(mut s) = session.try_borrow_mut() else {
                log::warn!("Dropped key {} while the game is busy", code);
                return;
            };
            let Session { clock, game } = &mut *s;
            // Event timestamps share the rAF timebase
            clock.sync(event.time_stamp());
            game.handle_key(&code, clock.timers_mut());
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(session: Rc<RefCell<Session>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Lost window, stopping game loop");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(session, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(session: Rc<RefCell<Session>>, time: f64) {
        // Re-arm first: a trap inside `frame` must not end the loop
        request_animation_frame(session.clone());

        let Ok(mut s) = session.try_borrow_mut() else {
            log::error!("Session still borrowed at frame {:.1}, skipping", time);
            return;
        };
        let Session { clock, game } = &mut *s;
        clock.frame(game, time);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("BlockBlock failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("BlockBlock (native) starting headless run...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    if let Err(e) = run_headless(10) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Simulate `seconds` of play at 60 Hz with a scripted player
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(seconds: u32) -> Result<(), block_block::ConfigError> {
    use block_block::renderer::NullSurface;
    use block_block::{BlockBlock, Clock, GameConfig};

    const FRAME_MS: f64 = 1000.0 / 60.0;

    let config = GameConfig::default().with_seed(42);
    let mut clock = Clock::new();
    let mut game = BlockBlock::new(&config, Box::new(NullSurface), &mut clock)?;

    for frame in 0..seconds * 60 {
        if frame % 60 == 30 {
            game.handle_key("Space", clock.timers_mut());
        }
        if frame % 90 == 0 {
            game.handle_key("ArrowLeft", clock.timers_mut());
        }
        clock.frame(&mut game, f64::from(frame) * FRAME_MS);
    }

    let stats = game.stats();
    log::info!(
        "Headless run done: {} blocks live, {} dodged, {} hits",
        game.blocks().len(),
        stats.dodged,
        stats.hits
    );
    println!(
        "{}s simulated: {} dodged, {} hits, {} live",
        seconds,
        stats.dodged,
        stats.hits,
        game.blocks().len()
    );
    Ok(())
}
