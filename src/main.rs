//! Pong Canvas entry point
//!
//! In the browser: binds the `#pong` canvas and runs the game loop off
//! `requestAnimationFrame`. Natively: plays a headless match against a
//! scripted pointer and logs the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use pong_canvas::input::InputEvent;
    use pong_canvas::renderer::CanvasSurface;
    use pong_canvas::sim::Field;
    use pong_canvas::{Error, Game, Result, Settings};

    const CANVAS_ID: &str = "pong";

    /// Everything the frame callback and listeners share
    struct Host {
        game: Game,
        surface: CanvasSurface,
    }

    pub fn start() {
        console_error_panic_hook::set_once();
        if let Err(e) = run() {
            // The logger may not be up yet
            web_sys::console::error_1(&format!("Pong failed to start: {e}").into());
            log::error!("Pong failed to start: {e}");
        }
    }

    fn run() -> Result<()> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let document = window.document().ok_or(Error::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| Error::CanvasNotFound(CANVAS_ID.to_string()))?
            .dyn_into()
            .map_err(|_| Error::NotACanvas(CANVAS_ID.to_string()))?;

        let settings = Settings::from_canvas(&canvas)?;
        if console_log::init_with_level(settings.log_level()).is_err() {
            web_sys::console::warn_1(&"Logger already initialised".into());
        }
        log::info!("Pong starting...");

        let surface = CanvasSurface::new(&canvas)?;
        let (width, height) = surface.size();

        let seed = settings
            .seed
            .unwrap_or_else(|| js_sys::Date::now() as u64);
        let game = Game::new(Field::new(width, height), seed, settings);
        let host = Rc::new(RefCell::new(Host { game, surface }));

        setup_input_handlers(&canvas, host.clone())?;

        // Start game loop
        request_animation_frame(host);

        log::info!("Pong running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, host: Rc<RefCell<Host>>) -> Result<()> {
        // Mouse move: queue the pointer for the next tick
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            host.borrow_mut().game.push_input(InputEvent::PointerMoved {
                client_y: event.client_y() as f32,
                surface_top: rect.top() as f32,
            });
        });
        canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window gone, stopping game loop");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(host, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>, time: f64) {
        {
            let mut h = host.borrow_mut();
            let Host { game, surface } = &mut *h;
            game.frame(time, surface);
        }

        request_animation_frame(host);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pong_canvas::{Game, Settings};
    use pong_canvas::consts::FPS;
    use pong_canvas::input::InputEvent;
    use pong_canvas::renderer::RecordingSurface;
    use pong_canvas::sim::Field;

    /// One minute of play at the nominal refresh rate
    const HEADLESS_FRAMES: u32 = 60 * 60;

    let settings = Settings::default();
    env_logger::Builder::new()
        .filter_level(settings.log_level().to_level_filter())
        .init();
    log::info!("Pong (native) starting headless match...");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let field = Field::default();
    let mut game = Game::new(field, seed, settings);
    let mut surface = RecordingSurface::new();

    let frame_ms = 1000.0 / FPS as f64;
    for frame in 0..HEADLESS_FRAMES {
        // Sweep the pointer up and down the field
        let phase = frame as f32 * 0.02;
        let pointer_y = field.height / 2.0 + phase.sin() * field.height * 0.4;
        game.push_input(InputEvent::PointerMoved {
            client_y: pointer_y,
            surface_top: 0.0,
        });
        game.frame(frame as f64 * frame_ms, &mut surface);
    }

    let score = game.state().score;
    log::info!(
        "Final score after {} frames: player {} - AI {}",
        surface.frames(),
        score.player,
        score.ai
    );
    match serde_json::to_string(game.state()) {
        Ok(json) => log::debug!("Final state: {}", json),
        Err(e) => log::warn!("Could not serialize final state: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
