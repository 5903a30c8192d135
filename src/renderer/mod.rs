//! 2D rendering module
//!
//! `draw` is a read-only projection of [`GameState`] onto a [`Surface`]. The
//! surface is supplied by the host: the browser canvas on wasm32, or a
//! [`RecordingSurface`] for tests and headless runs.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use shapes::Rect;

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{GameState, Side};

/// Drawing primitives the renderer needs from the host
pub trait Surface {
    /// Wipe the whole surface, then fill it with `background` if given
    fn clear(&mut self, background: Option<&str>);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    /// Text horizontally centred on `anchor.x` with its top at `anchor.y`
    fn draw_text(&mut self, text: &str, anchor: Vec2, font: &str, color: &str);
}

/// Draw one frame
pub fn draw(state: &GameState, settings: &Settings, surface: &mut impl Surface) {
    let fg = settings.foreground.as_str();

    surface.clear(settings.background.as_deref());

    if settings.show_net {
        for tick in shapes::net_ticks(&state.field) {
            surface.fill_rect(tick, fg);
        }
    }

    surface.fill_rect(shapes::paddle_rect(&state.player), fg);
    surface.fill_rect(shapes::paddle_rect(&state.ai), fg);

    let (center, radius) = shapes::ball_circle(&state.ball);
    surface.fill_circle(center, radius, fg);

    for side in [Side::Player, Side::Ai] {
        let text = state.score.get(side).to_string();
        let anchor = shapes::score_anchor(&state.field, side);
        surface.draw_text(&text, anchor, &settings.score_font, fg);
    }
}
