//! Pong Canvas - classic two-paddle Pong against a reactive AI
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, scoring, AI)
//! - `input`: Pointer events to player paddle coordinates
//! - `renderer`: Stateless drawing onto a 2D surface
//! - `game`: Frame loop glue (input queue, pacing, tick + draw)
//! - `settings`: Display preferences

pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use game::{Game, Pacing};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Nominal display refresh rate. The browser loop runs once per refresh,
    /// so this only drives the fixed-timestep pacing.
    pub const FPS: f32 = 60.0;
    /// Fixed simulation timestep used by `Pacing::Fixed`
    pub const SIM_DT: f32 = 1.0 / FPS;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default field dimensions (the canvas size wins in the browser)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle geometry
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Gap between a paddle and its side of the field
    pub const PADDLE_MARGIN: f32 = 15.0;

    /// Ball bounding box edge
    pub const BALL_SIZE: f32 = 14.0;
    /// Horizontal serve speed (units per tick, sign is random)
    pub const BALL_BASE_SPEED_X: f32 = 5.0;
    /// Maximum vertical serve speed (units per tick)
    pub const BALL_BASE_SPEED_Y: f32 = 3.0;
    /// Vertical speed added per unit of normalized paddle impact
    pub const SPIN_FACTOR: f32 = 2.0;

    /// AI paddle step per tick
    pub const AI_SPEED: f32 = 4.0;
    /// AI holds still while the ball centre is within this band
    pub const AI_DEAD_ZONE: f32 = 10.0;
}

/// Clamp the top edge of a span of `extent` so it stays inside `[0, limit]`.
///
/// Fields smaller than the span pin it to zero instead of panicking.
#[inline]
pub fn clamp_span(top: f32, extent: f32, limit: f32) -> f32 {
    top.clamp(0.0, (limit - extent).max(0.0))
}
