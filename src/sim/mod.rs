//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - One call to `tick` is one step, no wall-clock time
//! - Randomness only from the injected RNG
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use ai::track_ball;
pub use collision::{Aabb, ball_paddle_contact, ball_wall_collision, paddle_impact, reflect_off_paddle};
pub use state::{Ball, Field, GameEvent, GameRng, GameState, Paddle, Score, Side, seeded_rng};
pub use tick::{TickInput, tick};
