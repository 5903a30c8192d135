//! Game state and core simulation types
//!
//! Everything the simulation reads or writes lives in [`GameState`]; there is
//! no global state.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::clamp_span;
use crate::consts::*;

/// Seedable random source injected into the simulation
pub type GameRng = Pcg32;

/// Build a deterministic RNG from a seed
pub fn seeded_rng(seed: u64) -> GameRng {
    Pcg32::seed_from_u64(seed)
}

/// Which side of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, follows the pointer
    Player,
    /// Right paddle, tracks the ball
    Ai,
}

/// Playing field, fixed at startup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A paddle. Only `y` changes after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge (fixed)
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Paddle for `side`, centred vertically
    pub fn new(side: Side, field: &Field) -> Self {
        let x = match side {
            Side::Player => PADDLE_MARGIN,
            Side::Ai => field.width - PADDLE_MARGIN - PADDLE_WIDTH,
        };
        Self {
            x,
            y: (field.height - PADDLE_HEIGHT) / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Move the top edge to `y`, kept inside the field
    pub fn set_y(&mut self, y: f32, field: &Field) {
        self.y = clamp_span(y, self.height, field.height);
    }
}

/// The ball, tracked by the top-left corner of its bounding box
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Units per tick
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    /// A ball at the centre of `field`, served with a fresh random velocity
    pub fn served(field: &Field, rng: &mut impl Rng) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: BALL_SIZE,
        };
        ball.reset(field, rng);
        ball
    }

    /// Re-centre and draw a new serve velocity
    pub fn reset(&mut self, field: &Field, rng: &mut impl Rng) {
        self.pos = field.center() - Vec2::splat(self.size / 2.0);
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(
            BALL_BASE_SPEED_X * sign,
            BALL_BASE_SPEED_Y * rng.random_range(-1.0..=1.0),
        );
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Ai => self.ai += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }
}

/// Something that happened during a tick (for logging, never read back)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off the top or bottom wall
    WallBounce,
    /// Ball reflected off a paddle; `impact` is the normalized offset from
    /// the paddle centre (about -1 at the top edge, +1 at the bottom)
    PaddleHit { side: Side, impact: f32 },
    /// Ball left the field and `scorer` got the point
    PointScored { scorer: Side },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub field: Field,
    pub player: Paddle,
    pub ai: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh match: paddles centred, ball served from the centre
    pub fn new(field: Field, rng: &mut impl Rng) -> Self {
        Self {
            player: Paddle::new(Side::Player, &field),
            ai: Paddle::new(Side::Ai, &field),
            ball: Ball::served(&field, rng),
            score: Score::default(),
            time_ticks: 0,
            field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_centred() {
        let mut rng = seeded_rng(7);
        let state = GameState::new(Field::default(), &mut rng);

        assert_eq!(state.player.y, 260.0);
        assert_eq!(state.ai.y, 260.0);
        assert_eq!(state.player.x, PADDLE_MARGIN);
        assert_eq!(state.ai.right(), FIELD_WIDTH - PADDLE_MARGIN);
        assert_eq!(state.ball.pos, Vec2::new(393.0, 293.0));
        assert_eq!(state.score, Score::default());
    }

    #[test]
    fn test_reset_velocity_ranges() {
        let field = Field::default();
        let mut rng = seeded_rng(42);
        let mut ball = Ball::served(&field, &mut rng);
        let mut saw_left = false;
        let mut saw_right = false;

        for _ in 0..200 {
            ball.pos = Vec2::new(-50.0, 3.0);
            ball.reset(&field, &mut rng);
            assert_eq!(ball.pos, Vec2::new(393.0, 293.0));
            assert_eq!(ball.vel.x.abs(), BALL_BASE_SPEED_X);
            assert!(ball.vel.y.abs() <= BALL_BASE_SPEED_Y);
            saw_left |= ball.vel.x < 0.0;
            saw_right |= ball.vel.x > 0.0;
        }
        assert!(saw_left && saw_right, "serve direction should vary");
    }

    #[test]
    fn test_same_seed_same_serve() {
        let field = Field::default();
        let a = Ball::served(&field, &mut seeded_rng(99));
        let b = Ball::served(&field, &mut seeded_rng(99));
        assert_eq!(a.vel, b.vel);
    }

    #[test]
    fn test_paddle_set_y_clamps() {
        let field = Field::default();
        let mut paddle = Paddle::new(Side::Player, &field);
        paddle.set_y(-30.0, &field);
        assert_eq!(paddle.y, 0.0);
        paddle.set_y(590.0, &field);
        assert_eq!(paddle.y, field.height - PADDLE_HEIGHT);
    }

    #[test]
    fn test_score_award() {
        let mut score = Score::default();
        score.award(Side::Ai);
        score.award(Side::Ai);
        score.award(Side::Player);
        assert_eq!(score.get(Side::Player), 1);
        assert_eq!(score.get(Side::Ai), 2);
    }
}
