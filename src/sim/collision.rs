//! Collision detection and response
//!
//! Everything is axis-aligned boxes. There is no sub-stepping: a ball fast
//! enough to cross a paddle in one tick passes through it.

use glam::Vec2;

use super::state::{Ball, Field, Paddle, Side};
use crate::consts::SPIN_FACTOR;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    pub fn of_ball(ball: &Ball) -> Self {
        Self::new(ball.pos, Vec2::splat(ball.size))
    }

    pub fn of_paddle(paddle: &Paddle) -> Self {
        Self::new(
            Vec2::new(paddle.x, paddle.y),
            Vec2::new(paddle.width, paddle.height),
        )
    }

    /// Vertical spans overlap (touching counts)
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        self.max.y >= other.min.y && self.min.y <= other.max.y
    }
}

/// Reflect the ball off the top/bottom walls.
///
/// The reflection decision uses the unclamped position; the clamp happens
/// afterwards so a ball is reflected at most once per tick.
pub fn ball_wall_collision(ball: &mut Ball, field: &Field) -> bool {
    if ball.pos.y <= 0.0 || ball.bottom() >= field.height {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = crate::clamp_span(ball.pos.y, ball.size, field.height);
        return true;
    }
    false
}

/// Normalized offset of the ball centre from the paddle centre.
///
/// Roughly -1 at the top edge and +1 at the bottom edge; a ball that only
/// clips a corner lands slightly outside that range.
pub fn paddle_impact(ball: &Ball, paddle: &Paddle) -> f32 {
    (ball.center().y - paddle.center_y()) / (paddle.height / 2.0)
}

/// Whether the ball has reached the face of `side`'s paddle while the
/// vertical spans overlap.
///
/// Only the face is tested: a ball that is past the face but still level
/// with the paddle counts as a hit and is snapped back.
pub fn ball_paddle_contact(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let reached_face = match side {
        Side::Player => ball.pos.x <= paddle.right(),
        Side::Ai => ball.right() >= paddle.x,
    };
    reached_face && Aabb::of_ball(ball).overlaps_y(&Aabb::of_paddle(paddle))
}

/// Bounce the ball off a paddle it is in contact with.
///
/// Reverses horizontal travel, adds spin proportional to the impact offset,
/// and snaps the ball flush against the paddle face so it cannot stick.
/// Returns the impact.
pub fn reflect_off_paddle(ball: &mut Ball, paddle: &Paddle, side: Side) -> f32 {
    let impact = paddle_impact(ball, paddle);
    ball.vel.x = -ball.vel.x;
    ball.vel.y += impact * SPIN_FACTOR;
    ball.pos.x = match side {
        Side::Player => paddle.right(),
        Side::Ai => paddle.x - ball.size,
    };
    impact
}
