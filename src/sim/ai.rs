//! Reactive AI for the right paddle
//!
//! Bounded-rate pursuit of the ball centre: a fixed step per tick with a dead
//! zone, so the paddle can be outrun.

use super::state::{Ball, Field, Paddle};
use crate::consts::{AI_DEAD_ZONE, AI_SPEED};

/// Move the AI paddle one step toward the ball and clamp it into the field
pub fn track_ball(paddle: &mut Paddle, ball: &Ball, field: &Field) {
    let target = ball.center().y;
    let center = paddle.center_y();

    if center < target - AI_DEAD_ZONE {
        paddle.set_y(paddle.y + AI_SPEED, field);
    } else if center > target + AI_DEAD_ZONE {
        paddle.set_y(paddle.y - AI_SPEED, field);
    }
}
