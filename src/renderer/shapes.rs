//! Shape generation for 2D primitives
//!
//! Pure geometry: where each element of the frame goes, independent of the
//! surface that draws it.

use glam::Vec2;

use crate::sim::{Ball, Field, Paddle, Side};

/// Centre line tick size and spacing
pub const NET_TICK_WIDTH: f32 = 2.0;
pub const NET_TICK_HEIGHT: f32 = 18.0;
pub const NET_SPACING: f32 = 30.0;

/// Horizontal distance of each score from the centre line
pub const SCORE_OFFSET_X: f32 = 50.0;
/// Top edge of the score text
pub const SCORE_TOP: f32 = 18.0;

/// Axis-aligned rectangle in surface units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }
}

/// Dashed centre line, top to bottom
pub fn net_ticks(field: &Field) -> impl Iterator<Item = Rect> + use<> {
    let x = field.width / 2.0 - NET_TICK_WIDTH / 2.0;
    let height = field.height;
    (0u32..)
        .map(|i| i as f32 * NET_SPACING)
        .take_while(move |&y| y < height)
        .map(move |y| Rect::new(x, y, NET_TICK_WIDTH, NET_TICK_HEIGHT))
}

pub fn paddle_rect(paddle: &Paddle) -> Rect {
    Rect::new(paddle.x, paddle.y, paddle.width, paddle.height)
}

/// Circle inscribed in the ball's bounding box: (centre, radius)
pub fn ball_circle(ball: &Ball) -> (Vec2, f32) {
    (ball.center(), ball.size / 2.0)
}

/// Horizontally centred, top-aligned anchor for `side`'s score
pub fn score_anchor(field: &Field, side: Side) -> Vec2 {
    let offset = match side {
        Side::Player => -SCORE_OFFSET_X,
        Side::Ai => SCORE_OFFSET_X,
    };
    Vec2::new(field.width / 2.0 + offset, SCORE_TOP)
}
