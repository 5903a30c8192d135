//! Simulation tick
//!
//! Advances the game by exactly one step. Steps run in a fixed order (input,
//! translate, walls, player paddle, AI paddle, scoring, AI tracking) and
//! every branch that fires runs, even when a wall and a paddle hit land on
//! the same tick.

use rand::Rng;

use super::ai::track_ball;
use super::collision::{ball_paddle_contact, ball_wall_collision, reflect_off_paddle};
use super::state::{GameEvent, GameState, Side};
use crate::input::apply_pointer;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Latest surface-local pointer y, if the pointer moved since last tick
    pub pointer_y: Option<f32>,
}

/// Advance the game state by one tick.
///
/// `rng` is only drawn from when a point is scored and the ball is re-served.
pub fn tick(state: &mut GameState, input: &TickInput, rng: &mut impl Rng) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    if let Some(pointer_y) = input.pointer_y {
        apply_pointer(state, pointer_y);
    }

    let field = state.field;
    let ball = &mut state.ball;

    ball.pos += ball.vel;

    if ball_wall_collision(ball, &field) {
        events.push(GameEvent::WallBounce);
    }

    for side in [Side::Player, Side::Ai] {
        let paddle = match side {
            Side::Player => &state.player,
            Side::Ai => &state.ai,
        };
        if ball_paddle_contact(ball, paddle, side) {
            let impact = reflect_off_paddle(ball, paddle, side);
            events.push(GameEvent::PaddleHit { side, impact });
        }
    }

    let scorer = if ball.pos.x < 0.0 {
        Some(Side::Ai)
    } else if ball.pos.x > field.width {
        Some(Side::Player)
    } else {
        None
    };
    if let Some(scorer) = scorer {
        state.score.award(scorer);
        ball.reset(&field, rng);
        events.push(GameEvent::PointScored { scorer });
    }

    track_ball(&mut state.ai, &state.ball, &field);

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Field, seeded_rng};
    use glam::Vec2;

    fn state_with_ball(pos: Vec2, vel: Vec2) -> GameState {
        let mut rng = seeded_rng(12345);
        let mut state = GameState::new(Field::default(), &mut rng);
        state.ball.pos = pos;
        state.ball.vel = vel;
        state
    }

    #[test]
    fn test_tick_translates_ball() {
        let mut state = state_with_ball(Vec2::new(393.0, 293.0), Vec2::new(5.0, -2.0));
        let events = tick(&mut state, &TickInput::default(), &mut seeded_rng(1));
        assert!(events.is_empty());
        assert_eq!(state.ball.pos, Vec2::new(398.0, 291.0));
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_tick_applies_pointer_first() {
        let mut state = state_with_ball(Vec2::new(393.0, 293.0), Vec2::new(5.0, 0.0));
        let input = TickInput {
            pointer_y: Some(100.0),
        };
        tick(&mut state, &input, &mut seeded_rng(1));
        assert_eq!(state.player.y, 60.0);
    }

    #[test]
    fn test_player_paddle_reflection_dead_centre() {
        // After translation the ball sits at x=25, centred on the paddle
        let mut state = state_with_ball(Vec2::new(30.0, 293.0), Vec2::new(-5.0, 0.0));
        let events = tick(&mut state, &TickInput::default(), &mut seeded_rng(1));

        assert_eq!(state.ball.vel, Vec2::new(5.0, 0.0));
        assert_eq!(state.ball.pos.x, PADDLE_MARGIN + PADDLE_WIDTH);
        assert_eq!(
            events,
            vec![GameEvent::PaddleHit {
                side: Side::Player,
                impact: 0.0
            }]
        );
    }

    #[test]
    fn test_wall_and_paddle_same_tick() {
        // Player paddle pinned to the top, ball arriving into the corner
        let mut state = state_with_ball(Vec2::new(30.0, 2.0), Vec2::new(-5.0, -3.0));
        state.player.y = 0.0;
        let events = tick(&mut state, &TickInput::default(), &mut seeded_rng(1));

        assert_eq!(events.len(), 2);
        assert_eq!(events[0], GameEvent::WallBounce);
        assert!(matches!(
            events[1],
            GameEvent::PaddleHit {
                side: Side::Player,
                ..
            }
        ));
        assert_eq!(state.ball.pos.y, 0.0);
        assert_eq!(state.ball.vel.x, 5.0);
        // Wall flipped vy to +3, then spin from hitting above centre:
        // impact = (7 - 40) / 40
        let expected_vy = 3.0 + ((7.0 - 40.0) / 40.0) * SPIN_FACTOR;
        assert!((state.ball.vel.y - expected_vy).abs() < 1e-5);
    }

    #[test]
    fn test_ai_scores_when_player_misses() {
        let mut state = state_with_ball(Vec2::new(2.0, 20.0), Vec2::new(-5.0, 0.0));
        state.player.y = 400.0;
        let events = tick(&mut state, &TickInput::default(), &mut seeded_rng(1));

        assert_eq!(state.score.ai, 1);
        assert_eq!(state.score.player, 0);
        assert_eq!(state.ball.pos, Vec2::new(393.0, 293.0));
        assert_eq!(state.ball.vel.x.abs(), BALL_BASE_SPEED_X);
        assert!(events.contains(&GameEvent::PointScored { scorer: Side::Ai }));
        // Scoring leaves paddles alone
        assert_eq!(state.player.y, 400.0);
    }

    #[test]
    fn test_player_scores_past_right_edge() {
        let mut state = state_with_ball(Vec2::new(797.0, 20.0), Vec2::new(5.0, 0.0));
        state.ai.y = 500.0;
        tick(&mut state, &TickInput::default(), &mut seeded_rng(1));
        assert_eq!(state.score.player, 1);
        assert_eq!(state.score.ai, 0);
    }

    #[test]
    fn test_reset_is_seed_deterministic() {
        let mut a = state_with_ball(Vec2::new(2.0, 20.0), Vec2::new(-5.0, 0.0));
        let mut b = a.clone();
        a.player.y = 400.0;
        b.player.y = 400.0;
        tick(&mut a, &TickInput::default(), &mut seeded_rng(77));
        tick(&mut b, &TickInput::default(), &mut seeded_rng(77));
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn test_ai_follows_after_reset() {
        // AI reacts to the re-served ball on the same tick
        let mut state = state_with_ball(Vec2::new(2.0, 20.0), Vec2::new(-5.0, 0.0));
        state.player.y = 400.0;
        state.ai.y = 0.0;
        tick(&mut state, &TickInput::default(), &mut seeded_rng(1));
        assert_eq!(state.ai.y, AI_SPEED);
    }
}
