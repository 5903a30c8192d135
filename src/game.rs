//! Frame loop glue
//!
//! The host calls [`Game::frame`] once per display refresh. A frame drains
//! queued input, runs the simulation, then draws exactly once.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::input::{InputEvent, InputQueue};
use crate::renderer::{self, Surface};
use crate::settings::Settings;
use crate::sim::{Field, GameEvent, GameRng, GameState, Side, seeded_rng, tick};

/// How display frames map to simulation ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pacing {
    /// One tick per frame; speed follows the display refresh rate
    #[default]
    PerRefresh,
    /// Fixed timestep accumulator at `FPS`, independent of refresh rate
    Fixed,
}

/// Game instance holding all state
pub struct Game {
    state: GameState,
    rng: GameRng,
    input: InputQueue,
    settings: Settings,
    accumulator: f32,
    last_time: Option<f64>,
}

impl Game {
    pub fn new(field: Field, seed: u64, settings: Settings) -> Self {
        let mut rng = seeded_rng(seed);
        let state = GameState::new(field, &mut rng);
        log::info!(
            "New match on {}x{} field (seed {}, {:?} pacing)",
            field.width,
            field.height,
            seed,
            settings.pacing
        );
        Self {
            state,
            rng,
            input: InputQueue::new(),
            settings,
            accumulator: 0.0,
            last_time: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Queue a host input event for the next tick
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one display frame. `now_ms` is the host's frame timestamp; it is
    /// only consulted with `Pacing::Fixed`. Returns the ticks run.
    pub fn frame(&mut self, now_ms: f64, surface: &mut impl Surface) -> u32 {
        let ticks = match self.settings.pacing {
            Pacing::PerRefresh => {
                self.step();
                1
            }
            Pacing::Fixed => self.step_fixed(now_ms),
        };
        renderer::draw(&self.state, &self.settings, surface);
        ticks
    }

    /// Advance exactly one tick
    pub fn step(&mut self) {
        let input = self.input.drain();
        let events = tick(&mut self.state, &input, &mut self.rng);
        self.log_events(&events);
    }

    fn step_fixed(&mut self, now_ms: f64) -> u32 {
        let dt = match self.last_time {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => SIM_DT,
        };
        self.last_time = Some(now_ms);
        self.accumulator += dt.clamp(0.0, 0.1);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than trying to catch up
            self.accumulator = 0.0;
        }
        substeps
    }

    fn log_events(&self, events: &[GameEvent]) {
        for event in events {
            match *event {
                GameEvent::PointScored { scorer } => {
                    let who = match scorer {
                        Side::Player => "Player",
                        Side::Ai => "AI",
                    };
                    log::info!(
                        "{} scores: {} - {}",
                        who,
                        self.state.score.player,
                        self.state.score.ai
                    );
                }
                GameEvent::PaddleHit { side, impact } => {
                    log::debug!("{:?} paddle hit, impact {:.2}", side, impact);
                }
                GameEvent::WallBounce => log::trace!("wall bounce"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;

    fn game(pacing: Pacing) -> Game {
        let settings = Settings {
            pacing,
            ..Settings::default()
        };
        Game::new(Field::default(), 2024, settings)
    }

    #[test]
    fn test_per_refresh_one_tick_per_frame() {
        let mut game = game(Pacing::PerRefresh);
        let mut surface = RecordingSurface::new();
        for i in 0..5 {
            // Irregular timestamps make no difference
            assert_eq!(game.frame(i as f64 * 37.0, &mut surface), 1);
        }
        assert_eq!(game.state().time_ticks, 5);
        assert_eq!(surface.frames(), 5);
    }

    #[test]
    fn test_fixed_pacing_accumulates() {
        let mut game = game(Pacing::Fixed);
        let mut surface = RecordingSurface::new();

        // First frame has no previous timestamp and runs one tick
        assert_eq!(game.frame(1000.0, &mut surface), 1);
        // 60 ms later: three whole 1/60 s ticks, remainder carried
        assert_eq!(game.frame(1060.0, &mut surface), 3);
        // 5 ms later: still short of a tick, but the frame is drawn
        assert_eq!(game.frame(1065.0, &mut surface), 0);
        assert_eq!(surface.frames(), 3);
    }

    #[test]
    fn test_fixed_pacing_caps_substeps() {
        let mut game = game(Pacing::Fixed);
        let mut surface = RecordingSurface::new();
        game.frame(0.0, &mut surface);
        // Long stall is clamped to 0.1 s, about six ticks
        let ticks = game.frame(5000.0, &mut surface);
        assert!((5..=MAX_SUBSTEPS).contains(&ticks));
    }

    #[test]
    fn test_input_applied_on_next_tick() {
        let mut game = game(Pacing::PerRefresh);
        let mut surface = RecordingSurface::new();
        game.push_input(InputEvent::PointerMoved {
            client_y: 150.0,
            surface_top: 10.0,
        });
        assert_eq!(game.state().player.y, 260.0);

        game.frame(0.0, &mut surface);
        assert_eq!(game.state().player.y, 100.0);

        // Queue was drained; paddle holds
        game.frame(16.0, &mut surface);
        assert_eq!(game.state().player.y, 100.0);
    }
}
