//! Pointer input handling
//!
//! Host listeners push raw events into an [`InputQueue`]; the loop drains the
//! queue into a [`TickInput`] at the start of each tick, so state is never
//! mutated between ticks.

use crate::sim::{GameState, TickInput};

/// Raw pointer event as delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved. `client_y` is viewport-relative; `surface_top` is the
    /// viewport offset of the drawing surface's top edge.
    PointerMoved { client_y: f32, surface_top: f32 },
}

impl InputEvent {
    /// Pointer y relative to the surface
    pub fn surface_y(&self) -> f32 {
        match *self {
            InputEvent::PointerMoved {
                client_y,
                surface_top,
            } => client_y - surface_top,
        }
    }
}

/// Pending input since the last tick
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Collapse everything queued into one tick's input. Latest pointer wins.
    pub fn drain(&mut self) -> TickInput {
        let pointer_y = self.pending.drain(..).last().map(|e| e.surface_y());
        TickInput { pointer_y }
    }
}

/// Centre the player paddle on the pointer, kept fully inside the field
pub fn apply_pointer(state: &mut GameState, pointer_y: f32) {
    let field = state.field;
    let top = pointer_y - state.player.height / 2.0;
    state.player.set_y(top, &field);
}
