//! In-memory surface that records draw calls
//!
//! Behaves like a canvas in one respect: `clear` discards everything drawn
//! before it, so after a frame the list holds exactly that frame.

use glam::Vec2;

use super::{Rect, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { background: Option<String> },
    FillRect { rect: Rect, color: String },
    FillCircle { center: Vec2, radius: f32, color: String },
    Text { text: String, anchor: Vec2, font: String, color: String },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands drawn since the last clear (including the clear)
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of clears seen, i.e. frames started
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, background: Option<&str>) {
        self.commands.clear();
        self.frames += 1;
        self.commands.push(DrawCommand::Clear {
            background: background.map(str::to_string),
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn draw_text(&mut self, text: &str, anchor: Vec2, font: &str, color: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            anchor,
            font: font.to_string(),
            color: color.to_string(),
        });
    }
}
