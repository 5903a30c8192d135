//! Display settings and preferences
//!
//! Gameplay constants are fixed (see `consts`); only presentation and loop
//! pacing are configurable. In the browser settings come from the canvas
//! element's optional `data-settings` JSON attribute. They are never saved.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::game::Pacing;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Visuals ===
    /// Fill colour for paddles, ball, net and scores (CSS colour)
    pub foreground: String,
    /// Background fill; `None` clears to transparent and lets the page show
    pub background: Option<String>,
    /// Score font (CSS font shorthand)
    pub score_font: String,
    /// Draw the dashed centre line
    pub show_net: bool,

    // === Loop ===
    /// How display frames map to simulation ticks
    pub pacing: Pacing,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,

    // === Diagnostics ===
    /// Log level name ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            foreground: "#fff".to_string(),
            background: None,
            score_font: "32px Arial".to_string(),
            show_net: true,

            pacing: Pacing::PerRefresh,
            seed: None,

            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// DOM attribute holding settings JSON
    pub const ATTRIBUTE: &'static str = "data-settings";

    /// Parse settings JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Configured log level, `Info` if the name is not recognised
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Load settings from the canvas element (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn from_canvas(canvas: &web_sys::HtmlCanvasElement) -> Result<Self> {
        match canvas.get_attribute(Self::ATTRIBUTE) {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }
}
