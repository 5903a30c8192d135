//! Error types for host setup
//!
//! The simulation itself never fails; these cover acquiring the browser
//! surface and parsing display settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No global window available")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("Canvas element not found: #{0}")]
    CanvasNotFound(String),

    #[error("Element #{0} is not a canvas")]
    NotACanvas(String),

    #[error("2D rendering context unavailable")]
    ContextUnavailable,

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("Invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}

/// Result type alias for setup operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Error::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
