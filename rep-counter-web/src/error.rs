//! Error types
//!
//! Only configuration can fail. Per-frame anomalies (no body, degenerate
//! geometry, unknown ids) are handled inside frame processing.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::counter::Exercise;

/// Errors raised while building an analyzer
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{exercise}: {field} must be a finite number")]
    NonFinite {
        exercise: Exercise,
        field: &'static str,
    },

    #[error("{exercise}: {field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        exercise: Exercise,
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("{exercise}: thresholds leave no dead zone (lower {lower}, upper {upper})")]
    InvertedThresholds {
        exercise: Exercise,
        lower: f32,
        upper: f32,
    },

    #[error("invalid analyzer config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
