//! Rep Counter Web - exercise repetition counting from pose landmarks
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen start hook that installs panic and log output
//!
//! Per frame: raw landmarks → `LandmarkStabilizer` → `RepetitionCounter`
//! → `CounterSnapshot`. `ExerciseAnalyzer` owns one session of that state.

mod analyzer;
pub mod bridge;
mod config;
mod console;
mod counter;
mod error;
mod physics;
mod pose;
mod shared;

use wasm_bindgen::prelude::*;

pub use analyzer::ExerciseAnalyzer;
pub use config::{AnalyzerConfig, AngleThresholds, PullDownThresholds, PullUpThresholds};
pub use counter::{CounterSnapshot, Exercise, Phase, PhaseMachine, PhaseSnapshot, RepetitionCounter};
pub use error::ConfigError;
pub use physics::{angle_at_vertex, KalmanFilter, LandmarkStabilizer};
pub use pose::{BodySide, Landmark, LandmarkFrame, LandmarkId, LimbJoints, POSE_LANDMARK_COUNT};
pub use shared::SharedAnalyzer;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{get_exercise_data, get_phase_data, start_session, update_landmarks};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    if console::init(log::LevelFilter::Info) {
        log::info!("rep counter ready");
    }
}
