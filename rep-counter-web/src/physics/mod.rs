//! Physics module - landmark smoothing and joint geometry
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod kalman;
mod stabilizer;

pub use angles::{angle_at_vertex, vertical_offset};
pub use kalman::KalmanFilter;
pub use stabilizer::LandmarkStabilizer;
