//! Pose module - landmark vocabulary and per-frame landmark sets
//!
//! Re-exports only. All logic in submodules.

mod landmark;

pub use landmark::{BodySide, Landmark, LandmarkFrame, LandmarkId, LimbJoints, POSE_LANDMARK_COUNT};
