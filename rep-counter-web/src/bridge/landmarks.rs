//! Session storage and JS bridge
//!
//! Receives MediaPipe landmarks from JavaScript, runs them through the
//! session's analyzer and hands counts back as JSON.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::analyzer::ExerciseAnalyzer;
use crate::config::AnalyzerConfig;
use crate::counter::CounterSnapshot;
use crate::error::ConfigError;
use crate::pose::{LandmarkFrame, POSE_LANDMARK_COUNT};

/// Values per landmark in the JS array (x, y, z)
pub const VALUES_PER_LANDMARK: usize = 3;

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<ExerciseAnalyzer> = RefCell::new(ExerciseAnalyzer::new());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Start a new session, optionally with a JSON threshold config
///
/// Counts, phases and filters all start from scratch. A malformed config
/// is rejected and the current session is kept.
#[wasm_bindgen]
pub fn start_session(config_json: Option<String>) -> Result<(), JsValue> {
    restart(config_json.as_deref())?;
    Ok(())
}

/// Called from JavaScript with a flat Float32Array
/// (33 landmarks × 3 coordinates: x, y, z)
///
/// An empty array means no body was detected this frame.
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) {
    ingest(data);
}

/// Current counts as JSON: `{"pushups":0,"leg_raises":0,"pull_ups":0,"pull_downs":0}`
#[wasm_bindgen]
pub fn get_exercise_data() -> Result<String, JsValue> {
    counts_json().map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Current phase of every exercise as JSON (debug overlay)
#[wasm_bindgen]
pub fn get_phase_data() -> Result<String, JsValue> {
    phases_json().map_err(|err| JsValue::from_str(&err.to_string()))
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Replace the session analyzer
pub fn restart(config_json: Option<&str>) -> Result<(), ConfigError> {
    let config = match config_json {
        Some(json) => AnalyzerConfig::from_json(json)?,
        None => AnalyzerConfig::default(),
    };
    let analyzer = ExerciseAnalyzer::with_config(config)?;

    SESSION.with(|session| *session.borrow_mut() = analyzer);
    log::info!("session started");
    Ok(())
}

/// Feed one flat landmark array to the session
///
/// Anything but a full pose (33 × 3 values) or an empty array is dropped,
/// and `None` is returned.
pub fn ingest(data: &[f32]) -> Option<CounterSnapshot> {
    if data.is_empty() {
        return Some(SESSION.with(|session| session.borrow_mut().process(None)));
    }

    let expected = POSE_LANDMARK_COUNT * VALUES_PER_LANDMARK;
    let frame = match LandmarkFrame::from_flat(data, VALUES_PER_LANDMARK) {
        Some(frame) if data.len() == expected => frame,
        _ => {
            log::warn!(
                "Invalid landmark data length: {} (expected {})",
                data.len(),
                expected
            );
            return None;
        }
    };

    Some(SESSION.with(|session| session.borrow_mut().process(Some(&frame))))
}

/// Latest counts of the session
pub fn get_counts() -> CounterSnapshot {
    SESSION.with(|session| session.borrow().get_counts())
}

fn counts_json() -> Result<String, serde_json::Error> {
    serde_json::to_string(&get_counts())
}

fn phases_json() -> Result<String, serde_json::Error> {
    SESSION.with(|session| serde_json::to_string(&session.borrow().phases()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::LandmarkId;

    /// Flat MediaPipe array with the left wrist `offset` below the left shoulder
    fn flat_pose(offset: f32) -> Vec<f32> {
        let mut data = vec![0.5f32; POSE_LANDMARK_COUNT * VALUES_PER_LANDMARK];
        let shoulder = LandmarkId::LEFT_SHOULDER.0 as usize * VALUES_PER_LANDMARK;
        let wrist = LandmarkId::LEFT_WRIST.0 as usize * VALUES_PER_LANDMARK;
        data[shoulder] = 0.5;
        data[shoulder + 1] = 0.4;
        data[wrist] = 0.6;
        data[wrist + 1] = 0.4 + offset;
        data
    }

    #[test]
    fn test_pull_up_through_flat_arrays() {
        restart(None).unwrap();
        for offset in [0.3, -0.3] {
            for _ in 0..30 {
                ingest(&flat_pose(offset));
            }
        }
        assert_eq!(get_counts().pull_ups(), 1);
    }

    #[test]
    fn test_empty_array_is_no_detection() {
        restart(None).unwrap();
        ingest(&flat_pose(0.3));
        let before = get_counts();
        assert_eq!(ingest(&[]), Some(before));
    }

    #[test]
    fn test_malformed_array_is_dropped() {
        restart(None).unwrap();
        assert_eq!(ingest(&[0.1, 0.2, 0.3, 0.4]), None);
        assert_eq!(get_counts(), CounterSnapshot::default());
    }

    #[test]
    fn test_short_array_is_dropped() {
        restart(None).unwrap();
        ingest(&flat_pose(0.3));
        let before = SESSION.with(|session| session.borrow().clone());

        // Whole landmarks, but only the first two of the pose
        assert_eq!(ingest(&[0.1, 0.2, 0.0, 0.3, 0.4, 0.0]), None);
        let mut long = flat_pose(0.3);
        long.extend_from_slice(&[0.5, 0.5, 0.0]);
        assert_eq!(ingest(&long), None);

        SESSION.with(|session| assert_eq!(*session.borrow(), before));
    }

    #[test]
    fn test_restart_resets_counts() {
        restart(None).unwrap();
        for offset in [0.3, -0.3] {
            for _ in 0..30 {
                ingest(&flat_pose(offset));
            }
        }
        assert_eq!(get_counts().pull_ups(), 1);

        restart(Some(r#"{"pull_up": {"up_offset": 0.05, "down_offset": 0.05}}"#)).unwrap();
        assert_eq!(get_counts(), CounterSnapshot::default());
    }

    #[test]
    fn test_bad_config_keeps_current_session() {
        restart(None).unwrap();
        for offset in [0.3, -0.3] {
            for _ in 0..30 {
                ingest(&flat_pose(offset));
            }
        }

        assert!(restart(Some(r#"{"pull_down": {"near": 0.5, "far": 0.2}}"#)).is_err());
        assert_eq!(get_counts().pull_ups(), 1);
    }

    #[test]
    fn test_json_output() {
        restart(None).unwrap();
        assert_eq!(
            counts_json().unwrap(),
            r#"{"pushups":0,"leg_raises":0,"pull_ups":0,"pull_downs":0}"#
        );

        ingest(&flat_pose(0.3));
        assert_eq!(
            phases_json().unwrap(),
            r#"{"pushup":"unset","leg_raise":"unset","pull_up":"down","pull_down":"down"}"#
        );
    }
}
