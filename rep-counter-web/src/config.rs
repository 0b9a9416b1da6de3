//! Analyzer configuration - per-exercise thresholds
//!
//! Every threshold can be tuned from JSON without recompiling. Fields
//! missing from the JSON given to `AnalyzerConfig::from_json`, at any depth,
//! fall back to the reference values below. A config is validated
//! once, when the analyzer is built, never per frame.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::counter::Exercise;
use crate::error::ConfigError;
use crate::pose::BodySide;

/// Angle thresholds (degrees) for joint-angle exercises
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleThresholds {
    /// Angle above this enters the "up" (extended) phase
    pub up_deg: f32,
    /// Angle below this enters the "down" (bent) phase
    pub down_deg: f32,
}

/// Wrist height relative to the shoulder for pull-ups
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PullUpThresholds {
    /// Wrist this far above the shoulder enters "up"
    pub up_offset: f32,
    /// Wrist this far below the shoulder enters "down"
    pub down_offset: f32,
}

/// Vertical wrist-shoulder distance for pull-downs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PullDownThresholds {
    /// Distance below this enters "up" (hands at the shoulders)
    pub near: f32,
    /// Distance above this enters "down" (hands away from the shoulders)
    pub far: f32,
}

/// Complete analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Limb chain used as the representative side
    pub side: BodySide,
    pub push_up: AngleThresholds,
    pub leg_raise: AngleThresholds,
    pub pull_up: PullUpThresholds,
    pub pull_down: PullDownThresholds,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            side: BodySide::Left,
            // Arms straight above 160°, bent below 90°
            push_up: AngleThresholds {
                up_deg: 160.0,
                down_deg: 90.0,
            },
            // Legs straight above 150°, bent below 90°
            leg_raise: AngleThresholds {
                up_deg: 150.0,
                down_deg: 90.0,
            },
            pull_up: PullUpThresholds {
                up_offset: 0.1,
                down_offset: 0.1,
            },
            pull_down: PullDownThresholds {
                near: 0.1,
                far: 0.2,
            },
        }
    }
}

impl AnalyzerConfig {
    /// Parse and validate a JSON config
    ///
    /// The JSON is laid over the defaults, so `{"push_up": {"up_deg": 165}}`
    /// keeps the default push-up `down_deg` and every other exercise.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut merged = serde_json::to_value(Self::default())?;
        overlay(&mut merged, serde_json::from_str(json)?);
        let config: Self = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check that every exercise keeps a non-empty dead zone
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_angles(Exercise::PushUp, &self.push_up)?;
        validate_angles(Exercise::LegRaise, &self.leg_raise)?;

        let pull_up = &self.pull_up;
        finite(Exercise::PullUp, "up_offset", pull_up.up_offset)?;
        finite(Exercise::PullUp, "down_offset", pull_up.down_offset)?;
        within(Exercise::PullUp, "up_offset", pull_up.up_offset, 0.0, 1.0)?;
        within(Exercise::PullUp, "down_offset", pull_up.down_offset, 0.0, 1.0)?;
        ordered(Exercise::PullUp, -pull_up.up_offset, pull_up.down_offset)?;

        let pull_down = &self.pull_down;
        finite(Exercise::PullDown, "near", pull_down.near)?;
        finite(Exercise::PullDown, "far", pull_down.far)?;
        within(Exercise::PullDown, "near", pull_down.near, 0.0, 1.0)?;
        within(Exercise::PullDown, "far", pull_down.far, 0.0, 1.0)?;
        ordered(Exercise::PullDown, pull_down.near, pull_down.far)?;

        Ok(())
    }
}

/// Recursively replace values in `base` with those present in `patch`
fn overlay(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                overlay(base.entry(key).or_insert(Value::Null), value);
            }
        }
        (base, patch) => *base = patch,
    }
}

fn validate_angles(exercise: Exercise, angles: &AngleThresholds) -> Result<(), ConfigError> {
    finite(exercise, "up_deg", angles.up_deg)?;
    finite(exercise, "down_deg", angles.down_deg)?;
    within(exercise, "up_deg", angles.up_deg, 0.0, 180.0)?;
    within(exercise, "down_deg", angles.down_deg, 0.0, 180.0)?;
    ordered(exercise, angles.down_deg, angles.up_deg)
}

fn finite(exercise: Exercise, field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { exercise, field })
    }
}

fn within(
    exercise: Exercise,
    field: &'static str,
    value: f32,
    min: f32,
    max: f32,
) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            exercise,
            field,
            value,
            min,
            max,
        })
    }
}

/// The dead zone `(lower, upper)` on the signal axis must not be empty
fn ordered(exercise: Exercise, lower: f32, upper: f32) -> Result<(), ConfigError> {
    if upper > lower {
        Ok(())
    } else {
        Err(ConfigError::InvertedThresholds { exercise, lower, upper })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(AnalyzerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AnalyzerConfig::from_json(r#"{"push_up": {"up_deg": 165.0, "down_deg": 80.0}}"#).unwrap();
        assert_eq!(config.push_up.up_deg, 165.0);
        assert_eq!(config.leg_raise, AnalyzerConfig::default().leg_raise);
        assert_eq!(config.side, BodySide::Left);
    }

    #[test]
    fn test_partial_threshold_keeps_exercise_defaults() {
        let config = AnalyzerConfig::from_json(r#"{"push_up": {"up_deg": 165}}"#).unwrap();
        assert_eq!(config.push_up.up_deg, 165.0);
        assert_eq!(config.push_up.down_deg, 90.0);

        let config = AnalyzerConfig::from_json(r#"{"leg_raise": {"down_deg": 70}, "pull_down": {"far": 0.3}}"#).unwrap();
        assert_eq!(config.leg_raise.up_deg, 150.0);
        assert_eq!(config.leg_raise.down_deg, 70.0);
        assert_eq!(config.pull_down.near, 0.1);
        assert_eq!(config.pull_down.far, 0.3);
        assert_eq!(config.pull_up, AnalyzerConfig::default().pull_up);
    }

    #[test]
    fn test_rejects_wrong_json_types() {
        assert!(matches!(
            AnalyzerConfig::from_json(r#"{"push_up": {"up_deg": "high"}}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(AnalyzerConfig::from_json("[1, 2]"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_side_from_json() {
        let config = AnalyzerConfig::from_json(r#"{"side": "right"}"#).unwrap();
        assert_eq!(config.side, BodySide::Right);
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = AnalyzerConfig::default();
        config.pull_down.far = 0.25;
        let json = config.to_json().unwrap();
        assert_eq!(AnalyzerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_inverted_angles() {
        let mut config = AnalyzerConfig::default();
        config.leg_raise.down_deg = 150.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedThresholds { exercise: Exercise::LegRaise, .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_angle() {
        let mut config = AnalyzerConfig::default();
        config.push_up.up_deg = 200.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { exercise: Exercise::PushUp, field: "up_deg", .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        let mut config = AnalyzerConfig::default();
        config.pull_up.up_offset = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { exercise: Exercise::PullUp, field: "up_offset" })
        ));
    }

    #[test]
    fn test_rejects_empty_pull_up_dead_zone() {
        let mut config = AnalyzerConfig::default();
        config.pull_up.up_offset = 0.0;
        config.pull_up.down_offset = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedThresholds { exercise: Exercise::PullUp, .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_pull_down() {
        let mut config = AnalyzerConfig::default();
        config.pull_down.near = 0.3;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedThresholds { exercise: Exercise::PullDown, .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            AnalyzerConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
