//! Exercise definitions - signal extraction and zone rules
//!
//! | Exercise  | Signal                          | Up zone            | Down zone          | Counts on  |
//! |-----------|---------------------------------|--------------------|--------------------|------------|
//! | Push-up   | elbow angle                     | > up_deg           | < down_deg         | down → up  |
//! | Leg raise | knee angle                      | > up_deg           | < down_deg         | down → up  |
//! | Pull-up   | wrist.y - shoulder.y            | < -up_offset       | > down_offset      | down → up  |
//! | Pull-down | abs(wrist.y - shoulder.y)       | < near             | > far              | up → down  |
//!
//! Pull-down counts on the opposite edge to the other three. That matches
//! the reference counter and is kept until the intended movement is confirmed.

use std::fmt;

use super::phase::Phase;
use crate::config::AnalyzerConfig;
use crate::physics::{angle_at_vertex, vertical_offset};
use crate::pose::{LandmarkFrame, LimbJoints};

/// Supported exercises
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Exercise {
    PushUp,
    LegRaise,
    PullUp,
    PullDown,
}

impl Exercise {
    /// All exercises, in counter order
    pub const ALL: [Exercise; 4] = [
        Exercise::PushUp,
        Exercise::LegRaise,
        Exercise::PullUp,
        Exercise::PullDown,
    ];

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        match self {
            Exercise::PushUp => 0,
            Exercise::LegRaise => 1,
            Exercise::PullUp => 2,
            Exercise::PullDown => 3,
        }
    }

    /// Key of this exercise's counter
    pub fn counter_key(&self) -> &'static str {
        match self {
            Exercise::PushUp => "pushups",
            Exercise::LegRaise => "leg_raises",
            Exercise::PullUp => "pull_ups",
            Exercise::PullDown => "pull_downs",
        }
    }

    /// Key of this exercise's phase
    pub fn phase_key(&self) -> &'static str {
        match self {
            Exercise::PushUp => "pushup",
            Exercise::LegRaise => "leg_raise",
            Exercise::PullUp => "pull_up",
            Exercise::PullDown => "pull_down",
        }
    }

    /// Transition (from, to) that completes one repetition
    pub fn counting_edge(&self) -> (Phase, Phase) {
        match self {
            Exercise::PullDown => (Phase::Up, Phase::Down),
            _ => (Phase::Down, Phase::Up),
        }
    }

    /// Measure this exercise's signal on a frame
    ///
    /// Returns `None` when a required joint is missing or the limb geometry
    /// is degenerate; the exercise is then skipped for this frame.
    pub fn signal(&self, frame: &LandmarkFrame, joints: &LimbJoints) -> Option<f32> {
        match self {
            Exercise::PushUp => angle_at_vertex(
                frame.position(joints.shoulder)?,
                frame.position(joints.elbow)?,
                frame.position(joints.wrist)?,
            ),
            Exercise::LegRaise => angle_at_vertex(
                frame.position(joints.hip)?,
                frame.position(joints.knee)?,
                frame.position(joints.ankle)?,
            ),
            Exercise::PullUp => Some(vertical_offset(
                frame.position(joints.wrist)?,
                frame.position(joints.shoulder)?,
            )),
            Exercise::PullDown => Some(
                vertical_offset(
                    frame.position(joints.wrist)?,
                    frame.position(joints.shoulder)?,
                )
                .abs(),
            ),
        }
    }

    /// Classify a signal value; `None` is the dead zone
    pub fn zone(&self, signal: f32, config: &AnalyzerConfig) -> Option<Phase> {
        match self {
            Exercise::PushUp | Exercise::LegRaise => {
                let angles = if *self == Exercise::PushUp {
                    &config.push_up
                } else {
                    &config.leg_raise
                };
                if signal > angles.up_deg {
                    Some(Phase::Up)
                } else if signal < angles.down_deg {
                    Some(Phase::Down)
                } else {
                    None
                }
            }
            Exercise::PullUp => {
                // Image y grows downward: negative offset = wrist above shoulder
                let pull_up = &config.pull_up;
                if signal < -pull_up.up_offset {
                    Some(Phase::Up)
                } else if signal > pull_up.down_offset {
                    Some(Phase::Down)
                } else {
                    None
                }
            }
            Exercise::PullDown => {
                let pull_down = &config.pull_down;
                if signal > pull_down.far {
                    Some(Phase::Down)
                } else if signal < pull_down.near {
                    Some(Phase::Up)
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.counter_key())
    }
}
