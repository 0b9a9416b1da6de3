//! Exercise phase labels

use serde::Serialize;

/// Coarse position within an exercise's range of motion
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No threshold crossed yet this session
    #[default]
    Unset,
    Up,
    Down,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Unset => "unset",
            Phase::Up => "up",
            Phase::Down => "down",
        }
    }
}
