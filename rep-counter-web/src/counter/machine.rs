//! Two-phase hysteresis machine shared by all exercises
//!
//! The exercise decides which zone the current frame falls in; the machine
//! only remembers the last zone and counts one designated transition.

use super::phase::Phase;

/// Phase tracker with a single counting edge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseMachine {
    /// Last zone entered
    phase: Phase,
    /// Transition (from, to) that counts as one repetition
    counting_edge: (Phase, Phase),
    /// Repetitions counted so far
    count: u32,
}

impl PhaseMachine {
    pub fn new(counting_edge: (Phase, Phase)) -> Self {
        Self {
            phase: Phase::Unset,
            counting_edge,
            count: 0,
        }
    }

    /// Feed the zone for this frame
    ///
    /// `None` is the dead zone between thresholds and leaves the phase as is.
    /// Returns true when this frame completed a repetition.
    pub fn advance(&mut self, zone: Option<Phase>) -> bool {
        let Some(next) = zone else {
            return false;
        };

        let (from, to) = self.counting_edge;
        let counted = self.phase == from && next == to;
        if counted {
            self.count = self.count.saturating_add(1);
        }
        self.phase = next;
        counted
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}
