//! Repetition counter - one phase machine per exercise
//!
//! Every exercise is evaluated on every frame, independently. A frame can
//! advance several counters at once.

use super::exercise::Exercise;
use super::machine::PhaseMachine;
use super::snapshot::{CounterSnapshot, PhaseSnapshot};
use crate::config::AnalyzerConfig;
use crate::pose::{LandmarkFrame, LimbJoints};

/// Per-exercise state machines and their counts
#[derive(Clone, Debug, PartialEq)]
pub struct RepetitionCounter {
    config: AnalyzerConfig,
    joints: LimbJoints,
    /// Indexed by `Exercise::index`
    machines: [PhaseMachine; 4],
}

impl RepetitionCounter {
    /// Build from an already validated config
    pub fn new(config: AnalyzerConfig) -> Self {
        let joints = config.side.joints();
        Self {
            config,
            joints,
            machines: Exercise::ALL.map(|exercise| PhaseMachine::new(exercise.counting_edge())),
        }
    }

    /// Run all four machines on a stabilized frame
    ///
    /// Returns the exercises that completed a repetition on this frame.
    pub fn evaluate(&mut self, frame: &LandmarkFrame) -> Vec<Exercise> {
        let mut completed = Vec::new();

        for exercise in Exercise::ALL {
            let Some(signal) = exercise.signal(frame, &self.joints) else {
                log::trace!("{}: skipped, joints missing or degenerate", exercise);
                continue;
            };

            let machine = &mut self.machines[exercise.index()];
            let before = machine.phase();
            let counted = machine.advance(exercise.zone(signal, &self.config));

            if machine.phase() != before {
                log::debug!(
                    "{}: {} -> {} (signal {:.3})",
                    exercise,
                    before.as_str(),
                    machine.phase().as_str(),
                    signal
                );
            }
            if counted {
                log::info!("{}: rep {}", exercise, machine.count());
                completed.push(exercise);
            }
        }

        completed
    }

    pub fn counts(&self) -> CounterSnapshot {
        CounterSnapshot::from_counts(self.machines.map(|m| m.count()))
    }

    pub fn phases(&self) -> PhaseSnapshot {
        PhaseSnapshot::from_phases(self.machines.map(|m| m.phase()))
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

impl Default for RepetitionCounter {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}
