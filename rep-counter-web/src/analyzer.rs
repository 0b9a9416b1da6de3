//! Exercise analyzer - one session of smoothing + counting
//!
//! Owns all per-session state: landmark filters, exercise phases and
//! counts. Nothing is shared or static; a new session is a new analyzer.

use crate::config::AnalyzerConfig;
use crate::counter::{CounterSnapshot, PhaseSnapshot, RepetitionCounter};
use crate::error::ConfigError;
use crate::physics::LandmarkStabilizer;
use crate::pose::LandmarkFrame;

/// Per-session frame processor
#[derive(Clone, Debug, PartialEq)]
pub struct ExerciseAnalyzer {
    stabilizer: LandmarkStabilizer,
    counter: RepetitionCounter,
    /// Frames that reached the counter (skipped frames are not counted)
    frames_processed: u64,
}

impl ExerciseAnalyzer {
    /// Analyzer with the reference thresholds
    pub fn new() -> Self {
        Self::from_valid_config(AnalyzerConfig::default())
    }

    /// Analyzer with custom thresholds; fails if the config is malformed
    pub fn with_config(config: AnalyzerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: AnalyzerConfig) -> Self {
        Self {
            stabilizer: LandmarkStabilizer::new(),
            counter: RepetitionCounter::new(config),
            frames_processed: 0,
        }
    }

    /// Process one frame
    ///
    /// `None` or an empty frame means no body was detected: nothing changes.
    /// Otherwise landmarks are smoothed, then every exercise is evaluated.
    pub fn process(&mut self, landmarks: Option<&LandmarkFrame>) -> CounterSnapshot {
        match landmarks {
            Some(frame) if !frame.is_empty() => {
                let smoothed = self.stabilizer.stabilize(frame);
                self.counter.evaluate(&smoothed);
                self.frames_processed += 1;
            }
            _ => log::trace!("no body detected, frame skipped"),
        }

        self.get_counts()
    }

    /// Latest counts; never changes state
    pub fn get_counts(&self) -> CounterSnapshot {
        self.counter.counts()
    }

    /// Latest phase of every exercise
    pub fn phases(&self) -> PhaseSnapshot {
        self.counter.phases()
    }

    pub fn config(&self) -> &AnalyzerConfig {
        self.counter.config()
    }

    pub fn stabilizer(&self) -> &LandmarkStabilizer {
        &self.stabilizer
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }
}

impl Default for ExerciseAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
