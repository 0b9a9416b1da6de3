//! Thread-safe analyzer handle
//!
//! One thread feeds frames, any number of threads read counts. Readers only
//! touch the published snapshot, so they never wait on frame processing
//! and never see a half-updated set of counters.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::analyzer::ExerciseAnalyzer;
use crate::config::AnalyzerConfig;
use crate::counter::{CounterSnapshot, PhaseSnapshot};
use crate::error::ConfigError;
use crate::pose::LandmarkFrame;

struct Inner {
    /// Frame processing: filters, phases, counts
    analyzer: Mutex<ExerciseAnalyzer>,
    /// Last committed counts
    published: RwLock<CounterSnapshot>,
}

/// Cloneable handle to one analyzer session
#[derive(Clone)]
pub struct SharedAnalyzer {
    inner: Arc<Inner>,
}

impl SharedAnalyzer {
    pub fn new(analyzer: ExerciseAnalyzer) -> Self {
        let published = RwLock::new(analyzer.get_counts());
        Self {
            inner: Arc::new(Inner {
                analyzer: Mutex::new(analyzer),
                published,
            }),
        }
    }

    pub fn with_config(config: AnalyzerConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(ExerciseAnalyzer::with_config(config)?))
    }

    /// Process one frame and publish the resulting counts
    pub fn process(&self, landmarks: Option<&LandmarkFrame>) -> CounterSnapshot {
        let mut analyzer = self.inner.analyzer.lock();
        let snapshot = analyzer.process(landmarks);
        // Publish while still holding the analyzer so snapshots land in frame order
        *self.inner.published.write() = snapshot;
        snapshot
    }

    /// Latest committed counts
    pub fn get_counts(&self) -> CounterSnapshot {
        *self.inner.published.read()
    }

    /// Current phases (waits for any frame in progress)
    pub fn phases(&self) -> PhaseSnapshot {
        self.inner.analyzer.lock().phases()
    }
}

impl Default for SharedAnalyzer {
    fn default() -> Self {
        Self::new(ExerciseAnalyzer::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{Landmark, LandmarkId};
    use std::thread;

    fn wrist_offset(offset: f32) -> LandmarkFrame {
        [
            Landmark::new(LandmarkId::LEFT_SHOULDER, 0.5, 0.4),
            Landmark::new(LandmarkId::LEFT_WRIST, 0.6, 0.4 + offset),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_reader_sees_consistent_monotonic_snapshots() {
        let shared = SharedAnalyzer::default();

        let writer = {
            let shared = shared.clone();
            thread::spawn(move || {
                let down = wrist_offset(0.3);
                let up = wrist_offset(-0.3);
                for _ in 0..20 {
                    for _ in 0..30 {
                        shared.process(Some(&down));
                    }
                    for _ in 0..30 {
                        shared.process(Some(&up));
                    }
                }
            })
        };

        let reader = {
            let shared = shared.clone();
            thread::spawn(move || {
                let mut last = shared.get_counts();
                for _ in 0..2000 {
                    let now = shared.get_counts();
                    assert!(now.dominates(&last));
                    last = now;
                }
            })
        };

        writer.join().unwrap();
        reader.join().unwrap();

        let counts = shared.get_counts();
        assert_eq!(counts.pull_ups(), 20);
        assert_eq!(counts.pushups(), 0);
    }

    #[test]
    fn test_get_counts_matches_last_process() {
        let shared = SharedAnalyzer::default();
        let snapshot = shared.process(Some(&wrist_offset(0.3)));
        assert_eq!(shared.get_counts(), snapshot);
        assert_eq!(shared.get_counts(), shared.get_counts());
    }

    #[test]
    fn test_none_frame_publishes_same_counts() {
        let shared = SharedAnalyzer::default();
        let before = shared.process(Some(&wrist_offset(0.3)));
        assert_eq!(shared.process(None), before);
    }
}
