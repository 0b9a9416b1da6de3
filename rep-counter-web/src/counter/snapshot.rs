//! Point-in-time copies of counter and phase state
//!
//! Both snapshots are plain `Copy` values. Handing one out never exposes
//! the live counter.

use serde::Serialize;

use super::exercise::Exercise;
use super::phase::Phase;

/// Repetition counts for every exercise
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CounterSnapshot {
    pushups: u32,
    leg_raises: u32,
    pull_ups: u32,
    pull_downs: u32,
}

impl CounterSnapshot {
    /// Build from counts in `Exercise::ALL` order
    pub(crate) fn from_counts(counts: [u32; 4]) -> Self {
        let [pushups, leg_raises, pull_ups, pull_downs] = counts;
        Self {
            pushups,
            leg_raises,
            pull_ups,
            pull_downs,
        }
    }

    pub fn get(&self, exercise: Exercise) -> u32 {
        match exercise {
            Exercise::PushUp => self.pushups,
            Exercise::LegRaise => self.leg_raises,
            Exercise::PullUp => self.pull_ups,
            Exercise::PullDown => self.pull_downs,
        }
    }

    pub fn pushups(&self) -> u32 {
        self.pushups
    }

    pub fn leg_raises(&self) -> u32 {
        self.leg_raises
    }

    pub fn pull_ups(&self) -> u32 {
        self.pull_ups
    }

    pub fn pull_downs(&self) -> u32 {
        self.pull_downs
    }

    /// (exercise, count) pairs in counter order
    pub fn iter(&self) -> impl Iterator<Item = (Exercise, u32)> + '_ {
        Exercise::ALL.into_iter().map(move |exercise| (exercise, self.get(exercise)))
    }

    /// Sum over all exercises
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, count)| count).sum()
    }

    /// True when no count in `self` is below the one in `earlier`
    pub fn dominates(&self, earlier: &CounterSnapshot) -> bool {
        Exercise::ALL
            .into_iter()
            .all(|exercise| self.get(exercise) >= earlier.get(exercise))
    }
}

/// Current phase of every exercise
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PhaseSnapshot {
    pushup: Phase,
    leg_raise: Phase,
    pull_up: Phase,
    pull_down: Phase,
}

impl PhaseSnapshot {
    /// Build from phases in `Exercise::ALL` order
    pub(crate) fn from_phases(phases: [Phase; 4]) -> Self {
        let [pushup, leg_raise, pull_up, pull_down] = phases;
        Self {
            pushup,
            leg_raise,
            pull_up,
            pull_down,
        }
    }

    pub fn get(&self, exercise: Exercise) -> Phase {
        match exercise {
            Exercise::PushUp => self.pushup,
            Exercise::LegRaise => self.leg_raise,
            Exercise::PullUp => self.pull_up,
            Exercise::PullDown => self.pull_down,
        }
    }
}
