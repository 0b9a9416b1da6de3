//! Counter module - per-exercise phase machines
//!
//! Re-exports only. All logic in submodules.

mod exercise;
mod machine;
mod phase;
mod repetition;
mod snapshot;

pub use exercise::Exercise;
pub use machine::PhaseMachine;
pub use phase::Phase;
pub use repetition::RepetitionCounter;
pub use snapshot::{CounterSnapshot, PhaseSnapshot};
