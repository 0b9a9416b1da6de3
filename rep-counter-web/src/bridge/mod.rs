//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;

pub use landmarks::{
    // WASM entry points
    get_exercise_data,
    get_phase_data,
    start_session,
    update_landmarks,
    // Internal API
    get_counts,
    ingest,
    restart,
    // Constants
    VALUES_PER_LANDMARK,
};
