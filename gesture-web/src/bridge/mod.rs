//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod hand_landmarks;

pub use hand_landmarks::{
    // WASM entry points
    classify_hand_landmarks,
    set_touch_thresholds,
    reset_touch_thresholds,
    get_pinch_threshold,
    get_base_touch_threshold,
    // Internal API
    classify_flat,
    HandReport,
};
