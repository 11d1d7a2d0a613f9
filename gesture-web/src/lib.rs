//! Gesture Web - static hand sign classification for MediaPipe Hands
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The classifier is pure and usable natively; the bridge is the JS surface.

mod bridge;
pub mod classifier;
pub mod error;
pub mod hand;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    classify_flat, classify_hand_landmarks, get_base_touch_threshold, get_pinch_threshold,
    reset_touch_thresholds, set_touch_thresholds, HandReport,
};
pub use classifier::{
    classify, classify_hands, ClassificationResult, Classifier, ClassifierConfig, Finger,
    FingerState, FingerStates, Gesture,
};
pub use error::ClassifyError;
pub use hand::{distance, HandSample, Landmark};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!("✅ Hand sign classifier loaded");
}
