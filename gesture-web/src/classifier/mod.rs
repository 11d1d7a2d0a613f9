//! Classifier module - static hand sign classification
//!
//! Turns one 21-point hand into per-finger open/closed states and the
//! gesture labels ("Okay", "A", "U") that hold for it.
//! Re-exports only, logic in submodules.

mod config;
mod engine;
mod fingers;
mod gestures;
mod predicates;

pub use config::{ClassifierConfig, TOUCH_THRESHOLD};
pub use engine::{classify, classify_hands, ClassificationResult, Classifier};
pub use fingers::{finger_state, finger_states, Finger, FingerState, FingerStates};
pub use gestures::{evaluate_rules, Gesture, PoseFacts, GESTURE_LABELS};
pub use predicates::{thumb_index_touching, tips_touching_bases, TIP_BASE_PAIRS};
