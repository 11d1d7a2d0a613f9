//! Hand landmark classification bridge
//!
//! Receives MediaPipe Hands landmarks from JavaScript as one flat
//! Float32Array (21 landmarks × 3 coordinates per hand) and returns the
//! classification of every hand as JSON.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use serde::Serialize;

use crate::classifier::{ClassificationResult, Classifier, ClassifierConfig};
use crate::error::ClassifyError;
use crate::hand::{HandSample, FLOATS_PER_HAND};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Per-hand outcome handed back to JS
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandReport {
    Classified(ClassificationResult),
    Rejected { error: String },
}

impl From<Result<ClassificationResult, ClassifyError>> for HandReport {
    fn from(outcome: Result<ClassificationResult, ClassifyError>) -> Self {
        match outcome {
            Ok(result) => HandReport::Classified(result),
            Err(err) => HandReport::Rejected { error: err.to_string() },
        }
    }
}

impl From<ClassifyError> for JsValue {
    fn from(err: ClassifyError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

// Active thresholds (WASM is single-threaded)
thread_local! {
    static CLASSIFIER: RefCell<Classifier> = RefCell::new(Classifier::default());
}

// ============================================================================
// WASM API
// ============================================================================

/// Classify `num_hands` hands packed back to back in `flat_data`
///
/// Returns a JSON array, one `{"classified": ...}` or `{"rejected": ...}`
/// entry per hand, in input order.
#[wasm_bindgen]
pub fn classify_hand_landmarks(flat_data: &[f32], num_hands: usize) -> Result<String, JsValue> {
    let classifier = CLASSIFIER.with(|cell| *cell.borrow());
    let reports = classify_flat(&classifier, flat_data, num_hands)?;

    // Bounded by the hand-count check in classify_flat
    let expected = num_hands * FLOATS_PER_HAND;
    if flat_data.len() > expected {
        web_sys::console::warn_1(
            &format!(
                "Ignoring {} trailing landmark values (expected {} for {} hands)",
                flat_data.len() - expected,
                expected,
                num_hands
            )
            .into(),
        );
    }

    for (hand, report) in reports.iter().enumerate() {
        if let HandReport::Rejected { error } = report {
            web_sys::console::warn_1(&format!("Hand {}: {}", hand, error).into());
        }
    }

    serde_json::to_string(&reports).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Replace the active touch thresholds
#[wasm_bindgen]
pub fn set_touch_thresholds(pinch: f32, base_touch: f32) -> Result<(), JsValue> {
    let config = ClassifierConfig::new(pinch, base_touch)?;
    CLASSIFIER.with(|cell| {
        *cell.borrow_mut() = Classifier::new(config);
    });
    Ok(())
}

/// Restore the default 0.05 thresholds
#[wasm_bindgen]
pub fn reset_touch_thresholds() {
    CLASSIFIER.with(|cell| {
        *cell.borrow_mut() = Classifier::default();
    });
}

#[wasm_bindgen]
pub fn get_pinch_threshold() -> f32 {
    CLASSIFIER.with(|cell| cell.borrow().config().pinch_threshold)
}

#[wasm_bindgen]
pub fn get_base_touch_threshold() -> f32 {
    CLASSIFIER.with(|cell| cell.borrow().config().base_touch_threshold)
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Split a flat buffer into hands and classify each one
///
/// Hand `h` reads floats `[h*63, (h+1)*63)` clipped to the buffer, so a
/// truncated buffer rejects only the hands it cuts into. `num_hands` may
/// not exceed the hands the buffer touches (a partial last hand counts).
pub fn classify_flat(
    classifier: &Classifier,
    flat_data: &[f32],
    num_hands: usize,
) -> Result<Vec<HandReport>, ClassifyError> {
    let available = flat_data.len().div_ceil(FLOATS_PER_HAND);
    if num_hands > available {
        return Err(ClassifyError::HandCountOutOfRange {
            requested: num_hands,
            available,
        });
    }

    let reports = flat_data
        .chunks(FLOATS_PER_HAND)
        .take(num_hands)
        .map(|hand| {
            let outcome = HandSample::from_flat(hand).map(|sample| classifier.classify(&sample));
            HandReport::from(outcome)
        })
        .collect();
    Ok(reports)
}
