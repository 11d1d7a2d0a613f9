//! Classifier thresholds
//!
//! Defaults reproduce the reference demo exactly.

use crate::error::ClassifyError;

/// Default touch distance (normalized units) for both predicates
pub const TOUCH_THRESHOLD: f32 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifierConfig {
    /// Thumb tip to index tip distance below which "Okay" fires
    pub pinch_threshold: f32,
    /// Fingertip to base knuckle distance below which a finger counts as folded
    pub base_touch_threshold: f32,
}

impl ClassifierConfig {
    pub fn new(pinch_threshold: f32, base_touch_threshold: f32) -> Result<Self, ClassifyError> {
        Ok(Self {
            pinch_threshold: validate("pinch_threshold", pinch_threshold)?,
            base_touch_threshold: validate("base_touch_threshold", base_touch_threshold)?,
        })
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: TOUCH_THRESHOLD,
            base_touch_threshold: TOUCH_THRESHOLD,
        }
    }
}

fn validate(name: &'static str, value: f32) -> Result<f32, ClassifyError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ClassifyError::InvalidThreshold { name, value })
    }
}
