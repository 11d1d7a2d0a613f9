//! Error types shared by the engine and the JS bridge

use thiserror::Error;

use crate::hand::HAND_LANDMARK_COUNT;

/// Errors reported to the caller as a typed outcome. Nothing here is fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifyError {
    /// A hand did not carry exactly 21 landmarks
    #[error("invalid hand sample: expected {expected} landmarks, got {actual}")]
    InvalidSample { expected: usize, actual: usize },

    /// More hands requested than the flat landmark buffer can hold
    #[error("invalid hand count: {requested} requested, buffer holds at most {available}")]
    HandCountOutOfRange { requested: usize, available: usize },

    /// A touch threshold was NaN, infinite, zero or negative
    #[error("invalid {name}: {value} (must be finite and > 0)")]
    InvalidThreshold { name: &'static str, value: f32 },
}

impl ClassifyError {
    pub(crate) fn invalid_sample(actual: usize) -> Self {
        ClassifyError::InvalidSample {
            expected: HAND_LANDMARK_COUNT,
            actual,
        }
    }
}
