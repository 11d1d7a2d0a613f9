//! Classifier - one HandSample in, one ClassificationResult out
//!
//! Pure and stateless across frames. Each hand in a frame is classified
//! independently; results keep the input order.

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::ClassifyError;
use crate::hand::{HandSample, Landmark};
use super::config::ClassifierConfig;
use super::fingers::{finger_states, FingerStates};
use super::gestures::{evaluate_rules, Gesture, PoseFacts};
use super::predicates::{thumb_index_touching, tips_touching_bases};

/// Finger states plus every gesture that held for one hand
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub fingers: FingerStates,
    pub gestures: Vec<Gesture>,
}

impl ClassificationResult {
    pub fn contains(&self, gesture: Gesture) -> bool {
        self.gestures.contains(&gesture)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn classify(&self, sample: &HandSample) -> ClassificationResult {
        let facts = PoseFacts {
            fingers: finger_states(sample),
            thumb_index_touching: thumb_index_touching(sample, self.config.pinch_threshold),
            tips_touching_bases: tips_touching_bases(sample, self.config.base_touch_threshold),
        };
        trace!(fingers = ?facts.fingers, "finger states");

        if facts.thumb_index_touching {
            debug!("thumb and index are touching");
        }
        if facts.tips_touching_bases {
            debug!("all finger tips are touching their bases");
        }

        let gestures = evaluate_rules(&facts);
        if !gestures.is_empty() {
            debug!(?gestures, "gestures detected");
        }

        ClassificationResult {
            fingers: facts.fingers,
            gestures,
        }
    }

    /// Classify every hand of one frame, order preserved
    pub fn classify_hands(&self, hands: &[HandSample]) -> Vec<ClassificationResult> {
        if !hands.is_empty() {
            debug!(hands = hands.len(), "detected hands in frame");
        }
        hands.iter().map(|hand| self.classify(hand)).collect()
    }

    /// Validate and classify raw landmark sets
    ///
    /// A malformed hand yields an `Err` in its own slot only.
    pub fn classify_landmark_sets<S: AsRef<[Landmark]>>(
        &self,
        hands: &[S],
    ) -> Vec<Result<ClassificationResult, ClassifyError>> {
        if !hands.is_empty() {
            debug!(hands = hands.len(), "detected hands in frame");
        }
        hands
            .iter()
            .map(|hand| HandSample::from_landmarks(hand.as_ref()).map(|s| self.classify(&s)))
            .collect()
    }
}

/// Classify one hand with the default thresholds
pub fn classify(sample: &HandSample) -> ClassificationResult {
    Classifier::default().classify(sample)
}

/// Classify one frame's hands with the default thresholds
pub fn classify_hands(hands: &[HandSample]) -> Vec<ClassificationResult> {
    Classifier::default().classify_hands(hands)
}
