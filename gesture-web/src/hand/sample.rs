//! HandSample - the fixed 21-landmark set for one detected hand in one frame
//!
//! The array type carries the shape invariant. Every fallible constructor
//! rejects anything other than 21 points; nothing is truncated or padded.

use std::ops::Index;

use super::landmark::Landmark;
use crate::error::ClassifyError;

/// Landmarks per hand (MediaPipe Hands)
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Flat floats per hand (21 landmarks × x, y, z)
pub const FLOATS_PER_HAND: usize = HAND_LANDMARK_COUNT * 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandSample {
    landmarks: [Landmark; HAND_LANDMARK_COUNT],
}

impl HandSample {
    pub const fn new(landmarks: [Landmark; HAND_LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    /// Build from a slice of landmarks, rejecting any length other than 21
    pub fn from_landmarks(landmarks: &[Landmark]) -> Result<Self, ClassifyError> {
        let landmarks: [Landmark; HAND_LANDMARK_COUNT] = landmarks
            .try_into()
            .map_err(|_| ClassifyError::invalid_sample(landmarks.len()))?;
        Ok(Self { landmarks })
    }

    /// Parse a flat `[x0, y0, z0, x1, ...]` buffer of exactly 63 floats
    ///
    /// On failure `actual` reports the number of complete points in the buffer.
    pub fn from_flat(data: &[f32]) -> Result<Self, ClassifyError> {
        if data.len() != FLOATS_PER_HAND {
            return Err(ClassifyError::invalid_sample(data.len() / 3));
        }

        let mut landmarks = [Landmark::default(); HAND_LANDMARK_COUNT];
        for (landmark, xyz) in landmarks.iter_mut().zip(data.chunks_exact(3)) {
            *landmark = Landmark::new(xyz[0], xyz[1], xyz[2]);
        }
        Ok(Self { landmarks })
    }

    pub fn landmarks(&self) -> &[Landmark; HAND_LANDMARK_COUNT] {
        &self.landmarks
    }
}

impl Index<usize> for HandSample {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Landmark {
        &self.landmarks[index]
    }
}

impl From<[Landmark; HAND_LANDMARK_COUNT]> for HandSample {
    fn from(landmarks: [Landmark; HAND_LANDMARK_COUNT]) -> Self {
        Self::new(landmarks)
    }
}

impl TryFrom<&[Landmark]> for HandSample {
    type Error = ClassifyError;

    fn try_from(landmarks: &[Landmark]) -> Result<Self, Self::Error> {
        Self::from_landmarks(landmarks)
    }
}

impl TryFrom<Vec<Landmark>> for HandSample {
    type Error = ClassifyError;

    fn try_from(landmarks: Vec<Landmark>) -> Result<Self, Self::Error> {
        Self::from_landmarks(&landmarks)
    }
}
