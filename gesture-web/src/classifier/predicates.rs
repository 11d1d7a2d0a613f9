//! Distance-based touch predicates
//!
//! Both thresholds are exclusive: a distance equal to the threshold does not touch.

use crate::hand::{
    distance, HandSample,
    THUMB_TIP, INDEX_MCP, INDEX_TIP, MIDDLE_MCP, MIDDLE_TIP,
    RING_MCP, RING_TIP, PINKY_MCP, PINKY_TIP,
};
use super::fingers::Finger;

/// (finger, tip, base) for the four non-thumb fingers
pub const TIP_BASE_PAIRS: [(Finger, usize, usize); 4] = [
    (Finger::Index, INDEX_TIP, INDEX_MCP),
    (Finger::Middle, MIDDLE_TIP, MIDDLE_MCP),
    (Finger::Ring, RING_TIP, RING_MCP),
    (Finger::Pinky, PINKY_TIP, PINKY_MCP),
];

/// Every non-thumb fingertip is within `threshold` of its base knuckle
///
/// One failing finger disqualifies the whole predicate.
pub fn tips_touching_bases(sample: &HandSample, threshold: f32) -> bool {
    TIP_BASE_PAIRS
        .iter()
        .all(|&(_, tip, base)| distance(&sample[tip], &sample[base]) < threshold)
}

/// Thumb tip is within `threshold` of the index tip
pub fn thumb_index_touching(sample: &HandSample, threshold: f32) -> bool {
    distance(&sample[THUMB_TIP], &sample[INDEX_TIP]) < threshold
}
