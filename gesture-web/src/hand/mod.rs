//! Hand module - landmark model and MediaPipe index tables
//!
//! Re-exports only. All logic in submodules.

mod landmark;
mod sample;

pub use landmark::{distance, Landmark};
pub use landmark::{
    WRIST,
    THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP,
    INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP,
    MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP,
    RING_MCP, RING_PIP, RING_DIP, RING_TIP,
    PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP,
};
pub use sample::{HandSample, HAND_LANDMARK_COUNT, FLOATS_PER_HAND};
