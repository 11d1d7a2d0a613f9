//! Per-finger open/closed evaluation
//!
//! Vertical-only heuristic: a finger is open when its tip sits above the
//! joint two positions earlier in its chain. Hand rotation is not accounted
//! for, so sideways hands read as closed.

use std::fmt;

use serde::Serialize;

use crate::hand::{
    HandSample,
    THUMB_MCP, THUMB_TIP, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP,
    RING_PIP, RING_TIP, PINKY_PIP, PINKY_TIP,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// Anatomical order, thumb first
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Finger::Thumb => "Thumb",
            Finger::Index => "Index",
            Finger::Middle => "Middle",
            Finger::Ring => "Ring",
            Finger::Pinky => "Pinky",
        }
    }

    /// (tip, pivot) landmark indices, pivot = tip - 2
    pub fn tip_pivot(&self) -> (usize, usize) {
        FINGER_TIP_PIVOT[*self as usize]
    }
}

impl fmt::Display for Finger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// (tip, pivot) per finger, indexed by `Finger as usize`
const FINGER_TIP_PIVOT: [(usize, usize); 5] = [
    (THUMB_TIP, THUMB_MCP),
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FingerState {
    Open,
    Closed,
}

impl FingerState {
    pub fn is_open(&self) -> bool {
        matches!(self, FingerState::Open)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FingerState::Open => "Open",
            FingerState::Closed => "Closed",
        }
    }
}

impl fmt::Display for FingerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Open/closed state of every finger of one hand
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FingerStates {
    pub thumb: FingerState,
    pub index: FingerState,
    pub middle: FingerState,
    pub ring: FingerState,
    pub pinky: FingerState,
}

impl FingerStates {
    pub fn get(&self, finger: Finger) -> FingerState {
        match finger {
            Finger::Thumb => self.thumb,
            Finger::Index => self.index,
            Finger::Middle => self.middle,
            Finger::Ring => self.ring,
            Finger::Pinky => self.pinky,
        }
    }

    pub fn is_open(&self, finger: Finger) -> bool {
        self.get(finger).is_open()
    }

    /// (finger, state) pairs in anatomical order
    pub fn iter(&self) -> impl Iterator<Item = (Finger, FingerState)> + '_ {
        Finger::ALL.into_iter().map(move |finger| (finger, self.get(finger)))
    }
}

/// Open iff tip.y < pivot.y (strict; equal heights read as closed)
pub fn finger_state(sample: &HandSample, finger: Finger) -> FingerState {
    let (tip, pivot) = finger.tip_pivot();
    if sample[tip].y < sample[pivot].y {
        FingerState::Open
    } else {
        FingerState::Closed
    }
}

pub fn finger_states(sample: &HandSample) -> FingerStates {
    FingerStates {
        thumb: finger_state(sample, Finger::Thumb),
        index: finger_state(sample, Finger::Index),
        middle: finger_state(sample, Finger::Middle),
        ring: finger_state(sample, Finger::Ring),
        pinky: finger_state(sample, Finger::Pinky),
    }
}
