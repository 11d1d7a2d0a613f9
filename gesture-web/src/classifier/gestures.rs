//! Gesture labels and the rules that fire them
//!
//! Rules are independent. Every matching label is emitted; there is no
//! precedence, so an ambiguous pose can produce "Okay" and "A" together.

use std::fmt;

use serde::Serialize;

use super::fingers::{Finger, FingerStates};

/// Gesture labels (evaluation order)
pub const GESTURE_LABELS: [&str; 3] = ["Okay", "A", "U"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Gesture {
    /// Thumb tip touching index tip
    Okay,
    /// All four fingertips folded onto their base knuckles
    A,
    /// Index and middle up, ring and pinky down
    U,
}

impl Gesture {
    pub const ALL: [Gesture; 3] = [Gesture::Okay, Gesture::A, Gesture::U];

    pub fn as_str(&self) -> &'static str {
        GESTURE_LABELS[*self as usize]
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometric facts about one hand that the rules read from
#[derive(Clone, Copy, Debug)]
pub struct PoseFacts {
    pub fingers: FingerStates,
    pub thumb_index_touching: bool,
    pub tips_touching_bases: bool,
}

impl PoseFacts {
    fn is_u_shape(&self) -> bool {
        let f = &self.fingers;
        f.is_open(Finger::Index)
            && f.is_open(Finger::Middle)
            && !f.is_open(Finger::Ring)
            && !f.is_open(Finger::Pinky)
    }

    pub fn holds(&self, gesture: Gesture) -> bool {
        match gesture {
            Gesture::Okay => self.thumb_index_touching,
            Gesture::A => self.tips_touching_bases,
            Gesture::U => self.is_u_shape(),
        }
    }
}

/// Every gesture whose rule holds, in `Gesture::ALL` order
pub fn evaluate_rules(facts: &PoseFacts) -> Vec<Gesture> {
    Gesture::ALL
        .into_iter()
        .filter(|&gesture| facts.holds(gesture))
        .collect()
}
