//! Conformance tests built from literal synthetic hands.

use gesture_web::classifier::TIP_BASE_PAIRS;
use gesture_web::hand::{
    INDEX_MCP, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP, RING_PIP,
    RING_TIP, THUMB_MCP, THUMB_TIP,
};
use gesture_web::{
    classify, classify_hands, distance, ClassifyError, Classifier, Finger, FingerState, Gesture,
    HandSample, Landmark,
};

/// Fingers fanned out along x, all joints level, no touches
fn open_palm_level() -> [Landmark; 21] {
    let mut points = [Landmark::default(); 21];
    for (i, point) in points.iter_mut().enumerate() {
        *point = Landmark::new(0.04 * i as f32, 0.6, 0.0);
    }
    points
}

fn u_sign() -> [Landmark; 21] {
    let mut points = open_palm_level();
    points[INDEX_TIP].y = points[INDEX_PIP].y - 0.2;
    points[MIDDLE_TIP].y = points[MIDDLE_PIP].y - 0.2;
    points[RING_TIP].y = points[RING_PIP].y + 0.05;
    points[PINKY_TIP].y = points[PINKY_PIP].y;
    points
}

#[test]
fn every_finger_has_exactly_one_state() {
    for points in [open_palm_level(), u_sign()] {
        let result = classify(&HandSample::new(points));
        let states: Vec<_> = result.fingers.iter().collect();
        assert_eq!(states.len(), 5);
        for (finger, (listed, _)) in Finger::ALL.iter().zip(&states) {
            assert_eq!(finger, listed);
        }
    }
}

#[test]
fn distance_is_symmetric_and_zero_on_self() {
    let a = Landmark::new(0.31, 0.72, -0.05);
    let b = Landmark::new(0.64, 0.18, 0.02);
    assert_eq!(distance(&a, &b), distance(&b, &a));
    assert_eq!(distance(&a, &a), 0.0);
    assert_eq!(distance(&b, &b), 0.0);
}

#[test]
fn coincident_thumb_and_index_tips_give_okay() {
    let mut points = open_palm_level();
    points[THUMB_TIP] = Landmark::new(0.4, 0.4, -0.01);
    points[INDEX_TIP] = points[THUMB_TIP];
    let result = classify(&HandSample::new(points));
    assert!(result.contains(Gesture::Okay));
}

#[test]
fn okay_fires_regardless_of_other_fingers() {
    let mut points = u_sign();
    points[THUMB_TIP] = points[INDEX_TIP];
    let result = classify(&HandSample::new(points));
    assert_eq!(result.gestures, vec![Gesture::Okay, Gesture::U]);
}

#[test]
fn coincident_tips_and_bases_give_a() {
    let mut points = open_palm_level();
    for (_, tip, base) in TIP_BASE_PAIRS {
        points[tip] = points[base];
    }
    // Keep the thumb clear of the folded index tip
    points[THUMB_TIP] = Landmark::new(0.9, 0.1, 0.0);
    let result = classify(&HandSample::new(points));
    assert_eq!(result.gestures, vec![Gesture::A]);
}

#[test]
fn u_pose_gives_u_and_thumb_is_ignored() {
    let mut points = u_sign();
    let result = classify(&HandSample::new(points));
    assert_eq!(result.fingers.get(Finger::Index), FingerState::Open);
    assert_eq!(result.fingers.get(Finger::Middle), FingerState::Open);
    assert_eq!(result.fingers.get(Finger::Ring), FingerState::Closed);
    assert_eq!(result.fingers.get(Finger::Pinky), FingerState::Closed);
    assert_eq!(result.gestures, vec![Gesture::U]);

    points[THUMB_TIP].y = points[THUMB_MCP].y - 0.3;
    let result = classify(&HandSample::new(points));
    assert_eq!(result.fingers.get(Finger::Thumb), FingerState::Open);
    assert!(result.contains(Gesture::U));
}

#[test]
fn okay_and_a_fire_together() {
    let mut points = open_palm_level();
    for (_, tip, base) in TIP_BASE_PAIRS {
        points[tip] = points[base];
    }
    // Bring the thumb onto the folded index tip
    points[THUMB_TIP] = points[INDEX_TIP];
    assert_eq!(points[INDEX_TIP], points[INDEX_MCP]);

    let result = classify(&HandSample::new(points));
    assert!(result.contains(Gesture::Okay));
    assert!(result.contains(Gesture::A));
}

#[test]
fn pinch_threshold_is_exclusive() {
    let mut points = open_palm_level();
    points[THUMB_TIP] = Landmark::new(0.0, 0.0, 0.0);

    points[INDEX_TIP] = Landmark::new(0.05, 0.0, 0.0);
    assert!(!classify(&HandSample::new(points)).contains(Gesture::Okay));

    points[INDEX_TIP] = Landmark::new(0.0499, 0.0, 0.0);
    assert!(classify(&HandSample::new(points)).contains(Gesture::Okay));
}

#[test]
fn base_touch_threshold_is_exclusive() {
    let mut points = open_palm_level();
    for (_, tip, base) in TIP_BASE_PAIRS {
        points[tip] = points[base];
    }
    points[INDEX_MCP] = Landmark::new(0.0, 0.0, 0.0);

    points[INDEX_TIP] = Landmark::new(0.0, 0.0, 0.05);
    assert!(!classify(&HandSample::new(points)).contains(Gesture::A));

    points[INDEX_TIP] = Landmark::new(0.0, 0.0, 0.0499);
    assert!(classify(&HandSample::new(points)).contains(Gesture::A));
}

#[test]
fn frame_results_keep_length_and_order() {
    let mut okay = open_palm_level();
    okay[INDEX_TIP] = okay[THUMB_TIP];
    let frame = [
        HandSample::new(u_sign()),
        HandSample::new(open_palm_level()),
        HandSample::new(okay),
    ];

    let results = classify_hands(&frame);
    assert_eq!(results.len(), frame.len());
    assert_eq!(results[0].gestures, vec![Gesture::U]);
    assert!(results[1].gestures.is_empty());
    assert!(results[2].contains(Gesture::Okay));

    assert!(classify_hands(&[]).is_empty());
}

#[test]
fn wrong_point_counts_are_rejected() {
    for len in [0, 1, 20, 22, 42] {
        let points = vec![Landmark::new(0.5, 0.5, 0.0); len];
        assert_eq!(
            HandSample::try_from(points),
            Err(ClassifyError::InvalidSample { expected: 21, actual: len })
        );
    }
}

#[test]
fn bad_hand_does_not_poison_frame() {
    let hands = vec![u_sign().to_vec(), open_palm_level()[..19].to_vec(), u_sign().to_vec()];
    let results = Classifier::default().classify_landmark_sets(&hands);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().gestures, vec![Gesture::U]);
    assert!(matches!(results[1], Err(ClassifyError::InvalidSample { actual: 19, .. })));
    assert_eq!(results[2].as_ref().unwrap().gestures, vec![Gesture::U]);
}
