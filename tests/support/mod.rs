//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use unistroke::{Point, float_types::Real};

/// Self-match threshold most default shapes clear comfortably.
pub const HIGH_CONFIDENCE_THRESHOLD: Real = 0.90;
/// Threshold for the visually busier shapes.
pub const COMPLEX_GESTURE_THRESHOLD: Real = 0.80;
/// How far a transformed stroke's score may drift from the original's.
pub const INVARIANCE_TOLERANCE: Real = 1e-2;

/// Shapes whose self-match is only required to clear [`COMPLEX_GESTURE_THRESHOLD`].
pub const COMPLEX_SHAPES: [&str; 7] = [
    "CARET",
    "ZIGZAG",
    "ARROW",
    "DELETE",
    "LEFT_CURLY_BRACE",
    "RIGHT_CURLY_BRACE",
    "STAR",
];

pub fn threshold_for(name: &str) -> Real {
    if COMPLEX_SHAPES.contains(&name) {
        COMPLEX_GESTURE_THRESHOLD
    } else {
        HIGH_CONFIDENCE_THRESHOLD
    }
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Helper to build a stroke from `[x, y]` pairs.
pub fn stroke(points: &[[Real; 2]]) -> Vec<Point> {
    points.iter().map(|&[x, y]| Point::new(x, y)).collect()
}

/// `count` evenly spaced samples along `y = x`, from the origin with the given step.
pub fn diagonal(count: usize, step: Real) -> Vec<Point> {
    (0..count)
        .map(|i| Point::new(i as Real * step, i as Real * step))
        .collect()
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
