//! Rotation-invariant distance between a candidate and a template.
//!
//! Candidates and templates are brought into the same canonical orientation by
//! the pipeline, but that orientation is only as good as the indicative angle.
//! The matcher refines it by searching a bounded rotation window with a
//! golden-section search, which assumes distance is unimodal in the angle over
//! that window. The result is a local minimum.

use crate::float_types::{PHI, Real};
use crate::geometry::{Point, distance};
use crate::pipeline::rotate_by;
use crate::template::Template;

/// Mean pointwise distance between two equal-length sequences.
///
/// Sequences of different lengths cannot be compared and yield `Real::INFINITY`,
/// which simply never wins an arg-min.
pub fn path_distance(a: &[Point], b: &[Point]) -> Real {
    if a.len() != b.len() {
        log::debug!("path_distance: lengths differ ({} != {})", a.len(), b.len());
        return Real::INFINITY;
    }
    if a.is_empty() {
        return Real::INFINITY;
    }
    let total: Real = a.iter().zip(b).map(|(p, q)| distance(p, q)).sum();
    total / a.len() as Real
}

/// Distance to `template` after rotating `candidate` by `radians` about its centroid.
pub fn distance_at_angle(candidate: &[Point], template: &Template, radians: Real) -> Real {
    let rotated = rotate_by(candidate, radians);
    path_distance(&rotated, template.normalized_points())
}

/// Smallest distance to `template` over rotations of `candidate` in
/// `[angle_min, angle_max]` (radians).
///
/// Golden-section search: each iteration drops the worse side of the bracket,
/// keeps the surviving interior evaluation and computes one new one. Stops
/// once the bracket is no wider than `precision` and returns the better of the
/// last two evaluations.
pub fn distance_at_best_angle(
    candidate: &[Point],
    template: &Template,
    angle_min: Real,
    angle_max: Real,
    precision: Real,
) -> Real {
    let mut a = angle_min;
    let mut b = angle_max;
    let mut x1 = PHI * a + (1.0 - PHI) * b;
    let mut f1 = distance_at_angle(candidate, template, x1);
    let mut x2 = (1.0 - PHI) * a + PHI * b;
    let mut f2 = distance_at_angle(candidate, template, x2);

    let mut iterations = 0usize;
    while (b - a).abs() > precision {
        if f1 < f2 {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = PHI * a + (1.0 - PHI) * b;
            f1 = distance_at_angle(candidate, template, x1);
        } else {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = (1.0 - PHI) * a + PHI * b;
            f2 = distance_at_angle(candidate, template, x2);
        }
        iterations += 1;
    }
    log::trace!(
        "{}: bracket [{:.4}, {:.4}] after {} iterations, distance {:.4}",
        template.name(),
        a,
        b,
        iterations,
        f1.min(f2)
    );

    f1.min(f2)
}
