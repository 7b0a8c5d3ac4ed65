//! The normalization pipeline: resample, rotate, scale, translate.
//!
//! Each stage is a pure function from a point slice to a new `Vec<Point>`, so
//! stages compose freely and can be inspected one at a time. [`normalize_template`]
//! and [`normalize_candidate`] chain them the way templates and recognition
//! candidates need them.

use crate::config::RecognizerConfig;
use crate::float_types::{Real, tolerance};
use crate::geometry::{Point, Rectangle, bounding_box, centroid, distance, path_length};
use nalgebra::Rotation2;

/// Resample `points` into `n` points evenly spaced by arc length.
///
/// The first point is kept as is. Segments are split wherever the running arc
/// length reaches a multiple of `path_length / (n - 1)`; if rounding leaves the
/// result one point short, the last input point is appended.
///
/// A zero-length path (or fewer than two points, or `n < 2`) cannot be divided
/// into intervals and yields fewer than `n` points.
pub fn resample(points: &[Point], n: usize) -> Vec<Point> {
    let mut resampled = Vec::with_capacity(n);
    let Some(&first) = points.first() else {
        return resampled;
    };
    resampled.push(first);
    if n < 2 {
        return resampled;
    }

    let interval = path_length(points) / (n - 1) as Real;
    if !(interval > 0.0 && interval.is_finite()) {
        return resampled;
    }

    let mut accumulated: Real = 0.0;
    let mut current = first;
    let mut next = 1;
    while next < points.len() {
        let target = points[next];
        let d = distance(&current, &target);
        if accumulated + d >= interval {
            // accumulated < interval always holds here, so d > 0.
            let t = (interval - accumulated) / d;
            let q = current + (target - current) * t;
            resampled.push(q);
            current = q;
            accumulated = 0.0;
        } else {
            accumulated += d;
            current = target;
            next += 1;
        }
    }

    if resampled.len() == n - 1 {
        if let Some(&last) = points.last() {
            resampled.push(last);
        }
    }
    resampled
}

/// Angle in radians from the first point to the centroid. Zero for an empty slice.
pub fn indicative_angle(points: &[Point]) -> Real {
    let Some(first) = points.first() else {
        return 0.0;
    };
    let c = centroid(points);
    (c.y - first.y).atan2(c.x - first.x)
}

/// Rotate every point about the centroid of `points` by `radians`
/// (counter-clockwise in a y-up frame).
pub fn rotate_by(points: &[Point], radians: Real) -> Vec<Point> {
    let c = centroid(points);
    let rotation = Rotation2::new(radians);
    points.iter().map(|p| c + rotation * (p - c)).collect()
}

/// Non-uniform scale so the bounding box becomes `size × size`.
///
/// Aspect ratio is not preserved. A zero-width or zero-height box is not
/// special-cased: the affected coordinates become non-finite.
pub fn scale_to(points: &[Point], size: Real) -> Vec<Point> {
    let bb = bounding_box(points);
    let sx = size / bb.width;
    let sy = size / bb.height;
    points.iter().map(|p| Point::new(p.x * sx, p.y * sy)).collect()
}

/// Translate so the centroid of `points` lands on `target`.
pub fn translate_to(points: &[Point], target: &Point) -> Vec<Point> {
    let offset = target - centroid(points);
    points.iter().map(|p| p + offset).collect()
}

/// Resample a template stroke and rotate it into its canonical orientation.
///
/// The indicative angle is measured on the resampled points.
fn orient_template(points: &[Point], config: &RecognizerConfig) -> Vec<Point> {
    let resampled = resample(points, config.point_count());
    let radians = indicative_angle(&resampled);
    rotate_by(&resampled, -radians)
}

/// Resample a stroke about to be recognized and rotate it into its canonical
/// orientation.
///
/// The indicative angle is measured on the raw, unresampled input.
fn orient_candidate(points: &[Point], config: &RecognizerConfig) -> Vec<Point> {
    let resampled = resample(points, config.point_count());
    let radians = indicative_angle(points);
    rotate_by(&resampled, -radians)
}

/// Normalize a template's raw points.
pub fn normalize_template(points: &[Point], config: &RecognizerConfig) -> Vec<Point> {
    let scaled = scale_to(&orient_template(points, config), config.square_size());
    translate_to(&scaled, &config.origin())
}

/// Normalize a stroke about to be recognized.
pub fn normalize_candidate(points: &[Point], config: &RecognizerConfig) -> Vec<Point> {
    let scaled = scale_to(&orient_candidate(points, config), config.square_size());
    translate_to(&scaled, &config.origin())
}

/// Bounding box of a template stroke in its canonical orientation, before scaling.
pub fn canonical_bounds(points: &[Point], config: &RecognizerConfig) -> Rectangle {
    bounding_box(&orient_template(points, config))
}

/// Bounding box of a candidate stroke in its canonical orientation, before
/// scaling. This is the box [`normalize_candidate`] scales onto the square.
pub fn candidate_bounds(points: &[Point], config: &RecognizerConfig) -> Rectangle {
    bounding_box(&orient_candidate(points, config))
}

/// True when one side of `bounds` vanishes next to the other.
///
/// Scaling such a box onto a square blows rounding noise up to full size, so
/// distances against it are unstable.
pub fn is_nearly_flat(bounds: &Rectangle) -> bool {
    let short = bounds.width.min(bounds.height);
    let long = bounds.width.max(bounds.height);
    short <= tolerance() * long
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::{COORD_EPSILON, FRAC_PI_4, PI};
    use approx::assert_relative_eq;

    fn zigzag() -> Vec<Point> {
        vec![
            Point::new(307.0, 216.0),
            Point::new(333.0, 186.0),
            Point::new(356.0, 215.0),
            Point::new(375.0, 186.0),
            Point::new(399.0, 216.0),
            Point::new(418.0, 186.0),
        ]
    }

    #[test]
    fn resample_produces_requested_count() {
        for n in [2, 8, 16, 64, 128] {
            let resampled = resample(&zigzag(), n);
            assert_eq!(resampled.len(), n, "n = {n}");
            assert_eq!(resampled[0], zigzag()[0]);
        }
    }

    #[test]
    fn resample_spaces_points_evenly() {
        let line = [Point::new(0.0, 0.0), Point::new(0.0, 63.0)];
        let resampled = resample(&line, 64);
        assert_eq!(resampled.len(), 64);
        for (i, p) in resampled.iter().enumerate() {
            assert_relative_eq!(p.y, i as Real, epsilon = COORD_EPSILON);
            assert_eq!(p.x, 0.0);
        }
    }

    #[test]
    fn resample_splits_across_input_vertices() {
        // An L shape of total length 4 resampled to 5 points hits the corner exactly.
        let l = [Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(2.0, 2.0)];
        let resampled = resample(&l, 5);
        assert_eq!(resampled.len(), 5);
        assert_relative_eq!(resampled[1].x, 1.0, epsilon = COORD_EPSILON);
        assert_relative_eq!(resampled[2].x, 2.0, epsilon = COORD_EPSILON);
        assert_relative_eq!(resampled[3].y, 1.0, epsilon = COORD_EPSILON);
        assert_relative_eq!(resampled[4].y, 2.0, epsilon = COORD_EPSILON);
    }

    #[test]
    fn resample_guards_zero_length_paths() {
        let dot = [Point::new(3.0, 3.0), Point::new(3.0, 3.0), Point::new(3.0, 3.0)];
        assert_eq!(resample(&dot, 64), vec![Point::new(3.0, 3.0)]);
        assert_eq!(resample(&[Point::new(1.0, 2.0)], 64).len(), 1);
        assert!(resample(&[], 64).is_empty());
    }

    #[test]
    fn indicative_angle_points_from_start_to_centroid() {
        let points = [Point::new(0.0, 0.0), Point::new(2.0, 2.0)];
        assert_relative_eq!(indicative_angle(&points), FRAC_PI_4);
        let points = [Point::new(0.0, 0.0), Point::new(-2.0, 0.0)];
        assert_relative_eq!(indicative_angle(&points), PI);
        assert_eq!(indicative_angle(&[]), 0.0);
    }

    #[test]
    fn rotate_by_keeps_centroid_fixed() {
        let rotated = rotate_by(&zigzag(), 0.7);
        let before = centroid(&zigzag());
        let after = centroid(&rotated);
        assert_relative_eq!(before.x, after.x, epsilon = COORD_EPSILON);
        assert_relative_eq!(before.y, after.y, epsilon = COORD_EPSILON);
    }

    #[test]
    fn rotate_by_is_counter_clockwise() {
        let points = [Point::new(-1.0, 0.0), Point::new(1.0, 0.0)];
        let rotated = rotate_by(&points, PI / 2.0);
        assert_relative_eq!(rotated[1].x, 0.0, epsilon = COORD_EPSILON);
        assert_relative_eq!(rotated[1].y, 1.0, epsilon = COORD_EPSILON);
    }

    #[test]
    fn rotation_cancels_indicative_angle() {
        let points = resample(&zigzag(), 64);
        let rotated = rotate_by(&points, -indicative_angle(&points));
        assert_relative_eq!(indicative_angle(&rotated), 0.0, epsilon = COORD_EPSILON);
    }

    #[test]
    fn scale_to_fills_square() {
        let scaled = scale_to(&zigzag(), 250.0);
        let bb = bounding_box(&scaled);
        assert_relative_eq!(bb.width, 250.0, epsilon = COORD_EPSILON);
        assert_relative_eq!(bb.height, 250.0, epsilon = COORD_EPSILON);
    }

    #[test]
    fn scale_to_does_not_fix_flat_strokes() {
        let flat = [Point::new(1.0, 5.0), Point::new(3.0, 5.0)];
        let scaled = scale_to(&flat, 250.0);
        assert!(scaled.iter().all(|p| p.x.is_finite()));
        assert!(scaled.iter().all(|p| !p.y.is_finite()));
    }

    #[test]
    fn translate_to_moves_centroid() {
        let target = Point::new(-4.0, 9.5);
        let moved = translate_to(&zigzag(), &target);
        let c = centroid(&moved);
        assert_relative_eq!(c.x, target.x, epsilon = COORD_EPSILON);
        assert_relative_eq!(c.y, target.y, epsilon = COORD_EPSILON);
    }

    #[test]
    fn normalized_strokes_are_centred_in_square() {
        let config = RecognizerConfig::default();
        for normalized in [
            normalize_template(&zigzag(), &config),
            normalize_candidate(&zigzag(), &config),
        ] {
            assert_eq!(normalized.len(), config.point_count());
            let c = centroid(&normalized);
            assert_relative_eq!(c.x, 0.0, epsilon = COORD_EPSILON);
            assert_relative_eq!(c.y, 0.0, epsilon = COORD_EPSILON);
            let bb = bounding_box(&normalized);
            assert_relative_eq!(bb.width, config.square_size(), epsilon = COORD_EPSILON);
            assert_relative_eq!(bb.height, config.square_size(), epsilon = COORD_EPSILON);
        }
    }

    #[test]
    fn straight_strokes_are_nearly_flat() {
        let config = RecognizerConfig::default();
        let diagonal: Vec<Point> = (0..=20)
            .map(|i| Point::new(i as Real * 10.0, i as Real * 10.0))
            .collect();
        assert!(is_nearly_flat(&canonical_bounds(&diagonal, &config)));
        assert!(!is_nearly_flat(&canonical_bounds(&zigzag(), &config)));
        assert!(is_nearly_flat(&Rectangle::new(0.0, 0.0, 10.0, 0.0)));
    }

    #[test]
    fn candidate_bounds_is_the_box_that_gets_scaled() {
        let config = RecognizerConfig::default();
        let bounds = candidate_bounds(&zigzag(), &config);
        assert!(!bounds.is_degenerate());
        let oriented = orient_candidate(&zigzag(), &config);
        let expected = scale_to(&oriented, config.square_size());
        let normalized = normalize_candidate(&zigzag(), &config);
        let offset = centroid(&expected);
        for (p, q) in normalized.iter().zip(&expected) {
            assert_relative_eq!(p.x, q.x - offset.x, epsilon = COORD_EPSILON);
            assert_relative_eq!(p.y, q.y - offset.y, epsilon = COORD_EPSILON);
        }
        assert_relative_eq!(bounds, bounding_box(&oriented));

        let tap = [Point::new(91.0, 185.0), Point::new(93.0, 185.0)];
        let flat = candidate_bounds(&tap, &config);
        assert_eq!(flat.height, 0.0);
        assert!(flat.is_degenerate());
    }
}
