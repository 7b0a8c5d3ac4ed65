//! Invariance sweeps over the built-in shapes.

mod support;

use support::*;
use unistroke::float_types::{COORD_EPSILON, Real};
use unistroke::pipeline::{normalize_candidate, resample};
use unistroke::{DefaultTemplate, Point, Recognizer, RecognizerConfig, StrokeOps};

fn assert_same_outcome(
    recognizer: &Recognizer,
    shape: DefaultTemplate,
    transformed: &[Point],
    label: &str,
) {
    let reference = recognizer.recognize(&shape.points());
    let result = recognizer.recognize(transformed);
    assert_eq!(result.name, reference.name, "{shape} {label}");
    assert!(
        approx_eq(result.score, reference.score, INVARIANCE_TOLERANCE),
        "{shape} {label}: {} vs {}",
        result.score,
        reference.score
    );
}

#[test]
fn uniform_scaling_does_not_change_the_outcome() {
    let recognizer = Recognizer::default();
    for shape in DefaultTemplate::ALL {
        let points = shape.points();
        for k in [0.1, 0.5, 2.0, 3.0, 10.0] {
            assert_same_outcome(&recognizer, shape, &points.scale(k), &format!("scaled by {k}"));
        }
    }
}

#[test]
fn translation_does_not_change_the_outcome() {
    let recognizer = Recognizer::default();
    for shape in DefaultTemplate::ALL {
        let points = shape.points();
        for (dx, dy) in [(500.0, 500.0), (-1000.0, 250.0), (0.5, -0.25), (12345.0, -6789.0)] {
            assert_same_outcome(
                &recognizer,
                shape,
                &points.translate(dx, dy),
                &format!("moved by ({dx}, {dy})"),
            );
        }
    }
}

#[test]
fn rotation_does_not_change_the_outcome() {
    let recognizer = Recognizer::default();
    for shape in DefaultTemplate::ALL {
        let points = shape.points();
        for degrees in [-45.0, -30.0, -5.0, 5.0, 30.0, 45.0, 90.0, 180.0] {
            assert_same_outcome(
                &recognizer,
                shape,
                &points.rotate(degrees),
                &format!("rotated by {degrees}°"),
            );
        }
    }
}

#[test]
fn scores_never_exceed_one() {
    let recognizer = Recognizer::default();
    for shape in DefaultTemplate::ALL {
        for m in recognizer.rank(&shape.points(), 16) {
            assert!(m.score <= 1.0, "{shape} vs {}: {}", m.name, m.score);
        }
    }
}

#[test]
fn recognition_is_deterministic() {
    let recognizer = Recognizer::default();
    let clone = recognizer.clone();
    for shape in DefaultTemplate::ALL {
        let points = shape.points();
        assert_eq!(recognizer.recognize(&points), clone.recognize(&points));
        assert_eq!(recognizer.rank(&points, 3), clone.rank(&points, 3));
    }
}

#[test]
fn normalized_candidates_have_the_configured_length() {
    for n in [16, 32, 64, 128] {
        let config = RecognizerConfig::default().with_point_count(n).unwrap();
        for shape in DefaultTemplate::ALL {
            let points = shape.points();
            assert_eq!(resample(&points, n).len(), n, "{shape} resampled to {n}");
            let normalized = normalize_candidate(&points, &config);
            assert_eq!(normalized.len(), n);
            let centre = normalized.centroid();
            assert!(approx_eq(centre.x, 0.0, COORD_EPSILON));
            assert!(approx_eq(centre.y, 0.0, COORD_EPSILON));
            let bb = normalized.bounding_box();
            let size: Real = config.square_size();
            assert!(approx_eq(bb.width, size, COORD_EPSILON));
            assert!(approx_eq(bb.height, size, COORD_EPSILON));
        }
    }
}
