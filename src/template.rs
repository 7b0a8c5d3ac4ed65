use crate::config::RecognizerConfig;
use crate::geometry::Point;
use crate::pipeline::normalize_template;
use crate::shapes::DefaultTemplate;

/// A named reference stroke.
///
/// The raw points are normalized once, at construction, and never change
/// afterwards; cloning a template is the only way to share it between
/// recognizers.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    name: String,
    raw_points: Vec<Point>,
    normalized_points: Vec<Point>,
}

impl Template {
    /// Build a template, running the normalization pipeline with `config`.
    pub fn new(name: impl Into<String>, points: Vec<Point>, config: &RecognizerConfig) -> Self {
        let normalized_points = normalize_template(&points, config);
        Template {
            name: name.into(),
            raw_points: points,
            normalized_points,
        }
    }

    /// Build one of the built-in shapes.
    pub fn from_default(shape: DefaultTemplate, config: &RecognizerConfig) -> Self {
        Self::new(shape.name(), shape.points(), config)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The points as given, kept for inspection only.
    pub fn raw_points(&self) -> &[Point] {
        &self.raw_points
    }

    /// The cached output of the normalization pipeline.
    pub fn normalized_points(&self) -> &[Point] {
        &self.normalized_points
    }

    /// Whether normalization produced a full-length, finite point set.
    ///
    /// Templates built from degenerate strokes are still accepted, they just
    /// never produce a finite distance.
    pub fn is_comparable(&self, config: &RecognizerConfig) -> bool {
        self.normalized_points.len() == config.point_count()
            && self
                .normalized_points
                .iter()
                .all(|p| p.x.is_finite() && p.y.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::COORD_EPSILON;
    use crate::geometry::{bounding_box, centroid};
    use approx::assert_relative_eq;

    #[test]
    fn square_is_resampled_to_point_count() {
        let config = RecognizerConfig::default();
        let raw = vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
            Point::new(0.0, 0.0),
        ];
        let template = Template::new("SQUARE", raw.clone(), &config);
        assert_eq!(template.name(), "SQUARE");
        assert_eq!(template.raw_points(), raw.as_slice());
        assert_eq!(template.normalized_points().len(), 64);
        assert!(template.is_comparable(&config));
    }

    #[test]
    fn default_templates_normalize_into_square() {
        let config = RecognizerConfig::default();
        for shape in DefaultTemplate::ALL {
            let template = Template::from_default(shape, &config);
            assert_eq!(template.name(), shape.name());
            assert!(template.is_comparable(&config), "{shape}");

            let c = centroid(template.normalized_points());
            assert_relative_eq!(c.x, 0.0, epsilon = COORD_EPSILON);
            assert_relative_eq!(c.y, 0.0, epsilon = COORD_EPSILON);
            let bb = bounding_box(template.normalized_points());
            assert_relative_eq!(bb.width, 250.0, epsilon = COORD_EPSILON);
            assert_relative_eq!(bb.height, 250.0, epsilon = COORD_EPSILON);
        }
    }

    #[test]
    fn degenerate_strokes_are_kept_but_not_comparable() {
        let config = RecognizerConfig::default();
        let flat = Template::new("FLAT", vec![Point::new(0.0, 5.0), Point::new(9.0, 5.0)], &config);
        assert!(!flat.is_comparable(&config));
        let dot = Template::new("DOT", vec![Point::new(1.0, 1.0), Point::new(1.0, 1.0)], &config);
        assert!(!dot.is_comparable(&config));
    }
}
