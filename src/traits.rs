use crate::float_types::{DEG, Real};
use crate::geometry::{self, Point, Rectangle};
use crate::pipeline;
use nalgebra::Vector2;

/// Measurements and rigid/affine transforms on a stroke.
///
/// Implemented for point slices, so it works on `Vec<Point>`, arrays and
/// template point sets alike. Every transform returns a new `Vec<Point>`.
pub trait StrokeOps {
    fn points(&self) -> &[Point];

    fn centroid(&self) -> Point {
        geometry::centroid(self.points())
    }

    fn bounding_box(&self) -> Rectangle {
        geometry::bounding_box(self.points())
    }

    fn path_length(&self) -> Real {
        geometry::path_length(self.points())
    }

    /// Returns a new stroke translated by vector.
    fn translate_vector(&self, vector: Vector2<Real>) -> Vec<Point> {
        self.points().iter().map(|p| p + vector).collect()
    }

    /// Returns a new stroke translated by `dx` and `dy`.
    fn translate(&self, dx: Real, dy: Real) -> Vec<Point> {
        self.translate_vector(Vector2::new(dx, dy))
    }

    /// Scales every coordinate by `factor` about the origin.
    fn scale(&self, factor: Real) -> Vec<Point> {
        self.scale_xy(factor, factor)
    }

    /// Scales x and y independently about the origin.
    fn scale_xy(&self, sx: Real, sy: Real) -> Vec<Point> {
        self.points()
            .iter()
            .map(|p| Point::new(p.x * sx, p.y * sy))
            .collect()
    }

    /// Rotates the stroke about its centroid by `degrees`.
    fn rotate(&self, degrees: Real) -> Vec<Point> {
        pipeline::rotate_by(self.points(), degrees * DEG)
    }

    /// Returns the stroke reversed, as if drawn from the other end.
    fn reversed(&self) -> Vec<Point> {
        self.points().iter().rev().copied().collect()
    }
}

impl StrokeOps for [Point] {
    fn points(&self) -> &[Point] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::COORD_EPSILON;
    use approx::assert_relative_eq;

    #[test]
    fn transforms_work_on_vecs_and_slices() {
        let stroke = vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(2.0, 4.0)];
        assert_eq!(stroke.translate(1.0, -1.0)[2], Point::new(3.0, 3.0));
        assert_eq!(stroke.scale(2.0)[2], Point::new(4.0, 8.0));
        assert_eq!(stroke.scale_xy(1.0, 0.5)[2], Point::new(2.0, 2.0));
        assert_eq!(stroke.reversed()[0], Point::new(2.0, 4.0));
        assert_relative_eq!(stroke[..2].path_length(), 2.0);
        assert_relative_eq!(stroke.bounding_box().height, 4.0);
    }

    #[test]
    fn rotate_keeps_centroid_and_length() {
        let stroke = vec![Point::new(0.0, 0.0), Point::new(3.0, 1.0), Point::new(5.0, 7.0)];
        let turned = stroke.rotate(33.0);
        assert_relative_eq!(turned.centroid().x, stroke.centroid().x, epsilon = COORD_EPSILON);
        assert_relative_eq!(turned.centroid().y, stroke.centroid().y, epsilon = COORD_EPSILON);
        assert_relative_eq!(turned.path_length(), stroke.path_length(), epsilon = COORD_EPSILON);
    }
}
