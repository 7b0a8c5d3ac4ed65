//! Points, rectangles and the measurements the pipeline is built from.

use crate::float_types::Real;
use approx::{AbsDiffEq, RelativeEq};
use nalgebra::Point2;

/// A stroke sample. Equality and arithmetic are by value.
pub type Point = Point2<Real>;

/// Axis-aligned bounding box of a point sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: Real,
    pub y: Real,
    pub width: Real,
    pub height: Real,
}

impl Rectangle {
    pub const fn new(x: Real, y: Real, width: Real, height: Real) -> Self {
        Rectangle { x, y, width, height }
    }

    /// Minimum corner.
    pub fn min(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Maximum corner.
    pub fn max(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + 0.5 * self.width, self.y + 0.5 * self.height)
    }

    /// True when either side is zero (or not a number), i.e. the box cannot be
    /// scaled onto a square.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

impl AbsDiffEq for Rectangle {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        Real::abs_diff_eq(&self.x, &other.x, epsilon)
            && Real::abs_diff_eq(&self.y, &other.y, epsilon)
            && Real::abs_diff_eq(&self.width, &other.width, epsilon)
            && Real::abs_diff_eq(&self.height, &other.height, epsilon)
    }
}

impl RelativeEq for Rectangle {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        Real::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && Real::relative_eq(&self.y, &other.y, epsilon, max_relative)
            && Real::relative_eq(&self.width, &other.width, epsilon, max_relative)
            && Real::relative_eq(&self.height, &other.height, epsilon, max_relative)
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(p: &Point, q: &Point) -> Real {
    nalgebra::distance(p, q)
}

/// Sum of the segment lengths between consecutive points.
pub fn path_length(points: &[Point]) -> Real {
    points.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}

/// Arithmetic mean of all points. The origin for an empty slice.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::origin();
    }
    let sum = points
        .iter()
        .fold(nalgebra::Vector2::zeros(), |acc, p| acc + p.coords);
    Point::from(sum / points.len() as Real)
}

/// Smallest axis-aligned rectangle enclosing every point, the first one included.
///
/// An empty slice yields a rectangle with infinite origin and negative
/// infinite extent, which [`Rectangle::is_degenerate`] reports as degenerate.
pub fn bounding_box(points: &[Point]) -> Rectangle {
    let mut min_x = Real::INFINITY;
    let mut min_y = Real::INFINITY;
    let mut max_x = Real::NEG_INFINITY;
    let mut max_y = Real::NEG_INFINITY;

    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    Rectangle::new(min_x, min_y, max_x - min_x, max_y - min_y)
}
