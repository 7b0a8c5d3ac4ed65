//! Tuning parameters shared by the normalization pipeline and the matcher.

use crate::errors::ConfigError;
use crate::float_types::{DEG, FRAC_PI_4, Real, SQRT_2};
use crate::geometry::Point;

/// Number of points every stroke is resampled to.
pub const DEFAULT_POINT_COUNT: usize = 64;
/// Side of the reference square strokes are scaled onto.
pub const DEFAULT_SQUARE_SIZE: Real = 250.0;
/// Half-width of the rotation search window, in radians (45°).
pub const DEFAULT_ANGLE_RANGE: Real = FRAC_PI_4;
/// Rotation search stops once the bracket is this narrow, in radians (2°).
pub const DEFAULT_ANGLE_PRECISION: Real = 2.0 * DEG;

/// Immutable recognizer configuration.
///
/// Every [`Recognizer`](crate::Recognizer) owns one, so independently tuned
/// recognizers can coexist. Templates must be normalized with the same
/// configuration as the candidates they are compared to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecognizerConfig {
    point_count: usize,
    square_size: Real,
    angle_range: Real,
    angle_precision: Real,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        RecognizerConfig {
            point_count: DEFAULT_POINT_COUNT,
            square_size: DEFAULT_SQUARE_SIZE,
            angle_range: DEFAULT_ANGLE_RANGE,
            angle_precision: DEFAULT_ANGLE_PRECISION,
        }
    }
}

impl RecognizerConfig {
    /// Validated constructor. Angles are in radians.
    pub fn new(
        point_count: usize,
        square_size: Real,
        angle_range: Real,
        angle_precision: Real,
    ) -> Result<Self, ConfigError> {
        Self::default()
            .with_point_count(point_count)?
            .with_square_size(square_size)?
            .with_angle_range(angle_range)?
            .with_angle_precision(angle_precision)
    }

    pub fn with_point_count(mut self, point_count: usize) -> Result<Self, ConfigError> {
        if point_count < 2 {
            return Err(ConfigError::TooFewPoints(point_count));
        }
        self.point_count = point_count;
        Ok(self)
    }

    pub fn with_square_size(mut self, square_size: Real) -> Result<Self, ConfigError> {
        if !(square_size.is_finite() && square_size > 0.0) {
            return Err(ConfigError::NonPositiveSquareSize(square_size));
        }
        self.square_size = square_size;
        Ok(self)
    }

    /// Half-width of the rotation window in radians; the search covers `[-range, range]`.
    pub fn with_angle_range(mut self, angle_range: Real) -> Result<Self, ConfigError> {
        if !(angle_range.is_finite() && angle_range >= 0.0) {
            return Err(ConfigError::InvalidAngleRange(angle_range));
        }
        self.angle_range = angle_range;
        Ok(self)
    }

    /// Search precision in radians.
    pub fn with_angle_precision(mut self, angle_precision: Real) -> Result<Self, ConfigError> {
        if !(angle_precision.is_finite() && angle_precision > 0.0) {
            return Err(ConfigError::InvalidAnglePrecision(angle_precision));
        }
        self.angle_precision = angle_precision;
        Ok(self)
    }

    pub const fn point_count(&self) -> usize {
        self.point_count
    }

    pub const fn square_size(&self) -> Real {
        self.square_size
    }

    pub const fn angle_range(&self) -> Real {
        self.angle_range
    }

    pub const fn angle_precision(&self) -> Real {
        self.angle_precision
    }

    /// Half the diagonal of the reference square: the distance that maps to a score of zero.
    pub fn half_diagonal(&self) -> Real {
        0.5 * SQRT_2 * self.square_size
    }

    /// Where normalized strokes are centred.
    pub fn origin(&self) -> Point {
        Point::origin()
    }
}
