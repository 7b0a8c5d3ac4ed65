//! Recognition and configuration errors

use crate::float_types::Real;
use std::fmt::Display;

/// All the reasons a stroke can fail to produce a match
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecognitionError {
    /// (TooFewPoints) A stroke needs at least two points
    TooFewPoints(usize),
    /// (ZeroLengthPath) Every point of the stroke coincides
    ZeroLengthPath,
    /// (DegenerateBoundingBox) The stroke has zero width or height after rotation,
    /// so scaling it produced non-finite coordinates
    DegenerateBoundingBox { width: Real, height: Real },
    /// (NoTemplates) The recognizer holds no templates to compare against
    NoTemplates,
    /// (NoMatch) No template produced a finite distance
    NoMatch,
}

impl Display for RecognitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecognitionError::TooFewPoints(count) => write!(f, "(TooFewPoints) A stroke needs at least 2 points, got {}", count),
            RecognitionError::ZeroLengthPath => write!(f, "(ZeroLengthPath) All points of the stroke coincide"),
            RecognitionError::DegenerateBoundingBox { width, height } => write!(f, "(DegenerateBoundingBox) Cannot scale a {}x{} bounding box to a square", width, height),
            RecognitionError::NoTemplates => write!(f, "(NoTemplates) The recognizer has no templates"),
            RecognitionError::NoMatch => write!(f, "(NoMatch) No template produced a finite distance"),
        }
    }
}

/// Invalid [`RecognizerConfig`](crate::config::RecognizerConfig) values
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// (TooFewPoints) Resampling needs at least two points
    TooFewPoints(usize),
    /// (NonPositiveSquareSize) The reference square must have a positive, finite side
    NonPositiveSquareSize(Real),
    /// (InvalidAngleRange) The rotation window half-width must be finite and non-negative
    InvalidAngleRange(Real),
    /// (InvalidAnglePrecision) The search precision must be positive and finite
    InvalidAnglePrecision(Real),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::TooFewPoints(count) => write!(f, "(TooFewPoints) Resampling needs at least 2 points, got {}", count),
            ConfigError::NonPositiveSquareSize(size) => write!(f, "(NonPositiveSquareSize) Square size must be positive, got {}", size),
            ConfigError::InvalidAngleRange(range) => write!(f, "(InvalidAngleRange) Angle range must be finite and >= 0, got {}", range),
            ConfigError::InvalidAnglePrecision(precision) => write!(f, "(InvalidAnglePrecision) Angle precision must be finite and > 0, got {}", precision),
        }
    }
}
