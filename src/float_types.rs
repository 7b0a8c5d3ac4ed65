// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized tolerance used when comparing normalized coordinates.
/// Defaults depend on precision (`f32` vs `f64`), but can be overridden:
///  1) **Build-time**: set env var `UNISTROKE_TOLERANCE` (e.g. `UNISTROKE_TOLERANCE=1e-6 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-3
    }
    #[cfg(feature = "f64")]
    {
        1e-6
    }
}

/// Returns the current tolerance.
/// If not set yet, it tries `UNISTROKE_TOLERANCE` (parsed as the active `Real`) and
/// falls back to a sensible default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("UNISTROKE_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `unistroke::float_types::set_tolerance(1e-6);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// Absolute slack when comparing coordinates of normalized strokes, whose
/// magnitudes reach a few hundred units.
#[cfg(feature = "f32")]
pub const COORD_EPSILON: Real = 1e-2;
/// Absolute slack when comparing coordinates of normalized strokes, whose
/// magnitudes reach a few hundred units.
#[cfg(feature = "f64")]
pub const COORD_EPSILON: Real = 1e-9;

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 4
/// π/4, the default half-width of the rotation search window
#[cfg(feature = "f32")]
pub const FRAC_PI_4: Real = core::f32::consts::FRAC_PI_4;
/// π/4, the default half-width of the rotation search window
#[cfg(feature = "f64")]
pub const FRAC_PI_4: Real = core::f64::consts::FRAC_PI_4;

// Sqrt 2
/// √2
#[cfg(feature = "f32")]
pub const SQRT_2: Real = core::f32::consts::SQRT_2;
/// √2
#[cfg(feature = "f64")]
pub const SQRT_2: Real = core::f64::consts::SQRT_2;

/// Golden ratio conjugate, `0.5 * (√5 - 1)`, the interior-point offset of a
/// golden-section search.
#[cfg(feature = "f32")]
pub const PHI: Real = 0.618_034;
/// Golden ratio conjugate, `0.5 * (√5 - 1)`, the interior-point offset of a
/// golden-section search.
#[cfg(feature = "f64")]
pub const PHI: Real = 0.618_033_988_749_894_9;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Angle conversion
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
/// One degree in radians.
pub const DEG: Real = PI / 180.0;
/// One radian in degrees.
pub const RAD: Real = 180.0 / PI;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_epsilon_covers_rounding_at_square_scale() {
        // 64 roundings of a 250-unit coordinate must stay within the slack.
        assert!(COORD_EPSILON > 64.0 * 250.0 * Real::EPSILON);
        assert!(COORD_EPSILON < 0.1);
    }

    #[test]
    fn tolerance_is_positive() {
        assert!(tolerance() >= Real::EPSILON);
    }
}
