//! Single-stroke gesture recognition with the **$1 unistroke** algorithm.
//!
//! A stroke is the ordered list of pointer positions between a pointer-down and
//! the matching pointer-up. The [`Recognizer`] compares it against a library of
//! named [`Template`]s and reports the best match with a score in `(-∞, 1]`.
//!
//! Matching is invariant to scale and translation, and to rotation within a
//! bounded window (±45° by default):
//!
//! 1. [resample](pipeline::resample) to a fixed number of evenly spaced points,
//! 2. [rotate](pipeline::rotate_by) so the first point lies along the x axis from the centroid,
//! 3. [scale](pipeline::scale_to) non-uniformly onto a reference square,
//! 4. [translate](pipeline::translate_to) the centroid to the origin,
//! 5. search the rotation window with a [golden-section search](matcher::distance_at_best_angle)
//!    for the smallest mean point-to-point distance to each template.
//!
//! ```
//! use unistroke::{DefaultTemplate, Recognizer};
//!
//! let recognizer = Recognizer::default();
//! let result = recognizer.recognize(&DefaultTemplate::Circle.points());
//! assert_eq!(result.name, "CIRCLE");
//! assert!(result.score > 0.9);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to match templates concurrently
//! - **wasm**: JavaScript bindings through `wasm-bindgen`

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod config;
pub mod errors;
pub mod float_types;
pub mod geometry;
pub mod matcher;
pub mod pipeline;
pub mod recognizer;
pub mod shapes;
pub mod template;
pub mod traits;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use config::RecognizerConfig;
pub use errors::{ConfigError, RecognitionError};
pub use geometry::{Point, Rectangle};
pub use recognizer::{Match, Recognizer};
pub use shapes::DefaultTemplate;
pub use template::Template;
pub use traits::StrokeOps;
