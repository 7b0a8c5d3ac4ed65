//! JavaScript bindings for browser front-ends.
//!
//! Strokes cross the boundary as flat `Float64Array`s of interleaved
//! coordinates, `[x0, y0, x1, y1, ..]`, in the order the pointer produced them.

use crate::float_types::Real;
use crate::geometry::Point;
use wasm_bindgen::prelude::*;

pub mod match_js;
pub mod recognizer_js;

fn points_from_flat(coords: &[f64]) -> Result<Vec<Point>, JsValue> {
    if coords.len() % 2 != 0 {
        return Err(JsValue::from_str(&format!(
            "Expected interleaved x,y coordinates, got an odd length of {}",
            coords.len()
        )));
    }
    Ok(coords
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0] as Real, xy[1] as Real))
        .collect())
}
