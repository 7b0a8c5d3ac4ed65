use crate::recognizer::Recognizer;
use crate::wasm::{match_js::MatchJs, points_from_flat};
use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct RecognizerJs {
    pub(crate) inner: Recognizer,
}

#[wasm_bindgen]
impl RecognizerJs {
    /// A recognizer loaded with the sixteen default shapes.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Recognizer::default(),
        }
    }

    #[wasm_bindgen(js_name = templateCount)]
    pub fn template_count(&self) -> u32 {
        self.inner.len() as u32
    }

    #[wasm_bindgen(js_name = addTemplate)]
    pub fn add_template(&mut self, name: &str, coords: Float64Array) -> Result<(), JsValue> {
        let points = points_from_flat(&coords.to_vec())?;
        self.inner.add_template(name, points);
        Ok(())
    }

    /// Recognize a stroke. A failed match has an empty name and a score of `-Infinity`.
    #[wasm_bindgen(js_name = recognize)]
    pub fn recognize(&self, coords: Float64Array) -> Result<MatchJs, JsValue> {
        let points = points_from_flat(&coords.to_vec())?;
        Ok(self.inner.recognize(&points).into())
    }

    /// Recognize a stroke, throwing with the reason when nothing matches.
    #[wasm_bindgen(js_name = classify)]
    pub fn classify(&self, coords: Float64Array) -> Result<MatchJs, JsValue> {
        let points = points_from_flat(&coords.to_vec())?;
        self.inner
            .classify(&points)
            .map(MatchJs::from)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The `limit` best matches, best first.
    #[wasm_bindgen(js_name = rank)]
    pub fn rank(&self, coords: Float64Array, limit: u32) -> Result<Vec<MatchJs>, JsValue> {
        let points = points_from_flat(&coords.to_vec())?;
        Ok(self
            .inner
            .rank(&points, limit as usize)
            .into_iter()
            .map(MatchJs::from)
            .collect())
    }
}

impl Default for RecognizerJs {
    fn default() -> Self {
        Self::new()
    }
}
