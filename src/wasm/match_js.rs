use crate::recognizer::Match;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct MatchJs {
    pub(crate) inner: Match,
}

#[wasm_bindgen]
impl MatchJs {
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> f64 {
        self.inner.score as f64
    }

    #[wasm_bindgen(js_name = isMatch)]
    pub fn is_match(&self) -> bool {
        self.inner.is_match()
    }
}

// Rust-only conversions (not visible to JS)
impl From<Match> for MatchJs {
    fn from(m: Match) -> Self {
        MatchJs { inner: m }
    }
}
