use wasm_bindgen::prelude::*;
use nalgebra::Matrix4;
use symmetry_explorer::shapes::SHAPE_NAMES;
use symmetry_explorer::symmetries::explain_matrix as classify;

pub mod common;
pub mod conga_line;
pub mod shape;
pub mod utils;


pub use conga_line::WasmCongaLine;
pub use shape::WasmShape;

use crate::utils::to_js_error;

// Enable console logging and panic hooks for debugging
#[wasm_bindgen(start)]
pub fn main() {
    utils::set_panic_hook();
}

/// Keys of the built-in shapes
#[wasm_bindgen]
pub fn shape_names() -> Vec<String> {
    SHAPE_NAMES.iter().map(|name| name.to_string()).collect()
}

/// Classify a transform given as 16 column-major numbers (three.js `Matrix4.elements` layout)
#[wasm_bindgen]
pub fn explain_matrix(elements: &[f64]) -> Result<JsValue, JsValue> {
    if elements.len() != 16 {
        return Err(JsValue::from_str("Matrix must have 16 elements"));
    }

    let matrix = Matrix4::from_column_slice(elements);
    let classification = classify(&matrix).map_err(to_js_error)?;

    serde_wasm_bindgen::to_value(&classification)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize classification: {}", e)))
}

/// Get the version of the library
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
