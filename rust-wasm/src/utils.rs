//! Utility functions for WASM bindings
//!
//! Helper functions for conversion between Rust and JavaScript types

use std::fmt::Display;

use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser console
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Log a message to the browser console
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}

/// Macro for logging from Rust to browser console
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::utils::log(&format_args!($($t)*).to_string())
    };
}

/// Engine errors become JavaScript strings
pub fn to_js_error(error: impl Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}
