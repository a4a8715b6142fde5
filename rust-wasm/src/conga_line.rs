use nalgebra::Vector3;
use wasm_bindgen::prelude::*;
use symmetry_explorer::shapes::{CongaLine, Selection};
use symmetry_explorer::symmetries::Motion;

use crate::common::{column_major, PerformedMotionData};
use crate::shape::WasmShape;
use crate::utils::to_js_error;

// ======================== CONGA LINE WRAPPER ========================

/// WASM wrapper for the running composition of motions on one shape
#[wasm_bindgen]
pub struct WasmCongaLine {
    inner: CongaLine,
}

#[wasm_bindgen]
impl WasmCongaLine {
    #[wasm_bindgen(constructor)]
    pub fn new(shape: &WasmShape) -> WasmCongaLine {
        WasmCongaLine {
            inner: CongaLine::new(shape.inner.clone()),
        }
    }

    /// Rotate by `degrees` about the axis `(x, y, z)`
    #[wasm_bindgen]
    pub fn perform_rotation(&mut self, x: f64, y: f64, z: f64, degrees: i32) -> Result<JsValue, JsValue> {
        let selection = Selection::RotationIndicator {
            axis: Vector3::new(x, y, z),
        };
        self.perform_selection(&selection, Some(degrees))
    }

    /// Reflect across the plane with normal `(x, y, z)`
    #[wasm_bindgen]
    pub fn perform_reflection(&mut self, x: f64, y: f64, z: f64) -> Result<JsValue, JsValue> {
        let selection = Selection::ReflectionIndicator {
            normal: Vector3::new(x, y, z),
        };
        self.perform_selection(&selection, None)
    }

    /// Perform a motion given directly as a vertex permutation
    #[wasm_bindgen]
    pub fn perform_permutation(&mut self, permutation: &[u32]) -> Result<JsValue, JsValue> {
        let motion = Motion::new(permutation.iter().map(|&i| i as usize).collect())
            .map_err(to_js_error)?;
        let performed = self.inner.perform(&motion).map_err(to_js_error)?;
        serialize(PerformedMotionData::new(performed, motion.permutation()))
    }

    /// Accumulated transform, 16 column-major numbers
    #[wasm_bindgen]
    pub fn current_matrix(&self) -> Result<Vec<f64>, JsValue> {
        let matrix = self.inner.current_matrix().map_err(to_js_error)?;
        Ok(column_major(&matrix))
    }

    /// Accumulated vertex permutation
    #[wasm_bindgen]
    pub fn current_permutation(&self) -> Vec<u32> {
        self.inner
            .current()
            .permutation()
            .iter()
            .map(|&i| i as u32)
            .collect()
    }

    /// Number of transformed copies, including the untouched original
    #[wasm_bindgen]
    pub fn copy_count(&self) -> usize {
        self.inner.steps().len() + 1
    }

    /// Drop the last step; returns whether there was one
    #[wasm_bindgen]
    pub fn undo(&mut self) -> Result<bool, JsValue> {
        Ok(self.inner.undo().map_err(to_js_error)?.is_some())
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

impl WasmCongaLine {
    fn perform_selection(&mut self, selection: &Selection, degrees: Option<i32>) -> Result<JsValue, JsValue> {
        let performed = self
            .inner
            .perform_selection(selection, degrees)
            .map_err(to_js_error)?;
        let permutation = self
            .inner
            .steps()
            .last()
            .map(|motion| motion.permutation().to_vec())
            .unwrap_or_default();
        serialize(PerformedMotionData::new(performed, &permutation))
    }
}

fn serialize(data: PerformedMotionData) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&data)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize motion: {}", e)))
}
