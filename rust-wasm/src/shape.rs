use std::sync::Arc;

use nalgebra::{Matrix4, Vector2, Vector3};
use wasm_bindgen::prelude::*;
use symmetry_explorer::shapes::{
    shape_by_name, Generator, ShapeParams, ShapeVertices, SymmetricShape,
};

use crate::common::{column_major, Point3D, ShapeData, ShapeDefinition};
use crate::utils::to_js_error;

// ======================== SHAPE WRAPPER ========================

/// WASM wrapper for a shape and its symmetry group
#[wasm_bindgen]
pub struct WasmShape {
    pub(crate) inner: Arc<SymmetricShape>,
}

fn shape_params(definition: ShapeDefinition) -> Result<ShapeParams, JsValue> {
    let vertices = match (&definition.points, &definition.vertices) {
        (Some(points), None) => ShapeVertices::Planar(points.iter().map(Vector2::from).collect()),
        (None, Some(vertices)) => {
            ShapeVertices::Spatial(vertices.iter().map(Vector3::from).collect())
        }
        _ => {
            return Err(JsValue::from_str(
                "Shape definition needs exactly one of `points` or `vertices`",
            ))
        }
    };

    let mut generators: Vec<Generator> = definition
        .permutations
        .into_iter()
        .map(Generator::Permutation)
        .collect();
    for elements in &definition.matrices {
        if elements.len() != 16 {
            return Err(JsValue::from_str("Generator matrices must have 16 elements"));
        }
        generators.push(Generator::Matrix(Matrix4::from_column_slice(elements)));
    }

    let mut params = ShapeParams::new(definition.name, vertices, generators);
    if let Some(names) = definition.vertex_names {
        params = params.with_vertex_names(names);
    }
    if let Some(cap) = definition.group_size_cap {
        params = params.with_group_size_cap(cap);
    }
    Ok(params)
}

#[wasm_bindgen]
impl WasmShape {
    /// Build a shape from the library by key
    #[wasm_bindgen(constructor)]
    pub fn new(key: &str) -> Result<WasmShape, JsValue> {
        let shape = shape_by_name(key).map_err(to_js_error)?;
        Ok(WasmShape {
            inner: Arc::new(shape),
        })
    }

    /// Build a custom shape from a JavaScript definition object
    #[wasm_bindgen]
    pub fn from_definition(definition: &JsValue) -> Result<WasmShape, JsValue> {
        let definition: ShapeDefinition = serde_wasm_bindgen::from_value(definition.clone())
            .map_err(|e| JsValue::from_str(&format!("Failed to parse shape definition: {}", e)))?;

        let shape = SymmetricShape::new(shape_params(definition)?).map_err(to_js_error)?;
        crate::console_log!("{}: {} symmetries", shape.name(), shape.group().order());
        Ok(WasmShape {
            inner: Arc::new(shape),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    /// 2 or 3
    #[wasm_bindgen(getter)]
    pub fn dimension(&self) -> usize {
        self.inner.dimension().as_usize()
    }

    #[wasm_bindgen(getter)]
    pub fn group_order(&self) -> usize {
        self.inner.group().order()
    }

    /// Get shape data as JavaScript object
    #[wasm_bindgen]
    pub fn get_data(&self) -> Result<JsValue, JsValue> {
        let points = |vectors: &[Vector3<f64>]| -> Vec<Point3D> {
            vectors.iter().map(Point3D::from).collect()
        };
        let data = ShapeData {
            name: self.inner.name().to_string(),
            dimension: self.inner.dimension().as_usize(),
            vertices: points(self.inner.vertices()),
            vertex_names: self.inner.vertex_names().to_vec(),
            group_order: self.inner.group().order(),
            axes: points(self.inner.axes()),
            reflective_normals: points(self.inner.reflective_normals()),
        };

        serde_wasm_bindgen::to_value(&data)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize shape data: {}", e)))
    }

    /// Rotation axes as a flat `[x0, y0, z0, x1, ...]` array
    #[wasm_bindgen]
    pub fn axes(&self) -> Vec<f64> {
        flatten(self.inner.axes())
    }

    /// Mirror plane normals as a flat `[x0, y0, z0, x1, ...]` array
    #[wasm_bindgen]
    pub fn reflective_normals(&self) -> Vec<f64> {
        flatten(self.inner.reflective_normals())
    }

    /// Vertex positions as a flat `[x0, y0, z0, x1, ...]` array
    #[wasm_bindgen]
    pub fn vertices(&self) -> Vec<f64> {
        flatten(self.inner.vertices())
    }

    /// Rotation amounts in whole degrees about an axis
    #[wasm_bindgen]
    pub fn rotation_options(&self, x: f64, y: f64, z: f64) -> Result<Vec<i32>, JsValue> {
        self.inner
            .rotation_options(&Vector3::new(x, y, z))
            .map_err(to_js_error)
    }

    /// Matrices of every group element, 16 column-major numbers each, in element order
    #[wasm_bindgen]
    pub fn element_matrices(&self) -> Result<Vec<f64>, JsValue> {
        let mut elements = Vec::with_capacity(16 * self.inner.group().order());
        for motion in self.inner.group().elements() {
            let matrix = self.inner.matrix_of(motion).map_err(to_js_error)?;
            elements.extend(column_major(&matrix));
        }
        Ok(elements)
    }

    /// Every element with its permutation, matrix and classification
    #[wasm_bindgen]
    pub fn classified_elements(&self) -> Result<JsValue, JsValue> {
        let elements = self
            .inner
            .group()
            .classify_elements()
            .map_err(to_js_error)?;

        serde_wasm_bindgen::to_value(&elements)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize elements: {}", e)))
    }
}

fn flatten(vectors: &[Vector3<f64>]) -> Vec<f64> {
    vectors.iter().flat_map(|v| [v.x, v.y, v.z]).collect()
}
