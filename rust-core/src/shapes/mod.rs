// Shapes module: Contains symmetric shapes, the built-in shape library and user interaction state
// This module wires vertex sets to their symmetry groups and turns selections into motions

// ======================== MODULE DECLARATIONS ========================
pub mod conga_line;
pub mod construction;
pub mod selection;
pub mod symmetric_shape;


// ======================== SHAPES ========================
pub use symmetric_shape::{
    Generator,      // enum - Permutation(Vec<usize>) or Matrix(Matrix4<f64>)
    ShapeParams,    // struct - name, vertices, generators, optional vertex names and group cap
    ShapeSummary,   // struct - serializable overview of a shape and its symmetries
    ShapeVertices,  // enum - Planar (lifted to y = 0) or Spatial vertex input
    SymmetricShape, // struct - immutable shape owning its symmetry group
    default_vertex_name, // fn(index: usize) -> String - A, B, ..., Z, V26, ...
};
// SymmetricShape impl methods:
//   new(params: ShapeParams) -> Result<Self>                       - converts generators and closes the group
//   group(&self) -> &SymmetryGroup                                 - full symmetry group
//   axes(&self) -> &[Vector3<f64>]                                 - rotation axes, one per line
//   reflective_normals(&self) -> &[Vector3<f64>]                   - mirror plane normals
//   rotation_options(&self, axis: &Vector3<f64>) -> Result<Vec<i32>> - rotation amounts in degrees
//   motion_from_matrix(&self, matrix: &Matrix4<f64>) -> Result<Motion> - induced permutation
//   matrix_of(&self, motion: &Motion) -> Result<Matrix4<f64>>       - transform of a motion
//   summary(&self) -> ShapeSummary                                 - serializable overview

// ======================== SHAPE LIBRARY ========================
pub use construction::{
    SHAPE_NAMES,              // const - library keys in display order
    all_shapes,               // fn() -> Result<Vec<SymmetricShape>> - builds every library shape
    fatten_polygon,           // fn(vertices: &[Vector2<f64>], thickness: f64) -> Vec<Vector3<f64>> - extrude along y
    generate_regular_polygon, // fn(n: usize, circumradius: f64, rotation: f64) -> Vec<Vector2<f64>> - regular polygon
    rotation_about,           // fn(axis: Vector3<f64>, angle: f64) -> Matrix4<f64> - homogeneous rotation
    scaling,                  // fn(x: f64, y: f64, z: f64) -> Matrix4<f64> - homogeneous per-axis scale
    shape_by_name,            // fn(key: &str) -> Result<SymmetricShape> - library lookup
    shape_params_by_name,     // fn(key: &str) -> Result<ShapeParams> - library definition lookup
};

// ======================== INTERACTION ========================
pub use selection::{
    Selection,         // enum - RotationIndicator { axis } or ReflectionIndicator { normal }
    reflection_matrix, // fn(normal: &Vector3<f64>) -> Result<Matrix4<f64>> - Householder reflection
    rotation_matrix,   // fn(axis: &Vector3<f64>, degrees: f64) -> Result<Matrix4<f64>> - axis-angle rotation
};

pub use conga_line::{
    CongaLine,       // struct - running composition of performed motions
    MotionPlan,      // enum - Stay, Reflect, Rotate, Rotoreflect
    PerformedMotion, // struct - plan plus accumulated transform before and after
};
