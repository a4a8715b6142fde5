// Symmetries module: Contains the permutation algebra, group closure and transform classification
// This module turns a vertex set and a few generators into a classified symmetry group

// ======================== MODULE DECLARATIONS ========================
pub mod classification;
pub mod isometry;
pub mod motion;
pub mod symmetry_group;

// Test modules
#[cfg(test)]
mod _tests_classification;
#[cfg(test)]
mod _tests_motion;
#[cfg(test)]
mod _tests_symmetry_group;

// ======================== MOTIONS ========================
pub use motion::Motion; // struct - symmetry operation as a permutation of vertex indices
// Motion impl methods:
//   new(permutation: Vec<usize>) -> Result<Self>                  - validated permutation
//   identity(n: usize) -> Self                                     - [0, 1, ..., n-1]
//   compose(&self, other: &Motion) -> Result<Motion>               - apply other, then self
//   invert(&self) -> Motion                                        - inverse permutation
//   is_identity(&self) -> bool                                     - fixes every vertex
//   order(&self) -> usize                                          - smallest k with self^k = identity
//   to_matrix(&self, vertices: &[Vector3<f64>]) -> Result<Option<Matrix4<f64>>> - rigid transform of the motion

// ======================== ISOMETRIES ========================
pub use isometry::{
    close_enough,         // fn(d1: f64, d2: f64) -> bool - relative comparator with absolute fallback near zero
    is_isometry,          // fn(vertices: &[Vector3<f64>], motion: &Motion) -> bool - pairwise distances preserved
    matrix_from_isometry, // fn(vertices: &[Vector3<f64>], motion: &Motion) -> Result<Option<Matrix4<f64>>> - T = W V^-1
    motion_from_matrix,   // fn(vertices: &[Vector3<f64>], matrix: &Matrix4<f64>) -> Result<Motion> - induced permutation
    transform_vertex,     // fn(matrix: &Matrix4<f64>, vertex: &Vector3<f64>) -> Vector3<f64> - apply a homogeneous transform
};

// ======================== CLASSIFICATION ========================
pub use classification::{
    AxisRotation,                 // struct - rotation by theta in (-π, π] about a canonical unit axis
    PlaneReflection,              // struct - reflection across a plane with unit normal
    RotationSense,                // enum - CounterClockwise / Clockwise about the canonical axis
    TransformationClassification, // enum - Identity, Rotation, Reflection, Rotoreflection
    Equilinearity,                // enum - Parallel, Antiparallel, Distinct
    explain_matrix,               // fn(m: &Matrix4<f64>) -> Result<TransformationClassification> - classify an orthogonal transform
    closely_equilinear,           // fn(v: &Vector3<f64>, reference: &Vector3<f64>) -> Equilinearity - same line through the origin?
    canonical_direction,          // fn(v: &Vector3<f64>) -> Vector3<f64> - first significant component made positive
    radians_to_readable,          // fn(radians: f64) -> String - "120°"
};

// ======================== SYMMETRY GROUPS ========================
pub use symmetry_group::{
    ClassifiedElement,      // struct - motion, matrix and classification of one element
    SymmetryGroup,          // struct - closed set of motions of a vertex set
    compute_symmetry_group, // fn(vertices: &[Vector3<f64>], generators: &[Motion], cap: usize) -> Result<SymmetryGroup>
    degrees_about,          // fn(rotation: &AxisRotation, axis: &Vector3<f64>) -> Option<i32> - signed angle about a given direction
};
// SymmetryGroup impl methods:
//   elements(&self) -> &[Motion]                                   - all elements, identity first
//   order(&self) -> usize                                          - number of elements
//   classify_elements(&self) -> Result<Vec<ClassifiedElement>>     - per-element classification
//   axes(&self) -> Result<Vec<Vector3<f64>>>                       - deduplicated rotation axes
//   reflective_normals(&self) -> Result<Vec<Vector3<f64>>>         - mirror plane normals
//   rotation_options(&self, axis: &Vector3<f64>) -> Result<Vec<i32>> - available rotation amounts in degrees
