//! Error types for symmetry computations
//!
//! Every failure here is deterministic: it points at broken shape data or a caller feeding
//! the engine something it cannot interpret, never at a transient condition.

use nalgebra::Vector3;
use thiserror::Error;

/// Errors raised while building shapes, closing groups or classifying transforms
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SymmetryError {
    /// A generator is not an isometry of the vertex set
    #[error("Generator at index {index} is invalid: {reason}")]
    InvalidGenerator {
        /// Position of the generator in the shape definition
        index: usize,
        /// Why the conversion or the isometry check failed
        reason: String,
    },

    /// No linearly independent vertices to reconstruct a transform from
    #[error("Vertices do not span a basis; cannot reconstruct the transform")]
    DegenerateBasis,

    /// Closure did not stabilize below the growth cap
    #[error("Symmetry group grew beyond {cap} elements")]
    GroupTooLarge { cap: usize },

    /// Not an origin-preserving orthogonal transform
    #[error("Invalid transform: {0}")]
    InvalidTransform(String),

    /// A transformed vertex matched no vertex, or more than one
    #[error("Transformed vertex {vertex} matched {candidates} vertices (expected exactly one)")]
    AmbiguousMatch { vertex: usize, candidates: usize },

    /// Two operands of different lengths
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// An index list that is not a bijection of 0..n
    #[error("Invalid permutation: {0}")]
    InvalidPermutation(String),

    /// Vertices must be centered around the origin
    #[error("Vertices are not centered at the origin (centroid {centroid:?})")]
    NotCentered { centroid: Vector3<f64> },

    /// Lookup of a shape that is not in the library
    #[error("Unknown shape: {0}")]
    UnknownShape(String),

    /// A shape needs at least one vertex
    #[error("Shape has no vertices")]
    EmptyShape,
}
