//! Symmetry group explorer library
//!
//! This library computes the full group of rotational and reflective symmetries of a
//! convex polygon or polyhedron, classifies every element geometrically and extracts the
//! axes and mirror planes a renderer needs to place its indicators.

pub mod config;
pub mod error;
pub mod interfaces;
pub mod shapes;
pub mod symmetries;

pub use error::SymmetryError;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, SymmetryError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
