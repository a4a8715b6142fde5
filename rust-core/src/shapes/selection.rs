use nalgebra::{Matrix3, Matrix4, Rotation3, Unit, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::TOLERANCE;
use crate::error::SymmetryError;
use crate::shapes::symmetric_shape::SymmetricShape;
use crate::symmetries::motion::Motion;
use crate::Result;

/// A symmetry indicator the user has picked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selection {
    RotationIndicator { axis: Vector3<f64> },
    ReflectionIndicator { normal: Vector3<f64> },
}

fn unit_direction(v: &Vector3<f64>, what: &str) -> Result<Unit<Vector3<f64>>> {
    Unit::try_new(*v, TOLERANCE)
        .ok_or_else(|| SymmetryError::InvalidTransform(format!("{} must be a nonzero vector", what)))
}

/// Householder reflection `I - 2 n nᵀ` across the plane with normal `normal`
pub fn reflection_matrix(normal: &Vector3<f64>) -> Result<Matrix4<f64>> {
    let n = unit_direction(normal, "reflection normal")?.into_inner();
    Ok((Matrix3::identity() - 2.0 * n * n.transpose()).to_homogeneous())
}

/// Right-handed rotation by `degrees` about `axis`
pub fn rotation_matrix(axis: &Vector3<f64>, degrees: f64) -> Result<Matrix4<f64>> {
    let axis = unit_direction(axis, "rotation axis")?;
    Ok(Rotation3::from_axis_angle(&axis, degrees.to_radians()).to_homogeneous())
}

impl Selection {
    /// One indicator per rotation axis and per mirror plane of `shape`
    pub fn indicators(shape: &SymmetricShape) -> Vec<Selection> {
        shape
            .axes()
            .iter()
            .map(|axis| Selection::RotationIndicator { axis: *axis })
            .chain(
                shape
                    .reflective_normals()
                    .iter()
                    .map(|normal| Selection::ReflectionIndicator { normal: *normal }),
            )
            .collect()
    }

    /// Rotation amounts to offer for this indicator (none for a mirror plane)
    pub fn options(&self, shape: &SymmetricShape) -> Result<Vec<i32>> {
        match self {
            Selection::RotationIndicator { axis } => shape.rotation_options(axis),
            Selection::ReflectionIndicator { .. } => Ok(Vec::new()),
        }
    }

    /// Transform for this indicator; rotation indicators need an amount in degrees
    pub fn matrix(&self, degrees: Option<i32>) -> Result<Matrix4<f64>> {
        match self {
            Selection::RotationIndicator { axis } => {
                let degrees = degrees.ok_or_else(|| {
                    SymmetryError::InvalidTransform(
                        "a rotation indicator needs a rotation amount".to_string(),
                    )
                })?;
                rotation_matrix(axis, degrees as f64)
            }
            Selection::ReflectionIndicator { normal } => reflection_matrix(normal),
        }
    }

    /// The motion of `shape` this indicator (and amount) stands for
    pub fn motion(&self, shape: &SymmetricShape, degrees: Option<i32>) -> Result<Motion> {
        shape.motion_from_matrix(&self.matrix(degrees)?)
    }
}
