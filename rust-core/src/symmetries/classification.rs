use std::f64::consts::PI;
use std::fmt;

use log::trace;
use nalgebra::{Matrix3, Matrix4, Rotation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::TOLERANCE;
use crate::error::SymmetryError;
use crate::symmetries::isometry::close_enough;
use crate::Result;

/// Direction of a rotation about its (canonically oriented) axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationSense {
    CounterClockwise,
    Clockwise,
}

/// Rotation by `theta` radians about a unit `axis`.
///
/// `theta` lies in `(-π, π]` and the axis points into the canonical hemisphere
/// (see [`canonical_direction`]); the sign of `theta` carries the sense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisRotation {
    pub axis: Vector3<f64>,
    pub theta: f64,
    pub sense: RotationSense,
    /// The rotation on its own
    pub matrix: Matrix4<f64>,
}

/// Reflection across the plane through the origin with unit `normal`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneReflection {
    pub normal: Vector3<f64>,
    /// The reflection on its own
    pub matrix: Matrix4<f64>,
}

/// How an origin-preserving orthogonal matrix acts geometrically
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformationClassification {
    Identity,
    Rotation(AxisRotation),
    Reflection(PlaneReflection),
    /// `rotation.matrix * reflection.matrix`: reflect first, then rotate
    Rotoreflection {
        rotation: AxisRotation,
        reflection: PlaneReflection,
    },
}

impl TransformationClassification {
    /// The rotation, if this is a pure rotation
    pub fn as_rotation(&self) -> Option<&AxisRotation> {
        match self {
            TransformationClassification::Rotation(rotation) => Some(rotation),
            _ => None,
        }
    }

    /// The reflection, if this is a pure reflection
    pub fn as_reflection(&self) -> Option<&PlaneReflection> {
        match self {
            TransformationClassification::Reflection(reflection) => Some(reflection),
            _ => None,
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, TransformationClassification::Identity)
    }

    /// Number of records in the decomposition (0 for identity, 2 for a rotoreflection)
    pub fn step_count(&self) -> usize {
        match self {
            TransformationClassification::Identity => 0,
            TransformationClassification::Rotation(_)
            | TransformationClassification::Reflection(_) => 1,
            TransformationClassification::Rotoreflection { .. } => 2,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TransformationClassification::Identity => "identity",
            TransformationClassification::Rotation(_) => "rotation",
            TransformationClassification::Reflection(_) => "reflection",
            TransformationClassification::Rotoreflection { .. } => "rotoreflection",
        }
    }
}

fn format_vector(v: &Vector3<f64>) -> String {
    format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z)
}

impl fmt::Display for AxisRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rotation by {} about {}",
            radians_to_readable(self.theta),
            format_vector(&self.axis)
        )
    }
}

impl fmt::Display for PlaneReflection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reflection across plane with normal {}", format_vector(&self.normal))
    }
}

impl fmt::Display for TransformationClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformationClassification::Identity => write!(f, "identity"),
            TransformationClassification::Rotation(rotation) => write!(f, "{}", rotation),
            TransformationClassification::Reflection(reflection) => write!(f, "{}", reflection),
            TransformationClassification::Rotoreflection {
                rotation,
                reflection,
            } => write!(f, "{}, then {}", reflection, rotation),
        }
    }
}

/// Whole degrees with a degree sign, e.g. `120°`
pub fn radians_to_readable(radians: f64) -> String {
    format!("{}°", radians.to_degrees().round() as i64)
}

/// Relationship between two directions through the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Equilinearity {
    Parallel,
    Antiparallel,
    Distinct,
}

impl Equilinearity {
    /// +1, -1 or 0
    pub fn sign(&self) -> i32 {
        match self {
            Equilinearity::Parallel => 1,
            Equilinearity::Antiparallel => -1,
            Equilinearity::Distinct => 0,
        }
    }

    pub fn is_equilinear(&self) -> bool {
        !matches!(self, Equilinearity::Distinct)
    }
}

/// Whether `v` is a scalar multiple of `reference`, and with which sign.
///
/// The ratio is taken from the first non-negligible component of `reference`; a zero
/// `reference` (or a zero ratio) is never equilinear with anything.
pub fn closely_equilinear(v: &Vector3<f64>, reference: &Vector3<f64>) -> Equilinearity {
    let ratio = match (0..3).find(|&i| reference[i].abs() >= TOLERANCE) {
        Some(i) => v[i] / reference[i],
        None => return Equilinearity::Distinct,
    };

    if ratio.abs() < TOLERANCE {
        return Equilinearity::Distinct;
    }

    let scaled = reference * ratio;
    if (0..3).all(|i| close_enough(scaled[i], v[i])) {
        if ratio > 0.0 {
            Equilinearity::Parallel
        } else {
            Equilinearity::Antiparallel
        }
    } else {
        Equilinearity::Distinct
    }
}

/// Flip `v` so that its first non-negligible component is positive
pub fn canonical_direction(v: &Vector3<f64>) -> Vector3<f64> {
    match v.iter().find(|c| c.abs() > TOLERANCE) {
        Some(c) if *c < 0.0 => -v,
        _ => *v,
    }
}

fn validate_transform(m: &Matrix4<f64>) -> Result<()> {
    if !m.iter().all(|e| e.is_finite()) {
        return Err(SymmetryError::InvalidTransform(
            "matrix has non-finite entries".to_string(),
        ));
    }

    let bottom_ok = m[(3, 0)].abs() < TOLERANCE
        && m[(3, 1)].abs() < TOLERANCE
        && m[(3, 2)].abs() < TOLERANCE
        && (m[(3, 3)] - 1.0).abs() < TOLERANCE;
    if !bottom_ok {
        return Err(SymmetryError::InvalidTransform(
            "matrix is not an affine transform".to_string(),
        ));
    }

    let translation = Vector3::new(m[(0, 3)], m[(1, 3)], m[(2, 3)]);
    if translation.norm() > TOLERANCE {
        return Err(SymmetryError::InvalidTransform(format!(
            "transform moves the origin to {}",
            format_vector(&translation)
        )));
    }

    let linear = linear_part(m);
    let deviation = (linear.transpose() * linear - Matrix3::identity()).abs().max();
    if deviation > TOLERANCE {
        return Err(SymmetryError::InvalidTransform(format!(
            "linear part is not orthogonal (deviation {:e})",
            deviation
        )));
    }

    Ok(())
}

fn linear_part(m: &Matrix4<f64>) -> Matrix3<f64> {
    m.fixed_view::<3, 3>(0, 0).into_owned()
}

fn detect_identity(m: &Matrix4<f64>) -> bool {
    (m - Matrix4::identity()).abs().sum() < TOLERANCE
}

/// Splits the linear part into a per-axis scale and a rotation.
///
/// Scale is the column norms, with the x scale negated for orientation-reversing matrices,
/// so that `linear = rotation * diag(scale)`.
fn decompose(m: &Matrix4<f64>) -> (Vector3<f64>, UnitQuaternion<f64>) {
    let linear = linear_part(m);
    let mut scale = Vector3::new(
        linear.column(0).norm(),
        linear.column(1).norm(),
        linear.column(2).norm(),
    );
    if linear.determinant() < 0.0 {
        scale.x = -scale.x;
    }

    let mut rotation = linear;
    for i in 0..3 {
        let column = linear.column(i) / scale[i];
        rotation.set_column(i, &column);
    }

    let quaternion =
        UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(rotation));
    (scale, quaternion)
}

fn rotation_from_quaternion(quaternion: &UnitQuaternion<f64>) -> AxisRotation {
    let q = quaternion.quaternion().coords;
    let (x, y, z, w) = (q.x, q.y, q.z, q.w);

    // k vanishes for rotations by 0 or 2π
    let mut k = (1.0 - w * w).max(0.0).sqrt();
    if k < TOLERANCE {
        k = 1.0;
    }

    let mut axis = Vector3::new(x / k, y / k, z / k);
    let mut theta = 2.0 * w.clamp(-1.0, 1.0).acos();

    if axis.norm() < TOLERANCE {
        axis = Vector3::y();
        theta = 0.0;
    } else {
        axis = axis.normalize();
    }

    if theta > PI + TOLERANCE {
        theta -= 2.0 * PI;
    }
    if canonical_direction(&axis) != axis {
        axis = -axis;
        theta = -theta;
    }
    if theta <= -PI + TOLERANCE {
        theta += 2.0 * PI;
    }

    AxisRotation {
        axis,
        theta,
        sense: if theta >= 0.0 {
            RotationSense::CounterClockwise
        } else {
            RotationSense::Clockwise
        },
        matrix: quaternion.to_homogeneous(),
    }
}

/// Recovers `n` from a Householder matrix `I - 2 n nᵀ`.
///
/// Pivots on the component with the largest diagonal defect `(1 - r_kk) / 2 = n_k²` and
/// reads the other two components off row `k`. `Ok(None)` when the reconstructed
/// reflection does not match `r`.
fn recover_reflection_normal(r: &Matrix3<f64>) -> Result<Option<Vector3<f64>>> {
    let defects = Vector3::new(
        (1.0 - r[(0, 0)]) / 2.0,
        (1.0 - r[(1, 1)]) / 2.0,
        (1.0 - r[(2, 2)]) / 2.0,
    );
    let pivot = defects.imax();
    if defects[pivot] < TOLERANCE {
        return Ok(None);
    }

    let pivot_component = defects[pivot].sqrt();
    let mut normal = Vector3::zeros();
    for j in 0..3 {
        normal[j] = if j == pivot {
            pivot_component
        } else {
            r[(pivot, j)] / (-2.0 * pivot_component)
        };
    }

    if !normal.iter().all(|v| v.is_finite()) {
        return Err(SymmetryError::InvalidTransform(
            "reflection normal is not finite".to_string(),
        ));
    }

    let expected = Matrix3::identity() - 2.0 * normal * normal.transpose();
    let matches = expected
        .iter()
        .zip(r.iter())
        .all(|(expected, actual)| close_enough(*expected, *actual));

    Ok(if matches { Some(normal) } else { None })
}

/// Classifies an origin-preserving orthogonal matrix.
///
/// Identity is detected first. Otherwise the matrix is decomposed into a rotation and a
/// per-axis scale; unit scale means a pure rotation. Orientation-reversing matrices are
/// tested against the Householder form of a reflection, and whatever fails that test is a
/// rotoreflection: the mirror `diag(scale)` followed by the rotation.
pub fn explain_matrix(m: &Matrix4<f64>) -> Result<TransformationClassification> {
    validate_transform(m)?;

    if detect_identity(m) {
        return Ok(TransformationClassification::Identity);
    }

    let (scale, quaternion) = decompose(m);
    let rotation = rotation_from_quaternion(&quaternion);

    if scale.iter().all(|s| close_enough(*s, 1.0)) {
        trace!("classified as {}", rotation);
        return Ok(TransformationClassification::Rotation(rotation));
    }

    if let Some(normal) = recover_reflection_normal(&linear_part(m))? {
        let reflection = PlaneReflection {
            normal: canonical_direction(&normal),
            matrix: *m,
        };
        trace!("classified as {}", reflection);
        return Ok(TransformationClassification::Reflection(reflection));
    }

    let mirrored_axis = scale.iter().position(|s| *s < 0.0).ok_or_else(|| {
        SymmetryError::InvalidTransform("improper transform without a mirrored axis".to_string())
    })?;
    let reflection = PlaneReflection {
        normal: Vector3::ith(mirrored_axis, 1.0),
        matrix: Matrix4::new_nonuniform_scaling(&scale),
    };
    trace!("classified as {}, then {}", reflection, rotation);

    Ok(TransformationClassification::Rotoreflection {
        rotation,
        reflection,
    })
}
