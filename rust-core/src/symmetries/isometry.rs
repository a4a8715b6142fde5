use log::trace;
use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

use crate::config::{TOLERANCE, VERTEX_MATCH_TOLERANCE};
use crate::error::SymmetryError;
use crate::symmetries::motion::Motion;
use crate::Result;

/// Relative comparison of two magnitudes, falling back to an absolute one when `d2` is ~0.
pub fn close_enough(d1: f64, d2: f64) -> bool {
    if d2.abs() < TOLERANCE {
        return (d1 - d2).abs() < TOLERANCE;
    }

    (d1 / d2 - 1.0).abs() < TOLERANCE
}

/// Whether the permutation preserves the distance between every pair of vertices
pub fn is_isometry(vertices: &[Vector3<f64>], motion: &Motion) -> bool {
    if vertices.len() != motion.len() {
        return false;
    }

    let p = motion.permutation();
    let count = vertices.len();

    for i in 0..count {
        for j in (i + 1)..count {
            let original = (vertices[i] - vertices[j]).norm();
            let permuted = (vertices[p[i]] - vertices[p[j]]).norm();
            if !close_enough(original, permuted) {
                trace!(
                    "pair ({}, {}) distance {} maps to {}; not an isometry",
                    i,
                    j,
                    original,
                    permuted
                );
                return false;
            }
        }
    }

    true
}

/// Three vectors used to pin down a linear map, and how to find their images.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Basis {
    /// Three linearly independent vertices
    Vertices([usize; 3]),
    /// Two vertices spanning the plane of a flat shape, completed by the plane normal
    Planar {
        first: usize,
        second: usize,
        normal: Vector3<f64>,
    },
}

fn columns_determinant(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>) -> f64 {
    Matrix3::from_columns(&[*a, *b, *c]).determinant()
}

fn select_basis(vertices: &[Vector3<f64>]) -> Result<Basis> {
    let n = vertices.len();
    if n < 2 {
        return Err(SymmetryError::DegenerateBasis);
    }

    // First independent triple in index order; (0, 1, 2) whenever the leading vertices allow it
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                if columns_determinant(&vertices[i], &vertices[j], &vertices[k]).abs() > TOLERANCE
                {
                    return Ok(Basis::Vertices([i, j, k]));
                }
            }
        }
    }

    // Everything lies in one plane through the origin
    for i in 0..n {
        for j in (i + 1)..n {
            let normal = vertices[i].cross(&vertices[j]);
            if normal.norm() > TOLERANCE {
                return Ok(Basis::Planar {
                    first: i,
                    second: j,
                    normal: normal.normalize(),
                });
            }
        }
    }

    Err(SymmetryError::DegenerateBasis)
}

/// Returns the 4x4 transform mapping every vertex onto its image under `motion`.
///
/// Solves `T = W V^-1` where the columns of `V` are three basis vectors and the columns of
/// `W` their images. Flat vertex sets use the plane normal as third basis vector and keep it
/// fixed, so in-plane symmetries come out as rotations about the normal or reflections across
/// planes containing it.
///
/// `Ok(None)` if `motion` is not an isometry of `vertices`.
pub fn matrix_from_isometry(
    vertices: &[Vector3<f64>],
    motion: &Motion,
) -> Result<Option<Matrix4<f64>>> {
    if !is_isometry(vertices, motion) {
        return Ok(None);
    }

    let p = motion.permutation();
    let (originals, images) = match select_basis(vertices)? {
        Basis::Vertices([i, j, k]) => (
            [vertices[i], vertices[j], vertices[k]],
            [vertices[p[i]], vertices[p[j]], vertices[p[k]]],
        ),
        Basis::Planar {
            first,
            second,
            normal,
        } => (
            [vertices[first], vertices[second], normal],
            [vertices[p[first]], vertices[p[second]], normal],
        ),
    };

    let v = Matrix3::from_columns(&originals);
    let w = Matrix3::from_columns(&images);
    let v_inverse = v.try_inverse().ok_or(SymmetryError::DegenerateBasis)?;

    Ok(Some((w * v_inverse).to_homogeneous()))
}

/// Finds the permutation `matrix` induces on `vertices`.
///
/// Every transformed vertex must land within [`VERTEX_MATCH_TOLERANCE`] of exactly one
/// vertex; zero or several candidates fail with [`SymmetryError::AmbiguousMatch`].
pub fn motion_from_matrix(vertices: &[Vector3<f64>], matrix: &Matrix4<f64>) -> Result<Motion> {
    let mut permutation = Vec::with_capacity(vertices.len());

    for (index, vertex) in vertices.iter().enumerate() {
        let transformed = transform_vertex(matrix, vertex);

        let mut candidates = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (i, (v - transformed).norm()))
            .filter(|&(_, distance)| distance < VERTEX_MATCH_TOLERANCE);

        match (candidates.next(), candidates.next()) {
            (Some((target, _)), None) => permutation.push(target),
            (None, _) => {
                return Err(SymmetryError::AmbiguousMatch {
                    vertex: index,
                    candidates: 0,
                })
            }
            (Some(_), Some(_)) => {
                return Err(SymmetryError::AmbiguousMatch {
                    vertex: index,
                    candidates: 2 + candidates.count(),
                })
            }
        }
    }

    Motion::new(permutation)
}

/// Apply a 4x4 transform to a direction or position vector centered at the origin
pub fn transform_vertex(matrix: &Matrix4<f64>, vertex: &Vector3<f64>) -> Vector3<f64> {
    matrix.transform_point(&Point3::from(*vertex)).coords
}
