use nalgebra::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::SymmetryError;
use crate::symmetries::isometry::matrix_from_isometry;
use crate::Result;

/// A single symmetry operation, expressed as a permutation of vertex indices.
///
/// `permutation[p] == i` means "vertex `p` is carried onto vertex `i`".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMotion")]
pub struct Motion {
    permutation: Vec<usize>,
}

/// Unchecked wire form; deserialization goes through [`Motion::new`]
#[derive(Deserialize)]
struct RawMotion {
    permutation: Vec<usize>,
}

impl TryFrom<RawMotion> for Motion {
    type Error = SymmetryError;

    fn try_from(raw: RawMotion) -> Result<Self> {
        Motion::new(raw.permutation)
    }
}

impl Motion {
    /// Create a motion from an index list, checking that it is a bijection of `0..n`
    pub fn new(permutation: Vec<usize>) -> Result<Self> {
        let n = permutation.len();
        let mut seen = vec![false; n];

        for (position, &target) in permutation.iter().enumerate() {
            if target >= n {
                return Err(SymmetryError::InvalidPermutation(format!(
                    "index {} at position {} is out of range for {} vertices",
                    target, position, n
                )));
            }
            if seen[target] {
                return Err(SymmetryError::InvalidPermutation(format!(
                    "index {} appears more than once",
                    target
                )));
            }
            seen[target] = true;
        }

        Ok(Self { permutation })
    }

    /// Create identity operation on `n` vertices
    pub fn identity(n: usize) -> Self {
        Self {
            permutation: (0..n).collect(),
        }
    }

    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Number of vertices this motion acts on
    pub fn len(&self) -> usize {
        self.permutation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permutation.is_empty()
    }

    /// Where vertex `index` ends up; `None` if the motion has no such vertex
    pub fn apply(&self, index: usize) -> Option<usize> {
        self.permutation.get(index).copied()
    }

    /// `self.compose(other)` applies `other` first, then `self`: `result[i] = self[other[i]]`.
    pub fn compose(&self, other: &Motion) -> Result<Motion> {
        if self.len() != other.len() {
            return Err(SymmetryError::DimensionMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }

        Ok(Motion {
            permutation: other.permutation.iter().map(|&i| self.permutation[i]).collect(),
        })
    }

    /// Inverse permutation: `inverse[self[i]] = i`
    pub fn invert(&self) -> Motion {
        let mut inverse = vec![0; self.len()];
        for (i, &target) in self.permutation.iter().enumerate() {
            inverse[target] = i;
        }
        Motion {
            permutation: inverse,
        }
    }

    /// Check if this is the identity operation
    pub fn is_identity(&self) -> bool {
        self.permutation.iter().enumerate().all(|(i, &p)| i == p)
    }

    /// Smallest k >= 1 such that applying the motion k times gives the identity.
    ///
    /// Computed as the lcm of the cycle lengths.
    pub fn order(&self) -> usize {
        let mut visited = vec![false; self.len()];
        let mut order = 1;

        for start in 0..self.len() {
            if visited[start] {
                continue;
            }
            let mut cycle_length = 0;
            let mut current = start;
            while !visited[current] {
                visited[current] = true;
                current = self.permutation[current];
                cycle_length += 1;
            }
            order = lcm(order, cycle_length);
        }

        order
    }

    /// The rigid transform realising this motion on `vertices`.
    ///
    /// `Ok(None)` if the permutation does not preserve pairwise distances.
    pub fn to_matrix(&self, vertices: &[Vector3<f64>]) -> Result<Option<Matrix4<f64>>> {
        matrix_from_isometry(vertices, self)
    }
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}
