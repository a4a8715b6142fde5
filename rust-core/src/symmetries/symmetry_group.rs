use std::collections::HashSet;

use log::{debug, trace, warn};
use nalgebra::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::SymmetryError;
use crate::symmetries::classification::{
    closely_equilinear, explain_matrix, AxisRotation, Equilinearity, TransformationClassification,
};
use crate::symmetries::motion::Motion;
use crate::Result;

/// One group element together with its matrix and geometric meaning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedElement {
    pub motion: Motion,
    pub matrix: Matrix4<f64>,
    pub classification: TransformationClassification,
}

/// The closed set of motions of a vertex set.
///
/// Contains the identity, is closed under composition and holds no duplicates. Element order
/// is `[identity, generators..., discovered elements]`.
#[derive(Debug, Clone, Serialize)]
pub struct SymmetryGroup {
    vertices: Vec<Vector3<f64>>,
    elements: Vec<Motion>,
}

/// Closes `generators` under composition.
///
/// Repeatedly composes every ordered pair of known elements until a full pass adds nothing.
/// Fails with [`SymmetryError::GroupTooLarge`] once more than `cap` elements exist.
pub fn compute_symmetry_group(
    vertices: &[Vector3<f64>],
    generators: &[Motion],
    cap: usize,
) -> Result<SymmetryGroup> {
    let vertex_count = vertices.len();
    if let Some(bad) = generators.iter().find(|g| g.len() != vertex_count) {
        return Err(SymmetryError::DimensionMismatch {
            expected: vertex_count,
            found: bad.len(),
        });
    }

    let mut elements = vec![Motion::identity(vertex_count)];
    let mut known: HashSet<Motion> = elements.iter().cloned().collect();
    for (index, generator) in generators.iter().enumerate() {
        if known.insert(generator.clone()) {
            elements.push(generator.clone());
        } else {
            warn!("generator {} repeats an earlier element; skipped", index);
        }
    }

    let mut pass = 0;
    loop {
        let previous_len = elements.len();
        if previous_len > cap {
            return Err(SymmetryError::GroupTooLarge { cap });
        }

        for i in 0..previous_len {
            for j in 0..previous_len {
                let composed = elements[i].compose(&elements[j])?;
                if known.insert(composed.clone()) {
                    elements.push(composed);
                    if elements.len() > cap {
                        return Err(SymmetryError::GroupTooLarge { cap });
                    }
                }
            }
        }

        pass += 1;
        debug!("closure pass {}: {} elements", pass, elements.len());

        if elements.len() == previous_len {
            break;
        }
    }

    Ok(SymmetryGroup {
        vertices: vertices.to_vec(),
        elements,
    })
}

/// Angle of `rotation` in whole degrees within `(-180, 180]`, measured about `axis`.
///
/// `None` when the rotation is about a different line.
pub fn degrees_about(rotation: &AxisRotation, axis: &Vector3<f64>) -> Option<i32> {
    let sign = match closely_equilinear(&rotation.axis, axis) {
        Equilinearity::Distinct => return None,
        relation => relation.sign(),
    };

    let degrees = (sign as f64 * rotation.theta).to_degrees().round() as i32;
    Some(if degrees <= -180 {
        degrees + 360
    } else if degrees > 180 {
        degrees - 360
    } else {
        degrees
    })
}

impl SymmetryGroup {
    pub fn elements(&self) -> &[Motion] {
        &self.elements
    }

    pub fn vertices(&self) -> &[Vector3<f64>] {
        &self.vertices
    }

    /// Number of elements
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    pub fn identity(&self) -> &Motion {
        &self.elements[0]
    }

    pub fn contains(&self, motion: &Motion) -> bool {
        self.elements.iter().any(|e| e == motion)
    }

    /// Matrix of one element; every element of a closed group is an isometry
    pub fn matrix_of(&self, motion: &Motion) -> Result<Matrix4<f64>> {
        motion
            .to_matrix(&self.vertices)?
            .ok_or_else(|| {
                SymmetryError::InvalidPermutation(format!(
                    "{:?} is not an isometry of the vertex set",
                    motion.permutation()
                ))
            })
    }

    /// Every element with its matrix and classification, in element order
    pub fn classify_elements(&self) -> Result<Vec<ClassifiedElement>> {
        self.elements
            .iter()
            .map(|motion| {
                let matrix = self.matrix_of(motion)?;
                let classification = explain_matrix(&matrix)?;
                trace!("{:?}: {}", motion.permutation(), classification);
                Ok(ClassifiedElement {
                    motion: motion.clone(),
                    matrix,
                    classification,
                })
            })
            .collect()
    }

    /// Axes of the pure rotations, one per line through the origin (first occurrence kept)
    pub fn axes(&self) -> Result<Vec<Vector3<f64>>> {
        let mut axes: Vec<Vector3<f64>> = Vec::new();

        for element in self.classify_elements()? {
            if let Some(rotation) = element.classification.as_rotation() {
                let duplicate = axes
                    .iter()
                    .any(|known| closely_equilinear(&rotation.axis, known).is_equilinear());
                if !duplicate {
                    axes.push(rotation.axis);
                }
            }
        }

        Ok(axes)
    }

    /// Normals of the pure reflections.
    ///
    /// Distinct reflections have distinct mirror planes, so no deduplication is needed.
    pub fn reflective_normals(&self) -> Result<Vec<Vector3<f64>>> {
        Ok(self
            .classify_elements()?
            .iter()
            .filter_map(|element| element.classification.as_reflection())
            .map(|reflection| reflection.normal)
            .collect())
    }

    /// Rotation amounts, in whole degrees within `(-180, 180]`, available about `axis`.
    ///
    /// Rotations about the antiparallel direction are reported with their sign flipped.
    pub fn rotation_options(&self, axis: &Vector3<f64>) -> Result<Vec<i32>> {
        let mut options: Vec<i32> = self
            .classify_elements()?
            .iter()
            .filter_map(|element| element.classification.as_rotation())
            .filter_map(|rotation| degrees_about(rotation, axis))
            .collect();

        options.sort_unstable();
        options.dedup();
        Ok(options)
    }
}
