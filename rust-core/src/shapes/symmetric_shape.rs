use log::info;
use nalgebra::{Matrix4, Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_GROUP_SIZE_CAP, TOLERANCE};
use crate::error::SymmetryError;
use crate::interfaces::Dimension;
use crate::symmetries::isometry::{is_isometry, motion_from_matrix};
use crate::symmetries::motion::Motion;
use crate::symmetries::symmetry_group::{compute_symmetry_group, SymmetryGroup};
use crate::Result;

/// Vertex input, centered around the origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeVertices {
    /// Flat shape; `(x, y)` is lifted onto the ground plane as `(x, 0, y)`
    Planar(Vec<Vector2<f64>>),
    Spatial(Vec<Vector3<f64>>),
}

impl ShapeVertices {
    pub fn dimension(&self) -> Dimension {
        match self {
            ShapeVertices::Planar(_) => Dimension::_2D,
            ShapeVertices::Spatial(_) => Dimension::_3D,
        }
    }

    /// Vertices as 3D points
    pub fn lifted(&self) -> Vec<Vector3<f64>> {
        match self {
            ShapeVertices::Planar(points) => {
                points.iter().map(|p| Vector3::new(p.x, 0.0, p.y)).collect()
            }
            ShapeVertices::Spatial(points) => points.clone(),
        }
    }
}

/// A seed symmetry, either as a permutation or as a transform of the vertex set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Generator {
    Permutation(Vec<usize>),
    Matrix(Matrix4<f64>),
}

/// Everything needed to build a [`SymmetricShape`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeParams {
    pub name: String,
    pub vertices: ShapeVertices,
    pub generators: Vec<Generator>,
    #[serde(default)]
    pub vertex_names: Option<Vec<String>>,
    #[serde(default)]
    pub group_size_cap: Option<usize>,
}

impl ShapeParams {
    pub fn new(name: impl Into<String>, vertices: ShapeVertices, generators: Vec<Generator>) -> Self {
        Self {
            name: name.into(),
            vertices,
            generators,
            vertex_names: None,
            group_size_cap: None,
        }
    }

    pub fn with_vertex_names(mut self, names: Vec<String>) -> Self {
        self.vertex_names = Some(names);
        self
    }

    pub fn with_group_size_cap(mut self, cap: usize) -> Self {
        self.group_size_cap = Some(cap);
        self
    }
}

/// Compact, serializable description of a shape and its symmetries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeSummary {
    pub name: String,
    pub dimension: Dimension,
    pub vertex_count: usize,
    pub group_order: usize,
    pub axes: Vec<Vector3<f64>>,
    pub reflective_normals: Vec<Vector3<f64>>,
}

/// A convex polygon or polyhedron with its full symmetry group.
///
/// Immutable after construction.
#[derive(Debug, Clone, Serialize)]
pub struct SymmetricShape {
    name: String,
    dimension: Dimension,
    vertices: Vec<Vector3<f64>>,
    vertex_names: Vec<String>,
    group: SymmetryGroup,
    axes: Vec<Vector3<f64>>,
    reflective_normals: Vec<Vector3<f64>>,
}

/// `A`, `B`, ... `Z`, then `V26`, `V27`, ...
pub fn default_vertex_name(index: usize) -> String {
    if index < 26 {
        ((b'A' + index as u8) as char).to_string()
    } else {
        format!("V{}", index)
    }
}

fn convert_generator(vertices: &[Vector3<f64>], index: usize, generator: &Generator) -> Result<Motion> {
    let invalid = |reason: String| SymmetryError::InvalidGenerator { index, reason };

    let motion = match generator {
        Generator::Permutation(permutation) => {
            if permutation.len() != vertices.len() {
                return Err(invalid(format!(
                    "permutation has {} entries for {} vertices",
                    permutation.len(),
                    vertices.len()
                )));
            }
            Motion::new(permutation.clone()).map_err(|e| invalid(e.to_string()))?
        }
        Generator::Matrix(matrix) => {
            motion_from_matrix(vertices, matrix).map_err(|e| invalid(e.to_string()))?
        }
    };

    if !is_isometry(vertices, &motion) {
        return Err(invalid("does not preserve vertex distances".to_string()));
    }

    Ok(motion)
}

impl SymmetricShape {
    /// Builds the shape, converts its generators and closes its symmetry group
    pub fn new(params: ShapeParams) -> Result<Self> {
        let dimension = params.vertices.dimension();
        let vertices = params.vertices.lifted();
        if vertices.is_empty() {
            return Err(SymmetryError::EmptyShape);
        }

        let centroid = vertices.iter().fold(Vector3::zeros(), |acc, v| acc + v) / vertices.len() as f64;
        if centroid.norm() > TOLERANCE {
            return Err(SymmetryError::NotCentered { centroid });
        }

        let vertex_names = match params.vertex_names {
            Some(names) if names.len() != vertices.len() => {
                return Err(SymmetryError::DimensionMismatch {
                    expected: vertices.len(),
                    found: names.len(),
                })
            }
            Some(names) => names,
            None => (0..vertices.len()).map(default_vertex_name).collect(),
        };

        let generators = params
            .generators
            .iter()
            .enumerate()
            .map(|(index, generator)| convert_generator(&vertices, index, generator))
            .collect::<Result<Vec<_>>>()?;

        let cap = params.group_size_cap.unwrap_or(DEFAULT_GROUP_SIZE_CAP);
        let group = compute_symmetry_group(&vertices, &generators, cap)?;
        let axes = group.axes()?;
        let reflective_normals = group.reflective_normals()?;

        info!(
            "Built {} ({} vertices): group order {}, {} axes, {} mirror planes",
            params.name,
            vertices.len(),
            group.order(),
            axes.len(),
            reflective_normals.len()
        );

        Ok(Self {
            name: params.name,
            dimension,
            vertices,
            vertex_names,
            group,
            axes,
            reflective_normals,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn vertices(&self) -> &[Vector3<f64>] {
        &self.vertices
    }

    pub fn vertex_names(&self) -> &[String] {
        &self.vertex_names
    }

    /// The full symmetry group
    pub fn group(&self) -> &SymmetryGroup {
        &self.group
    }

    /// Rotation axes, one per line
    pub fn axes(&self) -> &[Vector3<f64>] {
        &self.axes
    }

    /// Normals of the mirror planes
    pub fn reflective_normals(&self) -> &[Vector3<f64>] {
        &self.reflective_normals
    }

    /// Rotation amounts in whole degrees available about `axis`
    pub fn rotation_options(&self, axis: &Vector3<f64>) -> Result<Vec<i32>> {
        self.group.rotation_options(axis)
    }

    /// The motion `matrix` induces on this shape's vertices
    pub fn motion_from_matrix(&self, matrix: &Matrix4<f64>) -> Result<Motion> {
        motion_from_matrix(&self.vertices, matrix)
    }

    /// Rigid transform of a motion of this shape
    pub fn matrix_of(&self, motion: &Motion) -> Result<Matrix4<f64>> {
        self.group.matrix_of(motion)
    }

    pub fn summary(&self) -> ShapeSummary {
        ShapeSummary {
            name: self.name.clone(),
            dimension: self.dimension,
            vertex_count: self.vertices.len(),
            group_order: self.group.order(),
            axes: self.axes.clone(),
            reflective_normals: self.reflective_normals.clone(),
        }
    }
}
