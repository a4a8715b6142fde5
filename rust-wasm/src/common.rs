use nalgebra::{Matrix4, Vector2, Vector3};
use serde::{Deserialize, Serialize};
use symmetry_explorer::shapes::{MotionPlan, PerformedMotion};

/// 2D Point structure for JavaScript interop
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<&Point> for Vector2<f64> {
    fn from(p: &Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}

/// 3D Point structure for JavaScript interop
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<&Vector3<f64>> for Point3D {
    fn from(v: &Vector3<f64>) -> Self {
        Point3D {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<&Point3D> for Vector3<f64> {
    fn from(p: &Point3D) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

/// Shape definition passed in from JavaScript.
///
/// Exactly one of `points` (flat shapes) or `vertices` is expected. Matrix generators are
/// 16 column-major numbers.
#[derive(Serialize, Deserialize, Debug)]
pub struct ShapeDefinition {
    pub name: String,
    #[serde(default)]
    pub points: Option<Vec<Point>>,
    #[serde(default)]
    pub vertices: Option<Vec<Point3D>>,
    #[serde(default)]
    pub permutations: Vec<Vec<usize>>,
    #[serde(default)]
    pub matrices: Vec<Vec<f64>>,
    #[serde(default)]
    pub vertex_names: Option<Vec<String>>,
    #[serde(default)]
    pub group_size_cap: Option<usize>,
}

/// Shape overview for JavaScript interop
#[derive(Serialize, Deserialize, Debug)]
pub struct ShapeData {
    pub name: String,
    pub dimension: usize,
    pub vertices: Vec<Point3D>,
    pub vertex_names: Vec<String>,
    pub group_order: usize,
    pub axes: Vec<Point3D>,
    pub reflective_normals: Vec<Point3D>,
}

/// One performed conga-line step, with matrices in column-major order
#[derive(Serialize, Deserialize, Debug)]
pub struct PerformedMotionData {
    pub plan: MotionPlan,
    pub from: Vec<f64>,
    pub to: Vec<f64>,
    pub permutation: Vec<usize>,
}

impl PerformedMotionData {
    pub fn new(performed: PerformedMotion, permutation: &[usize]) -> Self {
        PerformedMotionData {
            plan: performed.plan,
            from: column_major(&performed.from),
            to: column_major(&performed.to),
            permutation: permutation.to_vec(),
        }
    }
}

/// Matrix entries in three.js `Matrix4.elements` order
pub fn column_major(matrix: &Matrix4<f64>) -> Vec<f64> {
    matrix.as_slice().to_vec()
}
