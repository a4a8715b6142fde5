use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use nalgebra::{Matrix4, Rotation3, Unit, Vector2, Vector3};

use crate::error::SymmetryError;
use crate::shapes::symmetric_shape::{Generator, ShapeParams, ShapeVertices, SymmetricShape};
use crate::Result;

/// Keys of the built-in shape library, in display order
pub const SHAPE_NAMES: [&str; 13] = [
    "triangle",
    "square",
    "pentagon",
    "hexagon",
    "rectangle",
    "triangular_prism",
    "square_prism",
    "hexagonal_prism",
    "square_pyramid",
    "tetrahedron",
    "cube",
    "octahedron",
    "icosahedron",
];

// ======================== GEOMETRY HELPERS ========================

/// Vertices of a regular polygon, the first at angle `rotation` (counter-clockwise from +x)
pub fn generate_regular_polygon(n: usize, circumradius: f64, rotation: f64) -> Vec<Vector2<f64>> {
    (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * 2.0 * PI + rotation;
            Vector2::new(angle.cos() * circumradius, angle.sin() * circumradius)
        })
        .collect()
}

/// Extrudes a polygon along y: every point becomes `(x, -t/2, y)` followed by `(x, t/2, y)`
pub fn fatten_polygon(vertices: &[Vector2<f64>], thickness: f64) -> Vec<Vector3<f64>> {
    let half = thickness / 2.0;
    vertices
        .iter()
        .flat_map(|v| [Vector3::new(v.x, -half, v.y), Vector3::new(v.x, half, v.y)])
        .collect()
}

/// Homogeneous rotation by `angle` radians about `axis` (right-handed)
pub fn rotation_about(axis: Vector3<f64>, angle: f64) -> Matrix4<f64> {
    Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle).to_homogeneous()
}

/// Homogeneous per-axis scale; a single `-1` is a reflection across a coordinate plane
pub fn scaling(x: f64, y: f64, z: f64) -> Matrix4<f64> {
    Matrix4::new_nonuniform_scaling(&Vector3::new(x, y, z))
}

#[rustfmt::skip]
fn cyclic_axes() -> Matrix4<f64> {
    // (x, y, z) -> (z, x, y): threefold rotation about (1, 1, 1)
    Matrix4::new(
        0.0, 0.0, 1.0, 0.0,
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

#[rustfmt::skip]
fn swap_xy() -> Matrix4<f64> {
    // (x, y, z) -> (y, x, z): mirror across the plane x = y
    Matrix4::new(
        0.0, 1.0, 0.0, 0.0,
        1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

fn regular_polygon_shape(name: &str, n: usize) -> ShapeParams {
    ShapeParams::new(
        name,
        ShapeVertices::Planar(generate_regular_polygon(n, 1.0, 0.0)),
        vec![
            Generator::Matrix(rotation_about(Vector3::y(), 2.0 * PI / n as f64)),
            Generator::Matrix(scaling(1.0, 1.0, -1.0)),
        ],
    )
}

fn prism_shape(name: &str, n: usize, circumradius: f64, rotation: f64, height: f64) -> ShapeParams {
    ShapeParams::new(
        name,
        ShapeVertices::Spatial(fatten_polygon(
            &generate_regular_polygon(n, circumradius, rotation),
            height,
        )),
        vec![
            Generator::Matrix(rotation_about(Vector3::y(), 2.0 * PI / n as f64)),
            Generator::Matrix(scaling(1.0, 1.0, -1.0)),
            Generator::Matrix(scaling(1.0, -1.0, 1.0)),
        ],
    )
}

// ======================== 2D SHAPES ========================

pub fn triangle() -> ShapeParams {
    regular_polygon_shape("equilateral triangle", 3)
}

pub fn square() -> ShapeParams {
    regular_polygon_shape("square", 4)
}

pub fn pentagon() -> ShapeParams {
    regular_polygon_shape("regular pentagon", 5)
}

pub fn hexagon() -> ShapeParams {
    regular_polygon_shape("regular hexagon", 6)
}

pub fn rectangle() -> ShapeParams {
    let (a, b) = (0.8, 0.5);
    ShapeParams::new(
        "rectangle",
        ShapeVertices::Planar(vec![
            Vector2::new(a, b),
            Vector2::new(-a, b),
            Vector2::new(-a, -b),
            Vector2::new(a, -b),
        ]),
        vec![
            Generator::Matrix(scaling(-1.0, 1.0, 1.0)),
            Generator::Matrix(scaling(1.0, 1.0, -1.0)),
        ],
    )
}

// ======================== 3D SHAPES ========================

pub fn triangular_prism() -> ShapeParams {
    prism_shape("equilateral triangular prism", 3, 0.7, 0.0, 1.4)
}

pub fn square_prism() -> ShapeParams {
    prism_shape("square prism", 4, 0.7, FRAC_PI_4, 1.6)
}

pub fn hexagonal_prism() -> ShapeParams {
    prism_shape("hexagonal prism", 6, 0.7, 0.0, 0.8)
}

pub fn square_pyramid() -> ShapeParams {
    // Apex height chosen so the centroid sits at the origin
    let base_height = -0.25;
    let mut vertices: Vec<Vector3<f64>> = generate_regular_polygon(4, 0.8, 0.0)
        .iter()
        .map(|p| Vector3::new(p.x, base_height, p.y))
        .collect();
    vertices.push(Vector3::new(0.0, -4.0 * base_height, 0.0));

    ShapeParams::new(
        "square pyramid",
        ShapeVertices::Spatial(vertices),
        vec![
            Generator::Matrix(rotation_about(Vector3::y(), FRAC_PI_2)),
            Generator::Matrix(scaling(1.0, 1.0, -1.0)),
        ],
    )
}

pub fn tetrahedron() -> ShapeParams {
    let vertices = [
        [1.0, 1.0, 1.0],
        [1.0, -1.0, -1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, -1.0, 1.0],
    ]
    .iter()
    .map(|[x, y, z]| Vector3::new(*x, *y, *z) * 0.5)
    .collect();

    ShapeParams::new(
        "regular tetrahedron",
        ShapeVertices::Spatial(vertices),
        vec![
            Generator::Matrix(cyclic_axes()),
            Generator::Matrix(scaling(1.0, -1.0, -1.0)),
            Generator::Matrix(swap_xy()),
        ],
    )
}

fn octahedral_generators() -> Vec<Generator> {
    vec![
        Generator::Matrix(rotation_about(Vector3::x(), FRAC_PI_2)),
        Generator::Matrix(rotation_about(Vector3::y(), FRAC_PI_2)),
        Generator::Matrix(rotation_about(Vector3::z(), FRAC_PI_2)),
        Generator::Matrix(scaling(1.0, -1.0, 1.0)),
    ]
}

pub fn cube() -> ShapeParams {
    ShapeParams::new(
        "cube",
        ShapeVertices::Spatial(fatten_polygon(
            &generate_regular_polygon(4, 2.0_f64.sqrt() / 2.0, FRAC_PI_4),
            1.0,
        )),
        octahedral_generators(),
    )
}

pub fn octahedron() -> ShapeParams {
    let vertices = vec![
        Vector3::x(),
        Vector3::y(),
        Vector3::z(),
        -Vector3::x(),
        -Vector3::y(),
        -Vector3::z(),
    ];

    ShapeParams::new(
        "regular octahedron",
        ShapeVertices::Spatial(vertices),
        octahedral_generators(),
    )
}

pub fn icosahedron() -> ShapeParams {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;

    // Cyclic arrangements of (0, ±1, ±φ)
    let mut vertices = Vec::with_capacity(12);
    for s1 in [1.0, -1.0] {
        for s2 in [1.0, -1.0] {
            vertices.push(Vector3::new(0.0, s1, s2 * phi) * 0.5);
            vertices.push(Vector3::new(s1, s2 * phi, 0.0) * 0.5);
            vertices.push(Vector3::new(s2 * phi, 0.0, s1) * 0.5);
        }
    }

    ShapeParams::new(
        "regular icosahedron",
        ShapeVertices::Spatial(vertices),
        vec![
            Generator::Matrix(cyclic_axes()),
            Generator::Matrix(scaling(1.0, -1.0, -1.0)),
            Generator::Matrix(rotation_about(Vector3::new(0.0, 1.0, phi), 2.0 * PI / 5.0)),
            Generator::Matrix(scaling(-1.0, -1.0, -1.0)),
        ],
    )
}

// ======================== LIBRARY ========================

/// Definition of a library shape by key
pub fn shape_params_by_name(key: &str) -> Result<ShapeParams> {
    let params = match key {
        "triangle" => triangle(),
        "square" => square(),
        "pentagon" => pentagon(),
        "hexagon" => hexagon(),
        "rectangle" => rectangle(),
        "triangular_prism" => triangular_prism(),
        "square_prism" => square_prism(),
        "hexagonal_prism" => hexagonal_prism(),
        "square_pyramid" => square_pyramid(),
        "tetrahedron" => tetrahedron(),
        "cube" => cube(),
        "octahedron" => octahedron(),
        "icosahedron" => icosahedron(),
        _ => return Err(SymmetryError::UnknownShape(key.to_string())),
    };
    Ok(params)
}

/// Builds a library shape by key
pub fn shape_by_name(key: &str) -> Result<SymmetricShape> {
    SymmetricShape::new(shape_params_by_name(key)?)
}

/// Builds every library shape, in [`SHAPE_NAMES`] order
pub fn all_shapes() -> Result<Vec<SymmetricShape>> {
    SHAPE_NAMES.iter().map(|key| shape_by_name(key)).collect()
}
