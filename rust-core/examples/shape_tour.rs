/// Walk through the symmetry engine on a few built-in shapes
///
/// Builds a shape from the library, lists its rotation axes and mirror planes,
/// then performs a short sequence of motions and prints the accumulated transform.
use std::sync::Arc;

use nalgebra::Vector3;
use symmetry_explorer::shapes::{shape_by_name, CongaLine, Selection};
use symmetry_explorer::symmetries::explain_matrix;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Symmetry groups of the built-in shapes ===\n");

    // Example 1: an equilateral triangle
    println!("1. Equilateral triangle:");
    let triangle = shape_by_name("triangle")?;
    println!("   Group order: {}", triangle.group().order());
    println!(
        "   Rotations about y: {:?}",
        triangle.rotation_options(&Vector3::y())?
    );
    println!(
        "   Mirror planes: {}\n",
        triangle.reflective_normals().len()
    );

    // Example 2: the cube, element by element
    println!("2. Cube:");
    let cube = Arc::new(shape_by_name("cube")?);
    println!("   Group order: {}", cube.group().order());
    println!("   Rotation axes: {}", cube.axes().len());
    println!("   Mirror planes: {}", cube.reflective_normals().len());
    for element in cube.group().classify_elements()?.iter().take(6) {
        println!("   {:?} -> {}", element.motion.permutation(), element.classification);
    }
    println!();

    // Example 3: a conga line of motions on the cube
    println!("3. Composing motions:");
    let mut line = CongaLine::new(Arc::clone(&cube));
    let turn = Selection::RotationIndicator { axis: Vector3::y() };
    let mirror = Selection::ReflectionIndicator {
        normal: Vector3::x(),
    };

    line.perform_selection(&turn, Some(90))?;
    line.perform_selection(&mirror, None)?;
    line.perform_selection(&turn, Some(90))?;

    let total = line.current_matrix()?;
    println!("   After {} steps: {}", line.steps().len(), explain_matrix(&total)?);

    line.undo()?;
    println!(
        "   After undo: {}",
        explain_matrix(&line.current_matrix()?)?
    );

    Ok(())
}
