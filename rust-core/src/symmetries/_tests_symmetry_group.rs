#[cfg(test)]
mod tests_symmetry_group {
    use super::super::isometry::{is_isometry, motion_from_matrix};
    use super::super::motion::Motion;
    use super::super::classification::explain_matrix;
    use super::super::symmetry_group::{compute_symmetry_group, degrees_about};
    use crate::config::DEFAULT_GROUP_SIZE_CAP;
    use crate::error::SymmetryError;
    use nalgebra::{Matrix4, Rotation3, Vector3};
    use std::collections::HashSet;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn cube_vertices() -> Vec<Vector3<f64>> {
        let mut vertices = Vec::new();
        for x in [0.5, -0.5] {
            for y in [0.5, -0.5] {
                for z in [0.5, -0.5] {
                    vertices.push(Vector3::new(x, y, z));
                }
            }
        }
        vertices
    }

    fn cube_generators(vertices: &[Vector3<f64>]) -> Vec<Motion> {
        let matrices = [
            Rotation3::from_axis_angle(&Vector3::x_axis(), FRAC_PI_2).to_homogeneous(),
            Rotation3::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2).to_homogeneous(),
            Matrix4::new_nonuniform_scaling(&Vector3::new(1.0, -1.0, 1.0)),
        ];
        matrices
            .iter()
            .map(|m| motion_from_matrix(vertices, m).unwrap())
            .collect()
    }

    fn square_vertices() -> Vec<Vector3<f64>> {
        vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, -1.0),
        ]
    }

    // ==================== Closure ====================

    #[test]
    fn test_square_group() {
        let vertices = square_vertices();
        let generators = vec![
            Motion::new(vec![1, 2, 3, 0]).unwrap(),
            Motion::new(vec![0, 3, 2, 1]).unwrap(),
        ];
        let group = compute_symmetry_group(&vertices, &generators, DEFAULT_GROUP_SIZE_CAP).unwrap();

        assert_eq!(group.order(), 8);
        assert!(group.identity().is_identity());
        assert_eq!(&group.elements()[1], &generators[0]);
        assert_eq!(&group.elements()[2], &generators[1]);
    }

    #[test]
    fn test_cube_group_is_closed() {
        let vertices = cube_vertices();
        let group =
            compute_symmetry_group(&vertices, &cube_generators(&vertices), DEFAULT_GROUP_SIZE_CAP)
                .unwrap();
        assert_eq!(group.order(), 48);

        let elements: HashSet<&Motion> = group.elements().iter().collect();
        assert_eq!(elements.len(), 48, "Group should hold no duplicates");

        for a in group.elements() {
            assert!(is_isometry(&vertices, a));
            assert!(group.contains(&a.invert()));
            for b in group.elements() {
                assert!(elements.contains(&a.compose(b).unwrap()));
            }
        }
    }

    #[test]
    fn test_no_generators_gives_trivial_group() {
        let vertices = square_vertices();
        let group = compute_symmetry_group(&vertices, &[], DEFAULT_GROUP_SIZE_CAP).unwrap();
        assert_eq!(group.order(), 1);
        assert!(group.axes().unwrap().is_empty());
        assert!(group.reflective_normals().unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_generators_are_skipped() {
        let vertices = square_vertices();
        let quarter = Motion::new(vec![1, 2, 3, 0]).unwrap();
        let generators = vec![quarter.clone(), quarter.clone(), Motion::identity(4)];
        let group = compute_symmetry_group(&vertices, &generators, DEFAULT_GROUP_SIZE_CAP).unwrap();
        assert_eq!(group.order(), 4);
    }

    #[test]
    fn test_cap_exceeded() {
        let vertices = cube_vertices();
        let result = compute_symmetry_group(&vertices, &cube_generators(&vertices), 20);
        assert_eq!(result.unwrap_err(), SymmetryError::GroupTooLarge { cap: 20 });
    }

    #[test]
    fn test_generator_length_mismatch() {
        let vertices = square_vertices();
        let result = compute_symmetry_group(&vertices, &[Motion::identity(3)], 10);
        assert_eq!(
            result.unwrap_err(),
            SymmetryError::DimensionMismatch {
                expected: 4,
                found: 3
            }
        );
    }

    // ==================== Extraction ====================

    #[test]
    fn test_cube_axes_and_normals() {
        let vertices = cube_vertices();
        let group =
            compute_symmetry_group(&vertices, &cube_generators(&vertices), DEFAULT_GROUP_SIZE_CAP)
                .unwrap();

        // 3 fourfold, 4 threefold, 6 twofold
        assert_eq!(group.axes().unwrap().len(), 13);
        // 3 coordinate planes, 6 diagonal planes
        assert_eq!(group.reflective_normals().unwrap().len(), 9);

        let classified = group.classify_elements().unwrap();
        assert_eq!(classified.len(), 48);
        assert!(classified[0].classification.is_identity());
    }

    #[test]
    fn test_axis_deduplication() {
        // Quarter, half and three-quarter turns share one axis
        let vertices = square_vertices();
        let generators = vec![Motion::new(vec![1, 2, 3, 0]).unwrap()];
        let group = compute_symmetry_group(&vertices, &generators, 10).unwrap();

        let rotations = group
            .classify_elements()
            .unwrap()
            .iter()
            .filter(|e| e.classification.as_rotation().is_some())
            .count();
        assert_eq!(rotations, 3);
        assert_eq!(group.axes().unwrap().len(), 1);
        assert_eq!(group.rotation_options(&Vector3::y()).unwrap(), vec![-90, 90, 180]);
    }

    #[test]
    fn test_cube_rotation_options() {
        let vertices = cube_vertices();
        let group =
            compute_symmetry_group(&vertices, &cube_generators(&vertices), DEFAULT_GROUP_SIZE_CAP)
                .unwrap();

        assert_eq!(group.rotation_options(&Vector3::y()).unwrap(), vec![-90, 90, 180]);
        assert_eq!(
            group.rotation_options(&Vector3::new(1.0, 1.0, 1.0)).unwrap(),
            vec![-120, 120]
        );
        // Antiparallel axis reports the same set with signs flipped
        assert_eq!(
            group.rotation_options(&Vector3::new(-1.0, -1.0, -1.0)).unwrap(),
            vec![-120, 120]
        );
        assert!(group
            .rotation_options(&Vector3::new(1.0, 2.0, 0.0))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_degrees_about_flips_sign_for_antiparallel_axis() {
        let quarter_turn = Rotation3::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2).to_homogeneous();
        let classification = explain_matrix(&quarter_turn).unwrap();
        let rotation = classification.as_rotation().expect("Should be a rotation");

        assert_eq!(degrees_about(rotation, &Vector3::y()), Some(90));
        assert_eq!(degrees_about(rotation, &(-Vector3::y())), Some(-90));
        assert_eq!(degrees_about(rotation, &Vector3::new(0.0, -3.0, 0.0)), Some(-90));
        assert_eq!(degrees_about(rotation, &Vector3::x()), None);
    }

    #[test]
    fn test_degrees_about_half_turn_stays_positive() {
        let half_turn = Rotation3::from_axis_angle(&Vector3::x_axis(), PI).to_homogeneous();
        let classification = explain_matrix(&half_turn).unwrap();
        let rotation = classification.as_rotation().expect("Should be a rotation");

        assert_eq!(degrees_about(rotation, &Vector3::x()), Some(180));
        assert_eq!(degrees_about(rotation, &(-Vector3::x())), Some(180));
    }

    #[test]
    fn test_matrix_of_element() {
        let vertices = square_vertices();
        let generators = vec![Motion::new(vec![1, 2, 3, 0]).unwrap()];
        let group = compute_symmetry_group(&vertices, &generators, 10).unwrap();

        let matrix = group.matrix_of(&generators[0]).unwrap();
        let motion = motion_from_matrix(&vertices, &matrix).unwrap();
        assert_eq!(motion, generators[0]);

        let not_isometry = Motion::new(vec![1, 0, 2, 3]).unwrap();
        assert!(matches!(
            group.matrix_of(&not_isometry),
            Err(SymmetryError::InvalidPermutation(_))
        ));
    }
}
