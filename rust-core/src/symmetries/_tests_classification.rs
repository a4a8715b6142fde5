#[cfg(test)]
mod tests_classification {
    use super::super::classification::{
        canonical_direction, closely_equilinear, explain_matrix, radians_to_readable,
        Equilinearity, RotationSense, TransformationClassification,
    };
    use crate::error::SymmetryError;
    use approx::assert_relative_eq;
    use nalgebra::{Matrix3, Matrix4, Rotation3, Unit, Vector3};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn rotation(axis: Vector3<f64>, angle: f64) -> Matrix4<f64> {
        Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle).to_homogeneous()
    }

    fn householder(normal: Vector3<f64>) -> Matrix4<f64> {
        let n = normal.normalize();
        (Matrix3::identity() - 2.0 * n * n.transpose()).to_homogeneous()
    }

    // ==================== Identity ====================

    #[test]
    fn test_identity_short_circuit() {
        let result = explain_matrix(&Matrix4::identity()).unwrap();
        assert_eq!(result, TransformationClassification::Identity);
        assert_eq!(result.step_count(), 0);
    }

    #[test]
    fn test_near_identity() {
        let almost = rotation(Vector3::z(), 1e-9);
        assert!(explain_matrix(&almost).unwrap().is_identity());
    }

    // ==================== Rotations ====================

    #[test]
    fn test_quarter_turn_about_y() {
        let result = explain_matrix(&rotation(Vector3::y(), FRAC_PI_2)).unwrap();
        let rotation = result.as_rotation().expect("Should be a rotation");

        assert_relative_eq!(rotation.axis, Vector3::y(), epsilon = 1e-9);
        assert_relative_eq!(rotation.theta, FRAC_PI_2, epsilon = 1e-9);
        assert_eq!(rotation.sense, RotationSense::CounterClockwise);
        assert_eq!(result.step_count(), 1);
    }

    #[test]
    fn test_negative_axis_is_canonicalized() {
        let result = explain_matrix(&rotation(-Vector3::z(), FRAC_PI_2)).unwrap();
        let rotation = result.as_rotation().expect("Should be a rotation");

        assert_relative_eq!(rotation.axis, Vector3::z(), epsilon = 1e-9);
        assert_relative_eq!(rotation.theta, -FRAC_PI_2, epsilon = 1e-9);
        assert_eq!(rotation.sense, RotationSense::Clockwise);
    }

    #[test]
    fn test_half_turn_angle_is_positive() {
        let result = explain_matrix(&rotation(Vector3::x(), PI)).unwrap();
        let rotation = result.as_rotation().expect("Should be a rotation");

        assert_relative_eq!(rotation.axis, Vector3::x(), epsilon = 1e-9);
        assert_relative_eq!(rotation.theta, PI, epsilon = 1e-9);
    }

    #[test]
    fn test_body_diagonal_rotation() {
        let axis = Vector3::new(1.0, 1.0, 1.0);
        let matrix = rotation(axis, 2.0 * PI / 3.0);
        let result = explain_matrix(&matrix).unwrap();
        let rotation = result.as_rotation().expect("Should be a rotation");

        assert_relative_eq!(rotation.axis, axis.normalize(), epsilon = 1e-9);
        assert_relative_eq!(rotation.theta, 2.0 * PI / 3.0, epsilon = 1e-9);
        assert_relative_eq!(rotation.matrix, matrix, epsilon = 1e-9);
    }

    #[test]
    fn test_large_angle_wraps_into_range() {
        // 240° about y is -120° about y
        let result = explain_matrix(&rotation(Vector3::y(), 4.0 * PI / 3.0)).unwrap();
        let rotation = result.as_rotation().expect("Should be a rotation");

        assert_relative_eq!(rotation.axis, Vector3::y(), epsilon = 1e-9);
        assert_relative_eq!(rotation.theta, -2.0 * PI / 3.0, epsilon = 1e-9);
    }

    // ==================== Reflections ====================

    #[test]
    fn test_coordinate_plane_reflection() {
        let matrix = Matrix4::new_nonuniform_scaling(&Vector3::new(1.0, 1.0, -1.0));
        let result = explain_matrix(&matrix).unwrap();
        let reflection = result.as_reflection().expect("Should be a reflection");

        assert_relative_eq!(reflection.normal, Vector3::z(), epsilon = 1e-9);
        assert_relative_eq!(reflection.matrix, matrix, epsilon = 1e-12);
    }

    #[test]
    fn test_oblique_reflections() {
        let normals = [
            Vector3::new(1.0, -1.0, 0.0),
            Vector3::new(0.0, 1.0, 1.0),
            Vector3::new(0.0, 1.0, -1.0),
            Vector3::new(1.0, 2.0, -3.0),
            Vector3::new(-0.3, 0.5, 0.8),
        ];

        for normal in normals {
            let result = explain_matrix(&householder(normal)).unwrap();
            let reflection = result
                .as_reflection()
                .unwrap_or_else(|| panic!("Normal {:?} should give a reflection", normal));

            let expected = canonical_direction(&normal.normalize());
            assert_relative_eq!(reflection.normal, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_near_axis_reflections() {
        let normals = [
            Vector3::new(5e-4, 0.6, 0.8),
            Vector3::new(0.0, 5e-4, 1.0),
            Vector3::new(1.0, 2e-4, -3e-4),
            Vector3::new(-1e-5, 0.0, 1.0),
        ];

        for normal in normals {
            let result = explain_matrix(&householder(normal)).unwrap();
            assert_eq!(
                result.kind(),
                "reflection",
                "Normal {:?} should give a reflection, got {}",
                normal,
                result
            );

            let reflection = result.as_reflection().unwrap();
            let expected = canonical_direction(&normal.normalize());
            assert_relative_eq!(reflection.normal, expected, epsilon = 1e-9);
        }
    }

    // ==================== Rotoreflections ====================

    #[test]
    fn test_inversion_is_rotoreflection() {
        let inversion = Matrix4::new_nonuniform_scaling(&Vector3::new(-1.0, -1.0, -1.0));
        let result = explain_matrix(&inversion).unwrap();

        match &result {
            TransformationClassification::Rotoreflection {
                rotation,
                reflection,
            } => {
                assert_relative_eq!(rotation.theta.abs(), PI, epsilon = 1e-9);
                assert_relative_eq!(
                    rotation.matrix * reflection.matrix,
                    inversion,
                    epsilon = 1e-9
                );
            }
            other => panic!("Expected rotoreflection, got {:?}", other),
        }
        assert_eq!(result.step_count(), 2);
        assert_eq!(result.kind(), "rotoreflection");
    }

    #[test]
    fn test_rotoreflection_recomposes() {
        // Quarter turn about y after mirroring y
        let matrix = rotation(Vector3::y(), FRAC_PI_2)
            * Matrix4::new_nonuniform_scaling(&Vector3::new(1.0, -1.0, 1.0));
        let result = explain_matrix(&matrix).unwrap();

        match result {
            TransformationClassification::Rotoreflection {
                rotation,
                reflection,
            } => {
                assert_relative_eq!(
                    rotation.matrix * reflection.matrix,
                    matrix,
                    epsilon = 1e-9
                );
                assert_relative_eq!(reflection.normal.norm(), 1.0, epsilon = 1e-12);
            }
            other => panic!("Expected rotoreflection, got {:?}", other),
        }
    }

    // ==================== Validation ====================

    #[test]
    fn test_rejects_translation() {
        let mut matrix = Matrix4::identity();
        matrix[(0, 3)] = 1.0;
        assert!(matches!(
            explain_matrix(&matrix),
            Err(SymmetryError::InvalidTransform(_))
        ));
    }

    #[test]
    fn test_rejects_scaling() {
        let matrix = Matrix4::new_scaling(2.0);
        assert!(matches!(
            explain_matrix(&matrix),
            Err(SymmetryError::InvalidTransform(_))
        ));
    }

    #[test]
    fn test_rejects_nan() {
        let mut matrix = Matrix4::identity();
        matrix[(1, 1)] = f64::NAN;
        assert!(matches!(
            explain_matrix(&matrix),
            Err(SymmetryError::InvalidTransform(_))
        ));
    }

    // ==================== Helpers ====================

    #[test]
    fn test_closely_equilinear() {
        let axis = Vector3::new(0.0, 1.0, 2.0);
        assert_eq!(
            closely_equilinear(&(axis * 3.0), &axis),
            Equilinearity::Parallel
        );
        assert_eq!(
            closely_equilinear(&(-axis), &axis),
            Equilinearity::Antiparallel
        );
        assert_eq!(
            closely_equilinear(&Vector3::new(0.0, 1.0, 2.1), &axis),
            Equilinearity::Distinct
        );
        assert_eq!(
            closely_equilinear(&axis, &Vector3::zeros()),
            Equilinearity::Distinct
        );
        assert_eq!(Equilinearity::Antiparallel.sign(), -1);
    }

    #[test]
    fn test_canonical_direction() {
        assert_eq!(
            canonical_direction(&Vector3::new(0.0, -1.0, 1.0)),
            Vector3::new(0.0, 1.0, -1.0)
        );
        assert_eq!(
            canonical_direction(&Vector3::new(1.0, -1.0, 0.0)),
            Vector3::new(1.0, -1.0, 0.0)
        );
    }

    #[test]
    fn test_readable_output() {
        assert_eq!(radians_to_readable(2.0 * PI / 3.0), "120°");
        assert_eq!(radians_to_readable(-FRAC_PI_2), "-90°");

        let text = explain_matrix(&rotation(Vector3::y(), FRAC_PI_2))
            .unwrap()
            .to_string();
        assert!(
            text.starts_with("rotation by 90° about"),
            "Unexpected description: {}",
            text
        );
    }

    #[test]
    fn test_serialization_is_tagged() {
        let value = serde_json::to_value(TransformationClassification::Identity).unwrap();
        assert_eq!(value["type"], "identity");

        let reflection = explain_matrix(&householder(Vector3::x())).unwrap();
        let value = serde_json::to_value(&reflection).unwrap();
        assert_eq!(value["type"], "reflection");
    }
}
