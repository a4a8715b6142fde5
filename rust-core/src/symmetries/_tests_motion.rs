#[cfg(test)]
mod tests_motion {
    use super::super::motion::Motion;
    use crate::error::SymmetryError;
    use nalgebra::Vector3;

    // ==================== Construction ====================

    #[test]
    fn test_new_accepts_bijection() {
        let motion = Motion::new(vec![2, 0, 1]).unwrap();
        assert_eq!(motion.permutation(), &[2, 0, 1]);
        assert_eq!(motion.len(), 3);
        assert!(!motion.is_empty());
    }

    #[test]
    fn test_new_rejects_repeated_index() {
        let result = Motion::new(vec![0, 0, 1]);
        assert!(matches!(result, Err(SymmetryError::InvalidPermutation(_))));
    }

    #[test]
    fn test_new_rejects_out_of_range_index() {
        let result = Motion::new(vec![0, 3, 1]);
        assert!(matches!(result, Err(SymmetryError::InvalidPermutation(_))));
    }

    #[test]
    fn test_identity() {
        let identity = Motion::identity(4);
        assert!(identity.is_identity());
        assert_eq!(identity.order(), 1);
        assert!(!Motion::new(vec![1, 0, 2, 3]).unwrap().is_identity());
    }

    // ==================== Composition ====================

    #[test]
    fn test_compose_applies_argument_first() {
        let a = Motion::new(vec![1, 2, 0]).unwrap();
        let b = Motion::new(vec![0, 2, 1]).unwrap();

        let ab = a.compose(&b).unwrap();
        // result[i] = a[b[i]]
        assert_eq!(ab.permutation(), &[1, 0, 2]);

        let ba = b.compose(&a).unwrap();
        assert_eq!(ba.permutation(), &[2, 1, 0]);
        assert_ne!(ab, ba, "Permutations of three points do not commute in general");
    }

    #[test]
    fn test_compose_with_identity() {
        let a = Motion::new(vec![3, 1, 0, 2]).unwrap();
        let identity = Motion::identity(4);
        assert_eq!(a.compose(&identity).unwrap(), a);
        assert_eq!(identity.compose(&a).unwrap(), a);
    }

    #[test]
    fn test_compose_length_mismatch() {
        let a = Motion::identity(3);
        let b = Motion::identity(4);
        assert_eq!(
            a.compose(&b),
            Err(SymmetryError::DimensionMismatch {
                expected: 3,
                found: 4
            })
        );
    }

    #[test]
    fn test_invert() {
        let a = Motion::new(vec![2, 0, 3, 1]).unwrap();
        let inverse = a.invert();
        assert!(a.compose(&inverse).unwrap().is_identity());
        assert!(inverse.compose(&a).unwrap().is_identity());
    }

    #[test]
    fn test_order_is_lcm_of_cycles() {
        // (0 1)(2 3 4)
        let motion = Motion::new(vec![1, 0, 3, 4, 2]).unwrap();
        assert_eq!(motion.order(), 6);

        let mut power = motion.clone();
        for _ in 1..6 {
            assert!(!power.is_identity());
            power = motion.compose(&power).unwrap();
        }
        assert!(power.is_identity());
    }

    #[test]
    fn test_apply() {
        let motion = Motion::new(vec![2, 0, 1]).unwrap();
        assert_eq!(motion.apply(0), Some(2));
        assert_eq!(motion.apply(2), Some(1));
        assert_eq!(motion.apply(3), None);
    }

    // ==================== Matrices ====================

    #[test]
    fn test_to_matrix_rejects_non_isometry() {
        let vertices = vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 2.0, 0.0),
            Vector3::new(0.0, -2.0, 0.0),
        ];
        // Swaps a short diagonal endpoint with a long one
        let motion = Motion::new(vec![2, 1, 0, 3]).unwrap();
        assert_eq!(motion.to_matrix(&vertices).unwrap(), None);
    }

    #[test]
    fn test_deserialize_rejects_invalid_permutation() {
        let repeated = serde_json::from_str::<Motion>(r#"{"permutation":[5,5]}"#);
        assert!(repeated.is_err(), "Repeated indices should not deserialize");

        let out_of_range = serde_json::from_str::<Motion>(r#"{"permutation":[0,2]}"#);
        assert!(out_of_range.is_err(), "Out-of-range indices should not deserialize");
    }

    #[test]
    fn test_serde_round_trip() {
        let motion = Motion::new(vec![1, 2, 0]).unwrap();
        let json = serde_json::to_string(&motion).unwrap();
        let back: Motion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, motion);
    }
}
