#[cfg(test)]
mod property_tests {
    use neuract::activations::{forward_softmax, softmax_jacobian};
    use neuract::{backward_activate, forward_activate, ActivationError, ActivationKind};
    use ndarray::{Array2, Axis};
    use proptest::prelude::*;

    fn kind_strategy() -> impl Strategy<Value = ActivationKind> {
        prop::sample::select(ActivationKind::ALL.to_vec())
    }

    // Strategy for generating matrices with values in `range`
    fn matrix_strategy(range: std::ops::Range<f64>) -> impl Strategy<Value = Array2<f64>> {
        (1usize..=6, 1usize..=6).prop_flat_map(move |(rows, cols)| {
            prop::collection::vec(range.clone(), rows * cols)
                .prop_map(move |v| Array2::from_shape_vec((rows, cols), v).unwrap())
        })
    }

    proptest! {
        #[test]
        fn test_forward_and_backward_preserve_shape(
            kind in kind_strategy(),
            input in matrix_strategy(-20.0..20.0)
        ) {
            let out = forward_activate(&input, kind);
            prop_assert_eq!(out.dim(), input.dim());

            let grad = Array2::from_elem(out.dim(), 0.5);
            let back = backward_activate(&out, &grad, kind).unwrap();
            prop_assert_eq!(back.dim(), input.dim());
        }

        #[test]
        fn test_linear_identity(input in matrix_strategy(-1e6..1e6)) {
            let out = forward_activate(&input, ActivationKind::Linear);
            prop_assert_eq!(&out, &input);

            let grad = input.mapv(|v| v * 0.25 - 1.0);
            let back = backward_activate(&out, &grad, ActivationKind::Linear).unwrap();
            prop_assert_eq!(back, grad);
        }

        #[test]
        fn test_logistic_bounded_outputs(input in matrix_strategy(-30.0..30.0)) {
            let out = forward_activate(&input, ActivationKind::Logistic);
            for &val in out.iter() {
                prop_assert!(val > 0.0 && val < 1.0, "Logistic output out of bounds: {}", val);
            }
        }

        #[test]
        fn test_tanh_bounded_outputs(input in matrix_strategy(-15.0..15.0)) {
            let out = forward_activate(&input, ActivationKind::Tanh);
            for &val in out.iter() {
                prop_assert!(val > -1.0 && val < 1.0, "Tanh output out of bounds: {}", val);
            }
        }

        #[test]
        fn test_relu_non_negative(input in matrix_strategy(-100.0..100.0)) {
            let out = forward_activate(&input, ActivationKind::Relu);
            for (&x, &y) in input.iter().zip(out.iter()) {
                prop_assert!(y >= 0.0);
                if x > 0.0 {
                    prop_assert_eq!(y, x);
                } else {
                    prop_assert_eq!(y, 0.0);
                }
            }
        }

        #[test]
        fn test_leaky_relu_keeps_sign(input in matrix_strategy(-100.0..100.0)) {
            let out = forward_activate(&input, ActivationKind::LeakyRelu);
            for (&x, &y) in input.iter().zip(out.iter()) {
                if x > 0.0 {
                    prop_assert_eq!(y, x);
                } else {
                    prop_assert_eq!(y, 0.01 * x);
                }
            }
        }

        #[test]
        fn test_softmax_rows_sum_to_one(input in matrix_strategy(-50.0..50.0)) {
            let out = forward_softmax(&input);
            for row in out.outer_iter() {
                prop_assert!((row.sum() - 1.0).abs() < 1e-9, "row sum {}", row.sum());
                for &p in row.iter() {
                    prop_assert!((0.0..=1.0).contains(&p));
                }
            }
        }

        #[test]
        fn test_softmax_jacobian_symmetric(input in matrix_strategy(-10.0..10.0)) {
            let out = forward_softmax(&input);
            let row = out.row(0).insert_axis(Axis(0));
            let jacobian = softmax_jacobian(row).unwrap();
            let cols = out.ncols();

            prop_assert_eq!(jacobian.dim(), (cols, cols));
            for i in 0..cols {
                let r = out[[0, i]];
                prop_assert!((jacobian[[i, i]] - r * (1.0 - r)).abs() < 1e-12);
                for j in 0..cols {
                    prop_assert_eq!(jacobian[[i, j]], jacobian[[j, i]]);
                }
            }
        }

        #[test]
        fn test_backward_rejects_any_shape_mismatch(
            kind in kind_strategy(),
            out in matrix_strategy(-1.0..1.0),
            grad in matrix_strategy(-1.0..1.0)
        ) {
            let result = backward_activate(&out, &grad, kind);
            if out.dim() == grad.dim() {
                prop_assert!(result.is_ok());
            } else {
                let is_mismatch = matches!(result, Err(ActivationError::DimensionMismatch { .. }));
                prop_assert!(is_mismatch);
            }
        }
    }
}
