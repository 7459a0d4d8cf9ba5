use ndarray::{Array2, ArrayView1, Axis};

use crate::activations::{forward_softmax, ActivationKind};
use crate::error::{ActivationError, Result};

/// Step size and acceptance threshold for finite-difference checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientCheckConfig {
    pub epsilon: f64,
    pub tolerance: f64,
}

impl Default for GradientCheckConfig {
    fn default() -> Self {
        GradientCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-5,
        }
    }
}

impl GradientCheckConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(ActivationError::invalid_parameter(
                "epsilon".to_string(),
                format!("must be finite and > 0, got {}", self.epsilon),
            ));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(ActivationError::invalid_parameter(
                "tolerance".to_string(),
                format!("must be finite and > 0, got {}", self.tolerance),
            ));
        }
        Ok(())
    }
}

/// Outcome of comparing an analytic backward pass against finite differences.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientCheckReport {
    pub kind: ActivationKind,
    pub max_abs_error: f64,
    /// Number of gradient entries compared.
    pub checked: usize,
    pub tolerance: f64,
}

impl GradientCheckReport {
    pub fn passed(&self) -> bool {
        self.max_abs_error <= self.tolerance
    }
}

/// Centered finite difference `(f(x + eps) - f(x - eps)) / (2 * eps)` of an
/// elementwise activation. `None` for softmax.
pub fn numerical_derivative(kind: ActivationKind, x: f64, epsilon: f64) -> Option<f64> {
    let plus = kind.apply_scalar(x + epsilon)?;
    let minus = kind.apply_scalar(x - epsilon)?;
    Some((plus - minus) / (2.0 * epsilon))
}

/// Finite-difference softmax Jacobian of one pre-activation row.
///
/// `N[i][j]` estimates `d out[j] / d x[i]`, the same orientation as
/// [`crate::activations::softmax_jacobian`].
pub fn numerical_softmax_jacobian(row: ArrayView1<f64>, epsilon: f64) -> Array2<f64> {
    let cols = row.len();
    let mut jacobian = Array2::<f64>::zeros((cols, cols));
    let mut shifted = row.to_owned().insert_axis(Axis(0));

    for i in 0..cols {
        let original = shifted[[0, i]];

        shifted[[0, i]] = original + epsilon;
        let plus = forward_softmax(&shifted);
        shifted[[0, i]] = original - epsilon;
        let minus = forward_softmax(&shifted);
        shifted[[0, i]] = original;

        for j in 0..cols {
            jacobian[[i, j]] = (plus[[0, j]] - minus[[0, j]]) / (2.0 * epsilon);
        }
    }

    jacobian
}

/// Compare `kind`'s backward pass at `input` against finite differences of its forward pass.
///
/// Elementwise kinds are checked with an all-ones upstream gradient. ReLU and
/// leaky ReLU entries within `epsilon` of the kink at zero are skipped, since a
/// centered difference straddling it does not estimate either one-sided
/// derivative. Softmax is checked row by row with every unit upstream vector.
pub fn check_gradient(
    kind: ActivationKind,
    input: &Array2<f64>,
    config: GradientCheckConfig,
) -> Result<GradientCheckReport> {
    config.validate()?;

    let mut max_abs_error: f64 = 0.0;
    let mut checked = 0;

    if kind.is_elementwise() {
        let out = kind.forward(input);
        let upstream = Array2::<f64>::ones(out.raw_dim());
        let analytic = kind.backward(&out, &upstream)?;
        let has_kink = matches!(kind, ActivationKind::Relu | ActivationKind::LeakyRelu);

        for (&x, &grad) in input.iter().zip(analytic.iter()) {
            if has_kink && x.abs() <= config.epsilon {
                continue;
            }
            if let Some(numeric) = numerical_derivative(kind, x, config.epsilon) {
                max_abs_error = max_abs_error.max((grad - numeric).abs());
                checked += 1;
            }
        }
    } else {
        for row in input.outer_iter() {
            let numeric = numerical_softmax_jacobian(row, config.epsilon);
            let out = kind.forward(&row.to_owned().insert_axis(Axis(0)));
            let cols = row.len();

            for k in 0..cols {
                let mut upstream = Array2::<f64>::zeros((1, cols));
                upstream[[0, k]] = 1.0;
                let analytic = kind.backward(&out, &upstream)?;

                // dL/dx[j] = sum_m upstream[m] * d out[m] / d x[j] = N[j][k]
                for j in 0..cols {
                    let error = (analytic[[0, j]] - numeric[[j, k]]).abs();
                    max_abs_error = max_abs_error.max(error);
                    checked += 1;
                }
            }
        }
    }

    Ok(GradientCheckReport {
        kind,
        max_abs_error,
        checked,
        tolerance: config.tolerance,
    })
}
