use ndarray::{Array2, Zip};

use crate::error::{ensure_same_shape, Result};

/// Negative-side slope of the leaky ReLU.
pub const LEAKY_RELU_SLOPE: f64 = 0.01;

/// Identity activation, `f(x) = x`.
pub fn forward_linear(matrix: &Array2<f64>) -> Array2<f64> {
    matrix.clone()
}

/// Backward pass of the identity: the gradient passes through unchanged.
pub fn backward_linear(out: &Array2<f64>, prev_grad: &Array2<f64>) -> Result<Array2<f64>> {
    ensure_same_shape(out.shape(), prev_grad.shape())?;
    Ok(prev_grad.clone())
}

/// Logistic (sigmoid) activation, `f(x) = 1 / (1 + e^(-x))`.
pub fn forward_logistic(matrix: &Array2<f64>) -> Array2<f64> {
    matrix.mapv(logistic)
}

/// Backward pass of the logistic activation, using `f' = out * (1 - out)`.
pub fn backward_logistic(out: &Array2<f64>, prev_grad: &Array2<f64>) -> Result<Array2<f64>> {
    backward_elementwise(out, prev_grad, logistic_derivative)
}

/// Hyperbolic tangent activation.
pub fn forward_tanh(matrix: &Array2<f64>) -> Array2<f64> {
    matrix.mapv(f64::tanh)
}

/// Backward pass of tanh, using `f' = 1 - out^2`.
pub fn backward_tanh(out: &Array2<f64>, prev_grad: &Array2<f64>) -> Result<Array2<f64>> {
    backward_elementwise(out, prev_grad, tanh_derivative)
}

/// Rectified linear unit, `f(x) = max(x, 0)`.
pub fn forward_relu(matrix: &Array2<f64>) -> Array2<f64> {
    matrix.mapv(relu)
}

/// Backward pass of ReLU.
///
/// The derivative is read from the activated value: `0` where `out < 0`,
/// `1` otherwise. An activated value of exactly `0` therefore passes the
/// gradient through.
pub fn backward_relu(out: &Array2<f64>, prev_grad: &Array2<f64>) -> Result<Array2<f64>> {
    backward_elementwise(out, prev_grad, relu_derivative)
}

/// Leaky ReLU with slope [`LEAKY_RELU_SLOPE`] for non-positive inputs.
pub fn forward_leaky_relu(matrix: &Array2<f64>) -> Array2<f64> {
    matrix.mapv(leaky_relu)
}

/// Backward pass of the leaky ReLU: [`LEAKY_RELU_SLOPE`] where `out < 0`, `1` otherwise.
pub fn backward_leaky_relu(out: &Array2<f64>, prev_grad: &Array2<f64>) -> Result<Array2<f64>> {
    backward_elementwise(out, prev_grad, leaky_relu_derivative)
}

/// `grad[i][j] = prev_grad[i][j] * derivative(out[i][j])`, after checking shapes.
fn backward_elementwise<F>(
    out: &Array2<f64>,
    prev_grad: &Array2<f64>,
    derivative: F,
) -> Result<Array2<f64>>
where
    F: Fn(f64) -> f64,
{
    ensure_same_shape(out.shape(), prev_grad.shape())?;
    Ok(Zip::from(prev_grad)
        .and(out)
        .map_collect(|&grad, &activated| grad * derivative(activated)))
}

#[inline]
pub(crate) fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[inline]
pub(crate) fn logistic_derivative(y: f64) -> f64 {
    y * (1.0 - y)
}

#[inline]
pub(crate) fn tanh_derivative(y: f64) -> f64 {
    1.0 - y * y
}

#[inline]
pub(crate) fn relu(x: f64) -> f64 {
    if x > 0.0 {
        x
    } else {
        0.0
    }
}

#[inline]
pub(crate) fn relu_derivative(y: f64) -> f64 {
    if y < 0.0 {
        0.0
    } else {
        1.0
    }
}

#[inline]
pub(crate) fn leaky_relu(x: f64) -> f64 {
    if x > 0.0 {
        x
    } else {
        LEAKY_RELU_SLOPE * x
    }
}

#[inline]
pub(crate) fn leaky_relu_derivative(y: f64) -> f64 {
    if y < 0.0 {
        LEAKY_RELU_SLOPE
    } else {
        1.0
    }
}
