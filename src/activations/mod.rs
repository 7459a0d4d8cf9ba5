//! # Activation Functions Module
//!
//! Forward and backward passes of the activation functions applied to a
//! layer's pre-activation output. Every function borrows its input matrix
//! and returns a freshly allocated matrix of the same shape.
//!
//! ## Available Activations
//!
//! - **Linear**: Identity function - No transformation
//! - **Logistic** (sigmoid): `1 / (1 + e^(-x))` - Outputs between 0 and 1
//! - **Tanh**: Hyperbolic tangent - Outputs between -1 and 1
//! - **ReLU** (Rectified Linear Unit): `max(0, x)`
//! - **LeakyReLU**: ReLU with a fixed `0.01` negative slope
//! - **Softmax**: Row-wise normalized exponentials, backward via the per-row Jacobian
//!
//! ## Usage Example
//!
//! ```rust
//! use neuract::activations::{backward_activate, forward_activate, ActivationKind};
//! use ndarray::array;
//!
//! let pre_activation = array![[-2.0, 0.0, 2.0]];
//! let out = forward_activate(&pre_activation, ActivationKind::LeakyRelu);
//! assert_eq!(out, array![[-0.02, 0.0, 2.0]]);
//!
//! // Keep `out` around: the backward pass works from the activated values.
//! let upstream = array![[1.0, 1.0, 1.0]];
//! let grad = backward_activate(&out, &upstream, ActivationKind::LeakyRelu).unwrap();
//! assert_eq!(grad, array![[0.01, 1.0, 1.0]]);
//! ```
//!
//! ## Memoization Contract
//!
//! Backward functions take the *activated* output of the forward pass, not the
//! raw pre-activation. Callers cache the forward result and hand it back; the
//! crate never recomputes it.

pub mod functions;
pub mod softmax;

use std::fmt;
use std::str::FromStr;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{ActivationError, Result};

pub use functions::{
    backward_leaky_relu, backward_linear, backward_logistic, backward_relu, backward_tanh,
    forward_leaky_relu, forward_linear, forward_logistic, forward_relu, forward_tanh,
    LEAKY_RELU_SLOPE,
};
pub use softmax::{backward_softmax, forward_softmax, softmax_jacobian};

/// The activation function used by a layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivationKind {
    #[default]
    Linear,
    Logistic,
    Tanh,
    Relu,
    LeakyRelu,
    Softmax,
}

impl ActivationKind {
    /// Every activation kind, in declaration order.
    pub const ALL: [ActivationKind; 6] = [
        ActivationKind::Linear,
        ActivationKind::Logistic,
        ActivationKind::Tanh,
        ActivationKind::Relu,
        ActivationKind::LeakyRelu,
        ActivationKind::Softmax,
    ];

    /// Canonical configuration name.
    pub fn name(&self) -> &'static str {
        match self {
            ActivationKind::Linear => "linear",
            ActivationKind::Logistic => "logistic",
            ActivationKind::Tanh => "tanh",
            ActivationKind::Relu => "relu",
            ActivationKind::LeakyRelu => "leaky_relu",
            ActivationKind::Softmax => "softmax",
        }
    }

    /// Whether each output element depends only on the matching input element.
    pub fn is_elementwise(&self) -> bool {
        !matches!(self, ActivationKind::Softmax)
    }

    /// Apply the activation to a pre-activation matrix.
    pub fn forward(&self, matrix: &Array2<f64>) -> Array2<f64> {
        match self {
            ActivationKind::Linear => forward_linear(matrix),
            ActivationKind::Logistic => forward_logistic(matrix),
            ActivationKind::Tanh => forward_tanh(matrix),
            ActivationKind::Relu => forward_relu(matrix),
            ActivationKind::LeakyRelu => forward_leaky_relu(matrix),
            ActivationKind::Softmax => forward_softmax(matrix),
        }
    }

    /// Turn the gradient w.r.t. the activated output into the gradient w.r.t.
    /// the pre-activation, given the cached activated output.
    pub fn backward(&self, out: &Array2<f64>, grad: &Array2<f64>) -> Result<Array2<f64>> {
        match self {
            ActivationKind::Linear => backward_linear(out, grad),
            ActivationKind::Logistic => backward_logistic(out, grad),
            ActivationKind::Tanh => backward_tanh(out, grad),
            ActivationKind::Relu => backward_relu(out, grad),
            ActivationKind::LeakyRelu => backward_leaky_relu(out, grad),
            ActivationKind::Softmax => backward_softmax(out, grad),
        }
    }

    /// Scalar form of an elementwise activation. `None` for softmax.
    pub fn apply_scalar(&self, x: f64) -> Option<f64> {
        match self {
            ActivationKind::Linear => Some(x),
            ActivationKind::Logistic => Some(functions::logistic(x)),
            ActivationKind::Tanh => Some(x.tanh()),
            ActivationKind::Relu => Some(functions::relu(x)),
            ActivationKind::LeakyRelu => Some(functions::leaky_relu(x)),
            ActivationKind::Softmax => None,
        }
    }

    /// Local derivative expressed in terms of the activated value `y`. `None` for softmax.
    pub fn derivative_from_output(&self, y: f64) -> Option<f64> {
        match self {
            ActivationKind::Linear => Some(1.0),
            ActivationKind::Logistic => Some(functions::logistic_derivative(y)),
            ActivationKind::Tanh => Some(functions::tanh_derivative(y)),
            ActivationKind::Relu => Some(functions::relu_derivative(y)),
            ActivationKind::LeakyRelu => Some(functions::leaky_relu_derivative(y)),
            ActivationKind::Softmax => None,
        }
    }
}

impl fmt::Display for ActivationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivationKind {
    type Err = ActivationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "identity" => Ok(ActivationKind::Linear),
            "logistic" | "sigmoid" => Ok(ActivationKind::Logistic),
            "tanh" => Ok(ActivationKind::Tanh),
            "relu" => Ok(ActivationKind::Relu),
            "leaky_relu" | "lrelu" => Ok(ActivationKind::LeakyRelu),
            "softmax" => Ok(ActivationKind::Softmax),
            _ => Err(ActivationError::UnknownActivation(s.to_string())),
        }
    }
}

/// Run the activation `kind` over a pre-activation matrix.
pub fn forward_activate(matrix: &Array2<f64>, kind: ActivationKind) -> Array2<f64> {
    kind.forward(matrix)
}

/// Compute the gradient w.r.t. the pre-activation from the cached activated
/// output and the gradient flowing back from the next layer.
///
/// Fails with [`ActivationError::DimensionMismatch`] when `out` and `grad`
/// differ in shape.
pub fn backward_activate(
    out: &Array2<f64>,
    grad: &Array2<f64>,
    kind: ActivationKind,
) -> Result<Array2<f64>> {
    kind.backward(out, grad)
}
