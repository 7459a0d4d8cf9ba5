//! # neuract - Activation Layer for Feed-Forward Networks
//!
//! neuract implements the activation functions of a dense feed-forward
//! network together with their backward passes. A layer computes its
//! pre-activation output elsewhere, runs [`forward_activate`] on it, keeps the
//! result, and later hands that cached output back to [`backward_activate`]
//! with the gradient coming from the next layer.
//!
//! ## Key Features
//!
//! - **Six activations**: Linear, Logistic, Tanh, ReLU, LeakyReLU and Softmax
//! - **Jacobian-based softmax backward**: each row's gradient is multiplied by
//!   the full softmax Jacobian of that row
//! - **Shape-checked backward passes**: mismatched shapes are rejected with
//!   [`ActivationError::DimensionMismatch`], never broadcast or truncated
//! - **Gradient checking**: finite-difference verification in [`debug`]
//!
//! ## Quick Start
//!
//! ```rust
//! use neuract::{backward_activate, forward_activate, ActivationKind};
//! use ndarray::array;
//!
//! let logits = array![[1.0, 2.0, 3.0]];
//! let probs = forward_activate(&logits, ActivationKind::Softmax);
//! assert!((probs.sum() - 1.0).abs() < 1e-12);
//!
//! let upstream = array![[0.0, 0.0, 1.0]];
//! let grad = backward_activate(&probs, &upstream, ActivationKind::Softmax)?;
//! assert_eq!(grad.dim(), (1, 3));
//! # Ok::<(), neuract::ActivationError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - Activation kinds, dispatch and the individual forward/backward functions
//! - [`debug`] - Finite-difference gradient checks and non-finite value scanning
//! - [`error`] - Error types and result handling
//!
//! Matrices are `ndarray::Array2<f64>`. No function mutates its inputs; every
//! call returns a newly allocated matrix with the input's shape.

pub mod activations;
pub mod debug;
pub mod error;

pub use activations::{backward_activate, forward_activate, ActivationKind};
pub use error::{ActivationError, Result};
