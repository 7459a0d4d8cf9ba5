pub mod gradient_check;
pub mod numerical_check;

pub use gradient_check::{check_gradient, GradientCheckConfig, GradientCheckReport};
pub use numerical_check::{check_matrix, ensure_finite, NumericalIssue};
