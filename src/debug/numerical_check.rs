use log::warn;
use ndarray::Array2;

use crate::error::{ActivationError, Result};

/// Types of numerical issues
#[derive(Debug, Clone, PartialEq)]
pub enum NumericalIssue {
    NaN { count: usize },
    Infinity { count: usize },
}

/// Count NaN and infinite entries of a matrix, logging a warning per kind found.
pub fn check_matrix(name: &str, matrix: &Array2<f64>) -> Vec<NumericalIssue> {
    let mut issues = Vec::new();
    let mut nan_count = 0;
    let mut inf_count = 0;

    for &value in matrix.iter() {
        if value.is_nan() {
            nan_count += 1;
        } else if value.is_infinite() {
            inf_count += 1;
        }
    }

    if nan_count > 0 {
        warn!("{}: found {} NaN values", name, nan_count);
        issues.push(NumericalIssue::NaN { count: nan_count });
    }
    if inf_count > 0 {
        warn!("{}: found {} infinite values", name, inf_count);
        issues.push(NumericalIssue::Infinity { count: inf_count });
    }

    issues
}

/// Fail with [`ActivationError::NumericalError`] if `matrix` has any non-finite entry.
///
/// The activations never reject non-finite values themselves (an overflowing
/// softmax propagates `NaN`); callers that need finite outputs opt in here.
pub fn ensure_finite(name: &str, matrix: &Array2<f64>) -> Result<()> {
    let issues = check_matrix(name, matrix);
    if issues.is_empty() {
        return Ok(());
    }

    let summary: Vec<String> = issues
        .iter()
        .map(|issue| match issue {
            NumericalIssue::NaN { count } => format!("{} NaN", count),
            NumericalIssue::Infinity { count } => format!("{} infinite", count),
        })
        .collect();
    Err(ActivationError::NumericalError(format!(
        "{} contains {}",
        name,
        summary.join(", ")
    )))
}
