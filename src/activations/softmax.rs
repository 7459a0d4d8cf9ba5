//! Row-wise softmax and its Jacobian-based backward pass.
//!
//! Every output of a softmax row depends on every input of that row, so the
//! backward pass multiplies each incoming gradient row by the full `C x C`
//! Jacobian of that row instead of scaling element by element. This makes it
//! `O(R * C^2)` where the elementwise activations are `O(R * C)`.

use log::debug;
use ndarray::{Array2, ArrayView2, Axis};

use crate::error::{ensure_same_shape, ActivationError, Result};

/// Softmax over each row independently.
///
/// `out[j] = exp(x[j]) / sum_k exp(x[k])`. If a row's exponentials sum to
/// exactly zero the whole row is set to zero. The row maximum is *not*
/// subtracted first, so large inputs overflow to `inf`/`NaN` and that
/// propagates to the output.
pub fn forward_softmax(matrix: &Array2<f64>) -> Array2<f64> {
    let mut activated = matrix.mapv(f64::exp);

    for (i, mut row) in activated.outer_iter_mut().enumerate() {
        let sum = row.sum();
        if sum == 0.0 {
            debug!("softmax row {} has a zero exponential sum, emitting zeros", i);
            row.fill(0.0);
        } else {
            row.mapv_inplace(|e| e / sum);
        }
    }

    activated
}

/// Jacobian of the softmax for a single activated row.
///
/// `out_row` must be a `1 x C` matrix. Returns the `C x C` matrix
/// `diag(out_row) - out_row^T * out_row`, i.e.
/// `J[i][j] = out_row[j] * (delta_ij - out_row[i])`.
pub fn softmax_jacobian(out_row: ArrayView2<f64>) -> Result<Array2<f64>> {
    if out_row.nrows() != 1 {
        return Err(ActivationError::InvalidShape(format!(
            "softmax Jacobian expects a single row, got {}x{}",
            out_row.nrows(),
            out_row.ncols()
        )));
    }

    let diagonal = Array2::from_diag(&out_row.row(0));
    let outer = out_row.t().dot(&out_row);
    Ok(diagonal - outer)
}

/// Backward pass of the softmax.
///
/// For each row `i`, `grad[i] = prev_grad[i] * J(out[i])` where `prev_grad[i]`
/// is taken as a `1 x C` row vector.
pub fn backward_softmax(out: &Array2<f64>, prev_grad: &Array2<f64>) -> Result<Array2<f64>> {
    ensure_same_shape(out.shape(), prev_grad.shape())?;

    let mut grad = Array2::<f64>::zeros(out.raw_dim());
    for ((mut grad_row, out_row), prev_row) in grad
        .outer_iter_mut()
        .zip(out.outer_iter())
        .zip(prev_grad.outer_iter())
    {
        let jacobian = softmax_jacobian(out_row.insert_axis(Axis(0)))?;
        let product = prev_row.insert_axis(Axis(0)).dot(&jacobian);
        grad_row.assign(&product.row(0));
    }

    Ok(grad)
}
