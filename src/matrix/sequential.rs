//! The sequential multiplier: the ground truth the parallel path is
//! measured against.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Multiplies `a` by `b` on the calling thread.
///
/// This is the textbook triple loop, one output row at a time. It is the
/// correctness baseline for
/// [`parallel_multiply`](crate::parallel_multiply) and the path trivial
/// worker counts fall back to; it makes no attempt at cache blocking.
///
/// Fails with [`Error::IncompatibleShapes`] when
/// `a.columns() != b.rows()`. Nothing is allocated on failure.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.columns() != b.rows() {
        return Err(Error::IncompatibleShapes(
            a.rows(),
            a.columns(),
            b.rows(),
            b.columns(),
        ));
    }

    let mut result = Matrix::new(a.rows(), b.columns())?;
    for row in 0..a.rows() {
        multiply_row_into(a, b, row, result.row_mut(row));
    }
    Ok(result)
}

/// Computes one output row: `out[j] = Σ_k a[row][k] * b[k][j]`.
///
/// Shared by the sequential loop above and by the worker threads, so both
/// paths produce bit-identical rows.
///
/// # Panics
///
/// Panics if `row` is outside `a`, if `a.columns() != b.rows()`, or if
/// `out` is shorter than `b.columns()`. Callers validate shapes before
/// computing.
pub fn multiply_row_into(a: &Matrix, b: &Matrix, row: usize, out: &mut [i32]) {
    let inner = a.columns();
    let columns = b.columns();
    let a_row = a.row(row);
    let b_data = b.as_slice();

    for j in 0..columns {
        let mut sum = 0;
        for k in 0..inner {
            sum += a_row[k] * b_data[k * columns + j];
        }
        out[j] = sum;
    }
}
