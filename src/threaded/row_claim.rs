//! The parallel multiplier: scoped workers pulling rows from a shared
//! cursor.

use std::slice;
use std::thread;

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::matrix::sequential::{self, multiply_row_into};
use crate::threaded::row_cursor::RowCursor;

/// Shared handle to the output buffer, handing out one row slice per
/// claimed index.
///
/// Soundness rests on the write-partitioning protocol: row indices come
/// from a [`RowCursor`], which yields each index exactly once, and
/// row-major rows never overlap, so no two workers can ever hold slices
/// over the same memory.
struct OutputRows {
    base: *mut i32,
    columns: usize,
}

// The raw pointer only ever becomes disjoint row slices, one per cursor
// claim, and the buffer is not read again until every worker has joined.
unsafe impl Send for OutputRows {}
unsafe impl Sync for OutputRows {}

impl OutputRows {
    /// Borrows the claimed row for writing.
    ///
    /// # Safety
    ///
    /// `row` must be a fresh claim from the job's [`RowCursor`], so that
    /// no other live slice covers the same row.
    unsafe fn claimed_row(&self, row: usize) -> &mut [i32] {
        unsafe { slice::from_raw_parts_mut(self.base.add(row * self.columns), self.columns) }
    }
}

/// One worker: claim a row, compute it, repeat until the cursor runs dry.
fn row_worker(a: &Matrix, b: &Matrix, cursor: &RowCursor, out: &OutputRows) {
    while let Some(row) = cursor.claim() {
        // SAFETY: `row` was just claimed, and the cursor hands each index
        // out exactly once.
        let out_row = unsafe { out.claimed_row(row) };
        multiply_row_into(a, b, row, out_row);
    }
}

/// Multiplies `a` by `b` across `worker_count` threads.
///
/// Workers pull row indices from a shared [`RowCursor`] and write disjoint
/// rows of the result, so the distribution balances itself: a worker that
/// finishes early just claims another row. Which worker computes which row
/// is nondeterministic; the result is not, because rows are independent
/// and each row's formula is deterministic.
///
/// `worker_count` is taken literally, with no cap at the hardware
/// parallelism. Counts above the row count leave the extra workers
/// claiming nothing, which is harmless. A count of 1 runs the sequential
/// multiplier on the calling thread without spawning.
///
/// The threads are spawned fresh for this call and all of them are joined
/// before it returns; no partially-computed matrix ever escapes.
///
/// # Errors
///
/// [`Error::InvalidArgument`] for a zero `worker_count` and
/// [`Error::IncompatibleShapes`] when `a.columns() != b.rows()`, both
/// checked before any allocation or spawn; [`Error::WorkerPanicked`] if
/// any worker dies before finishing its rows.
pub fn parallel_multiply(a: &Matrix, b: &Matrix, worker_count: usize) -> Result<Matrix> {
    if worker_count == 0 {
        return Err(Error::InvalidArgument(
            "worker count must be at least 1".to_string(),
        ));
    }
    if a.columns() != b.rows() {
        return Err(Error::IncompatibleShapes(
            a.rows(),
            a.columns(),
            b.rows(),
            b.columns(),
        ));
    }
    if worker_count == 1 {
        return sequential::multiply(a, b);
    }

    let mut result = Matrix::new(a.rows(), b.columns())?;
    let rows = result.rows();
    let columns = result.columns();

    let cursor = RowCursor::new(rows);
    let out = OutputRows {
        base: result.as_mut_slice().as_mut_ptr(),
        columns,
    };

    let panicked = thread::scope(|s| {
        let handles: Vec<_> = (0..worker_count)
            .map(|_| s.spawn(|| row_worker(a, b, &cursor, &out)))
            .collect();

        let mut panicked = 0;
        for handle in handles {
            if handle.join().is_err() {
                panicked += 1;
            }
        }
        panicked
    });

    if panicked > 0 {
        return Err(Error::WorkerPanicked {
            panicked,
            spawned: worker_count,
        });
    }

    Ok(result)
}
