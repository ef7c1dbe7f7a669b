//! The dense matrix container and the sequential multiplier.
//!
//! [`Matrix`] owns a flat row-major buffer; [`sequential`] holds the
//! reference multiplication the parallel path is checked against.

pub mod sequential;

use crate::error::{Error, Result};

/// A dense row-major matrix of `i32` values.
///
/// The buffer always holds exactly `rows * columns` elements and never
/// resizes after construction. A `Matrix` exclusively owns its buffer and
/// is deliberately move-only: multiplication borrows its operands and
/// returns a fresh value, so nothing here ever needs a copy.
///
/// During a parallel multiplication the inputs are shared read-only and
/// the output buffer is write-partitioned by row; see
/// [`threaded::row_claim`](crate::threaded::row_claim).
#[derive(Debug, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// Allocates a zero-filled `rows` x `columns` matrix.
    ///
    /// Fails with [`Error::Allocation`] when either dimension is zero or
    /// the element count overflows `usize`.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        let len = rows
            .checked_mul(columns)
            .filter(|&len| len > 0)
            .ok_or(Error::Allocation { rows, columns })?;
        Ok(Self {
            rows,
            columns,
            data: vec![0; len],
        })
    }

    /// Wraps an existing row-major buffer without copying it.
    ///
    /// Fails with [`Error::BufferLength`] when `data.len()` is not exactly
    /// `rows * columns`, and with [`Error::Allocation`] on a zero or
    /// overflowing shape.
    pub fn from_vec(rows: usize, columns: usize, data: Vec<i32>) -> Result<Self> {
        let expected = rows
            .checked_mul(columns)
            .filter(|&len| len > 0)
            .ok_or(Error::Allocation { rows, columns })?;
        if data.len() != expected {
            return Err(Error::BufferLength {
                rows,
                columns,
                len: data.len(),
            });
        }
        Ok(Self {
            rows,
            columns,
            data,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Reads the element at (`row`, `column`).
    ///
    /// Fails with [`Error::OutOfRange`] instead of panicking, so callers
    /// holding untrusted indices get a typed error.
    pub fn get(&self, row: usize, column: usize) -> Result<i32> {
        self.check_bounds(row, column)?;
        Ok(self.data[row * self.columns + column])
    }

    /// Writes `value` at (`row`, `column`).
    ///
    /// Fails with [`Error::OutOfRange`] when the position is outside the
    /// matrix.
    pub fn set(&mut self, row: usize, column: usize, value: i32) -> Result<()> {
        self.check_bounds(row, column)?;
        self.data[row * self.columns + column] = value;
        Ok(())
    }

    /// Borrows row `row` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()`. Row access sits on the multiplication
    /// hot path, where an out-of-bounds row is a bug, not an input error.
    pub fn row(&self, row: usize) -> &[i32] {
        assert!(
            row < self.rows,
            "row {} is out of bounds (max: {})",
            row,
            self.rows - 1
        );
        &self.data[row * self.columns..(row + 1) * self.columns]
    }

    /// Mutably borrows row `row` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()`.
    pub fn row_mut(&mut self, row: usize) -> &mut [i32] {
        assert!(
            row < self.rows,
            "row {} is out of bounds (max: {})",
            row,
            self.rows - 1
        );
        let columns = self.columns;
        &mut self.data[row * columns..(row + 1) * columns]
    }

    /// The whole buffer in row-major order.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// The whole buffer, mutable. Used by the parallel path to hand out
    /// disjoint row slices.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    fn check_bounds(&self, row: usize, column: usize) -> Result<()> {
        if row >= self.rows || column >= self.columns {
            return Err(Error::OutOfRange {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }
}
