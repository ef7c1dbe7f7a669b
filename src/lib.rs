//! Parallel integer matrix multiplication, built from scratch.
//!
//! I wrote this to see how far plain `std::thread` gets you when the work
//! is distributed well. The interesting part is the row cursor: instead
//! of slicing the output into fixed blocks up front, workers pull row
//! indices from a shared atomic counter, so a thread that gets a cheap
//! row just claims another one and nobody sits idle at the end.
//!
//! ## Usage
//!
//! ```
//! use parmul::{Matrix, multiply};
//!
//! let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4])?;
//! let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8])?;
//!
//! let c = multiply(&a, &b)?;
//! assert_eq!(c.as_slice(), &[19, 22, 43, 50]);
//! # Ok::<(), parmul::Error>(())
//! ```
//!
//! Hand the same job to threads with [`parallel_multiply`]:
//!
//! ```
//! use parmul::{Matrix, parallel_multiply};
//!
//! let a = Matrix::new(100, 80)?;
//! let b = Matrix::new(80, 60)?;
//!
//! let c = parallel_multiply(&a, &b, 4)?;
//! assert_eq!((c.rows(), c.columns()), (100, 60));
//! # Ok::<(), parmul::Error>(())
//! ```
//!
//! ## What's inside
//!
//! - A move-only dense [`Matrix`] over a flat row-major `i32` buffer
//! - A sequential reference multiplier the tests trust
//! - A pull-based parallel multiplier over plain `std::thread` workers
//! - Text-file I/O and a small CLI (`src/main.rs`) wired to all of it

pub mod error;
pub mod io;
pub mod matrix;
pub mod threaded;

pub use error::{Error, Result};
pub use matrix::Matrix;
pub use matrix::sequential::multiply;
pub use threaded::row_claim::parallel_multiply;
