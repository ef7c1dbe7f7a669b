//! The shared cursor that hands out output rows to workers.

use std::sync::atomic::{AtomicUsize, Ordering};

/// A claim counter over the row indices `0..rows`.
///
/// Every call to [`claim`](Self::claim) hands out the next unclaimed row
/// index; across all threads, each index in the range is handed out
/// exactly once and in increasing order. Once the range is exhausted,
/// every further claim returns `None`. One cursor lives for exactly one
/// multiplication call.
#[derive(Debug)]
pub struct RowCursor {
    next: AtomicUsize,
    rows: usize,
}

impl RowCursor {
    /// A fresh cursor over `0..rows`, starting at row 0.
    pub fn new(rows: usize) -> Self {
        Self {
            next: AtomicUsize::new(0),
            rows,
        }
    }

    /// Claims the next row, or `None` when all rows are handed out.
    ///
    /// Relaxed ordering is enough: the claim only has to be unique, and
    /// the join at the end of the multiplication publishes the row
    /// contents themselves. The counter can run past `rows` by one per
    /// exhausted claimant, bounded by the worker count.
    pub fn claim(&self) -> Option<usize> {
        let row = self.next.fetch_add(1, Ordering::Relaxed);
        (row < self.rows).then_some(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn claims_every_row_in_order_then_runs_dry() {
        let cursor = RowCursor::new(3);
        assert_eq!(cursor.claim(), Some(0));
        assert_eq!(cursor.claim(), Some(1));
        assert_eq!(cursor.claim(), Some(2));
        assert_eq!(cursor.claim(), None);
        assert_eq!(cursor.claim(), None);
    }

    #[test]
    fn empty_cursor_never_yields() {
        let cursor = RowCursor::new(0);
        assert_eq!(cursor.claim(), None);
    }

    #[test]
    fn concurrent_claimants_get_each_row_exactly_once() {
        let rows = 1000;
        let cursor = RowCursor::new(rows);
        let markers: Vec<AtomicUsize> = (0..rows).map(|_| AtomicUsize::new(0)).collect();

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    while let Some(row) = cursor.claim() {
                        markers[row].fetch_add(1, Ordering::Relaxed);
                    }
                });
            }
        });

        for (row, marker) in markers.iter().enumerate() {
            assert_eq!(
                marker.load(Ordering::Relaxed),
                1,
                "row {row} was not claimed exactly once"
            );
        }
    }

    #[test]
    fn more_claimants_than_rows_is_harmless() {
        let rows = 4;
        let cursor = RowCursor::new(rows);
        let markers: Vec<AtomicUsize> = (0..rows).map(|_| AtomicUsize::new(0)).collect();

        thread::scope(|s| {
            for _ in 0..16 {
                s.spawn(|| {
                    while let Some(row) = cursor.claim() {
                        markers[row].fetch_add(1, Ordering::Relaxed);
                    }
                });
            }
        });

        for (row, marker) in markers.iter().enumerate() {
            assert_eq!(
                marker.load(Ordering::Relaxed),
                1,
                "row {row} was not claimed exactly once"
            );
        }
    }
}
