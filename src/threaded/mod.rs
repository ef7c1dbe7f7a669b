//! The parallel multiplier and its row-distribution machinery.
//!
//! Work is distributed by pull, not by a static split: a shared
//! [`RowCursor`](row_cursor::RowCursor) hands out output row indices one
//! claim at a time, and every worker keeps claiming until the cursor runs
//! dry. A worker that lands on cheap rows simply claims more of them, so
//! load balances itself against scheduling noise.
//!
//! - `row_cursor`: the shared claim counter
//! - `row_claim`: the orchestrator and worker loop

pub mod row_claim;
pub mod row_cursor;
