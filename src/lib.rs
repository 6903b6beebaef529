//! Commit and line-change totals from saved `git log --stat` output.
//!
//! The log is read once, line by line. Commit headers are counted, the
//! `N insertions(+)` / `N deletions(-)` figures of each diffstat summary are
//! summed, and any single diffstat line reaching the large-commit threshold
//! is reported together with the commit it belongs to.

pub mod cli;
pub mod error;
pub mod model;
pub mod patterns;
pub mod report;
pub mod scan;

pub use error::{Result, TallyError};
pub use model::{CommitContext, LargeCommit, ScanOptions, Totals, LARGE_COMMIT_THRESHOLD};
pub use scan::{scan, Scanner};
