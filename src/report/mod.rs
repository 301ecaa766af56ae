//! Reporting utilities: benchmark tables, catalog listing and fit summaries.

pub mod format;

pub use format::*;
