//! Input/output helpers.
//!
//! - benchmark report exports (JSON/CSV) and error profiles (`export`)

pub mod export;

pub use export::*;
