//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - catalog selectors and classification (`FamilyKind`, `EntryKey`, `Structure`, `Interval`)
//! - solver settings and outcomes (`SolverConfig`, `SolverOutcome`)
//! - benchmark inputs and outputs (`BenchmarkConfig`, `BenchmarkRecord`, `BenchmarkReport`)

pub mod types;

pub use types::*;
