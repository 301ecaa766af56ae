//! `wave-dispersion` library crate.
//!
//! Solves the linear water-wave dispersion relation `α = β·tanh β` and benchmarks a
//! catalog of explicit approximations against the iterative solution.
//!
//! The binary (`wdisp`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the solver and catalog are reusable from other numerical code

pub mod app;
pub mod bench;
pub mod catalog;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
pub mod solver;
