//! Least-squares fitting of fractional-power Padé approximants.
//!
//! Responsibilities:
//!
//! - place Chebyshev nodes on `[0, 2π]` (in the rescaled variable `v = √α / √(2π)`)
//! - build and solve the linearised rational least-squares system
//! - convert the fit back to the α basis and measure its accuracy

pub mod nodes;
pub mod rational;

pub use nodes::*;
pub use rational::*;
