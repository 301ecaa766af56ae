//! Mathematical utilities: the dispersion residual, rational evaluation and least squares.

pub mod ols;
pub mod poly;
pub mod residual;

pub use ols::*;
pub use poly::*;
pub use residual::*;
