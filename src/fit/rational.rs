//! Rational least-squares fit.
//!
//! With `u = √α`, `u_max = √(2π)` and `v = u / u_max`, the approximant
//!
//! ```text
//! β ≈ u Σ p_j v^(2j) / (1 + Σ q_k v^(2k))      j = 0..M, k = 1..M
//! ```
//!
//! is linearised by multiplying out the denominator:
//!
//! ```text
//! Σ p_j u_max v^(2j+1) - g Σ q_k v^(2k) = g
//! ```
//!
//! where `g` is the exact β at the node. Columns are scaled to unit max-norm
//! before the SVD solve and unscaled afterwards.

use std::f64::consts::TAU;

use nalgebra::{DMatrix, DVector};
use rayon::prelude::*;
use thiserror::Error;

use crate::bench::sampling::standard_grid;
use crate::bench::stats::relative_error_pct;
use crate::domain::Interval;
use crate::error::DomainError;
use crate::fit::nodes::chebyshev_nodes;
use crate::math::{half_power_rational, min_singular_value, solve_least_squares};
use crate::solver::ExactSolver;

/// Lowest supported (odd) degree: one numerator and one denominator term.
pub const MIN_DEGREE: usize = 3;
/// Highest supported degree, the largest odd degree of the published Padé tables.
pub const MAX_DEGREE: usize = 29;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    #[error("degree must be between {MIN_DEGREE} and {MAX_DEGREE}, got {degree}")]
    InvalidDegree { degree: usize },

    #[error("{nodes} nodes are too few for {unknowns} unknowns (need at least {required})")]
    TooFewNodes {
        nodes: usize,
        unknowns: usize,
        required: usize,
    },

    #[error("least-squares system for degree {degree} is singular")]
    Singular { degree: usize },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A fitted approximant in the α basis, plus its measured accuracy.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedPade {
    pub requested_degree: usize,
    /// `2M + 1`; an even request is reduced by one.
    pub degree: usize,
    pub num: Vec<f64>,
    pub den: Vec<f64>,
    pub domain: Interval,
    pub nodes: usize,
    /// Smallest singular value of the column-scaled system.
    pub min_singular_value: f64,
    pub mean_rel_error_pct: f64,
    pub max_rel_error_pct: f64,
}

impl FittedPade {
    pub fn evaluate(&self, alpha: f64) -> f64 {
        half_power_rational(&self.num, &self.den, alpha)
    }
}

/// Fit an approximant of (odd) `degree` on `nodes` Chebyshev nodes over `[0, 2π]`.
pub fn fit_pade(degree: usize, nodes: usize) -> Result<FittedPade, FitError> {
    if !(MIN_DEGREE..=MAX_DEGREE).contains(&degree) {
        return Err(FitError::InvalidDegree { degree });
    }
    let m = (degree - 1) / 2;
    let unknowns = 2 * m + 1;
    let required = 2 * unknowns;
    if nodes < required {
        return Err(FitError::TooFewNodes {
            nodes,
            unknowns,
            required,
        });
    }

    let solver = ExactSolver::default();
    let u_max = TAU.sqrt();
    let vs = chebyshev_nodes(nodes);
    let targets = vs
        .par_iter()
        .map(|&v| solver.solve_beta((u_max * v).powi(2)))
        .collect::<Result<Vec<f64>, DomainError>>()?;

    let mut a = DMatrix::<f64>::zeros(nodes, unknowns);
    for (i, (&v, &g)) in vs.iter().zip(&targets).enumerate() {
        for j in 0..=m {
            a[(i, j)] = u_max * v.powi(2 * j as i32 + 1);
        }
        for k in 1..=m {
            a[(i, m + k)] = -g * v.powi(2 * k as i32);
        }
    }

    let scales: Vec<f64> = (0..unknowns)
        .map(|j| {
            let s = a.column(j).amax();
            if s > 0.0 { s } else { 1.0 }
        })
        .collect();
    for (j, &s) in scales.iter().enumerate() {
        a.column_mut(j).iter_mut().for_each(|x| *x /= s);
    }

    let sigma_min = min_singular_value(&a);
    let b = DVector::from_vec(targets);
    let x = solve_least_squares(&a, &b).ok_or(FitError::Singular { degree: unknowns })?;
    let coeffs: Vec<f64> = x.iter().zip(&scales).map(|(x, s)| x / s).collect();

    let num = (0..=m).map(|j| coeffs[j] / TAU.powi(j as i32)).collect();
    let den = (1..=m).map(|k| coeffs[m + k] / TAU.powi(k as i32)).collect();

    let mut fitted = FittedPade {
        requested_degree: degree,
        degree: unknowns,
        num,
        den,
        domain: Interval::new(0.0, TAU),
        nodes,
        min_singular_value: sigma_min,
        mean_rel_error_pct: 0.0,
        max_rel_error_pct: 0.0,
    };
    let (mean, max) = grid_accuracy(&fitted, &solver)?;
    fitted.mean_rel_error_pct = mean;
    fitted.max_rel_error_pct = max;
    Ok(fitted)
}

/// Mean and max relative error (%) on the standard benchmark grid.
fn grid_accuracy(fitted: &FittedPade, solver: &ExactSolver) -> Result<(f64, f64), FitError> {
    let errors = standard_grid()
        .par_iter()
        .map(|&alpha| {
            let exact = solver.solve_beta(alpha)?;
            Ok(relative_error_pct(exact, fitted.evaluate(alpha)).abs())
        })
        .collect::<Result<Vec<f64>, DomainError>>()?;

    let max = errors.iter().copied().fold(0.0, f64::max);
    let mean = errors.iter().sum::<f64>() / errors.len() as f64;
    Ok((mean, max))
}
