//! Reference solver for `α = β tanh β`.
//!
//! Seeded Newton–Raphson:
//!
//! - seed `β₀ = α / tanh((6/5)^α √α)`, already within a fraction of a percent
//!   of the root everywhere, so the iteration never starts on the wrong side
//!   of the inflection point near β ≈ 1.2
//! - update `β ← β - f(β) / f'(β)` until `|Δβ / β| < tolerance`
//! - the updated β of the final step is returned
//!
//! On the standard benchmark grid the iteration converges in at most four steps.

use log::debug;

use crate::domain::{SolverConfig, SolverOutcome};
use crate::error::DomainError;
use crate::math::newton_delta;

/// Near machine-precision inverse of the dispersion relation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExactSolver {
    config: SolverConfig,
}

impl Default for ExactSolver {
    fn default() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }
}

impl ExactSolver {
    pub fn new(config: SolverConfig) -> Result<Self, DomainError> {
        if !(config.tolerance.is_finite() && config.tolerance > 0.0) {
            return Err(DomainError::InvalidSolverConfig {
                reason: "tolerance must be finite and > 0",
            });
        }
        if config.max_iterations == 0 {
            return Err(DomainError::InvalidSolverConfig {
                reason: "max_iterations must be >= 1",
            });
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Explicit starting point for the iteration.
    pub fn seed(alpha: f64) -> f64 {
        alpha / (1.2_f64.powf(alpha) * alpha.sqrt()).tanh()
    }

    /// Solve for β.
    ///
    /// Returns the best estimate with `converged = false` when the iteration cap
    /// is hit; use [`SolverOutcome::require_converged`] for a hard guarantee.
    pub fn solve(&self, alpha: f64) -> Result<SolverOutcome, DomainError> {
        if !alpha.is_finite() {
            return Err(DomainError::NonFinite {
                alpha,
                value: alpha,
            });
        }
        if alpha < 0.0 {
            return Err(DomainError::NegativeAlpha { alpha });
        }
        if alpha == 0.0 {
            return Ok(SolverOutcome {
                beta: 0.0,
                iterations: 0,
                converged: true,
            });
        }

        let mut beta = Self::seed(alpha);
        for iteration in 1..=self.config.max_iterations {
            let delta = newton_delta(alpha, beta);
            let next = beta - delta;
            if (delta / beta).abs() < self.config.tolerance {
                return Ok(SolverOutcome {
                    beta: next,
                    iterations: iteration,
                    converged: true,
                });
            }
            beta = next;
        }

        debug!(
            "solver stopped without convergence: alpha={alpha}, iterations={}, beta={beta}",
            self.config.max_iterations
        );
        Ok(SolverOutcome {
            beta,
            iterations: self.config.max_iterations,
            converged: false,
        })
    }

    /// Solve and fail on non-convergence.
    pub fn solve_beta(&self, alpha: f64) -> Result<f64, DomainError> {
        self.solve(alpha)?.require_converged(alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn solver() -> ExactSolver {
        ExactSolver::default()
    }

    #[test]
    fn zero_alpha_returns_zero_without_iterating() {
        let out = solver().solve(0.0).unwrap();
        assert_eq!(out.beta, 0.0);
        assert_eq!(out.iterations, 0);
        assert!(out.converged);
    }

    #[test]
    fn known_values() {
        let s = solver();
        assert_relative_eq!(s.solve_beta(1.0).unwrap(), 1.199_678_640_257_733_7, max_relative = 1e-14);
        assert_relative_eq!(s.solve_beta(0.01).unwrap(), 0.100_166_972_559_055_5, max_relative = 1e-13);
        assert_relative_eq!(s.solve_beta(10.0).unwrap(), 10.0, max_relative = 1e-8);
    }

    #[test]
    fn small_alpha_root_lies_above_sqrt_alpha() {
        let beta = solver().solve_beta(0.01).unwrap();
        assert!(beta > 0.1);
    }

    #[test]
    fn satisfies_the_relation_on_a_grid() {
        let s = solver();
        for i in 1..=400 {
            let alpha = i as f64 * 0.05;
            let out = s.solve(alpha).unwrap();
            assert!(out.converged);
            let lhs = out.beta * out.beta.tanh();
            assert!((alpha - lhs).abs() <= 1e-12 * out.beta, "alpha={alpha}");
        }
    }

    #[test]
    fn strictly_increasing() {
        let s = solver();
        let mut prev = 0.0;
        for i in 1..=2000 {
            let beta = s.solve_beta(i as f64 * 0.005).unwrap();
            assert!(beta > prev);
            prev = beta;
        }
    }

    #[test]
    fn asymptotic_limits() {
        let s = solver();
        let shallow = s.solve_beta(1e-4).unwrap() / 1e-4_f64.sqrt();
        assert!((shallow - 1.0).abs() < 0.01);
        let deep = s.solve_beta(50.0).unwrap() / 50.0;
        assert!((deep - 1.0).abs() < 1e-6);
    }

    #[test]
    fn converges_quickly() {
        let s = solver();
        for i in 0..1000 {
            let alpha = 1e-4 + i as f64 * (std::f64::consts::TAU - 1e-4) / 999.0;
            assert!(s.solve(alpha).unwrap().iterations <= 6);
        }
    }

    #[test]
    fn rejects_invalid_inputs() {
        let s = solver();
        assert_eq!(
            s.solve(-1.0),
            Err(DomainError::NegativeAlpha { alpha: -1.0 })
        );
        assert!(matches!(s.solve(f64::NAN), Err(DomainError::NonFinite { .. })));
        assert!(matches!(
            s.solve(f64::INFINITY),
            Err(DomainError::NonFinite { .. })
        ));
    }

    #[test]
    fn rejects_invalid_config() {
        let bad_tol = SolverConfig {
            tolerance: 0.0,
            max_iterations: 10,
        };
        assert!(ExactSolver::new(bad_tol).is_err());
        let no_iter = SolverConfig {
            tolerance: 1e-12,
            max_iterations: 0,
        };
        assert!(ExactSolver::new(no_iter).is_err());
    }

    #[test]
    fn iteration_cap_reports_non_convergence() {
        let s = ExactSolver::new(SolverConfig {
            tolerance: 1e-300,
            max_iterations: 2,
        })
        .unwrap();
        let out = s.solve(1.0).unwrap();
        assert!(!out.converged);
        assert_eq!(out.iterations, 2);
        assert!(matches!(
            out.require_converged(1.0),
            Err(DomainError::NonConvergence { iterations: 2, .. })
        ));
    }

    #[test]
    fn deterministic() {
        let s = solver();
        for &alpha in &[1e-4, 0.3, 1.7, 6.0, 42.0] {
            assert_eq!(
                s.solve(alpha).unwrap().beta.to_bits(),
                s.solve(alpha).unwrap().beta.to_bits()
            );
        }
    }
}
