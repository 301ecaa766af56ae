//! Sample grids for the benchmark.
//!
//! Both grids are deterministic and include their endpoints exactly, so a
//! bounded family rated up to `2π` sees its upper edge without rounding past it.

use crate::bench::BenchError;
use crate::domain::{BenchmarkConfig, DEFAULT_ALPHA_MAX, DEFAULT_ALPHA_MIN, DEFAULT_POINTS, Spacing};

/// `n` evenly spaced points on `[lo, hi]`, endpoints included.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Result<Vec<f64>, BenchError> {
    if !(lo.is_finite() && hi.is_finite() && lo >= 0.0 && hi > lo) {
        return Err(BenchError::InvalidConfig {
            reason: format!("invalid alpha range: min={lo}, max={hi} (must be finite, >=0, and max>min)"),
        });
    }
    if n < 2 {
        return Err(BenchError::InvalidConfig {
            reason: "sample count must be >= 2".to_string(),
        });
    }
    Ok(linspace_unchecked(lo, hi, n))
}

/// Generate `n` log-spaced points between `lo` and `hi` (inclusive).
pub fn log_space(lo: f64, hi: f64, n: usize) -> Result<Vec<f64>, BenchError> {
    if !(lo.is_finite() && hi.is_finite() && lo > 0.0 && hi > lo) {
        return Err(BenchError::InvalidConfig {
            reason: format!("invalid log range: min={lo}, max={hi} (must be finite, >0, and max>min)"),
        });
    }
    if n < 2 {
        return Err(BenchError::InvalidConfig {
            reason: "sample count must be >= 2".to_string(),
        });
    }

    let ln_lo = lo.ln();
    let ln_hi = hi.ln();
    let step = (ln_hi - ln_lo) / (n as f64 - 1.0);

    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        out.push((ln_lo + step * i as f64).exp());
    }
    out[0] = lo;
    out[n - 1] = hi;
    Ok(out)
}

/// The standard grid: 10 000 points on `[1e-4, 2π]`.
pub fn standard_grid() -> Vec<f64> {
    linspace_unchecked(DEFAULT_ALPHA_MIN, DEFAULT_ALPHA_MAX, DEFAULT_POINTS)
}

/// Sample grid for a benchmark configuration.
pub fn sample_grid(config: &BenchmarkConfig) -> Result<Vec<f64>, BenchError> {
    match config.spacing {
        Spacing::Linear => linspace(config.alpha_min, config.alpha_max, config.points),
        Spacing::Log => log_space(config.alpha_min, config.alpha_max, config.points),
    }
}

fn linspace_unchecked(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let step = (hi - lo) / (n as f64 - 1.0);
    let mut out: Vec<f64> = (0..n).map(|i| lo + step * i as f64).collect();
    out[n - 1] = hi;
    out
}
