//! Accuracy benchmark of the catalog against the reference solver.
//!
//! Pipeline:
//!
//! 1. sample α on a deterministic grid
//! 2. solve every sample with [`ExactSolver`] (ground truth, parallel, order kept)
//! 3. score every entry over its in-domain samples (parallel over entries and
//!    sample chunks, merged in chunk order)
//! 4. time every scored entry (sequential, seeded inputs)
//! 5. rank by mean error, then max error, then registration order

use log::{debug, info, warn};
use rayon::prelude::*;
use thiserror::Error;

use crate::catalog::{Catalog, CatalogBuildError, Entry};
use crate::domain::{
    BenchmarkConfig, BenchmarkRecord, BenchmarkReport, ErrorSample, Interval, ReferenceRecord,
    SkippedEntry, SolverOutcome,
};
use crate::error::DomainError;
use crate::fit::FitError;
use crate::solver::ExactSolver;

pub mod sampling;
pub mod stats;
pub mod timing;

use stats::{ErrorStats, relative_error_pct};

/// Samples per statistics chunk.
const CHUNK_SIZE: usize = 512;

/// Seed stream for the reference solver's timing input.
const REFERENCE_STREAM: u64 = u64::MAX;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BenchError {
    #[error("invalid benchmark config: {reason}")]
    InvalidConfig { reason: String },

    #[error(transparent)]
    Fit(#[from] FitError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<CatalogBuildError> for BenchError {
    fn from(err: CatalogBuildError) -> Self {
        match err {
            CatalogBuildError::Domain(err) => BenchError::Domain(err),
            CatalogBuildError::Fit(err) => BenchError::Fit(err),
        }
    }
}

/// An entry that survived scoring, before timing and ranking.
#[derive(Debug, Clone)]
struct Scored<'a> {
    position: usize,
    entry: &'a Entry,
    stats: ErrorStats,
}

/// Run the full benchmark.
pub fn run_benchmark(
    catalog: &Catalog,
    config: &BenchmarkConfig,
) -> Result<BenchmarkReport, BenchError> {
    let solver = ExactSolver::new(config.solver).map_err(|err| BenchError::InvalidConfig {
        reason: err.to_string(),
    })?;
    if config.timing.trials == 0 || config.timing.calls_per_trial == 0 {
        return Err(BenchError::InvalidConfig {
            reason: "timing trials and calls per trial must be >= 1".to_string(),
        });
    }

    let alphas = sampling::sample_grid(config)?;
    info!(
        "benchmark: {} samples on [{}, {}] ({:?})",
        alphas.len(),
        config.alpha_min,
        config.alpha_max,
        config.spacing
    );

    let outcomes = ground_truth(&solver, &alphas)?;
    let exact: Vec<f64> = outcomes.iter().map(|o| o.beta).collect();
    let non_converged = outcomes.iter().filter(|o| !o.converged).count();
    if non_converged > 0 {
        warn!("reference solver did not converge on {non_converged} samples");
    }

    let selected: Vec<(usize, &Entry)> = catalog
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, e)| config.families.is_empty() || config.families.contains(&e.key.family))
        .collect();
    if selected.is_empty() {
        return Err(BenchError::InvalidConfig {
            reason: "no catalog entries match the family filter".to_string(),
        });
    }

    let results: Vec<(usize, &Entry, Result<ErrorStats, DomainError>)> = selected
        .par_iter()
        .map(|&(position, entry)| (position, entry, score_entry(entry, &alphas, &exact)))
        .collect();

    let mut scored = Vec::new();
    let mut skipped = Vec::new();
    for (position, entry, result) in results {
        match result {
            Ok(stats) if stats.count > 0 => scored.push(Scored {
                position,
                entry,
                stats,
            }),
            Ok(_) => skipped.push(SkippedEntry {
                name: entry.name.clone(),
                key: entry.key,
                kind: None,
                reason: format!("no samples inside domain {}", entry.domain),
            }),
            Err(err) => {
                debug!("{}: skipped ({err})", entry.name);
                skipped.push(SkippedEntry {
                    name: entry.name.clone(),
                    key: entry.key,
                    kind: Some(err.kind()),
                    reason: err.to_string(),
                });
            }
        }
    }

    rank(&mut scored);

    let records: Vec<BenchmarkRecord> = scored
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let alpha = timing::timing_input(&s.entry.rated_interval(), config.seed, s.position as u64);
            BenchmarkRecord {
                rank: i + 1,
                name: s.entry.name.clone(),
                key: s.entry.key,
                structure: s.entry.structure,
                mean_rel_error_pct: s.stats.mean().unwrap_or(f64::NAN),
                max_rel_error_pct: s.stats.max,
                alpha_at_max: s.stats.alpha_at_max,
                nanos_per_call: timing::nanos_per_call(|a| s.entry.evaluate(a), alpha, &config.timing),
                samples: s.stats.count,
            }
        })
        .collect();

    let reference_alpha = timing::timing_input(
        &Interval::new(config.alpha_min, config.alpha_max),
        config.seed,
        REFERENCE_STREAM,
    );
    let reference = ReferenceRecord {
        nanos_per_call: timing::nanos_per_call(|a| solver.solve(a), reference_alpha, &config.timing),
        max_iterations_used: outcomes.iter().map(|o| o.iterations).max().unwrap_or(0),
        non_converged,
    };

    if let Some(best) = records.first() {
        info!(
            "benchmark: {} ranked, {} skipped, best {} (mean {:.3e} %)",
            records.len(),
            skipped.len(),
            best.name,
            best.mean_rel_error_pct
        );
    }

    Ok(BenchmarkReport {
        config: config.clone(),
        reference,
        records,
        skipped,
    })
}

/// Reference solution for each sample, in sample order.
pub fn ground_truth(solver: &ExactSolver, alphas: &[f64]) -> Result<Vec<SolverOutcome>, BenchError> {
    alphas
        .par_iter()
        .map(|&alpha| solver.solve(alpha))
        .collect::<Result<Vec<_>, _>>()
        .map_err(BenchError::from)
}

/// Error statistics of one entry over its in-domain samples.
///
/// Samples outside the domain are skipped; a domain error on an in-domain
/// sample aborts the entry.
pub fn score_entry(entry: &Entry, alphas: &[f64], exact: &[f64]) -> Result<ErrorStats, DomainError> {
    let chunks = alphas
        .par_chunks(CHUNK_SIZE)
        .zip(exact.par_chunks(CHUNK_SIZE))
        .map(|(alpha_chunk, exact_chunk)| {
            let mut stats = ErrorStats::default();
            for (&alpha, &beta) in alpha_chunk.iter().zip(exact_chunk) {
                if !entry.domain.contains(alpha) {
                    continue;
                }
                let approx = entry.evaluate(alpha)?;
                stats.push(alpha, relative_error_pct(beta, approx).abs());
            }
            Ok(stats)
        })
        .collect::<Result<Vec<ErrorStats>, DomainError>>()?;

    let mut total = ErrorStats::default();
    for chunk in &chunks {
        total.merge(chunk);
    }
    Ok(total)
}

/// Per-sample errors of one entry, for plotting.
///
/// Out-of-domain α values are left out.
pub fn error_profile(
    entry: &Entry,
    solver: &ExactSolver,
    alphas: &[f64],
) -> Result<Vec<ErrorSample>, DomainError> {
    alphas
        .par_iter()
        .filter(|&&alpha| entry.domain.contains(alpha))
        .map(|&alpha| {
            let exact = solver.solve_beta(alpha)?;
            let approx = entry.evaluate(alpha)?;
            Ok(ErrorSample {
                alpha,
                exact,
                approx,
                rel_error_pct: relative_error_pct(exact, approx),
            })
        })
        .collect()
}

fn rank(scored: &mut [Scored<'_>]) {
    scored.sort_by(|a, b| {
        let mean_a = a.stats.mean().unwrap_or(f64::INFINITY);
        let mean_b = b.stats.mean().unwrap_or(f64::INFINITY);
        mean_a
            .total_cmp(&mean_b)
            .then_with(|| a.stats.max.total_cmp(&b.stats.max))
            .then_with(|| a.position.cmp(&b.position))
    });
}
