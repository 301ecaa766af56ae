//! Shared "benchmark pipeline" logic used by the subcommands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! catalog construction (with fitted entries) -> benchmark -> report
//!
//! The subcommand handlers can then focus on presentation.

use log::info;

use crate::bench::{error_profile, run_benchmark, sampling::linspace};
use crate::catalog::{Catalog, CatalogBuilder, Entry};
use crate::domain::{BenchmarkConfig, BenchmarkReport, EntryKey, ErrorSample, FamilyKind};
use crate::error::{AppError, DomainError};
use crate::solver::ExactSolver;

/// All computed outputs of a single `wdisp bench` run.
#[derive(Debug, Clone)]
pub struct BenchRun {
    pub catalog: Catalog,
    pub report: BenchmarkReport,
}

/// Standard catalog plus one fitted Padé entry per requested degree.
pub fn build_catalog(fit_degrees: &[usize]) -> Result<Catalog, AppError> {
    if fit_degrees.is_empty() {
        return Ok(Catalog::standard());
    }
    let builder = fit_degrees
        .iter()
        .fold(CatalogBuilder::standard(), |b, &degree| b.with_fitted_pade(degree));
    let catalog = builder.build()?;
    info!("catalog: {} entries ({} fitted)", catalog.len(), fit_degrees.len());
    Ok(catalog)
}

/// Execute the benchmark and return the computed outputs.
pub fn run_bench(config: &BenchmarkConfig, fit_degrees: &[usize]) -> Result<BenchRun, AppError> {
    let catalog = build_catalog(fit_degrees)?;
    let report = run_benchmark(&catalog, config)?;
    Ok(BenchRun { catalog, report })
}

/// Catalog able to resolve `(family, variant)`.
///
/// Fitted entries are keyed by degree, so a `FittedPade` selector fits that degree.
pub fn catalog_for(family: FamilyKind, variant: u8) -> Result<Catalog, AppError> {
    match family {
        FamilyKind::FittedPade => build_catalog(&[usize::from(variant)]),
        _ => Ok(Catalog::standard()),
    }
}

/// Look up an entry or report the unknown selector.
pub fn lookup(catalog: &Catalog, family: FamilyKind, variant: u8) -> Result<&Entry, AppError> {
    catalog
        .get(EntryKey::new(family, variant))
        .ok_or_else(|| AppError::from(DomainError::UnknownVariant { family, variant }))
}

/// Error profile of one entry over `points` evenly spaced α values.
pub fn profile(
    entry: &Entry,
    min: f64,
    max: f64,
    points: usize,
) -> Result<Vec<ErrorSample>, AppError> {
    let alphas = linspace(min, max, points)?;
    let samples = error_profile(entry, &ExactSolver::default(), &alphas)?;
    if samples.is_empty() {
        return Err(AppError::new(
            2,
            format!("{}: no samples inside domain {}", entry.name, entry.domain),
        ));
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_catalog_adds_fitted_entries() {
        let catalog = build_catalog(&[5]).unwrap();
        assert_eq!(catalog.len(), Catalog::standard().len() + 1);
        assert!(catalog.get(EntryKey::new(FamilyKind::FittedPade, 5)).is_some());
    }

    #[test]
    fn duplicate_fitted_degrees_are_an_input_error() {
        let err = build_catalog(&[5, 6]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn profile_keeps_only_in_domain_samples() {
        let catalog = Catalog::standard();
        let entry = lookup(&catalog, FamilyKind::Pade, 1).unwrap();
        assert!(profile(entry, 7.0, 9.0, 50).is_err());
        let partial = profile(entry, 0.5, 9.0, 50).unwrap();
        assert!(!partial.is_empty() && partial.len() < 50);
    }

    #[test]
    fn fitted_selectors_resolve_through_a_fit() {
        let catalog = catalog_for(FamilyKind::FittedPade, 7).unwrap();
        assert!(lookup(&catalog, FamilyKind::FittedPade, 7).is_ok());
        // An even degree is fitted as the odd degree below it.
        let catalog = catalog_for(FamilyKind::FittedPade, 8).unwrap();
        assert!(lookup(&catalog, FamilyKind::FittedPade, 8).is_err());
    }

    #[test]
    fn unknown_selector_is_reported() {
        let catalog = Catalog::standard();
        let err = lookup(&catalog, FamilyKind::Hunt, 3).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
