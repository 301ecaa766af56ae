//! Error types.
//!
//! Two layers:
//!
//! - [`DomainError`]: typed failures of the numerical core (bad α, unknown catalog
//!   selector, non-convergence). These replace the numeric sentinels (`-1`) that
//!   explicit-formula tables traditionally return.
//! - [`AppError`]: what the `wdisp` binary reports (exit code + message).

use serde::Serialize;
use thiserror::Error;

use crate::domain::{EntryKey, FamilyKind, Interval};

/// Errors raised by the solver and the approximation catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("alpha must be non-negative, got {alpha}")]
    NegativeAlpha { alpha: f64 },

    #[error("non-finite value {value} for alpha = {alpha}")]
    NonFinite { alpha: f64, value: f64 },

    #[error("{key}: alpha = {alpha} is outside the validity domain {domain}")]
    OutOfDomain {
        key: EntryKey,
        alpha: f64,
        domain: Interval,
    },

    #[error("unknown variant {variant} for family {family}")]
    UnknownVariant { family: FamilyKind, variant: u8 },

    #[error("solver did not converge for alpha = {alpha} after {iterations} iterations")]
    NonConvergence { alpha: f64, iterations: usize },

    #[error("invalid solver config: {reason}")]
    InvalidSolverConfig { reason: &'static str },

    #[error("entry {key} is already registered")]
    DuplicateEntry { key: EntryKey },
}

impl DomainError {
    /// Short machine-friendly tag, recorded on skipped benchmark entries.
    pub fn kind(&self) -> DomainErrorKind {
        match self {
            DomainError::NegativeAlpha { .. } => DomainErrorKind::NegativeAlpha,
            DomainError::NonFinite { .. } => DomainErrorKind::NonFinite,
            DomainError::OutOfDomain { .. } => DomainErrorKind::OutOfDomain,
            DomainError::UnknownVariant { .. } => DomainErrorKind::UnknownVariant,
            DomainError::NonConvergence { .. } => DomainErrorKind::NonConvergence,
            DomainError::InvalidSolverConfig { .. } => DomainErrorKind::InvalidSolverConfig,
            DomainError::DuplicateEntry { .. } => DomainErrorKind::DuplicateEntry,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainErrorKind {
    NegativeAlpha,
    NonFinite,
    OutOfDomain,
    UnknownVariant,
    NonConvergence,
    InvalidSolverConfig,
    DuplicateEntry,
}

/// Error reported by the binary.
///
/// Exit codes:
/// - `2`: invalid input or configuration
/// - `3`: numerical failure (domain error, non-convergence, singular fit)
/// - `4`: I/O failure
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let code = match err {
            DomainError::NegativeAlpha { .. }
            | DomainError::UnknownVariant { .. }
            | DomainError::InvalidSolverConfig { .. }
            | DomainError::DuplicateEntry { .. } => 2,
            DomainError::NonFinite { .. }
            | DomainError::OutOfDomain { .. }
            | DomainError::NonConvergence { .. } => 3,
        };
        AppError::new(code, err.to_string())
    }
}

impl From<crate::bench::BenchError> for AppError {
    fn from(err: crate::bench::BenchError) -> Self {
        match err {
            crate::bench::BenchError::InvalidConfig { .. } => AppError::new(2, err.to_string()),
            crate::bench::BenchError::Domain(err) => err.into(),
            crate::bench::BenchError::Fit(err) => err.into(),
        }
    }
}

impl From<crate::catalog::CatalogBuildError> for AppError {
    fn from(err: crate::catalog::CatalogBuildError) -> Self {
        match err {
            crate::catalog::CatalogBuildError::Domain(err) => err.into(),
            crate::catalog::CatalogBuildError::Fit(err) => err.into(),
        }
    }
}

impl From<crate::fit::FitError> for AppError {
    fn from(err: crate::fit::FitError) -> Self {
        match err {
            crate::fit::FitError::InvalidDegree { .. } | crate::fit::FitError::TooFewNodes { .. } => {
                AppError::new(2, err.to_string())
            }
            crate::fit::FitError::Singular { .. } => AppError::new(3, err.to_string()),
            crate::fit::FitError::Domain(err) => err.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_numeric_exit_code() {
        let err = DomainError::OutOfDomain {
            key: EntryKey::new(FamilyKind::Pade, 1),
            alpha: 10.0,
            domain: Interval::new(0.0, std::f64::consts::TAU),
        };
        assert_eq!(err.kind(), DomainErrorKind::OutOfDomain);
        let app: AppError = err.into();
        assert_eq!(app.exit_code(), 3);
        assert!(app.to_string().contains("Pade(2025)_1"));
    }

    #[test]
    fn negative_alpha_is_an_input_error() {
        let app: AppError = DomainError::NegativeAlpha { alpha: -1.0 }.into();
        assert_eq!(app.exit_code(), 2);
    }

    #[test]
    fn wrapped_errors_keep_the_inner_exit_code() {
        use crate::bench::BenchError;
        use crate::catalog::CatalogBuildError;
        use crate::fit::FitError;

        let duplicate = DomainError::DuplicateEntry {
            key: EntryKey::new(FamilyKind::FittedPade, 5),
        };
        let app: AppError = CatalogBuildError::Domain(duplicate.clone()).into();
        assert_eq!(app.exit_code(), 2);
        let app: AppError = BenchError::Domain(duplicate).into();
        assert_eq!(app.exit_code(), 2);

        let bad_degree = FitError::InvalidDegree { degree: 41 };
        let app: AppError = CatalogBuildError::Fit(bad_degree.clone()).into();
        assert_eq!(app.exit_code(), 2);
        let app: AppError = BenchError::Fit(bad_degree).into();
        assert_eq!(app.exit_code(), 2);

        let app: AppError = BenchError::Fit(FitError::Singular { degree: 29 }).into();
        assert_eq!(app.exit_code(), 3);
        let non_finite = DomainError::NonFinite {
            alpha: 1.0,
            value: f64::NAN,
        };
        assert_eq!(AppError::from(BenchError::Domain(non_finite)).exit_code(), 3);
    }
}
