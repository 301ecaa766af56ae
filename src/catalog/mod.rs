//! Registry of explicit approximations to the dispersion relation.
//!
//! Every entry is a pure, O(1) formula with:
//!
//! - a key (`FamilyKind`, variant)
//! - an algebraic [`Structure`]
//! - a validity domain (bounded families never extrapolate)
//! - a documented accuracy bound and the interval it covers
//!
//! The catalog is built once and is read-only afterwards, so it can be shared
//! across rayon workers.

use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use crate::domain::{
    BOUND_ALPHA_MAX, BOUND_ALPHA_MIN, DEFAULT_ALPHA_MAX, DEFAULT_ALPHA_MIN, EntryKey, ErrorBound,
    FamilyKind, Interval, Structure,
};
use crate::error::DomainError;
use crate::fit::{FitError, FittedPade, fit_pade};
use crate::math::half_power_rational;

pub mod carvalho;
pub mod classic;
pub mod coefficients;
pub mod pade;
pub mod series;
pub mod yamaguchi;

/// How an entry computes β.
#[derive(Debug, Clone)]
pub enum Formula {
    /// Closed-form expression.
    Fixed(fn(f64) -> f64),
    /// Half-integer-power rational with owned coefficients (tables or fitted).
    Rational { num: Vec<f64>, den: Vec<f64> },
}

impl Formula {
    pub fn apply(&self, alpha: f64) -> f64 {
        match self {
            Formula::Fixed(f) => f(alpha),
            Formula::Rational { num, den } => half_power_rational(num, den, alpha),
        }
    }
}

/// One registered approximation.
#[derive(Debug, Clone)]
pub struct Entry {
    pub key: EntryKey,
    pub name: String,
    pub structure: Structure,
    pub domain: Interval,
    pub bound: ErrorBound,
    formula: Formula,
}

impl Entry {
    /// Build an entry; the bound covers `[1e-8, 1e4] ∩ domain`.
    pub fn new(
        key: EntryKey,
        structure: Structure,
        domain: Interval,
        max_rel_error_pct: f64,
        formula: Formula,
    ) -> Self {
        let over = clip(&domain, Interval::new(BOUND_ALPHA_MIN, BOUND_ALPHA_MAX));
        Self {
            key,
            name: key.to_string(),
            structure,
            domain,
            bound: ErrorBound {
                max_rel_error_pct,
                over,
            },
            formula,
        }
    }

    pub fn fixed(
        key: EntryKey,
        structure: Structure,
        domain: Interval,
        max_rel_error_pct: f64,
        f: fn(f64) -> f64,
    ) -> Self {
        Self::new(key, structure, domain, max_rel_error_pct, Formula::Fixed(f))
    }

    /// Standard grid `[1e-4, 2π]` clipped to the domain; timing inputs are drawn here.
    pub fn rated_interval(&self) -> Interval {
        clip(&self.domain, Interval::new(DEFAULT_ALPHA_MIN, DEFAULT_ALPHA_MAX))
    }

    /// Evaluate β for this entry.
    ///
    /// Checks, in order: finite α, non-negative α, α inside the domain.
    /// α = 0 returns `0` exactly; a non-finite formula result is an error.
    pub fn evaluate(&self, alpha: f64) -> Result<f64, DomainError> {
        if !alpha.is_finite() {
            return Err(DomainError::NonFinite {
                alpha,
                value: alpha,
            });
        }
        if alpha < 0.0 {
            return Err(DomainError::NegativeAlpha { alpha });
        }
        if !self.domain.contains(alpha) {
            return Err(DomainError::OutOfDomain {
                key: self.key,
                alpha,
                domain: self.domain,
            });
        }
        if alpha == 0.0 {
            return Ok(0.0);
        }

        let beta = self.formula.apply(alpha);
        if beta.is_finite() {
            Ok(beta)
        } else {
            Err(DomainError::NonFinite { alpha, value: beta })
        }
    }
}

fn clip(domain: &Interval, window: Interval) -> Interval {
    domain.intersect(&window).unwrap_or(*domain)
}

/// Read-only registry of approximations, in registration order.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Entry>,
    index: HashMap<EntryKey, usize>,
}

impl Catalog {
    /// Every fixed family, in a stable order.
    pub fn standard() -> Self {
        Self::from_builder(CatalogBuilder::standard())
    }

    fn from_builder(builder: CatalogBuilder) -> Self {
        let index = builder
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.key, i))
            .collect();
        Self {
            entries: builder.entries,
            index,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: EntryKey) -> Option<&Entry> {
        self.index.get(&key).map(|&i| &self.entries[i])
    }

    /// Distinct families, in registration order.
    pub fn families(&self) -> Vec<FamilyKind> {
        let mut out: Vec<FamilyKind> = Vec::new();
        for entry in &self.entries {
            if !out.contains(&entry.key.family) {
                out.push(entry.key.family);
            }
        }
        out
    }

    /// Entries of one family, in registration order.
    pub fn family(&self, family: FamilyKind) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(move |e| e.key.family == family)
    }

    /// Evaluate `(family, variant)` at α.
    pub fn evaluate(&self, family: FamilyKind, variant: u8, alpha: f64) -> Result<f64, DomainError> {
        let key = EntryKey::new(family, variant);
        let entry = self
            .get(key)
            .ok_or(DomainError::UnknownVariant { family, variant })?;
        entry.evaluate(alpha)
    }
}

/// Incremental catalog construction (standard families plus fitted entries).
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    entries: Vec<Entry>,
    fitted: Vec<usize>,
}

impl CatalogBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-loaded with every fixed family.
    pub fn standard() -> Self {
        let mut builder = Self::new();
        for entry in standard_entries() {
            builder.insert(entry);
        }
        builder
    }

    fn insert(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Register one entry.
    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.insert(entry);
        self
    }

    /// Queue a fitted Padé approximant of the given (odd) degree.
    pub fn with_fitted_pade(mut self, degree: usize) -> Self {
        self.fitted.push(degree);
        self
    }

    /// Fit queued approximants and reject duplicate keys.
    pub fn build(mut self) -> Result<Catalog, CatalogBuildError> {
        for degree in std::mem::take(&mut self.fitted) {
            let fitted = fit_pade(degree, crate::fit::DEFAULT_NODES)?;
            debug!(
                "fitted pade degree {} (requested {degree}): max error {:.3e} %",
                fitted.degree, fitted.max_rel_error_pct
            );
            self.insert(fitted_entry(&fitted));
        }

        let mut seen = HashMap::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if seen.insert(entry.key, i).is_some() {
                return Err(DomainError::DuplicateEntry { key: entry.key }.into());
            }
        }
        Ok(Catalog::from_builder(self))
    }
}

/// Failure while building a catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogBuildError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Fit(#[from] FitError),
}

/// Catalog entry for a fitted approximant.
///
/// The documented bound is the fit's own measured grid error with the same
/// margin the fixed tables carry.
pub fn fitted_entry(fitted: &FittedPade) -> Entry {
    let variant = u8::try_from(fitted.degree).unwrap_or(u8::MAX);
    Entry::new(
        EntryKey::new(FamilyKind::FittedPade, variant),
        Structure::PadeRational,
        fitted.domain,
        fitted.max_rel_error_pct * 1.25 + 1e-12,
        Formula::Rational {
            num: fitted.num.clone(),
            den: fitted.den.clone(),
        },
    )
}

fn standard_entries() -> Vec<Entry> {
    let mut out = Vec::new();
    out.extend(pade::entries());
    out.extend(carvalho::entries());
    out.extend(yamaguchi::entries());
    out.extend(classic::entries());
    out.extend(series::entries());
    out
}
