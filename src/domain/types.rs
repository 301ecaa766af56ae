//! Shared domain types.
//!
//! These types are plain values so they can be:
//!
//! - passed between the solver, the catalog and the benchmark without shared ownership
//! - echoed into exported reports (JSON/CSV)
//! - compared bit-for-bit in determinism tests

use std::f64::consts::TAU;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainErrorKind};

/// Lower edge of the standard benchmark grid.
///
/// The grid starts slightly above zero so relative errors are well defined.
pub const DEFAULT_ALPHA_MIN: f64 = 1e-4;

/// Upper edge of the standard benchmark grid (and of the bounded Padé families).
pub const DEFAULT_ALPHA_MAX: f64 = TAU;

/// Number of samples in the standard benchmark grid.
pub const DEFAULT_POINTS: usize = 10_000;

/// Lower edge of the envelope on which documented bounds are verified.
pub const BOUND_ALPHA_MIN: f64 = 1e-8;

/// Upper edge of the bound envelope; deep enough that every formula has settled to `β = α`.
pub const BOUND_ALPHA_MAX: f64 = 1e4;

/// Publication family an approximation belongs to.
///
/// Together with a variant index this selects one catalog entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum FamilyKind {
    /// Fractional-power rational approximants fitted over `[0, 2π]`.
    Pade,
    /// Gene-expression-programming formulas.
    Carvalho,
    /// Yamaguchi & Nonaka comparative study (YN1–YN10).
    Yamaguchi,
    Hunt,
    #[value(name = "fenton-mckee")]
    #[serde(rename = "fenton-mckee")]
    FentonMcKee,
    Vatankhah,
    Beji,
    Eckart,
    Gilbert,
    Guo,
    GuanJu,
    Iwagaki,
    Nielsen,
    SimarroOrfila,
    WuThornton,
    You,
    Yu,
    /// Shallow-only and deep-only truncated expansions with explicit bounds.
    Series,
    /// Padé approximants fitted at catalog construction time.
    FittedPade,
}

impl FamilyKind {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            FamilyKind::Pade => "Pade(2025)",
            FamilyKind::Carvalho => "Carvalho(2025)",
            FamilyKind::Yamaguchi => "Yamaguchi(2007)",
            FamilyKind::Hunt => "Hunt(1979)",
            FamilyKind::FentonMcKee => "Fenton&McKee(1990)",
            FamilyKind::Vatankhah => "Vatankhah(2013)",
            FamilyKind::Beji => "Beji(2013)",
            FamilyKind::Eckart => "Eckart(1951)",
            FamilyKind::Gilbert => "Gilbert(2000)",
            FamilyKind::Guo => "Guo(2002)",
            FamilyKind::GuanJu => "Guan&Ju(2005)",
            FamilyKind::Iwagaki => "Iwagaki(2007)",
            FamilyKind::Nielsen => "Nielsen(1982)",
            FamilyKind::SimarroOrfila => "Simarro&Orfila(2013)",
            FamilyKind::WuThornton => "Wu&Thornton(1986)",
            FamilyKind::You => "You(2002)",
            FamilyKind::Yu => "Yu(2014)",
            FamilyKind::Series => "Series",
            FamilyKind::FittedPade => "FittedPade",
        }
    }

    /// Families with a single formula are displayed without a variant suffix.
    pub fn is_singleton(self) -> bool {
        matches!(
            self,
            FamilyKind::Beji
                | FamilyKind::Eckart
                | FamilyKind::Gilbert
                | FamilyKind::Guo
                | FamilyKind::GuanJu
                | FamilyKind::Iwagaki
                | FamilyKind::Nielsen
                | FamilyKind::SimarroOrfila
                | FamilyKind::WuThornton
                | FamilyKind::You
                | FamilyKind::Yu
        )
    }
}

impl fmt::Display for FamilyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Algebraic shape of an approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Structure {
    /// One hyperbolic expression that reduces to `√α` and `α` in the two limits.
    Bridge,
    /// A bridge whose exponent was fitted (minimax) to tighten the transition zone.
    TunableExponent,
    /// Ratio of polynomials (half-integer powers of α for the Padé families).
    PadeRational,
    /// Shallow expansion below a switch point, deep form above it.
    Piecewise,
    /// Expansion valid only on one side of the transition; bounded domain.
    RestrictedSeries,
    /// Explicit seed followed by exactly one Newton–Raphson update.
    SeedAndStep,
    /// Curve-fitted correction terms without a common template.
    Empirical,
}

impl Structure {
    pub fn label(self) -> &'static str {
        match self {
            Structure::Bridge => "bridge",
            Structure::TunableExponent => "tunable-exponent",
            Structure::PadeRational => "pade",
            Structure::Piecewise => "piecewise",
            Structure::RestrictedSeries => "series",
            Structure::SeedAndStep => "seed+step",
            Structure::Empirical => "empirical",
        }
    }
}

/// Closed interval `[lo, hi]` on the α axis. `hi` may be `+∞`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// The whole physical range `[0, ∞)`.
    pub const fn non_negative() -> Self {
        Self::new(0.0, f64::INFINITY)
    }

    /// `[lo, ∞)`.
    pub const fn at_least(lo: f64) -> Self {
        Self::new(lo, f64::INFINITY)
    }

    pub fn contains(&self, alpha: f64) -> bool {
        alpha >= self.lo && alpha <= self.hi
    }

    pub fn is_bounded(&self) -> bool {
        self.hi.is_finite()
    }

    /// Overlap of two intervals, `None` when they are disjoint.
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        let lo = self.lo.max(other.lo);
        let hi = self.hi.min(other.hi);
        (lo <= hi).then_some(Interval::new(lo, hi))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hi.is_finite() {
            write!(f, "[{:.4}, {:.4}]", self.lo, self.hi)
        } else {
            write!(f, "[{:.4}, inf)", self.lo)
        }
    }
}

/// Catalog selector: family plus variant index within the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EntryKey {
    pub family: FamilyKind,
    pub variant: u8,
}

impl EntryKey {
    pub const fn new(family: FamilyKind, variant: u8) -> Self {
        Self { family, variant }
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.family.is_singleton() {
            write!(f, "{}", self.family.display_name())
        } else {
            write!(f, "{}_{}", self.family.display_name(), self.variant)
        }
    }
}

/// Documented accuracy of a catalog entry.
///
/// The entry's relative error stays below `max_rel_error_pct` (percent) everywhere
/// on `over`, the domain clipped to `[BOUND_ALPHA_MIN, BOUND_ALPHA_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorBound {
    pub max_rel_error_pct: f64,
    pub over: Interval,
}

/// Convergence settings for the reference solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Relative step `|Δβ/β|` below which the iteration stops.
    pub tolerance: f64,
    /// Hard cap on Newton updates.
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-15,
            max_iterations: 100,
        }
    }
}

/// Result of one reference solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolverOutcome {
    pub beta: f64,
    pub iterations: usize,
    /// `true` when the relative step fell below tolerance before the iteration cap.
    pub converged: bool,
}

impl SolverOutcome {
    /// Turn a best-effort estimate into an error when convergence is required.
    pub fn require_converged(self, alpha: f64) -> Result<f64, DomainError> {
        if self.converged {
            Ok(self.beta)
        } else {
            Err(DomainError::NonConvergence {
                alpha,
                iterations: self.iterations,
            })
        }
    }
}

/// One comparison point between the reference solver and an approximation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorSample {
    pub alpha: f64,
    pub exact: f64,
    pub approx: f64,
    /// Signed relative error in percent: `100 (approx - exact) / |exact|`.
    pub rel_error_pct: f64,
}

impl ErrorSample {
    pub fn abs_error_pct(&self) -> f64 {
        self.rel_error_pct.abs()
    }
}

/// How benchmark samples are spread over the α range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Linear,
    Log,
}

/// Timing-proxy settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Number of timed batches; the median batch is reported.
    pub trials: usize,
    /// Calls per batch.
    pub calls_per_trial: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            trials: 15,
            calls_per_trial: 1_000,
        }
    }
}

/// A full benchmark run's configuration.
///
/// Derived from CLI flags (plus defaults) or built directly by library callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    pub alpha_min: f64,
    pub alpha_max: f64,
    pub points: usize,
    pub spacing: Spacing,
    /// Seed for the timing-input generator.
    pub seed: u64,
    pub timing: TimingConfig,
    pub solver: SolverConfig,
    /// Restrict the run to these families (empty = every registered family).
    pub families: Vec<FamilyKind>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            alpha_min: DEFAULT_ALPHA_MIN,
            alpha_max: DEFAULT_ALPHA_MAX,
            points: DEFAULT_POINTS,
            spacing: Spacing::Linear,
            seed: 42,
            timing: TimingConfig::default(),
            solver: SolverConfig::default(),
            families: Vec::new(),
        }
    }
}

/// Aggregated accuracy and cost of one catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRecord {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub name: String,
    pub key: EntryKey,
    pub structure: Structure,
    pub mean_rel_error_pct: f64,
    pub max_rel_error_pct: f64,
    pub alpha_at_max: f64,
    /// Median wall time per call (nanoseconds). Indicative only.
    pub nanos_per_call: f64,
    /// In-domain samples that entered the statistics.
    pub samples: usize,
}

/// The reference solver's own row in a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceRecord {
    pub nanos_per_call: f64,
    pub max_iterations_used: usize,
    pub non_converged: usize,
}

/// An entry that could not be scored, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedEntry {
    pub name: String,
    pub key: EntryKey,
    /// Tag of the error that excluded the entry; `None` when no sample fell inside its domain.
    pub kind: Option<DomainErrorKind>,
    pub reason: String,
}

/// Output of one benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    pub config: BenchmarkConfig,
    pub reference: ReferenceRecord,
    /// Ranked by ascending mean error, ties by ascending max error.
    pub records: Vec<BenchmarkRecord>,
    pub skipped: Vec<SkippedEntry>,
}

impl BenchmarkReport {
    /// Best-ranked entry, if any entry was scored.
    pub fn best(&self) -> Option<&BenchmarkRecord> {
        self.records.first()
    }

    pub fn record(&self, key: EntryKey) -> Option<&BenchmarkRecord> {
        self.records.iter().find(|r| r.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_names_follow_family_convention() {
        assert_eq!(EntryKey::new(FamilyKind::Pade, 11).to_string(), "Pade(2025)_11");
        assert_eq!(EntryKey::new(FamilyKind::Beji, 1).to_string(), "Beji(2013)");
        assert_eq!(
            EntryKey::new(FamilyKind::FentonMcKee, 2).to_string(),
            "Fenton&McKee(1990)_2"
        );
    }

    #[test]
    fn interval_contains_and_intersects() {
        let pade = Interval::new(0.0, TAU);
        assert!(pade.contains(0.0));
        assert!(pade.contains(TAU));
        assert!(!pade.contains(10.0));

        let deep = Interval::at_least(2.0);
        assert_eq!(deep.intersect(&pade), Some(Interval::new(2.0, TAU)));
        assert_eq!(Interval::new(0.0, 1.0).intersect(&deep), None);
        assert!(!deep.is_bounded());
    }

    #[test]
    fn non_converged_outcome_becomes_error() {
        let outcome = SolverOutcome {
            beta: 1.2,
            iterations: 3,
            converged: false,
        };
        assert_eq!(
            outcome.require_converged(1.0),
            Err(DomainError::NonConvergence {
                alpha: 1.0,
                iterations: 3
            })
        );
    }
}
