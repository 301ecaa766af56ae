//! Timing proxy.
//!
//! Each entry is timed at one α drawn from its rated interval with a seeded RNG.
//! `trials` batches of `calls_per_trial` calls are run and the median batch is
//! reported as nanoseconds per call. Wall-clock numbers are indicative only and
//! are never compared in tests.

use std::hint::black_box;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Interval, TimingConfig};

/// Timing input for the entry at `index`, drawn uniformly from `interval`.
///
/// The stream is `StdRng::seed_from_u64(seed ^ index)`: independent of how many
/// other entries are timed.
pub fn timing_input(interval: &Interval, seed: u64, index: u64) -> f64 {
    let mut rng = StdRng::seed_from_u64(seed ^ index);
    if interval.is_bounded() && interval.hi > interval.lo {
        rng.gen_range(interval.lo..=interval.hi)
    } else {
        interval.lo
    }
}

/// Median wall time per call of `f(alpha)` in nanoseconds.
pub fn nanos_per_call<R, F>(f: F, alpha: f64, config: &TimingConfig) -> f64
where
    F: Fn(f64) -> R,
{
    let calls = config.calls_per_trial.max(1);
    let mut trials: Vec<f64> = (0..config.trials.max(1))
        .map(|_| {
            let start = Instant::now();
            for _ in 0..calls {
                black_box(f(black_box(alpha)));
            }
            start.elapsed().as_nanos() as f64 / calls as f64
        })
        .collect();
    median(&mut trials)
}

/// Median of a non-empty slice (mean of the two middle values for even length).
pub fn median(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        0.5 * (values[mid - 1] + values[mid])
    } else {
        values[mid]
    }
}
