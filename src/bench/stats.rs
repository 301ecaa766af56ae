//! Error statistics.
//!
//! Accumulators are filled per sample chunk and merged in chunk order, so the
//! floating-point sums are reproduced bit-for-bit across runs and thread counts.

/// Signed relative error in percent.
///
/// `100 (approx - exact) / |exact|`; when `exact` is zero the error is `100 approx`.
pub fn relative_error_pct(exact: f64, approx: f64) -> f64 {
    if exact == 0.0 {
        100.0 * approx
    } else {
        100.0 * (approx - exact) / exact.abs()
    }
}

/// Running count, sum and maximum of absolute relative errors.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ErrorStats {
    pub count: usize,
    pub sum: f64,
    pub max: f64,
    pub alpha_at_max: f64,
}

impl ErrorStats {
    /// Add one absolute error. The first occurrence of the maximum is kept.
    pub fn push(&mut self, alpha: f64, abs_error_pct: f64) {
        if self.count == 0 || abs_error_pct > self.max {
            self.max = abs_error_pct;
            self.alpha_at_max = alpha;
        }
        self.count += 1;
        self.sum += abs_error_pct;
    }

    /// Merge a later chunk into this one.
    pub fn merge(&mut self, later: &ErrorStats) {
        if later.count == 0 {
            return;
        }
        if self.count == 0 || later.max > self.max {
            self.max = later.max;
            self.alpha_at_max = later.alpha_at_max;
        }
        self.count += later.count;
        self.sum += later.sum;
    }

    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_error_is_signed_percent() {
        assert!((relative_error_pct(2.0, 2.02) - 1.0).abs() < 1e-12);
        assert!((relative_error_pct(2.0, 1.98) + 1.0).abs() < 1e-12);
        assert!((relative_error_pct(0.0, 0.001) - 0.1).abs() < 1e-15);
        assert_eq!(relative_error_pct(0.0, 0.0), 0.0);
    }

    #[test]
    fn push_keeps_first_maximum() {
        let mut s = ErrorStats::default();
        s.push(1.0, 0.5);
        s.push(2.0, 0.7);
        s.push(3.0, 0.7);
        assert_eq!(s.count, 3);
        assert_eq!(s.max, 0.7);
        assert_eq!(s.alpha_at_max, 2.0);
        assert!((s.mean().unwrap() - 1.9 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn merge_matches_sequential_push_for_ties() {
        let mut a = ErrorStats::default();
        a.push(1.0, 0.2);
        a.push(2.0, 0.9);
        let mut b = ErrorStats::default();
        b.push(3.0, 0.9);
        b.push(4.0, 0.1);

        let mut merged = a;
        merged.merge(&b);
        assert_eq!(merged.count, 4);
        assert_eq!(merged.alpha_at_max, 2.0);

        let mut from_empty = ErrorStats::default();
        from_empty.merge(&b);
        assert_eq!(from_empty, b);
        assert_eq!(ErrorStats::default().mean(), None);
    }
}
