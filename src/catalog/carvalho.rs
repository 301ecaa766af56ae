//! Carvalho (2025): twenty closed forms found by gene-expression programming.
//!
//! Most are hyperbolic bridges `α / tanh(g(α))`; variant 1 adds one Newton
//! update to variant 3, variant 2 is a three-piece fit.

use crate::catalog::Entry;
use crate::catalog::coefficients::{CARVALHO_5, CARVALHO_6, CARVALHO_11_BASE};
use crate::domain::{EntryKey, FamilyKind, Interval, Structure};
use crate::math::newton_step;

pub fn c1(a: f64) -> f64 {
    newton_step(a, c3(a))
}

pub fn c2(a: f64) -> f64 {
    if a <= 1.2 {
        let inv = 1.0 / a;
        (inv - (a.powf(1.962983) - 6.242035).exp()).sqrt() / (inv - 0.168659434)
    } else if a <= 2.35 {
        (a + (a / 70.13327717).powf(a.powi(3)))
            / ((a * 4.89859_f64.ln()) / (1.134674 - 10f64.powf(a))).exp()
    } else {
        a * (1.596671172 * a / 10f64.powf(a)).exp()
    }
}

pub fn c3(a: f64) -> f64 {
    a / (a / (a.sinh().sqrt().tanh().sqrt() * a.tanh().powf(0.25))).tanh()
}

pub fn c4(a: f64) -> f64 {
    a / (a / (a / (a / a.sqrt().tanh().sinh()).tanh()).tanh()).tanh()
}

pub fn c5(a: f64) -> f64 {
    let [b, p, q] = CARVALHO_5;
    a / (b.powf(a.powf(p)) * a.powf(q)).tanh()
}

pub fn c6(a: f64) -> f64 {
    let [b, p] = CARVALHO_6;
    a / (b.powf(a.powf(p)) * a.sqrt()).tanh()
}

pub fn c7(a: f64) -> f64 {
    a / (a / (a / a.sqrt().tanh().sinh()).tanh()).tanh()
}

pub fn c8(a: f64) -> f64 {
    a / (a.min(3.04425).sqrt().sinh() * (a / 5.194671).cosh()).tanh()
}

pub fn c9(a: f64) -> f64 {
    a / (a.sinh().sqrt().tanh().sqrt() * a.tanh().powf(0.25))
}

pub fn c10(a: f64) -> f64 {
    a / (1.2_f64.powf(a) * a.sqrt()).tanh()
}

pub fn c11(a: f64) -> f64 {
    a / (CARVALHO_11_BASE.powf(a) * a).sqrt().tanh()
}

pub fn c12(a: f64) -> f64 {
    a / (a / a.sqrt().sinh().tanh()).tanh()
}

pub fn c13(a: f64) -> f64 {
    a + a.sqrt() / (4.35144_f64.powf(a) + 0.718409 / (1.0 / a).powf(0.437408))
}

pub fn c14(a: f64) -> f64 {
    a / a.sqrt().tanh().powf(1.0 / a.cosh())
}

pub fn c15(a: f64) -> f64 {
    a / (a.tanh().sqrt() * (a + 1.0 / a.sqrt()).tanh())
}

pub fn c16(a: f64) -> f64 {
    a / a.tanh().powf((a + 4.0) / 8.0)
}

pub fn c17(a: f64) -> f64 {
    let t = a.tanh();
    a / t.powf(a / t).sqrt()
}

pub fn c18(a: f64) -> f64 {
    a / a.sqrt().sinh().tanh()
}

pub fn c19(a: f64) -> f64 {
    a.sqrt() + a * a / (a + 4.0)
}

pub fn c20(a: f64) -> f64 {
    let t = a.tanh();
    a / t.sqrt().powf(t + 4.0).powf(0.25)
}

pub fn entries() -> Vec<Entry> {
    use Structure::*;

    let table: [(fn(f64) -> f64, Structure, f64); 20] = [
        (c1, SeedAndStep, 5.3e-6),
        (c2, Piecewise, 0.021),
        (c3, Bridge, 0.056),
        (c4, Bridge, 0.063),
        // Grows without limit as α → 0; the envelope starts at 1e-8.
        (c5, TunableExponent, 0.098),
        (c6, TunableExponent, 0.082),
        (c7, Bridge, 0.17),
        (c8, Empirical, 0.22),
        (c9, Bridge, 0.26),
        (c10, TunableExponent, 0.34),
        (c11, TunableExponent, 0.33),
        (c12, Bridge, 0.51),
        (c13, Empirical, 0.47),
        (c14, Bridge, 1.6),
        (c15, Bridge, 1.7),
        (c16, Bridge, 1.8),
        (c17, Bridge, 2.3),
        (c18, Bridge, 1.5),
        // Peaks in deep water near α ≈ 46, outside the benchmark grid.
        (c19, Empirical, 6.8),
        (c20, Bridge, 2.6),
    ];

    table
        .into_iter()
        .zip(1u8..)
        .map(|((f, structure, bound), variant)| {
            Entry::fixed(
                EntryKey::new(FamilyKind::Carvalho, variant),
                structure,
                Interval::non_negative(),
                bound,
                f,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const BETA_AT_ONE: f64 = 1.199_678_640_257_733_7;

    #[test]
    fn seed_and_step_is_nearly_exact() {
        assert_relative_eq!(c1(1.0), BETA_AT_ONE, max_relative = 1e-7);
    }

    #[test]
    fn piecewise_branches_join_smoothly() {
        for &edge in &[1.2, 2.35] {
            let lo = c2(edge - 1e-9);
            let hi = c2(edge + 1e-9);
            assert!((lo / hi - 1.0).abs() < 1e-3, "edge {edge}");
        }
    }

    #[test]
    fn finite_for_large_alpha() {
        for f in [c1, c2, c3, c8, c13, c17] {
            let beta = f(1000.0);
            assert!(beta.is_finite());
            assert_relative_eq!(beta, 1000.0, max_relative = 1e-6);
        }
    }

    #[test]
    fn shallow_limit_tracks_sqrt_alpha() {
        let a: f64 = 1e-4;
        for f in [c3, c6, c10, c18, c19] {
            assert!((f(a) / a.sqrt() - 1.0).abs() < 1e-2);
        }
    }
}
