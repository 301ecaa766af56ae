//! Classic explicit approximations from the coastal-engineering literature.
//!
//! Hunt, Fenton & McKee, Vatankhah, Beji, Eckart, Gilbert, Guo, Guan & Ju,
//! Iwagaki, Nielsen, Simarro & Orfila, Wu & Thornton, You and Yu.

use crate::catalog::Entry;
use crate::catalog::coefficients::{
    GILBERT_SWITCH, GUO_EXPONENT, HUNT_5, HUNT_9, NIELSEN_SWITCH, WU_THORNTON_SWITCH,
    YU_AMPLITUDE,
};
use crate::catalog::{series, yamaguchi};
use crate::domain::{EntryKey, FamilyKind, Interval, Structure};
use crate::math::{coth, horner, newton_step};

pub fn hunt_9(a: f64) -> f64 {
    (a * a + a / (1.0 + a * horner(&HUNT_9, a))).sqrt()
}

pub fn hunt_5(a: f64) -> f64 {
    (a * (a + 1.0 / horner(&HUNT_5, a))).sqrt()
}

/// Newton update of the `α √coth α` seed.
///
/// The seed is up to 5 % off in intermediate depth, so one step only reaches
/// 0.064 %, far short of the Beji-seeded Simarro–Orfila step.
pub fn fenton_mckee_1(a: f64) -> f64 {
    newton_step(a, a * coth(a).sqrt())
}

pub fn fenton_mckee_2(a: f64) -> f64 {
    a / a.powf(0.75).tanh().powf(2.0 / 3.0)
}

pub fn vatankhah_1(a: f64) -> f64 {
    let bridge = (a + a * a * (-(3.2 + a.powf(1.65))).exp()) / a.tanh().sqrt();
    let correction = a * (1.0 - (-a.powf(0.132)).exp()).powf(5.0532 + 2.1584 * a.powf(1.505));
    bridge + correction
}

pub fn vatankhah_2(a: f64) -> f64 {
    (a + a * a * (-1.835 - 1.225 * a.powf(1.35)).exp()) / a.tanh().sqrt()
}

pub fn beji(a: f64) -> f64 {
    let damping = (-(1.55 + 1.30 * a + 0.216 * a * a)).exp();
    a * (1.0 + a.powf(1.09) * damping) / a.tanh().sqrt()
}

pub fn eckart(a: f64) -> f64 {
    a / a.tanh().sqrt()
}

pub fn gilbert(a: f64) -> f64 {
    if a <= GILBERT_SWITCH {
        series::gilbert_shallow(a)
    } else {
        series::gilbert_deep(a)
    }
}

pub fn guo(a: f64) -> f64 {
    yamaguchi::exp_bridge(a, GUO_EXPONENT)
}

pub fn guan_ju(a: f64) -> f64 {
    let r = a.sqrt();
    r * (-1.115 * a).exp() + a * (1.325 * r).tanh()
}

pub fn iwagaki(a: f64) -> f64 {
    yamaguchi::yn3(a)
}

pub fn nielsen(a: f64) -> f64 {
    if a <= NIELSEN_SWITCH {
        series::nielsen_shallow(a)
    } else {
        series::nielsen_deep(a)
    }
}

/// Newton update of the Beji seed.
pub fn simarro_orfila(a: f64) -> f64 {
    newton_step(a, beji(a))
}

pub fn wu_thornton(a: f64) -> f64 {
    if a <= WU_THORNTON_SWITCH {
        series::wu_thornton_shallow(a)
    } else {
        series::wu_thornton_deep(a)
    }
}

/// Same shallow/deep pair as Nielsen.
pub fn you(a: f64) -> f64 {
    nielsen(a)
}

pub fn yu(a: f64) -> f64 {
    let t = a.tanh();
    eckart(a) + YU_AMPLITUDE * (2.0 * t.powf(2.5) - 1.0).acos().sin()
}

pub fn entries() -> Vec<Entry> {
    use FamilyKind::*;
    use Structure::*;

    let table: [(FamilyKind, u8, fn(f64) -> f64, Structure, f64); 17] = [
        (Hunt, 5, hunt_5, Empirical, 0.098),
        (Hunt, 9, hunt_9, Empirical, 0.011),
        // Weak seed: one Newton step leaves 0.064 %.
        (FentonMcKee, 1, fenton_mckee_1, SeedAndStep, 0.064),
        (FentonMcKee, 2, fenton_mckee_2, Bridge, 2.1),
        (Vatankhah, 1, vatankhah_1, Empirical, 0.0022),
        (Vatankhah, 2, vatankhah_2, Empirical, 0.024),
        (Beji, 1, beji, Empirical, 0.056),
        (Eckart, 1, eckart, Bridge, 5.0),
        (Gilbert, 1, gilbert, Piecewise, 1.0),
        (Guo, 1, guo, TunableExponent, 0.95),
        (GuanJu, 1, guan_ju, Empirical, 0.63),
        (Iwagaki, 1, iwagaki, Bridge, 4.0),
        (Nielsen, 1, nielsen, Piecewise, 0.73),
        (SimarroOrfila, 1, simarro_orfila, SeedAndStep, 1.1e-5),
        (WuThornton, 1, wu_thornton, Piecewise, 0.043),
        (You, 1, you, Piecewise, 0.73),
        (Yu, 1, yu, Empirical, 0.42),
    ];

    table
        .into_iter()
        .map(|(family, variant, f, structure, bound)| {
            Entry::fixed(
                EntryKey::new(family, variant),
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
    fn seed_and_step_hybrids_are_accurate_and_finite() {
        assert_relative_eq!(simarro_orfila(1.0), BETA_AT_ONE, max_relative = 1e-7);
        assert_relative_eq!(fenton_mckee_1(1.0), BETA_AT_ONE, max_relative = 1e-3);
        for f in [simarro_orfila, fenton_mckee_1] {
            let beta = f(1000.0);
            assert!(beta.is_finite());
            assert_relative_eq!(beta, 1000.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn eckart_stays_within_five_percent() {
        let beta = eckart(1.0);
        assert!((beta / BETA_AT_ONE - 1.0).abs() < 0.05);
    }

    #[test]
    fn piecewise_forms_switch_at_their_breakpoints() {
        assert_eq!(nielsen(2.0), series::nielsen_shallow(2.0));
        assert_eq!(nielsen(2.0 + 1e-12), series::nielsen_deep(2.0 + 1e-12));
        assert_eq!(gilbert(1.0), series::gilbert_shallow(1.0));
        assert_eq!(you(3.0), nielsen(3.0));
    }

    #[test]
    fn hunt_9_is_tight_at_moderate_depth() {
        assert_relative_eq!(hunt_9(1.0), BETA_AT_ONE, max_relative = 1e-4);
    }
}
