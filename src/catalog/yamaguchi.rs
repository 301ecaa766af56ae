//! Yamaguchi & Nonaka (2007): YN1–YN10.
//!
//! YN1, YN5 and YN7 are tunable-exponent bridges; YN2 and YN8 feed such a bridge
//! back into `α / tanh(·)` as a pseudo-correction. YN10 coincides with Carvalho_3.

use std::f64::consts::TAU;

use crate::catalog::Entry;
use crate::catalog::carvalho;
use crate::catalog::coefficients::{
    YN1_EXPONENT, YN2_EXPONENT, YN5_EXPONENT, YN7_EXPONENT, YN8_EXPONENT, YN9_BASE,
};
use crate::domain::{EntryKey, FamilyKind, Interval, Structure};
use crate::math::coth;

/// `α coth(α^(m/2))^(1/m)`.
pub fn coth_bridge(a: f64, m: f64) -> f64 {
    a * coth(a.powf(m / 2.0)).powf(1.0 / m)
}

/// `α / (1 - e^(-α^(m/2)))^(1/m)`.
pub fn exp_bridge(a: f64, m: f64) -> f64 {
    a / (1.0 - (-a.powf(m / 2.0)).exp()).powf(1.0 / m)
}

pub fn yn1(a: f64) -> f64 {
    coth_bridge(a, YN1_EXPONENT)
}

pub fn yn2(a: f64) -> f64 {
    a / coth_bridge(a, YN2_EXPONENT).tanh()
}

pub fn yn3(a: f64) -> f64 {
    let r = a.sqrt();
    a / (r * (1.0 + r / TAU)).tanh()
}

pub fn yn4(a: f64) -> f64 {
    a * (1.0 + 1.0 / (a * a)).powf(0.25)
}

pub fn yn5(a: f64) -> f64 {
    coth_bridge(a, YN5_EXPONENT)
}

pub fn yn6(a: f64) -> f64 {
    a / a.sinh().sqrt().tanh()
}

pub fn yn7(a: f64) -> f64 {
    exp_bridge(a, YN7_EXPONENT)
}

pub fn yn8(a: f64) -> f64 {
    a / coth_bridge(a, YN8_EXPONENT).tanh()
}

pub fn yn9(a: f64) -> f64 {
    a / (YN9_BASE.powf(a) * a.sqrt()).tanh()
}

pub fn yn10(a: f64) -> f64 {
    carvalho::c3(a)
}

pub fn entries() -> Vec<Entry> {
    use Structure::*;

    let table: [(fn(f64) -> f64, Structure, f64); 10] = [
        (yn1, TunableExponent, 2.0),
        (yn2, TunableExponent, 0.92),
        (yn3, Bridge, 4.0),
        (yn4, Bridge, 4.0),
        (yn5, TunableExponent, 2.6),
        (yn6, Bridge, 6.6),
        (yn7, TunableExponent, 1.3),
        (yn8, TunableExponent, 1.4),
        (yn9, Bridge, 0.4),
        (yn10, Bridge, 0.056),
    ];

    table
        .into_iter()
        .zip(1u8..)
        .map(|((f, structure, bound), variant)| {
            Entry::fixed(
                EntryKey::new(FamilyKind::Yamaguchi, variant),
                structure,
                Interval::non_negative(),
                bound,
                f,
            )
        })
        .collect()
}
