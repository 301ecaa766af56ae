//! One-sided expansions, registered with explicit bounded domains.
//!
//! These are the two halves of the Nielsen, Wu & Thornton and Gilbert piecewise
//! formulas. Outside its half-line each expansion diverges from the root, so the
//! domain is part of the entry and α beyond it is rejected.

use crate::catalog::Entry;
use crate::catalog::coefficients::{
    GILBERT_SWITCH, NIELSEN_SHALLOW, NIELSEN_SWITCH, WU_THORNTON_SWITCH,
};
use crate::domain::{EntryKey, FamilyKind, Interval, Structure};
use crate::math::horner;

pub fn nielsen_shallow(a: f64) -> f64 {
    a.sqrt() * horner(&NIELSEN_SHALLOW, a).sqrt()
}

/// `α (1 + 2 e^(-2α))`, shared by Nielsen and You.
pub fn nielsen_deep(a: f64) -> f64 {
    a * (1.0 + 2.0 * (-2.0 * a).exp())
}

pub fn wu_thornton_shallow(a: f64) -> f64 {
    a.sqrt() * (1.0 + a / 6.0 * (1.0 + a / 5.0))
}

pub fn wu_thornton_deep(a: f64) -> f64 {
    let y = a * (1.0 + 1.26 * (-1.84 * a).exp());
    let e = (-2.0 * y).exp();
    a * (1.0 + 2.0 * e * (1.0 + e))
}

pub fn gilbert_shallow(a: f64) -> f64 {
    a.sqrt() * (1.0 + 0.2 * a)
}

pub fn gilbert_deep(a: f64) -> f64 {
    a * (1.0 + 0.2 * (2.0 - 2.0 * a).exp())
}

pub fn entries() -> Vec<Entry> {
    let table: [(fn(f64) -> f64, Interval, f64); 6] = [
        (nielsen_shallow, Interval::new(0.0, NIELSEN_SWITCH), 0.73),
        (wu_thornton_shallow, Interval::new(0.0, WU_THORNTON_SWITCH), 0.043),
        (gilbert_shallow, Interval::new(0.0, GILBERT_SWITCH), 1.0),
        (nielsen_deep, Interval::at_least(NIELSEN_SWITCH), 0.48),
        (wu_thornton_deep, Interval::at_least(WU_THORNTON_SWITCH), 0.031),
        (gilbert_deep, Interval::at_least(GILBERT_SWITCH), 0.9),
    ];

    table
        .into_iter()
        .zip(1u8..)
        .map(|((f, domain, bound), variant)| {
            Entry::fixed(
                EntryKey::new(FamilyKind::Series, variant),
                Structure::RestrictedSeries,
                domain,
                bound,
                f,
            )
        })
        .collect()
}
