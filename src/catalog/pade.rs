//! Fractional-power Padé approximants (Pade_1 … Pade_13).
//!
//! Each variant is a least-squares fit over `[0, 2π]` and is only registered on
//! that interval. Higher variants are not uniformly better: Pade_5 and Pade_7
//! trail their lower neighbours.

use std::f64::consts::TAU;

use crate::catalog::coefficients::PADE;
use crate::catalog::{Entry, Formula};
use crate::domain::{EntryKey, FamilyKind, Interval, Structure};

/// Documented max relative error (%) per variant on `[1e-4, 2π]`.
const BOUNDS: [f64; 13] = [
    0.82, 0.13, 0.0084, 0.00042, 0.0081, 2e-7, 9.4e-6, 2.6e-8, 6.9e-8, 8.7e-8, 2.7e-8, 4.4e-8,
    5.4e-8,
];

pub const DOMAIN: Interval = Interval::new(0.0, TAU);

pub fn entries() -> Vec<Entry> {
    PADE.iter()
        .zip(BOUNDS)
        .zip(1u8..)
        .map(|((table, bound), variant)| {
            Entry::new(
                EntryKey::new(FamilyKind::Pade, variant),
                Structure::PadeRational,
                DOMAIN,
                bound,
                Formula::Rational {
                    num: table.num.to_vec(),
                    den: table.den.to_vec(),
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_thirteen_bounded_variants() {
        let entries = entries();
        assert_eq!(entries.len(), 13);
        assert_eq!(entries[12].key, EntryKey::new(FamilyKind::Pade, 13));
        assert!(entries.iter().all(|e| e.domain == DOMAIN));
    }

    #[test]
    fn pade_1_at_unit_alpha() {
        let beta = entries()[0].evaluate(1.0).unwrap();
        assert!((beta / 1.199_678_640_257_733_7 - 1.0).abs() < 0.0082);
    }

    #[test]
    fn accepts_the_closed_upper_edge() {
        let entries = entries();
        assert!(entries[10].evaluate(TAU).is_ok());
        assert!(entries[10].evaluate(TAU + 1e-9).is_err());
    }
}
