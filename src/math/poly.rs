//! Polynomial and rational evaluation.

/// Evaluate `c[0] + c[1] x + c[2] x² + ...` with Horner's scheme.
pub fn horner(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Evaluate the half-integer-power rational used by the Padé families:
///
/// ```text
/// β ≈ √α · (p0 + p1 α + ... + pn αⁿ) / (1 + α (q1 + q2 α + ... + qm αᵐ⁻¹))
/// ```
pub fn half_power_rational(num: &[f64], den: &[f64], alpha: f64) -> f64 {
    let p = horner(num, alpha);
    let q = 1.0 + alpha * horner(den, alpha);
    alpha.sqrt() * p / q
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horner_evaluates_polynomial() {
        // 1 + 2x + 3x² at x = 2
        assert_eq!(horner(&[1.0, 2.0, 3.0], 2.0), 17.0);
        assert_eq!(horner(&[], 5.0), 0.0);
    }

    #[test]
    fn rational_reduces_to_sqrt_near_zero() {
        let r = half_power_rational(&[1.0, 0.5], &[0.25], 1e-12);
        assert!((r / 1e-6 - 1.0).abs() < 1e-9);
    }
}
