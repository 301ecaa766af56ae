//! Least squares solver.
//!
//! The Padé fitter solves one overdetermined linear system per requested degree:
//!
//! ```text
//! minimize ‖A x - b‖²
//! ```
//!
//! Implementation choices:
//! - SVD, because `A` is tall (hundreds of nodes, a handful of columns) and
//!   nalgebra's `QR::solve` is intended for square systems.
//! - Singular values below `σ_max · ε · max(rows, cols)` are treated as zero, so the
//!   result is the minimum-norm solution of the numerically well-determined part.

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD with a cut-off relative to `σ_max`.
///
/// Returns `None` for an all-zero matrix or a non-finite solution.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let (rows, cols) = x.shape();
    let svd = x.clone().svd(true, true);

    let sigma_max = svd.singular_values.max();
    if sigma_max.is_nan() || sigma_max <= 0.0 {
        return None;
    }
    let cutoff = sigma_max * f64::EPSILON * rows.max(cols) as f64;

    let sol = svd.solve(y, cutoff).ok()?;
    sol.iter().all(|v| v.is_finite()).then_some(sol)
}

/// Smallest singular value of `x`, used to report conditioning.
pub fn min_singular_value(x: &DMatrix<f64>) -> f64 {
    x.clone()
        .svd(false, false)
        .singular_values
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let sol = solve_least_squares(&x, &y).unwrap();
        assert!((sol[0] - 2.0).abs() < 1e-10);
        assert!((sol[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn repeated_column_gives_the_minimum_norm_solution() {
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
        let y = DVector::from_row_slice(&[2.0, 4.0, 6.0]);

        let sol = solve_least_squares(&x, &y).unwrap();
        assert!((sol[0] - 1.0).abs() < 1e-10);
        assert!((sol[1] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn zero_matrix_has_no_solution() {
        let x = DMatrix::<f64>::zeros(4, 2);
        let y = DVector::from_row_slice(&[1.0, 2.0, 3.0, 4.0]);
        assert!(solve_least_squares(&x, &y).is_none());
    }

    #[test]
    fn min_singular_value_of_identity_is_one() {
        let x = DMatrix::<f64>::identity(3, 3);
        assert!((min_singular_value(&x) - 1.0).abs() < 1e-12);
    }
}
