//! Fitting nodes.
//!
//! Chebyshev–Lobatto points cluster at both ends of `[0, 1]`, where the rational
//! approximant has to match the two asymptotic regimes.

/// Default node count for Padé fits.
pub const DEFAULT_NODES: usize = 300;

/// `n` Chebyshev–Lobatto points on `[0, 1]`, endpoints included, ascending.
pub fn chebyshev_nodes(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.5],
        _ => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|i| 0.5 * (1.0 - (std::f64::consts::PI * i as f64 / last).cos()))
                .collect()
        }
    }
}
