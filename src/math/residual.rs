//! Residual of the dispersion relation and the Newton update built on it.
//!
//! With `f(β) = α - β tanh β`, the derivative is `f'(β) = -tanh β - β sech²β`.
//! Everything is written with `tanh` and `sech = 1 / cosh` so that large β
//! never forms `cosh²` (which overflows near β ≈ 355).

/// `f(β) = α - β tanh β`.
pub fn residual(alpha: f64, beta: f64) -> f64 {
    alpha - beta * beta.tanh()
}

/// `f'(β) = -tanh β - β sech²β`.
pub fn derivative(beta: f64) -> f64 {
    let s = sech(beta);
    -beta.tanh() - beta * s * s
}

/// Newton correction `f(β) / f'(β)` (subtract it from β to update).
pub fn newton_delta(alpha: f64, beta: f64) -> f64 {
    residual(alpha, beta) / derivative(beta)
}

/// One Newton–Raphson update starting from `beta`.
pub fn newton_step(alpha: f64, beta: f64) -> f64 {
    beta - newton_delta(alpha, beta)
}

/// Hyperbolic secant. Returns `0` once `cosh` overflows.
pub fn sech(x: f64) -> f64 {
    1.0 / x.cosh()
}

/// Hyperbolic cotangent.
pub fn coth(x: f64) -> f64 {
    1.0 / x.tanh()
}
