//! Sign utilities for bracketing methods.
//! - `opposite_sign` : `true` if the product is strictly negative
//! - `brackets_root` : `true` if `f(a)` and `f(b)` bracket a sign change

/// Returns `true` if `x * y < 0`.
///
/// Zero is neither sign here, matching the `f(a) * f(c) < 0` update rule.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x * y < 0.0
}

/// Returns `true` if an interval with endpoint values `fa`, `fb` satisfies
/// the bracketing precondition `f(a) * f(b) < 0`.
#[inline]
pub(crate) fn brackets_root(fa: f64, fb: f64) -> bool {
    opposite_sign(fa, fb)
}
