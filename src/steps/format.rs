//! Number formatting for steps, tables and answers.

/// Default number of decimals in steps and tables.
pub const DEFAULT_PRECISION: usize = 6;

/// Fixed-point with `precision` decimals (`1.5` -> `"1.500000"`).
#[inline]
pub fn fixed(x: f64, precision: usize) -> String {
    format!("{x:.precision$}")
}

/// [`fixed`] with [`DEFAULT_PRECISION`].
#[inline]
pub fn fx(x: f64) -> String {
    fixed(x, DEFAULT_PRECISION)
}

/// First `n` characters of the shortest round-trip representation of `x`.
///
/// `truncate_chars(1.4140625, 4)` -> `"1.41"`. The sign and the decimal
/// point count as characters.
pub fn truncate_chars(x: f64, n: usize) -> String {
    x.to_string().chars().take(n).collect()
}
