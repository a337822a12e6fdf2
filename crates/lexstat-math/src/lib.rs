//! Deterministic ratio and rounding helpers.
//!
//! Every division in `lexstat` goes through [`safe_ratio`] or
//! [`safe_percent`], so an empty denominator yields the documented `0.0`
//! sentinel instead of `NaN` or `inf`.

#![forbid(unsafe_code)]

/// Round a floating point value to `decimals` decimal places.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Return `numer / denom`, or `0.0` when `denom` is zero.
///
/// The result is not rounded; rounding is a presentation concern.
#[must_use]
pub fn safe_ratio(numer: u64, denom: u64) -> f64 {
    if denom == 0 {
        0.0
    } else {
        numer as f64 / denom as f64
    }
}

/// Return `numer / denom * 100`, or `0.0` when `denom` is zero.
#[must_use]
pub fn safe_percent(numer: u64, denom: u64) -> f64 {
    safe_ratio(numer, denom) * 100.0
}
