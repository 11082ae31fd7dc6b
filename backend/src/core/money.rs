//! Monetary rounding
//!
//! Estimates are reported to two decimal places. Rounding is `f64::round`
//! applied to `value × 100`, which rounds half away from zero on the binary
//! value actually held (so `1.005` rounds to `1.0`, because its nearest f64
//! is slightly below the midpoint).

/// Round a monetary value to two decimal places, half away from zero.
///
/// # Example
/// ```
/// use delivery_map_core_rs::round_to_cents;
///
/// assert_eq!(round_to_cents(12.666_666), 12.67);
/// assert_eq!(round_to_cents(-0.125), -0.13);
/// ```
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
