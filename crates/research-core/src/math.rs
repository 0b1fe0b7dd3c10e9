//! Rounding for reported values

/// Round `value` to `decimals` places, resolving ties to the even neighbour
///
/// Negative `decimals` round to tens, hundreds and so on. Non-finite
/// values pass through unchanged, as do values too large for the scaling
/// to change anything.
///
/// ```
/// use research_core::round_half_even;
///
/// assert_eq!(round_half_even(0.125, 2), 0.12);
/// assert_eq!(round_half_even(0.375, 2), 0.38);
/// assert_eq!(round_half_even(1250.0, -2), 1200.0);
/// ```
pub fn round_half_even(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let factor = 10f64.powi(decimals);
    // Rounding to a power of ten beyond f64 range leaves nothing
    if factor == 0.0 {
        return 0.0_f64.copysign(value);
    }
    let scaled = value * factor;
    if !scaled.is_finite() || !factor.is_finite() {
        return value;
    }
    // Above 2^52 every f64 is already an integer
    if scaled.abs() >= 4_503_599_627_370_496.0 {
        return value;
    }

    scaled.round_ties_even() / factor
}

/// Count the digits after the decimal point in the shortest representation
/// of `value`
pub fn decimal_places(value: f64) -> usize {
    let text = format!("{value}");
    match text.split_once('.') {
        Some((_, fraction)) => fraction.len(),
        None => 0,
    }
}
