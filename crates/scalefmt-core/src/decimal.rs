//! Fraction-digit limiting.
//!
//! Truncation works on the decimal text of a value, so `4.999` cut to one
//! digit is `4.9`, whereas rounding the same value gives `5`.

use std::fmt::Display;

/// Cuts the decimal representation of `value` after `fraction_digits`
/// digits.
///
/// When the kept fraction is empty or only zeros, the integer part is
/// returned without a trailing point. Values without a decimal point are
/// returned as written.
pub fn truncate_decimal<T: Display>(value: T, fraction_digits: usize) -> String {
    let repr = value.to_string();
    let Some((integer, fraction)) = repr.split_once('.') else {
        return repr;
    };
    let kept: String = fraction.chars().take(fraction_digits).collect();
    if kept.chars().all(|c| c == '0') {
        return integer.to_string();
    }
    format!("{integer}.{kept}")
}

/// Rounds `value` half away from zero at `fraction_digits` decimal places.
///
/// Returns `value` unchanged when the scaled intermediate overflows.
#[must_use]
pub fn round_to(value: f64, fraction_digits: u32) -> f64 {
    let Ok(exponent) = i32::try_from(fraction_digits) else {
        return value;
    };
    let factor = 10f64.powi(exponent);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    if rounded.is_finite() { rounded } else { value }
}
