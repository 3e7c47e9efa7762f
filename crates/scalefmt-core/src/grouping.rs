//! Thousands grouping for rendered values.

use scalefmt_common::constants::GROUPING_FRACTION_DIGITS;

use crate::decimal::round_to;

/// Formats `value` with `,` between thousands and at most three fraction
/// digits (`1234567.8912` becomes `1,234,567.891`).
#[must_use]
pub fn group_thousands(value: f64) -> String {
    let rounded = round_to(value.abs(), GROUPING_FRACTION_DIGITS);
    let repr = rounded.to_string();
    let (integer, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut out = String::with_capacity(repr.len() + repr.len() / 3 + 1);
    if value < 0.0 && rounded > 0.0 {
        out.push('-');
    }
    out.push_str(&add_separators(integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Inserts `,` every three digits, counting from the right.
fn add_separators(digits: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_integers() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(1_234_567.0), "1,234,567");
    }

    #[test]
    fn keeps_three_fraction_digits() {
        assert_eq!(group_thousands(1_234.567_89), "1,234.568");
        assert_eq!(group_thousands(1.5), "1.5");
    }

    #[test]
    fn keeps_sign() {
        assert_eq!(group_thousands(-1_048_576.0), "-1,048,576");
        assert_eq!(group_thousands(-0.0001), "0");
    }
}
