//! Bit strings and bit flags.

/// Binary representation of `value`, left-padded with zeros to `width`.
///
/// Values wider than `width` are written in full.
#[must_use]
pub fn decimal_to_bit_string(value: u64, width: usize) -> String {
    format!("{value:0width$b}")
}

/// Powers of two set in `value`, most significant first.
///
/// Returns an empty list when `value` needs more than `width` bits.
#[must_use]
pub fn decimal_to_bit_flags(value: u64, width: usize) -> Vec<u64> {
    let significant = u64::BITS - value.leading_zeros();
    if usize::try_from(significant).map_or(true, |bits| bits > width) {
        return Vec::new();
    }
    (0..significant)
        .rev()
        .filter(|bit| (value >> bit) & 1 == 1)
        .map(|bit| 1 << bit)
        .collect()
}
