//! Left padding.

/// Prepends `fill` to `input` until it is at least `width` characters long.
///
/// The fill is repeated whole, so a multi-character fill can overshoot
/// `width`. An empty input or fill is returned unchanged.
#[must_use]
pub fn left_pad(input: &str, fill: &str, width: usize) -> String {
    let len = input.chars().count();
    let fill_len = fill.chars().count();
    if input.is_empty() || fill_len == 0 || len >= width {
        return input.to_string();
    }
    let repeats = (width - len).div_ceil(fill_len);
    format!("{}{input}", fill.repeat(repeats))
}
