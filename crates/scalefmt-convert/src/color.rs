//! Hex color parsing.

use nom::{
    IResult, Parser,
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map_res, opt},
};

fn hex_channel(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()), |hex| {
        u8::from_str_radix(hex, 16)
    })
    .parse(input)
}

fn hex_color(input: &str) -> IResult<&str, [u8; 3]> {
    let (input, _) = opt(char('#')).parse(input)?;
    let (input, (red, green, blue)) = (hex_channel, hex_channel, hex_channel).parse(input)?;
    Ok((input, [red, green, blue]))
}

/// Parses `#RRGGBB` (the `#` is optional, digits are case-insensitive) into
/// `[red, green, blue]`.
#[must_use]
pub fn rgb_hex_to_decimal(hex: &str) -> Option<[u8; 3]> {
    all_consuming(hex_color)
        .parse(hex.trim())
        .ok()
        .map(|(_, rgb)| rgb)
}
