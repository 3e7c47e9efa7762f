//! Subnet mask and CIDR prefix conversions.

use std::net::Ipv4Addr;

use nom::{
    IResult, Parser,
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res},
};

/// Parses one decimal octet (`0`-`255`).
fn octet(input: &str) -> IResult<&str, u8> {
    map_res(digit1, str::parse::<u8>).parse(input)
}

/// Parses `a.b.c.d`.
fn dotted_quad(input: &str) -> IResult<&str, [u8; 4]> {
    let (input, (a, _, b, _, c, _, d)) = (
        octet,
        char('.'),
        octet,
        char('.'),
        octet,
        char('.'),
        octet,
    )
        .parse(input)?;
    Ok((input, [a, b, c, d]))
}

/// Counts the set bits of a dotted-decimal subnet mask.
///
/// `255.255.255.0` gives `24`. Non-contiguous masks are not rejected; their
/// set bits are counted all the same. Returns `None` for anything that is
/// not four octets.
#[must_use]
pub fn subnet_mask_to_cidr(mask: &str) -> Option<u32> {
    let (_, octets) = all_consuming(dotted_quad).parse(mask.trim()).ok()?;
    Some(u32::from(Ipv4Addr::from(octets)).count_ones())
}

/// Builds the subnet mask for a prefix length between 0 and 32.
#[must_use]
pub fn cidr_to_subnet_mask(prefix: u32) -> Option<Ipv4Addr> {
    if prefix > 32 {
        return None;
    }
    let bits = u32::MAX.checked_shl(32 - prefix).unwrap_or(0);
    Some(Ipv4Addr::from(bits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_to_cidr_counts_bits() {
        assert_eq!(subnet_mask_to_cidr("255.255.255.0"), Some(24));
        assert_eq!(subnet_mask_to_cidr("255.255.240.0"), Some(20));
        assert_eq!(subnet_mask_to_cidr("0.0.0.0"), Some(0));
        assert_eq!(subnet_mask_to_cidr("255.255.255.255"), Some(32));
    }

    #[test]
    fn mask_to_cidr_rejects_malformed_input() {
        assert_eq!(subnet_mask_to_cidr("255.255.255"), None);
        assert_eq!(subnet_mask_to_cidr("255.255.255.256"), None);
        assert_eq!(subnet_mask_to_cidr("255.255.255.0.0"), None);
        assert_eq!(subnet_mask_to_cidr("a.b.c.d"), None);
        assert_eq!(subnet_mask_to_cidr(""), None);
    }

    #[test]
    fn cidr_to_mask_builds_dotted_mask() {
        assert_eq!(cidr_to_subnet_mask(24), Some(Ipv4Addr::new(255, 255, 255, 0)));
        assert_eq!(cidr_to_subnet_mask(17), Some(Ipv4Addr::new(255, 255, 128, 0)));
        assert_eq!(cidr_to_subnet_mask(0), Some(Ipv4Addr::new(0, 0, 0, 0)));
        assert_eq!(cidr_to_subnet_mask(32), Some(Ipv4Addr::new(255, 255, 255, 255)));
    }

    #[test]
    fn cidr_to_mask_rejects_long_prefix() {
        assert_eq!(cidr_to_subnet_mask(33), None);
    }

    #[test]
    fn conversions_are_inverse_for_every_prefix() {
        for prefix in 0..=32 {
            let mask = cidr_to_subnet_mask(prefix).map(|m| m.to_string());
            assert_eq!(mask.as_deref().and_then(subnet_mask_to_cidr), Some(prefix));
        }
    }
}
