//! Email address syntax validation.
//!
//! Accepts `local@domain.tld` where the local part is dot-separated atoms of
//! RFC 5322 `atext`, the domain has at least two labels of letters, digits,
//! and inner hyphens, and the top-level label is alphabetic.

use nom::{
    IResult, Parser,
    bytes::complete::take_while1,
    character::complete::char,
    combinator::all_consuming,
    multi::separated_list1,
    sequence::separated_pair,
};

/// Longest local part allowed by RFC 5321.
const MAX_LOCAL_LEN: usize = 64;

/// Longest address allowed by RFC 5321.
const MAX_ADDRESS_LEN: usize = 254;

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn dot_atoms(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(char('.'), take_while1(is_atext)).parse(input)
}

fn domain_labels(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(
        char('.'),
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-'),
    )
    .parse(input)
}

fn address(input: &str) -> IResult<&str, (Vec<&str>, Vec<&str>)> {
    separated_pair(dot_atoms, char('@'), domain_labels).parse(input)
}

/// Checks that `address_text` is a syntactically valid email address no longer
/// than `max_len` characters.
#[must_use]
pub fn is_email(address_text: &str, max_len: Option<usize>) -> bool {
    let len = address_text.chars().count();
    if len > max_len.unwrap_or(MAX_ADDRESS_LEN).min(MAX_ADDRESS_LEN) {
        return false;
    }
    let Ok((_, (local, labels))) = all_consuming(address).parse(address_text) else {
        return false;
    };

    let local_len = local.iter().map(|atom| atom.len()).sum::<usize>() + local.len() - 1;
    let labels_ok = labels
        .iter()
        .all(|label| !label.starts_with('-') && !label.ends_with('-'));
    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));

    local_len <= MAX_LOCAL_LEN && labels.len() >= 2 && labels_ok && tld_ok
}
