//! Domain primitive types used across the scalefmt workspace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    BINARY_BASE, BINARY_BYTE_SUFFIX, BPS_PREFIXES, BPS_SUFFIX, BYTE_SUFFIX, DECIMAL_BASE,
    FREQUENCY_SUFFIX, PREFIXES,
};
use crate::error::{FormatError, Result};

/// Semantic category of the quantity being formatted.
///
/// The family decides the unit suffix, the prefix table, the default base,
/// and whether values below the first tier are labelled `Byte`/`Bytes`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitFamily {
    /// Plain count with decimal prefixes and no suffix.
    #[default]
    Default,
    /// Decimal byte units (`KB`, `MB`, ...).
    Byte,
    /// Binary byte units (`KiB`, `MiB`, ...).
    #[serde(alias = "bin-byte")]
    BinaryByte,
    /// Bit rates (`Kbps`, `Mbps`, ...).
    #[serde(alias = "bps")]
    BitsPerSecond,
    /// Frequencies (`KHz`, `MHz`, ...).
    #[serde(alias = "freq")]
    Frequency,
}

impl UnitFamily {
    /// All families, in tag order.
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::Byte,
        Self::BinaryByte,
        Self::BitsPerSecond,
        Self::Frequency,
    ];

    /// Suffix appended after the magnitude prefix.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Byte => BYTE_SUFFIX,
            Self::BinaryByte => BINARY_BYTE_SUFFIX,
            Self::BitsPerSecond => BPS_SUFFIX,
            Self::Frequency => FREQUENCY_SUFFIX,
        }
    }

    /// Standard prefix table, indexed by tier.
    #[must_use]
    pub const fn prefixes(self) -> &'static [&'static str] {
        match self {
            Self::BitsPerSecond => &BPS_PREFIXES,
            _ => &PREFIXES,
        }
    }

    /// Whether tier 0 is rendered as `Byte`/`Bytes`.
    #[must_use]
    pub const fn is_byte(self) -> bool {
        matches!(self, Self::Byte | Self::BinaryByte)
    }

    /// Whether a tier past the end of the table pins to the last entry
    /// instead of failing.
    #[must_use]
    pub const fn clamps_tier(self) -> bool {
        matches!(self, Self::BitsPerSecond)
    }

    /// Base used when the configuration does not provide one.
    #[must_use]
    pub const fn default_base(self, binary: bool) -> u32 {
        if binary || matches!(self, Self::BinaryByte) {
            BINARY_BASE
        } else {
            DECIMAL_BASE
        }
    }

    /// Canonical tag, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Byte => "byte",
            Self::BinaryByte => "binary-byte",
            Self::BitsPerSecond => "bps",
            Self::Frequency => "frequency",
        }
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitFamily {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "byte" => Ok(Self::Byte),
            "binary-byte" | "bin-byte" | "binary_byte" | "bin_byte" => Ok(Self::BinaryByte),
            "bps" | "bits-per-second" | "bits_per_second" => Ok(Self::BitsPerSecond),
            "freq" | "frequency" => Ok(Self::Frequency),
            _ => Err(FormatError::InvalidUnitFamily { tag: s.to_string() }),
        }
    }
}

impl TryFrom<u8> for UnitFamily {
    type Error = FormatError;

    fn try_from(tag: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or_else(|| FormatError::InvalidUnitFamily {
                tag: tag.to_string(),
            })
    }
}

/// Sign of the formatted input, tracked apart from its magnitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    /// Zero or greater.
    #[default]
    Positive,
    /// Less than zero.
    Negative,
}

impl Sign {
    /// Sign of `value`. Zero and negative zero are positive.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// `1.0` or `-1.0`.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }

    /// Multiplies `magnitude` by this sign.
    #[must_use]
    pub fn apply(self, magnitude: f64) -> f64 {
        match self {
            Self::Positive => magnitude,
            Self::Negative => -magnitude,
        }
    }
}

/// Caller-supplied override of the value computation.
///
/// Receives the scaled magnitude, the requested fraction digits, and the
/// sign of the input. Its return value is used as the final value, so it
/// must apply the sign itself.
pub type CustomValueFn = fn(f64, Option<u32>, Sign) -> f64;

/// Outcome of formatting one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatResult {
    /// Scaled and rounded value, sign included.
    pub value: f64,
    /// Prefix and suffix, or `Byte`/`Bytes` at tier 0 for byte families.
    pub unit: String,
    /// Index into the prefix table.
    pub tier: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_parses_aliases_case_insensitively() {
        assert_eq!("BPS".parse::<UnitFamily>().ok(), Some(UnitFamily::BitsPerSecond));
        assert_eq!("bin-byte".parse::<UnitFamily>().ok(), Some(UnitFamily::BinaryByte));
        assert_eq!(" Freq ".parse::<UnitFamily>().ok(), Some(UnitFamily::Frequency));
    }

    #[test]
    fn family_rejects_unknown_tag() {
        let err = "parsec".parse::<UnitFamily>().unwrap_err();
        assert!(err.to_string().contains("parsec"), "got: {err}");
    }

    #[test]
    fn family_from_numeric_tag() {
        assert_eq!(UnitFamily::try_from(2).ok(), Some(UnitFamily::BinaryByte));
        assert!(matches!(
            UnitFamily::try_from(5),
            Err(FormatError::InvalidUnitFamily { .. })
        ));
    }

    #[test]
    fn family_display_round_trips_through_from_str() {
        for family in UnitFamily::ALL {
            assert_eq!(family.to_string().parse::<UnitFamily>().ok(), Some(family));
        }
    }

    #[test]
    fn binary_byte_defaults_to_1024() {
        assert_eq!(UnitFamily::BinaryByte.default_base(false), 1024);
        assert_eq!(UnitFamily::Byte.default_base(false), 1000);
        assert_eq!(UnitFamily::Byte.default_base(true), 1024);
    }

    #[test]
    fn sign_applies_to_magnitude() {
        assert_eq!(Sign::of(-3.0), Sign::Negative);
        assert_eq!(Sign::of(0.0), Sign::Positive);
        assert!((Sign::Negative.apply(2.5) + 2.5).abs() < f64::EPSILON);
        assert!((Sign::Negative.factor() + 1.0).abs() < f64::EPSILON);
    }
}
