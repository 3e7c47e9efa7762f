//! Magnitude formatting under a unit family.
//!
//! A [`SizeUnit`] is computed once from a raw value and a configuration and
//! is immutable afterwards. The tier is the largest `k` with
//! `base^k <= |value|`, unless a tier is forced; the sign is set aside while
//! scaling and reapplied to the final value.

use std::fmt;

use scalefmt_common::config::{FormatConfig, RoundingMode, Separator};
use scalefmt_common::constants::{BYTE_PLURAL, BYTE_SINGULAR};
use scalefmt_common::error::{FormatError, Result};
use scalefmt_common::types::{FormatResult, Sign, UnitFamily};

use crate::decimal::{round_to, truncate_decimal};
use crate::grouping::group_thousands;

/// Input accepted by [`SizeUnit::new`]: a number or numeric text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    /// Already numeric.
    Number(f64),
    /// Text to be parsed, surrounding whitespace ignored.
    Text(&'a str),
}

impl RawValue<'_> {
    /// Coerces the input to a finite number.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidNumber` for unparsable text, `NaN`, or
    /// infinities.
    pub fn coerce(self) -> Result<f64> {
        let value = match self {
            Self::Number(n) => n,
            Self::Text(text) => text.trim().parse::<f64>().map_err(|_| self.invalid())?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(self.invalid())
        }
    }

    fn invalid(self) -> FormatError {
        FormatError::InvalidNumber {
            input: self.to_string(),
        }
    }
}

impl fmt::Display for RawValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for RawValue<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for RawValue<'_> {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for RawValue<'_> {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for RawValue<'_> {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<i64> for RawValue<'_> {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<u64> for RawValue<'_> {
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for RawValue<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

/// A value scaled to its tier, with the unit it is rendered in.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeUnit {
    result: FormatResult,
    locale_grouping: bool,
    separator: Separator,
}

impl SizeUnit {
    /// Scales `raw` under `family`.
    ///
    /// `fixed_digits` takes precedence over `config.fixed_digits`.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a finite number, if the configuration
    /// is invalid, or if the tier has no entry in the prefix table (bit rates
    /// pin to the last entry instead).
    pub fn new<'a>(
        raw: impl Into<RawValue<'a>>,
        family: UnitFamily,
        fixed_digits: Option<u32>,
        config: &FormatConfig,
    ) -> Result<Self> {
        config.validate()?;
        let value = raw.into().coerce()?;
        let fixed = fixed_digits.or(config.fixed_digits);
        let result = convert(value, family, fixed, config)?;
        tracing::debug!(
            input = value,
            %family,
            value = result.value,
            unit = %result.unit,
            tier = result.tier,
            "value formatted"
        );
        Ok(Self {
            result,
            locale_grouping: config.locale_grouping,
            separator: config.separator,
        })
    }

    /// Scales `raw` under `family` with the default configuration.
    ///
    /// # Errors
    ///
    /// Same as [`SizeUnit::new`].
    pub fn of<'a>(raw: impl Into<RawValue<'a>>, family: UnitFamily) -> Result<Self> {
        Self::new(raw, family, None, &FormatConfig::default())
    }

    /// Scaled value, sign included.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.result.value
    }

    /// Unit string.
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.result.unit
    }

    /// Tier used for scaling.
    #[must_use]
    pub const fn tier(&self) -> u32 {
        self.result.tier
    }

    /// The full result triple.
    #[must_use]
    pub const fn result(&self) -> &FormatResult {
        &self.result
    }

    /// Consumes the formatter, returning the result triple.
    #[must_use]
    pub fn into_result(self) -> FormatResult {
        self.result
    }

    /// Renders with a caller-supplied function instead of [`fmt::Display`].
    pub fn render_with<F>(&self, render: F) -> String
    where
        F: FnOnce(&FormatResult) -> String,
    {
        render(&self.result)
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let FormatResult { value, unit, .. } = &self.result;
        let value = if self.locale_grouping {
            group_thousands(*value)
        } else {
            value.to_string()
        };
        if unit.is_empty() {
            return f.write_str(&value);
        }
        write!(f, "{value}{}{unit}", self.separator.as_str())
    }
}

fn convert(
    value: f64,
    family: UnitFamily,
    fixed: Option<u32>,
    config: &FormatConfig,
) -> Result<FormatResult> {
    let sign = Sign::of(value);
    let magnitude = value.abs();

    if magnitude == 0.0 {
        let unit = if family.is_byte() {
            BYTE_SINGULAR
        } else {
            family.suffix()
        };
        return Ok(FormatResult {
            value: 0.0,
            unit: unit.to_string(),
            tier: 0,
        });
    }

    let base = f64::from(
        config
            .base
            .unwrap_or_else(|| family.default_base(config.binary)),
    );
    let prefixes: Vec<&str> = config.unit_table.as_ref().map_or_else(
        || family.prefixes().to_vec(),
        |table| table.iter().map(String::as_str).collect(),
    );

    let mut tier = config
        .forced_tier
        .unwrap_or_else(|| select_tier(magnitude, base));
    if tier_index(tier) >= prefixes.len() {
        if !family.clamps_tier() {
            return Err(FormatError::TierOutOfRange {
                tier,
                len: prefixes.len(),
            });
        }
        tier = u32::try_from(prefixes.len() - 1).unwrap_or(u32::MAX);
    }
    tracing::debug!(base, tier, "tier selected");

    if tier == 0 {
        if family.is_byte() {
            let rounded = magnitude.round();
            return Ok(FormatResult {
                value: normalize_zero(sign.apply(rounded)),
                unit: tier_zero_unit(family, rounded).to_string(),
                tier: 0,
            });
        }
        return Ok(FormatResult {
            value: compute_value(magnitude, sign, fixed, config)?,
            unit: family.suffix().to_string(),
            tier: 0,
        });
    }

    let scaled = magnitude / power(base, tier);
    Ok(FormatResult {
        value: compute_value(scaled, sign, fixed, config)?,
        unit: format!("{}{}", prefixes[tier_index(tier)], family.suffix()),
        tier,
    })
}

/// Largest `k` with `base^k <= magnitude`, for `magnitude > 0`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn select_tier(magnitude: f64, base: f64) -> u32 {
    if magnitude < base {
        return 0;
    }
    let mut tier = (magnitude.ln() / base.ln()).floor().max(0.0) as u32;
    // ln/ln drifts for exact powers of the base.
    while tier > 0 && power(base, tier) > magnitude {
        tier -= 1;
    }
    while power(base, tier + 1) <= magnitude {
        tier += 1;
    }
    tier
}

fn power(base: f64, tier: u32) -> f64 {
    i32::try_from(tier).map_or(f64::INFINITY, |exp| base.powi(exp))
}

fn tier_index(tier: u32) -> usize {
    usize::try_from(tier).unwrap_or(usize::MAX)
}

/// `Byte` only when the rounded magnitude is exactly one; an exact zero
/// input is handled before tier selection.
#[allow(clippy::float_cmp)]
fn tier_zero_unit(family: UnitFamily, rounded: f64) -> &'static str {
    if !family.is_byte() {
        return family.suffix();
    }
    if rounded == 1.0 {
        BYTE_SINGULAR
    } else {
        BYTE_PLURAL
    }
}

fn compute_value(
    scaled: f64,
    sign: Sign,
    fixed: Option<u32>,
    config: &FormatConfig,
) -> Result<f64> {
    if let Some(custom) = config.custom_value {
        return Ok(custom(scaled, fixed, sign));
    }
    let magnitude = match (fixed, config.rounding) {
        (Some(digits), RoundingMode::TruncateToFixed) => truncate_value(scaled, digits)?,
        (Some(digits), RoundingMode::Round) => round_to(scaled, digits),
        (None, _) => scaled,
    };
    Ok(normalize_zero(sign.apply(magnitude)))
}

fn truncate_value(value: f64, digits: u32) -> Result<f64> {
    let text = truncate_decimal(value, usize::try_from(digits).unwrap_or(usize::MAX));
    text.parse()
        .map_err(|_| FormatError::InvalidNumber { input: text })
}

/// Maps `-0.0` to `0.0` so a negative input that rounds away never renders
/// as `-0`.
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
