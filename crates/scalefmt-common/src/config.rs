//! Formatting configuration model.
//!
//! [`FormatConfig`] can be built in code with the `with_*` methods or loaded
//! from a JSON document with camelCase keys:
//!
//! ```json
//! { "fixedDigits": 1, "base": 1024, "rounding": "truncate", "unitTable": ["", "Ki"] }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, Result};
use crate::types::CustomValueFn;

/// How the scaled value is limited to `fixed_digits` fraction digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// Round half away from zero.
    #[default]
    Round,
    /// Cut the decimal representation after `fixed_digits` digits.
    #[serde(alias = "truncate", alias = "cutoff")]
    TruncateToFixed,
}

/// Text placed between the rendered value and its unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// A single space: `4 MB`.
    #[default]
    Space,
    /// Nothing: `4MB`.
    Empty,
}

impl Separator {
    /// The separator text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::Empty => "",
        }
    }
}

/// Options controlling tier selection, value computation, and rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatConfig {
    /// Fraction digits kept in the scaled value. `None` keeps it unrounded.
    pub fixed_digits: Option<u32>,
    /// Tier to use instead of the computed one.
    pub forced_tier: Option<u32>,
    /// Scaling base. Overrides both `binary` and the family default.
    pub base: Option<u32>,
    /// Scale by 1024 regardless of family.
    pub binary: bool,
    /// Rounding policy applied with `fixed_digits`.
    pub rounding: RoundingMode,
    /// Group thousands when rendering (`1,234.5`).
    pub locale_grouping: bool,
    /// Text between value and unit when rendering.
    pub separator: Separator,
    /// Prefixes replacing the family's table, indexed by tier.
    pub unit_table: Option<Vec<String>>,
    /// Replaces rounding and sign application.
    #[serde(skip)]
    pub custom_value: Option<CustomValueFn>,
}

impl FormatConfig {
    /// Loads and validates a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(?config, "format configuration loaded");
        Ok(config)
    }

    /// Checks values that would make scaling meaningless.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::Config` for a base below 2 or an empty unit table.
    pub fn validate(&self) -> Result<()> {
        if let Some(base) = self.base.filter(|b| *b < 2) {
            return Err(FormatError::Config {
                message: format!("base must be at least 2, got {base}"),
            });
        }
        if self.unit_table.as_ref().is_some_and(Vec::is_empty) {
            return Err(FormatError::Config {
                message: "unit table must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Sets the fraction digits.
    #[must_use]
    pub const fn with_fixed_digits(mut self, digits: u32) -> Self {
        self.fixed_digits = Some(digits);
        self
    }

    /// Forces a tier.
    #[must_use]
    pub const fn with_forced_tier(mut self, tier: u32) -> Self {
        self.forced_tier = Some(tier);
        self
    }

    /// Sets the scaling base.
    #[must_use]
    pub const fn with_base(mut self, base: u32) -> Self {
        self.base = Some(base);
        self
    }

    /// Scales by 1024.
    #[must_use]
    pub const fn binary(mut self) -> Self {
        self.binary = true;
        self
    }

    /// Truncates instead of rounding.
    #[must_use]
    pub const fn truncating(mut self) -> Self {
        self.rounding = RoundingMode::TruncateToFixed;
        self
    }

    /// Enables thousands grouping when rendering.
    #[must_use]
    pub const fn grouped(mut self) -> Self {
        self.locale_grouping = true;
        self
    }

    /// Renders without a space between value and unit.
    #[must_use]
    pub const fn compact(mut self) -> Self {
        self.separator = Separator::Empty;
        self
    }

    /// Replaces the prefix table.
    #[must_use]
    pub fn with_unit_table<I, S>(mut self, table: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unit_table = Some(table.into_iter().map(Into::into).collect());
        self
    }

    /// Installs a custom value function.
    #[must_use]
    pub fn with_custom_value(mut self, f: CustomValueFn) -> Self {
        self.custom_value = Some(f);
        self
    }
}
