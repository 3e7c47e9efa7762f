//! `scalefmt format` — Scale a value to its tier and print it.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use scalefmt_common::config::{FormatConfig, RoundingMode, Separator};
use scalefmt_common::types::UnitFamily;
use scalefmt_core::SizeUnit;

/// Arguments for the `format` command.
#[derive(Args, Debug, Default)]
pub struct FormatArgs {
    /// Number to format (numeric text, may be negative).
    #[arg(allow_negative_numbers = true)]
    pub value: String,

    /// Unit family: default, byte, binary-byte, bps, frequency.
    #[arg(short, long, default_value = "default")]
    pub family: UnitFamily,

    /// Fraction digits to keep.
    #[arg(short = 'd', long)]
    pub fixed: Option<u32>,

    /// Force a tier instead of selecting it from the value.
    #[arg(short, long)]
    pub tier: Option<u32>,

    /// Scaling base (overrides --binary).
    #[arg(short, long)]
    pub base: Option<u32>,

    /// Scale by 1024.
    #[arg(long)]
    pub binary: bool,

    /// Truncate to --fixed digits instead of rounding.
    #[arg(long)]
    pub truncate: bool,

    /// Group thousands in the printed value.
    #[arg(short, long)]
    pub group: bool,

    /// Print without a space between value and unit.
    #[arg(long)]
    pub compact: bool,

    /// Comma-separated prefixes replacing the family's table.
    #[arg(long, value_delimiter = ',')]
    pub units: Option<Vec<String>>,

    /// JSON file with a format configuration; flags take precedence.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the result triple as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `format` command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the value
/// cannot be formatted.
pub fn execute(args: FormatArgs) -> anyhow::Result<()> {
    let config = build_config(&args)?;
    tracing::info!(value = %args.value, family = %args.family, "formatting value");
    let size = SizeUnit::new(args.value.as_str(), args.family, args.fixed, &config)
        .with_context(|| format!("cannot format {:?}", args.value))?;
    println!("{}", crate::output::render_size(&size, args.json)?);
    Ok(())
}

/// Loads the `--config` file, if any, and applies the flags on top.
fn build_config(args: &FormatArgs) -> anyhow::Result<FormatConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            FormatConfig::from_json(&json)
                .with_context(|| format!("invalid configuration in {}", path.display()))?
        }
        None => FormatConfig::default(),
    };

    if args.fixed.is_some() {
        config.fixed_digits = args.fixed;
    }
    if args.tier.is_some() {
        config.forced_tier = args.tier;
    }
    if args.base.is_some() {
        config.base = args.base;
    }
    if args.units.is_some() {
        config.unit_table.clone_from(&args.units);
    }
    config.binary |= args.binary;
    config.locale_grouping |= args.group;
    if args.truncate {
        config.rounding = RoundingMode::TruncateToFixed;
    }
    if args.compact {
        config.separator = Separator::Empty;
    }
    Ok(config)
}
