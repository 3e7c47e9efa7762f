//! `scalefmt truncate` — Cut a decimal after a number of fraction digits.

use clap::Args;
use scalefmt_core::truncate_decimal;

/// Arguments for the `truncate` command.
#[derive(Args, Debug)]
pub struct TruncateArgs {
    /// Decimal text to truncate.
    #[arg(allow_negative_numbers = true)]
    pub value: String,

    /// Fraction digits to keep.
    pub digits: usize,
}

/// Executes the `truncate` command.
///
/// # Errors
///
/// Returns an error if the value is not a number.
pub fn execute(args: &TruncateArgs) -> anyhow::Result<()> {
    println!("{}", truncate_text(&args.value, args.digits)?);
    Ok(())
}

/// Truncates the decimal text as written, so digits past `f64` precision
/// survive.
fn truncate_text(value: &str, digits: usize) -> anyhow::Result<String> {
    let text = value.trim();
    if text.parse::<f64>().is_err() {
        anyhow::bail!("not a number: {value}");
    }
    Ok(truncate_decimal(text, digits))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn keeps_digits_beyond_float_precision() {
        let text = truncate_text(" 0.12345678901234567890 ", 19).unwrap();
        assert_eq!(text, "0.1234567890123456789");
    }

    #[test]
    fn truncates_negative_text() {
        assert_eq!(truncate_text("-4.999", 1).unwrap(), "-4.9");
    }

    #[test]
    fn rejects_non_numeric_text() {
        let err = truncate_text("12px", 2).unwrap_err();
        assert!(err.to_string().contains("not a number"), "got: {err}");
    }
}
