//! `scalefmt rgb` — Convert a hex color to decimal channels.

use clap::Args;
use scalefmt_convert::color::rgb_hex_to_decimal;

/// Arguments for the `rgb` command.
#[derive(Args, Debug)]
pub struct RgbArgs {
    /// Color as `#RRGGBB` or `RRGGBB`.
    pub hex: String,

    /// Print the channels as a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `rgb` command.
///
/// # Errors
///
/// Returns an error if the color is not six hex digits.
pub fn execute(args: &RgbArgs) -> anyhow::Result<()> {
    let Some(rgb) = rgb_hex_to_decimal(&args.hex) else {
        anyhow::bail!("invalid hex color: {}", args.hex);
    };
    if args.json {
        println!("{}", serde_json::to_string(&rgb)?);
    } else {
        let [red, green, blue] = rgb;
        println!("{red} {green} {blue}");
    }
    Ok(())
}
