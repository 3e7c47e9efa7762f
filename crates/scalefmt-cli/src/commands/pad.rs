//! `scalefmt pad` — Left-pad a string.

use clap::Args;
use scalefmt_core::pad::left_pad;

/// Arguments for the `pad` command.
#[derive(Args, Debug)]
pub struct PadArgs {
    /// Text to pad.
    pub input: String,

    /// Minimum width in characters.
    pub width: usize,

    /// Fill text.
    #[arg(short, long, default_value = "0")]
    pub fill: String,
}

/// Executes the `pad` command.
///
/// # Errors
///
/// Never fails; returns `Result` for dispatch uniformity.
pub fn execute(args: &PadArgs) -> anyhow::Result<()> {
    println!("{}", left_pad(&args.input, &args.fill, args.width));
    Ok(())
}
