//! `scalefmt step` — Print the next round bitrate ceiling.

use clap::Args;
use scalefmt_core::step_bitrate;

/// Arguments for the `step` command.
#[derive(Args, Debug)]
pub struct StepArgs {
    /// Bitrate in bits per second.
    #[arg(allow_negative_numbers = true)]
    pub bps: f64,

    /// Step by powers of ten instead of alternating ×5 and ×2.
    #[arg(long)]
    pub decade: bool,
}

/// Executes the `step` command.
///
/// # Errors
///
/// Returns an error if the step cannot be rendered.
pub fn execute(args: &StepArgs) -> anyhow::Result<()> {
    let step = step_bitrate(args.bps, !args.decade);
    tracing::debug!(bps = args.bps, step, "bitrate step computed");
    println!("{}", crate::output::format_step(step)?);
    Ok(())
}
