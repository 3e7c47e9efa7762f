//! `scalefmt mask` — Convert a prefix length to a dotted subnet mask.

use clap::Args;
use scalefmt_convert::network::cidr_to_subnet_mask;

/// Arguments for the `mask` command.
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Prefix length between 0 and 32.
    pub prefix: u32,
}

/// Executes the `mask` command.
///
/// # Errors
///
/// Returns an error if the prefix is longer than 32.
pub fn execute(args: &MaskArgs) -> anyhow::Result<()> {
    let Some(mask) = cidr_to_subnet_mask(args.prefix) else {
        anyhow::bail!("prefix length out of range: {}", args.prefix);
    };
    println!("{mask}");
    Ok(())
}
