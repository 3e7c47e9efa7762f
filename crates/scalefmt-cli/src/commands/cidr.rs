//! `scalefmt cidr` — Convert a dotted subnet mask to a prefix length.

use clap::Args;
use scalefmt_convert::network::subnet_mask_to_cidr;

/// Arguments for the `cidr` command.
#[derive(Args, Debug)]
pub struct CidrArgs {
    /// Subnet mask, e.g. `255.255.255.0`.
    pub mask: String,
}

/// Executes the `cidr` command.
///
/// # Errors
///
/// Returns an error if the mask is not four decimal octets.
pub fn execute(args: &CidrArgs) -> anyhow::Result<()> {
    let Some(prefix) = subnet_mask_to_cidr(&args.mask) else {
        anyhow::bail!("invalid subnet mask: {}", args.mask);
    };
    println!("{prefix}");
    Ok(())
}
