//! `scalefmt email` — Validate an email address.

use clap::Args;
use scalefmt_convert::validator::is_email;

/// Arguments for the `email` command.
#[derive(Args, Debug)]
pub struct EmailArgs {
    /// Address to validate.
    pub address: String,

    /// Maximum accepted length in characters.
    #[arg(long)]
    pub max_len: Option<usize>,
}

/// Executes the `email` command.
///
/// # Errors
///
/// Returns an error if the address is invalid, so the exit status can be
/// used in scripts.
pub fn execute(args: &EmailArgs) -> anyhow::Result<()> {
    if !is_email(&args.address, args.max_len) {
        anyhow::bail!("invalid email address: {}", args.address);
    }
    println!("valid");
    Ok(())
}
