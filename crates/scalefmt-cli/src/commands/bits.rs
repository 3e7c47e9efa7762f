//! `scalefmt bits` — Print a value as a bit string or as set-bit flags.

use clap::Args;
use scalefmt_convert::bits::{decimal_to_bit_flags, decimal_to_bit_string};

/// Arguments for the `bits` command.
#[derive(Args, Debug)]
pub struct BitsArgs {
    /// Unsigned value.
    pub value: u64,

    /// Bit width.
    #[arg(default_value_t = 8)]
    pub width: usize,

    /// List the set bits as powers of two instead.
    #[arg(long)]
    pub flags: bool,
}

/// Executes the `bits` command.
///
/// # Errors
///
/// Returns an error if flags are requested for a value wider than `width`.
pub fn execute(args: &BitsArgs) -> anyhow::Result<()> {
    if !args.flags {
        println!("{}", decimal_to_bit_string(args.value, args.width));
        return Ok(());
    }
    let flags = decimal_to_bit_flags(args.value, args.width);
    if flags.is_empty() && args.value != 0 {
        anyhow::bail!("{} does not fit in {} bits", args.value, args.width);
    }
    let flags: Vec<String> = flags.iter().map(u64::to_string).collect();
    println!("{}", flags.join(" "));
    Ok(())
}
