//! CLI command definitions and dispatch.

pub mod bits;
pub mod cidr;
pub mod email;
pub mod format;
pub mod mask;
pub mod object_id;
pub mod pad;
pub mod rgb;
pub mod step;
pub mod truncate;

use clap::{Parser, Subcommand};

/// scalefmt — Human-readable magnitudes and small conversions.
#[derive(Parser, Debug)]
#[command(name = "scalefmt", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scale a value to its tier and print it with its unit.
    Format(format::FormatArgs),
    /// Print the next round bitrate ceiling for a chart axis.
    Step(step::StepArgs),
    /// Cut a decimal after a number of fraction digits.
    Truncate(truncate::TruncateArgs),
    /// Left-pad a string.
    Pad(pad::PadArgs),
    /// Convert a dotted subnet mask to a CIDR prefix length.
    Cidr(cidr::CidrArgs),
    /// Convert a CIDR prefix length to a dotted subnet mask.
    Mask(mask::MaskArgs),
    /// Convert a `#RRGGBB` color to decimal channels.
    Rgb(rgb::RgbArgs),
    /// Print a value as a bit string or as its set-bit flags.
    Bits(bits::BitsArgs),
    /// Validate an email address.
    Email(email::EmailArgs),
    /// Print the creation time embedded in an object id.
    ObjectId(object_id::ObjectIdArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Format(args) => format::execute(args),
        Command::Step(args) => step::execute(&args),
        Command::Truncate(args) => truncate::execute(&args),
        Command::Pad(args) => pad::execute(&args),
        Command::Cidr(args) => cidr::execute(&args),
        Command::Mask(args) => mask::execute(&args),
        Command::Rgb(args) => rgb::execute(&args),
        Command::Bits(args) => bits::execute(&args),
        Command::Email(args) => email::execute(&args),
        Command::ObjectId(args) => object_id::execute(&args),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_format_value() {
        let cli = Cli::try_parse_from(["scalefmt", "format", "-4000000", "--family", "byte"]);
        assert!(cli.is_ok(), "{cli:?}");
    }

    #[test]
    fn rejects_unknown_family() {
        let cli = Cli::try_parse_from(["scalefmt", "format", "1", "--family", "parsec"]);
        assert!(cli.is_err());
    }
}
