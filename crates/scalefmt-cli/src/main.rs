//! # scalefmt — magnitude formatting CLI
//!
//! Formats numbers as human-readable byte, bitrate, and frequency values,
//! and exposes the conversion helpers as subcommands.

mod commands;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if cli.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    commands::execute(cli)
}
