//! Formatted output helpers for CLI commands.
//!
//! Renders formatter results as plain text or JSON, and annotates bitrate
//! steps with their human-readable form.

use scalefmt_common::types::UnitFamily;
use scalefmt_core::SizeUnit;

/// Renders a formatted value as `4 MB`, or as its result triple in JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_size(size: &SizeUnit, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string(size.result())?)
    } else {
        Ok(size.to_string())
    }
}

/// Formats a bitrate step as `100000000 (100 Mbps)`.
///
/// # Errors
///
/// Returns an error if the step cannot be formatted.
pub fn format_step(step: u64) -> anyhow::Result<String> {
    let human = SizeUnit::of(step, UnitFamily::BitsPerSecond)?;
    Ok(format!("{step} ({human})"))
}
