//! Round bitrate ceilings for chart axes.

use scalefmt_common::constants::{BITRATE_STEP_MAX, BITRATE_STEP_MIN};

/// Returns the first step at or above `bps`.
///
/// Steps start at 10 Mbps. With `alternate` the step grows by ×10, then
/// alternately ×5 and ×2 (100 M, 500 M, 1 G, 5 G, ...); otherwise by ×10.
/// The result never exceeds 1 Pbps. `NaN` yields the minimum step.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn step_bitrate(bps: f64, alternate: bool) -> u64 {
    let mut step = BITRATE_STEP_MIN;
    if bps < step as f64 {
        return step;
    }

    let mut scale: u64 = 10;
    let mut multiplier: u64 = 5;
    while bps > step as f64 && step < BITRATE_STEP_MAX {
        step = BITRATE_STEP_MIN * scale;
        if alternate {
            scale *= multiplier;
            multiplier = if multiplier == 5 { 2 } else { 5 };
        } else {
            scale *= 10;
        }
        tracing::trace!(step, scale, "bitrate step");
    }
    step
}
