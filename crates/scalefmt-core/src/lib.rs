//! # scalefmt-core
//!
//! Human-readable magnitude formatting.
//!
//! Handles:
//! - **Size unit**: Tier selection, scaling, and rendering of a value under a
//!   unit family (plain, byte, binary byte, bits per second, frequency).
//! - **Decimal**: Truncation by string slicing and half-away-from-zero rounding.
//! - **Grouping**: Thousands separators for rendered values.
//! - **Stepper**: Round bitrate ceilings for axis ticks.
//! - **Pad**: Left padding of short strings.
//!
//! # Example
//!
//! ```rust
//! use scalefmt_common::config::FormatConfig;
//! use scalefmt_common::types::UnitFamily;
//! use scalefmt_core::size_unit::SizeUnit;
//!
//! let size = SizeUnit::new(4_000_000, UnitFamily::Byte, None, &FormatConfig::default())?;
//! assert_eq!(size.to_string(), "4 MB");
//! # Ok::<(), scalefmt_common::error::FormatError>(())
//! ```

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod decimal;
pub mod grouping;
pub mod pad;
pub mod size_unit;
pub mod stepper;

pub use decimal::truncate_decimal;
pub use size_unit::{RawValue, SizeUnit};
pub use stepper::step_bitrate;
