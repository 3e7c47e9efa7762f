//! Unit tables, suffixes, and numeric bounds.

/// Magnitude prefixes indexed by tier.
pub const PREFIXES: [&str; 9] = ["", "K", "M", "G", "T", "P", "E", "Z", "Y"];

/// Prefixes available to bit rates. Larger tiers pin to the last entry.
pub const BPS_PREFIXES: [&str; 6] = ["", "K", "M", "G", "T", "P"];

/// Singular byte label used below the first tier.
pub const BYTE_SINGULAR: &str = "Byte";

/// Plural byte label used below the first tier.
pub const BYTE_PLURAL: &str = "Bytes";

/// Suffix appended to decimal byte prefixes.
pub const BYTE_SUFFIX: &str = "B";

/// Suffix appended to binary byte prefixes.
pub const BINARY_BYTE_SUFFIX: &str = "iB";

/// Suffix for bits per second.
pub const BPS_SUFFIX: &str = "bps";

/// Suffix for frequencies.
pub const FREQUENCY_SUFFIX: &str = "Hz";

/// Default scaling base.
pub const DECIMAL_BASE: u32 = 1000;

/// Scaling base for binary byte units.
pub const BINARY_BASE: u32 = 1024;

/// Smallest step returned by the bitrate stepper (10 Mbps).
pub const BITRATE_STEP_MIN: u64 = 10_000_000;

/// Upper bound of the bitrate stepper (1 Pbps).
pub const BITRATE_STEP_MAX: u64 = 1_000_000_000_000_000;

/// Maximum fraction digits kept by locale grouping.
pub const GROUPING_FRACTION_DIGITS: u32 = 3;
