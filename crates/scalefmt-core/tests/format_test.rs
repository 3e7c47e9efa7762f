//! End-to-end tests for the public formatting API.
//!
//! These tests go through the same entry points callers use:
//! 1. Load a configuration document
//! 2. Format values under every unit family
//! 3. Render with and without a custom renderer
//! 4. Step bitrates and truncate decimals standalone

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::float_cmp)]

use std::io::Write;

use scalefmt_common::config::FormatConfig;
use scalefmt_common::error::FormatError;
use scalefmt_common::types::{FormatResult, Sign, UnitFamily};
use scalefmt_core::pad::left_pad;
use scalefmt_core::{SizeUnit, step_bitrate, truncate_decimal};

// ── Configuration ────────────────────────────────────────────────────

#[test]
fn config_file_drives_formatting() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{ "fixedDigits": 1, "rounding": "truncate-to-fixed", "separator": "empty" }}"#
    )
    .expect("write config");

    let json = std::fs::read_to_string(file.path()).expect("read config");
    let config = FormatConfig::from_json(&json).expect("valid config");

    let size = SizeUnit::new(4_999_999, UnitFamily::Byte, None, &config).expect("format");
    assert_eq!(size.to_string(), "4.9MB");
}

#[test]
fn config_file_with_korean_units() {
    let json = r#"{ "base": 10000, "unitTable": ["", "만", "억", "조"] }"#;
    let config = FormatConfig::from_json(json).expect("valid config");

    let size = SizeUnit::new(350_000_000, UnitFamily::Default, None, &config).expect("format");
    assert_eq!(size.tier(), 2);
    assert_eq!(size.to_string(), "3.5 억");

    let small = SizeUnit::new(1100, UnitFamily::Default, None, &config).expect("format");
    assert_eq!(small.tier(), 0);
    assert_eq!(small.to_string(), "1100");
}

#[test]
fn config_rejects_zero_base() {
    let err = FormatConfig::from_json(r#"{ "base": 0 }"#).unwrap_err();
    assert!(matches!(err, FormatError::Config { .. }), "got: {err}");
}

// ── Families ─────────────────────────────────────────────────────────

#[test]
fn every_family_below_base_is_tier_zero() {
    for family in UnitFamily::ALL {
        for value in [0.5, 1.0, 7.0, 999.0] {
            let size = SizeUnit::of(value, family).expect("format");
            assert_eq!(size.tier(), 0, "{family} {value}");
            if family.is_byte() {
                assert!(size.unit().starts_with("Byte"), "{family} {value}");
            } else {
                assert_eq!(size.unit(), family.suffix(), "{family} {value}");
            }
        }
    }
}

#[test]
fn tier_matches_logarithm() {
    for value in [1_500.0_f64, 72_000.0, 9_999_999.0, 3.2e12, 8.8e17] {
        let size = SizeUnit::of(value, UnitFamily::Frequency).expect("format");
        let expected = (value.log10() / 3.0).floor();
        assert_eq!(f64::from(size.tier()), expected, "{value}");
    }
}

#[test]
fn family_tags_from_text() {
    let family: UnitFamily = "binary-byte".parse().expect("known tag");
    let size = SizeUnit::of(3 * 1024, family).expect("format");
    assert_eq!(size.to_string(), "3 KiB");

    let err = "lightyear".parse::<UnitFamily>().unwrap_err();
    assert!(matches!(err, FormatError::InvalidUnitFamily { .. }));
}

#[test]
fn bitrate_formatting_and_stepping_agree() {
    let rate = 12_000_000.0;
    let size = SizeUnit::of(rate, UnitFamily::BitsPerSecond).expect("format");
    assert_eq!(size.to_string(), "12 Mbps");

    let ceiling = step_bitrate(rate, true);
    assert_eq!(ceiling, 100_000_000);
    let axis = SizeUnit::of(ceiling, UnitFamily::BitsPerSecond).expect("format");
    assert_eq!(axis.to_string(), "100 Mbps");
}

#[test]
fn sign_survives_every_path() {
    fn keep(value: f64, _fixed: Option<u32>, sign: Sign) -> f64 {
        sign.apply(value)
    }

    let plain = SizeUnit::of(-4_000_000, UnitFamily::Default).expect("format");
    assert_eq!(plain.value(), -4.0);

    let truncated = SizeUnit::new(
        -4_999,
        UnitFamily::Default,
        Some(1),
        &FormatConfig::default().truncating(),
    )
    .expect("format");
    assert_eq!(truncated.value(), -4.9);

    let custom = SizeUnit::new(
        -3_000,
        UnitFamily::Frequency,
        None,
        &FormatConfig::default().with_custom_value(keep),
    )
    .expect("format");
    assert_eq!(custom.to_string(), "-3 KHz");
}

// ── Rendering ────────────────────────────────────────────────────────

#[test]
fn result_serializes_to_json() {
    let size = SizeUnit::of(1200, UnitFamily::Default).expect("format");
    let json = serde_json::to_value(size.result()).expect("serialize");
    assert_eq!(json["unit"], "K");
    assert_eq!(json["tier"], 1);
    assert_eq!(json["value"], 1.2);

    let back: FormatResult = serde_json::from_value(json).expect("deserialize");
    assert_eq!(&back, size.result());
}

#[test]
fn custom_renderer_can_pad_values() {
    let size =
        SizeUnit::new(7_300, UnitFamily::Byte, Some(1), &FormatConfig::default()).expect("format");
    let rendered =
        size.render_with(|r| format!("{}{}", left_pad(&r.value.to_string(), " ", 6), r.unit));
    assert_eq!(rendered, "   7.3KB");
}

#[test]
fn grouping_applies_to_large_tier_values() {
    let config = FormatConfig::default().with_forced_tier(1).grouped();
    let size = SizeUnit::new(1_234_567_891, UnitFamily::Byte, None, &config).expect("format");
    assert_eq!(size.to_string(), "1,234,567.891 KB");
}

// ── Standalone helpers ───────────────────────────────────────────────

#[test]
fn truncate_decimal_standalone() {
    assert_eq!(truncate_decimal(4.999, 1), "4.9");
    assert_eq!(truncate_decimal(10.0009, 2), "10");
    assert_eq!(truncate_decimal("0.125", 2), "0.12");
}
