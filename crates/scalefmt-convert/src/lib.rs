//! # scalefmt-convert
//!
//! Small stateless helpers that sit next to the magnitude formatter.
//!
//! Handles:
//! - **Network**: Subnet mask to CIDR prefix length and back.
//! - **Color**: `#RRGGBB` hex colors to decimal channels.
//! - **Bits**: Zero-padded bit strings and set-bit flags.
//! - **Parser**: Object-id timestamps, GUID trimming, and lenient JSON parsing.
//! - **Validator**: Email address syntax.
//!
//! Every helper reports bad input with `None` or `false` instead of an error.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod bits;
pub mod color;
pub mod network;
pub mod parser;
pub mod validator;
