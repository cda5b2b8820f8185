//! Infrastructure Layer: Radix Encoding
//!
//! Byte-string codecs layered on the radix converter from
//! `entities_radix`.
//!
//! ## Overview
//!
//! Each codec imports the input bytes as one big-endian unsigned integer,
//! renders it through a [`Converter`](entities_radix::Converter) and applies
//! its own padding rules. Decoding runs the same steps backwards.
//!
//! ## Codecs
//!
//! - **[`base36_codec`](base36_codec/index.html)**: lowercase base36. Preserves
//!   the integer value; leading zero bytes are lost.
//! - **[`base32_codec`](base32_codec/index.html)**: RFC 4648 base32 with `=`
//!   padding. Preserves the byte stream exactly.
//!
//! ## Logging
//!
//! Codecs emit `tracing` events (`trace` per call, `debug` on rejected
//! input). No subscriber is installed here.

mod common;

pub mod base32_codec;
pub mod base36_codec;

pub use base32_codec::Base32Codec;
pub use base36_codec::Base36Codec;

// Re-export error types for convenience
pub use common::{DecodeError, EncodeError};

// Re-export byte conversion helpers
pub use common::{bytes_to_natural, natural_to_bytes};
