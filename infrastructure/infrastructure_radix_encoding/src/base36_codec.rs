//! Base36 Codec Module
//!
//! Represents a byte string as a base-36 digit string by reading the bytes as
//! one big-endian unsigned integer.
//!
//! ## Limitation
//!
//! The integer has no notion of leading zero bytes, so they are dropped:
//! `[0x00, 0x01]` and `[0x01]` both encode as `"1"`, and the empty string and
//! any all-zero input encode as `"0"`, which decodes to an empty byte string.
//! Use [`Base32Codec`](crate::Base32Codec) when the exact byte stream matters.

use entities_radix::Converter;
use malachite::Natural;

use crate::common::{bytes_to_natural, natural_to_bytes, DecodeError, EncodeError};

/// Base used by the codec
pub const BASE36: u32 = 36;

/// Base36 codec
pub struct Base36Codec;

impl Base36Codec {
    /// Encode bytes as lowercase base-36 digits
    ///
    /// # Examples
    ///
    /// ```rust
    /// use infrastructure_radix_encoding::Base36Codec;
    ///
    /// assert_eq!(Base36Codec::encode(&[0x01, 0x00]).unwrap(), "74");
    /// ```
    pub fn encode(bytes: &[u8]) -> Result<String, EncodeError> {
        let value = bytes_to_natural(bytes);
        let encoded = Converter::base36().ntos(&value, BASE36)?;
        tracing::trace!(input_len = bytes.len(), output_len = encoded.len(), "base36 encode");
        Ok(encoded)
    }

    /// Decode base-36 digits (any case) back to bytes
    ///
    /// A leading `+` is accepted; a leading `-` is rejected with
    /// `SignNotAllowed`.
    pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
        let value: Natural = Converter::base36().ston(encoded, BASE36).map_err(|err| {
            tracing::debug!(error = %err, "base36 decode rejected input");
            DecodeError::from(err)
        })?;
        let bytes = natural_to_bytes(&value, 0);
        tracing::trace!(input_len = encoded.len(), output_len = bytes.len(), "base36 decode");
        Ok(bytes)
    }
}
