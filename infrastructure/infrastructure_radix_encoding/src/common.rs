//! Common Encoding/Decoding Utilities
//!
//! Shared error types and the byte/integer bridge used by every codec.
//!
//! ## Byte Order
//!
//! Byte strings are read and written most-significant byte first (big-endian,
//! 8 bits per unit), so `[0x01, 0x00]` is the integer 256.

use entities_radix::ConversionError;
use malachite::base::num::basic::traits::Zero;
use malachite::base::num::conversion::traits::PowerOf2Digits;
use malachite::Natural;

/// Encoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The underlying number-to-string conversion failed
    Conversion(ConversionError),
}

/// Decoding errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The digit string could not be parsed
    Conversion(ConversionError),
    /// Encoded length is not a whole number of blocks
    InvalidLength(usize),
    /// Number of trailing pad characters no byte count can produce
    InvalidPadding(usize),
}

impl std::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodeError::Conversion(err) => write!(f, "Conversion error: {}", err),
        }
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::Conversion(err) => write!(f, "Conversion error: {}", err),
            DecodeError::InvalidLength(len) => write!(f, "Invalid encoded length: {}", len),
            DecodeError::InvalidPadding(count) => {
                write!(f, "Invalid padding: {} pad characters", count)
            }
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EncodeError::Conversion(err) => Some(err),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Conversion(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConversionError> for EncodeError {
    fn from(err: ConversionError) -> Self {
        EncodeError::Conversion(err)
    }
}

impl From<ConversionError> for DecodeError {
    fn from(err: ConversionError) -> Self {
        DecodeError::Conversion(err)
    }
}

/// Convert bytes (big-endian) to a malachite Natural
///
/// Leading zero bytes do not contribute to the value; the empty slice is
/// zero.
pub fn bytes_to_natural(bytes: &[u8]) -> Natural {
    // Every u8 is a valid base-256 digit, so this never yields None
    <Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_desc(8, bytes.iter().copied())
        .unwrap_or(Natural::ZERO)
}

/// Extract bytes (big-endian) from a malachite Natural
///
/// The result is left-filled with zero bytes up to `min_len`. Zero with
/// `min_len == 0` yields an empty vector.
///
/// # Arguments
///
/// * `value` - The Natural value
/// * `min_len` - Minimum number of bytes to return
pub fn natural_to_bytes(value: &Natural, min_len: usize) -> Vec<u8> {
    let bytes: Vec<u8> = PowerOf2Digits::<u8>::to_power_of_2_digits_desc(value, 8);
    if bytes.len() >= min_len {
        return bytes;
    }
    let mut padded = vec![0u8; min_len - bytes.len()];
    padded.extend_from_slice(&bytes);
    padded
}
