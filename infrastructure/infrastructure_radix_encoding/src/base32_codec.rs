//! Base32 Codec Module
//!
//! RFC 4648 base32 built on the radix converter. The input bytes are read as
//! one big-endian integer, shifted left so the bit count is a multiple of 5,
//! rendered in base 32 over `A-Z2-7` and padded with `=` to whole 8-character
//! blocks.
//!
//! Unlike base36 the byte stream is preserved exactly: the digit count is
//! fixed by the input length, so leading zero bytes come back as `A` digits
//! rather than vanishing.
//!
//! ## Padding
//!
//! | input bytes mod 5 | digits | `=` | shift |
//! |-------------------|--------|-----|-------|
//! | 0                 | 8k     | 0   | 0     |
//! | 1                 | 2      | 6   | 2     |
//! | 2                 | 4      | 4   | 4     |
//! | 3                 | 5      | 3   | 1     |
//! | 4                 | 7      | 1   | 3     |

use entities_radix::{ConversionError, Converter};
use malachite::Natural;

use crate::common::{bytes_to_natural, natural_to_bytes, DecodeError, EncodeError};

/// Base used by the codec
pub const BASE32: u32 = 32;

/// Pad character
pub const BASE32_PAD: char = '=';

/// Encoded output is a whole number of blocks of this many characters
pub const BASE32_BLOCK_LEN: usize = 8;

const BITS_PER_DIGIT: u64 = 5;
const BITS_PER_BYTE: u64 = 8;

/// Right shift that undoes the encoding shift, by pad-character count
fn shift_for_padding(pad: usize) -> Option<u64> {
    match pad {
        0 => Some(0),
        1 => Some(3),
        3 => Some(1),
        4 => Some(4),
        6 => Some(2),
        _ => None,
    }
}

/// RFC 4648 base32 codec
pub struct Base32Codec;

impl Base32Codec {
    /// Encode bytes as padded upper-case base32
    ///
    /// # Examples
    ///
    /// ```rust
    /// use infrastructure_radix_encoding::Base32Codec;
    ///
    /// assert_eq!(Base32Codec::encode(b"abc").unwrap(), "MFRGG===");
    /// ```
    pub fn encode(bytes: &[u8]) -> Result<String, EncodeError> {
        if bytes.is_empty() {
            return Ok(String::new());
        }

        let converter = Converter::base32();
        let bit_len = bytes.len() as u64 * BITS_PER_BYTE;
        let shift = (BITS_PER_DIGIT - bit_len % BITS_PER_DIGIT) % BITS_PER_DIGIT;
        let value = bytes_to_natural(bytes) << shift;

        let width = ((bit_len + shift) / BITS_PER_DIGIT) as usize;
        let pad = (BASE32_BLOCK_LEN - width % BASE32_BLOCK_LEN) % BASE32_BLOCK_LEN;
        let rendered = converter.count_digits(&value, BASE32)?;

        let mut encoded = String::with_capacity(width + pad);
        // Leading zero bits still occupy digit positions
        let zero_digit = converter.alphabet().as_chars()[0];
        encoded.extend(std::iter::repeat(zero_digit).take(width.saturating_sub(rendered)));
        converter.ntos_into(&value, BASE32, &mut encoded)?;
        encoded.extend(std::iter::repeat(BASE32_PAD).take(pad));

        tracing::trace!(
            input_len = bytes.len(),
            shift,
            pad,
            output_len = encoded.len(),
            "base32 encode"
        );
        Ok(encoded)
    }

    /// Decode padded base32 (any case) back to bytes
    ///
    /// # Errors
    ///
    /// * `InvalidLength` - length is not a multiple of 8
    /// * `InvalidPadding` - 2, 5, 7 or 8 trailing `=`
    /// * `Conversion(InvalidDigit)` - a character outside `A-Z2-7`, including
    ///   `=` anywhere but the end
    pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
        if encoded.len() % BASE32_BLOCK_LEN != 0 {
            tracing::debug!(len = encoded.len(), "base32 decode rejected length");
            return Err(DecodeError::InvalidLength(encoded.len()));
        }

        let digits = encoded.trim_end_matches(BASE32_PAD);
        let pad = encoded.len() - digits.len();
        let shift = shift_for_padding(pad).ok_or_else(|| {
            tracing::debug!(pad, "base32 decode rejected padding");
            DecodeError::InvalidPadding(pad)
        })?;

        if digits.is_empty() {
            return Ok(Vec::new());
        }

        // The converter would read these as a sign
        if let Some(sign) = digits.chars().find(|&c| c == '+' || c == '-') {
            return Err(DecodeError::Conversion(ConversionError::InvalidDigit {
                digit: sign,
                base: BASE32,
            }));
        }

        let value: Natural = Converter::base32().ston(digits, BASE32)?;
        let bit_len = digits.chars().count() as u64 * BITS_PER_DIGIT - shift;
        let byte_len = (bit_len / BITS_PER_BYTE) as usize;
        let bytes = natural_to_bytes(&(value >> shift), byte_len);

        tracing::trace!(
            input_len = encoded.len(),
            shift,
            pad,
            output_len = bytes.len(),
            "base32 decode"
        );
        Ok(bytes)
    }
}
