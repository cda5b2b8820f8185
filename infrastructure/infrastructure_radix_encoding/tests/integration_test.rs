//! Integration tests for infrastructure_radix_encoding crate
//!
//! These tests verify base36 and base32 encoding/decoding end-to-end,
//! including the RFC 4648 test vectors.

use entities_radix::ConversionError;
use infrastructure_radix_encoding::*;

#[test]
fn test_base32_rfc4648_round_trip() {
    let vectors = [
        ("a", "ME======"),
        ("ab", "MFRA===="),
        ("abc", "MFRGG==="),
        ("abcd", "MFRGGZA="),
        ("abcde", "MFRGGZDF"),
        ("abcdef", "MFRGGZDFMY======"),
    ];

    for (plain, encoded) in vectors {
        let actual = Base32Codec::encode(plain.as_bytes()).unwrap();
        assert_eq!(actual, encoded, "encoding {:?}", plain);

        let decoded = Base32Codec::decode(&actual).unwrap();
        assert_eq!(decoded, plain.as_bytes(), "decoding {:?}", encoded);
    }
}

#[test]
fn test_base32_empty() {
    assert_eq!(Base32Codec::encode(&[]).unwrap(), "");
    assert_eq!(Base32Codec::decode("").unwrap(), Vec::<u8>::new());
}

#[test]
fn test_base32_binary_data() {
    let data: Vec<u8> = (0u8..=255).collect();
    let encoded = Base32Codec::encode(&data).unwrap();
    assert_eq!(encoded.len(), 416);
    assert!(encoded.starts_with("AAAQEAYEAUDAOCAJ"));
    assert_eq!(Base32Codec::decode(&encoded).unwrap(), data);
}

#[test]
fn test_base32_decode_errors() {
    assert_eq!(Base32Codec::decode("ME====="), Err(DecodeError::InvalidLength(7)));
    assert_eq!(Base32Codec::decode("MFRGG=Z="), Err(DecodeError::Conversion(
        ConversionError::InvalidDigit { digit: '=', base: 32 }
    )));
    assert!(matches!(
        Base32Codec::decode("MFRGGZ=="),
        Err(DecodeError::InvalidPadding(2))
    ));
}

#[test]
fn test_base36_value_round_trip() {
    let inputs: [&[u8]; 4] = [b"hello", &[0xde, 0xad, 0xbe, 0xef], &[1], &[0xff; 32]];
    for input in inputs {
        let encoded = Base36Codec::encode(input).unwrap();
        assert!(encoded.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_eq!(Base36Codec::decode(&encoded).unwrap(), input);
    }
}

#[test]
fn test_base36_leading_zeros_not_preserved() {
    let encoded = Base36Codec::encode(&[0, 0, 0xff]).unwrap();
    assert_eq!(encoded, "73");
    assert_eq!(Base36Codec::decode(&encoded).unwrap(), vec![0xff]);
}

#[test]
fn test_base36_decode_rejects_negative() {
    assert_eq!(
        Base36Codec::decode("-abc"),
        Err(DecodeError::Conversion(ConversionError::SignNotAllowed))
    );
}

#[test]
fn test_byte_helpers_round_trip() {
    let value = bytes_to_natural(b"\x12\x34\x56");
    assert_eq!(natural_to_bytes(&value, 0), vec![0x12, 0x34, 0x56]);
    assert_eq!(natural_to_bytes(&value, 5), vec![0, 0, 0x12, 0x34, 0x56]);
}

#[test]
fn test_errors_are_std_errors() {
    let err: Box<dyn std::error::Error> = Box::new(DecodeError::InvalidLength(3));
    assert_eq!(err.to_string(), "Invalid encoded length: 3");
}
