//! Digit Alphabets
//!
//! An alphabet is an ordered set of distinct characters. A character's
//! position is its digit value and the alphabet length is the largest base it
//! can represent.

use std::collections::HashMap;

use crate::error::{ConversionError, ConversionResult};

/// Default 36-character alphanumeric alphabet (values 0-35)
pub const DEFAULT_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// RFC 4648 base32 alphabet (values 0-31)
pub const BASE32_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Ordered, immutable digit set
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    digits: Vec<char>,
    values: HashMap<char, u32>,
}

impl Alphabet {
    /// Build an alphabet from its characters, in digit-value order
    ///
    /// # Errors
    ///
    /// `InvalidAlphabet` if the alphabet has fewer than two characters,
    /// repeats a character, or contains a sign character (`+` or `-`).
    pub fn new(digits: &str) -> ConversionResult<Self> {
        let digits: Vec<char> = digits.chars().collect();
        if digits.is_empty() {
            return Err(ConversionError::InvalidAlphabet(
                "alphabet is empty".to_string(),
            ));
        }
        if digits.len() < 2 {
            return Err(ConversionError::InvalidAlphabet(format!(
                "alphabet needs at least 2 digits, got {}",
                digits.len()
            )));
        }
        if u32::try_from(digits.len()).is_err() {
            return Err(ConversionError::InvalidAlphabet(format!(
                "alphabet has {} digits",
                digits.len()
            )));
        }

        let mut values = HashMap::with_capacity(digits.len());
        for (value, &c) in digits.iter().enumerate() {
            if c == '+' || c == '-' {
                return Err(ConversionError::InvalidAlphabet(format!(
                    "sign character {:?} at position {}",
                    c, value
                )));
            }
            if values.insert(c, value as u32).is_some() {
                return Err(ConversionError::InvalidAlphabet(format!(
                    "duplicate digit {:?} at position {}",
                    c, value
                )));
            }
        }

        Ok(Self { digits, values })
    }

    /// The default alphanumeric alphabet
    pub fn base36() -> Self {
        Self::from_trusted(DEFAULT_ALPHABET)
    }

    /// The RFC 4648 base32 alphabet
    pub fn base32() -> Self {
        Self::from_trusted(BASE32_ALPHABET)
    }

    // Only for the constant alphabets above, which are known to be valid.
    fn from_trusted(digits: &str) -> Self {
        let digits: Vec<char> = digits.chars().collect();
        let values = digits
            .iter()
            .enumerate()
            .map(|(value, &c)| (c, value as u32))
            .collect::<HashMap<_, _>>();
        debug_assert_eq!(values.len(), digits.len());
        Self { digits, values }
    }

    /// Number of digits, which is also the largest supported base
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false; construction rejects empty alphabets
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Largest base this alphabet can represent
    pub fn max_base(&self) -> u32 {
        self.digits.len() as u32
    }

    /// Character for a digit value, if the value is in range
    pub fn digit(&self, value: u32) -> Option<char> {
        self.digits.get(value as usize).copied()
    }

    /// Digit value of a character
    ///
    /// An exact match wins. Otherwise the lookup falls back to the other
    /// ASCII case, so `'F'` reads as `15` in the default alphabet and `'m'`
    /// reads as `12` in an upper-case alphabet.
    pub fn value_of(&self, c: char) -> Option<u32> {
        if let Some(&v) = self.values.get(&c) {
            return Some(v);
        }
        let folded = if c.is_ascii_uppercase() {
            c.to_ascii_lowercase()
        } else {
            c.to_ascii_uppercase()
        };
        if folded == c {
            return None;
        }
        self.values.get(&folded).copied()
    }

    /// The digits in value order
    pub fn as_chars(&self) -> &[char] {
        &self.digits
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::base36()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.digits {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Alphabet {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alphabet() {
        let alphabet = Alphabet::new(DEFAULT_ALPHABET).unwrap();
        assert_eq!(alphabet.len(), 36);
        assert_eq!(alphabet.max_base(), 36);
        assert!(!alphabet.is_empty());
        assert_eq!(alphabet.digit(0), Some('0'));
        assert_eq!(alphabet.digit(35), Some('z'));
        assert_eq!(alphabet.digit(36), None);
        assert_eq!(alphabet.to_string(), DEFAULT_ALPHABET);
    }

    #[test]
    fn test_value_lookup_case_folding() {
        let alphabet = Alphabet::new(DEFAULT_ALPHABET).unwrap();
        assert_eq!(alphabet.value_of('f'), Some(15));
        assert_eq!(alphabet.value_of('F'), Some(15));
        assert_eq!(alphabet.value_of('!'), None);

        let upper = Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ234567").unwrap();
        assert_eq!(upper.value_of('M'), Some(12));
        assert_eq!(upper.value_of('m'), Some(12));
        assert_eq!(upper.value_of('8'), None);
    }

    #[test]
    fn test_exact_match_wins_over_folding() {
        let mixed = Alphabet::new("0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        assert_eq!(mixed.value_of('a'), Some(10));
        assert_eq!(mixed.value_of('A'), Some(36));
    }

    #[test]
    fn test_well_known_alphabets_match_validated_ones() {
        assert_eq!(Alphabet::base36(), Alphabet::new(DEFAULT_ALPHABET).unwrap());
        assert_eq!(Alphabet::base32(), Alphabet::new(BASE32_ALPHABET).unwrap());
        assert_eq!(Alphabet::default(), Alphabet::base36());
        assert_eq!(Alphabet::base32().max_base(), 32);
    }

    #[test]
    fn test_empty_alphabet_rejected() {
        assert!(matches!(
            Alphabet::new(""),
            Err(ConversionError::InvalidAlphabet(_))
        ));
    }

    #[test]
    fn test_single_digit_alphabet_rejected() {
        assert!(matches!(
            Alphabet::new("0"),
            Err(ConversionError::InvalidAlphabet(_))
        ));
    }

    #[test]
    fn test_duplicate_digit_rejected() {
        let err = Alphabet::new("0120").unwrap_err();
        match err {
            ConversionError::InvalidAlphabet(msg) => assert!(msg.contains("duplicate")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_sign_digit_rejected() {
        assert!(Alphabet::new("01-").is_err());
        assert!(Alphabet::new("+01").is_err());
    }

    #[test]
    fn test_from_str() {
        let alphabet: Alphabet = "01".parse().unwrap();
        assert_eq!(alphabet.max_base(), 2);
    }
}
