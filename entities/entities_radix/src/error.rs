//! Conversion Errors
//!
//! Error taxonomy shared by alphabet construction and string/number
//! conversion. Every failure is reported to the immediate caller; no partial
//! result is ever returned.

/// Errors raised while building a converter or converting a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Base outside `[2, max_base]`
    InvalidBase {
        /// The requested base
        base: u32,
        /// Largest base the alphabet supports
        max_base: u32,
    },
    /// `ston` was given a zero-length string
    EmptyInput,
    /// `ston` was given a sign and nothing after it
    NoDigits,
    /// Character not in the alphabet, or its value is `>= base`
    InvalidDigit {
        /// The offending input character
        digit: char,
        /// The base the string was parsed in
        base: u32,
    },
    /// A `-` sign was parsed into an unsigned target type
    SignNotAllowed,
    /// Empty, too short, duplicated or sign-bearing alphabet
    InvalidAlphabet(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::InvalidBase { base, max_base } => {
                write!(f, "Bad base = {} (expected 2..={})", base, max_base)
            }
            ConversionError::EmptyInput => write!(f, "Empty string not allowed"),
            ConversionError::NoDigits => write!(f, "No digits found"),
            ConversionError::InvalidDigit { digit, base } => {
                write!(f, "Bad digit = {:?} for base {}", digit, base)
            }
            ConversionError::SignNotAllowed => {
                write!(f, "Negative sign not allowed for unsigned target")
            }
            ConversionError::InvalidAlphabet(msg) => write!(f, "Invalid alphabet: {}", msg),
        }
    }
}

impl std::error::Error for ConversionError {}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
