//! String/Number Converter
//!
//! Converts integers to and from digit strings in any base the converter's
//! alphabet supports.
//!
//! ## Conventions
//!
//! - Input strings may carry one leading `+` or `-` and are read
//!   case-insensitively (see [`Alphabet::value_of`]).
//! - Output strings are most-significant digit first, with a leading `-` for
//!   negative values and no `+`.
//! - Zero renders as the single digit `alphabet[0]` ("0" for the default
//!   alphabet), so every rendered value parses back.

use std::sync::OnceLock;

use crate::alphabet::Alphabet;
use crate::error::{ConversionError, ConversionResult};
use crate::integer::{RadixInteger, RadixMagnitude};
use crate::sink::{DigitCounter, DigitSink};

/// Conventional base for the free [`ston`] and [`ntos`] functions
pub const DEFAULT_BASE: u32 = 10;

static CONVERTER36: OnceLock<Converter> = OnceLock::new();
static CONVERTER32: OnceLock<Converter> = OnceLock::new();

/// Alphabet-parameterized integer/string converter
///
/// Immutable after construction, so one instance can be shared freely across
/// threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Converter {
    alphabet: Alphabet,
}

impl Converter {
    /// Create a converter over a custom digit alphabet
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_radix::Converter;
    ///
    /// let octal = Converter::new("ABCDEFGH").unwrap();
    /// assert_eq!(octal.ston::<u64>("ACEG", 8).unwrap(), 166);
    /// ```
    pub fn new(digits: &str) -> ConversionResult<Self> {
        Ok(Self::from_alphabet(Alphabet::new(digits)?))
    }

    pub fn from_alphabet(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// Shared converter over the default 36-character alphabet
    ///
    /// Built on first use and never modified afterwards.
    pub fn base36() -> &'static Converter {
        CONVERTER36.get_or_init(|| Converter::from_alphabet(Alphabet::base36()))
    }

    /// Shared converter over the RFC 4648 base32 alphabet
    pub fn base32() -> &'static Converter {
        CONVERTER32.get_or_init(|| Converter::from_alphabet(Alphabet::base32()))
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Largest base this converter supports (the alphabet length)
    pub fn max_base(&self) -> u32 {
        self.alphabet.max_base()
    }

    fn check_base(&self, base: u32) -> ConversionResult<()> {
        if base < 2 || base > self.max_base() {
            return Err(ConversionError::InvalidBase {
                base,
                max_base: self.max_base(),
            });
        }
        Ok(())
    }

    /// Number of characters `ntos(n, base)` would produce
    ///
    /// Runs the same digit loop as `ntos` against a counting sink, so no
    /// string is built. Useful for pre-sizing buffers.
    pub fn count_digits<N: RadixInteger>(&self, n: &N, base: u32) -> ConversionResult<usize> {
        let mut counter = DigitCounter::new();
        self.emit_reversed(n, base, &mut counter)?;
        Ok(counter.count())
    }

    /// Parse `s` as a signed magnitude in `base`
    ///
    /// # Arguments
    ///
    /// * `s` - Digit string, optionally prefixed with `+` or `-`
    /// * `base` - Base in `[2, max_base]`
    ///
    /// # Returns
    ///
    /// * `Ok(n)` - Parsed value
    /// * `Err(ConversionError)` - `EmptyInput`, `InvalidBase`, `NoDigits`,
    ///   `SignNotAllowed` (unsigned `N` with a `-`), or `InvalidDigit`
    ///
    /// Fixed-width targets wrap silently when the value does not fit.
    pub fn ston<N: RadixInteger>(&self, s: &str, base: u32) -> ConversionResult<N> {
        self.ston_chars(s.chars(), base)
    }

    /// Same as [`Converter::ston`], over any sequence of characters
    pub fn ston_chars<N, I>(&self, chars: I, base: u32) -> ConversionResult<N>
    where
        N: RadixInteger,
        I: IntoIterator<Item = char>,
    {
        let mut chars = chars.into_iter().peekable();
        if chars.peek().is_none() {
            return Err(ConversionError::EmptyInput);
        }
        self.check_base(base)?;

        let negative = match chars.peek() {
            Some(&'+') => {
                chars.next();
                false
            }
            Some(&'-') => {
                chars.next();
                true
            }
            _ => false,
        };

        if chars.peek().is_none() {
            return Err(ConversionError::NoDigits);
        }
        if negative && !N::SIGNED {
            return Err(ConversionError::SignNotAllowed);
        }

        let mut n = N::zero();
        for c in chars {
            let value = self
                .alphabet
                .value_of(c)
                .filter(|&v| v < base)
                .ok_or(ConversionError::InvalidDigit { digit: c, base })?;
            n = n.mul_add_digit(base, value);
        }

        if negative {
            n = n.negate();
        }
        Ok(n)
    }

    /// Render `n` in `base`, most-significant digit first
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_radix::Converter;
    ///
    /// let base36 = Converter::base36();
    /// assert_eq!(base36.ntos(&36u32, 36).unwrap(), "10");
    /// assert_eq!(base36.ntos(&-255i32, 16).unwrap(), "-ff");
    /// ```
    pub fn ntos<N: RadixInteger>(&self, n: &N, base: u32) -> ConversionResult<String> {
        let mut out = String::new();
        self.ntos_into(n, base, &mut out)?;
        Ok(out)
    }

    /// Append the characters of `ntos(n, base)` to `sink`
    ///
    /// Nothing is written when the base is rejected.
    pub fn ntos_into<N, S>(&self, n: &N, base: u32, mut sink: S) -> ConversionResult<()>
    where
        N: RadixInteger,
        S: DigitSink,
    {
        let mut reversed: Vec<char> = Vec::new();
        self.emit_reversed(n, base, &mut reversed)?;
        for &c in reversed.iter().rev() {
            sink.push_digit(c);
        }
        Ok(())
    }

    // Every rendering path goes through here. Digits come out least
    // significant first, followed by '-' for negative values. A zero
    // magnitude yields no digits from the division loop, so it is written
    // explicitly as alphabet[0].
    fn emit_reversed<N, S>(&self, n: &N, base: u32, sink: &mut S) -> ConversionResult<()>
    where
        N: RadixInteger,
        S: DigitSink,
    {
        self.check_base(base)?;

        let digits = self.alphabet.as_chars();
        let mut magnitude = n.magnitude();
        if magnitude.is_zero() {
            sink.push_digit(digits[0]);
            return Ok(());
        }

        while !magnitude.is_zero() {
            let digit = magnitude.div_rem_digit(base);
            sink.push_digit(digits[digit as usize]);
        }

        if n.is_negative() {
            sink.push_digit('-');
        }
        Ok(())
    }
}

impl Default for Converter {
    fn default() -> Self {
        Converter::base36().clone()
    }
}

/// Parse `s` in `base` with the shared base36 converter
///
/// # Examples
///
/// ```rust
/// use entities_radix::{ston, DEFAULT_BASE};
///
/// assert_eq!(ston::<i32>("-123", DEFAULT_BASE).unwrap(), -123);
/// assert_eq!(ston::<u8>("FF", 16).unwrap(), 255);
/// ```
pub fn ston<N: RadixInteger>(s: &str, base: u32) -> ConversionResult<N> {
    Converter::base36().ston(s, base)
}

/// Render `n` in `base` with the shared base36 converter
pub fn ntos<N: RadixInteger>(n: &N, base: u32) -> ConversionResult<String> {
    Converter::base36().ntos(n, base)
}
