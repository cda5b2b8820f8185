//! Entities Layer: Radix Conversion
//!
//! Converts integers to and from strings in any base, using a configurable
//! digit alphabet.
//!
//! ## Overview
//!
//! - **[`alphabet`]**: ordered digit sets; the largest base is the alphabet length
//! - **[`converter`]**: `count_digits`, `ston` and `ntos` over any alphabet
//! - **[`integer`]**: capability traits implemented for primitive integers
//!   and malachite's `Integer`/`Natural`
//! - **[`sink`]**: append-only destinations for rendered digits
//!
//! ## Examples
//!
//! ```rust
//! use entities_radix::{ntos, ston, Converter};
//! use malachite::Integer;
//!
//! assert_eq!(ntos(&36u32, 36).unwrap(), "10");
//! assert_eq!(ston::<i32>("-z", 36).unwrap(), -35);
//!
//! let big: Integer = ston("3w5e11264sgsf", 36).unwrap();
//! assert_eq!(big, Integer::from(u64::MAX));
//!
//! let custom = Converter::new("ABCDEFGH").unwrap();
//! assert_eq!(custom.ntos(&166u32, 8).unwrap(), "CEG");
//! ```
//!
//! ## See Also
//!
//! - `infrastructure_radix_encoding`: base36 and base32 byte codecs built on
//!   this crate

pub mod alphabet;
pub mod converter;
pub mod error;
pub mod integer;
pub mod sink;

pub use alphabet::{Alphabet, BASE32_ALPHABET, DEFAULT_ALPHABET};
pub use converter::{ntos, ston, Converter, DEFAULT_BASE};
pub use error::{ConversionError, ConversionResult};
pub use integer::{RadixInteger, RadixMagnitude};
pub use sink::{DigitCounter, DigitSink};
