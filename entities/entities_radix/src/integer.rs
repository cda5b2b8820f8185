//! Integer Capabilities
//!
//! The converter is generic over any integer type that can be built up digit
//! by digit and broken down digit by digit. `RadixInteger` covers the
//! building side plus sign handling; `RadixMagnitude` covers repeated
//! division of the non-negative magnitude.
//!
//! Implementations are provided for every primitive integer and for
//! malachite's `Integer` and `Natural`. Fixed-width targets wrap on overflow,
//! the same way `*` and `+` wrap in two's complement.

use malachite::base::num::arithmetic::traits::UnsignedAbs;
use malachite::base::num::basic::traits::Zero;
use malachite::{Integer, Natural};

/// Non-negative magnitude that can be peeled into digits
pub trait RadixMagnitude {
    /// True once every digit has been peeled off
    fn is_zero(&self) -> bool;

    /// Divide in place by `base` and return the remainder
    fn div_rem_digit(&mut self, base: u32) -> u32;
}

/// Integer type usable as a conversion source or target
pub trait RadixInteger: Sized {
    /// Type of the absolute value
    type Magnitude: RadixMagnitude;

    /// Whether the type can hold negative values
    const SIGNED: bool;

    /// The additive identity
    fn zero() -> Self;

    /// `self * base + digit`
    fn mul_add_digit(self, base: u32, digit: u32) -> Self;

    /// Arithmetic negation (unsigned types never receive this call)
    fn negate(self) -> Self;

    /// True for values below zero
    fn is_negative(&self) -> bool;

    /// Absolute value, wide enough to hold `|MIN|` for signed primitives
    fn magnitude(&self) -> Self::Magnitude;
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl RadixMagnitude for $t {
                fn is_zero(&self) -> bool {
                    *self == 0
                }

                fn div_rem_digit(&mut self, base: u32) -> u32 {
                    // u128 keeps bases wider than the type exact
                    let value = *self as u128;
                    let base = base as u128;
                    *self = (value / base) as $t;
                    (value % base) as u32
                }
            }

            impl RadixInteger for $t {
                type Magnitude = $t;
                const SIGNED: bool = false;

                fn zero() -> Self {
                    0
                }

                fn mul_add_digit(self, base: u32, digit: u32) -> Self {
                    (self as u128)
                        .wrapping_mul(base as u128)
                        .wrapping_add(digit as u128) as $t
                }

                fn negate(self) -> Self {
                    self.wrapping_neg()
                }

                fn is_negative(&self) -> bool {
                    false
                }

                fn magnitude(&self) -> Self::Magnitude {
                    *self
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($t:ty => $u:ty),*) => {
        $(
            impl RadixInteger for $t {
                type Magnitude = $u;
                const SIGNED: bool = true;

                fn zero() -> Self {
                    0
                }

                fn mul_add_digit(self, base: u32, digit: u32) -> Self {
                    (self as i128)
                        .wrapping_mul(base as i128)
                        .wrapping_add(digit as i128) as $t
                }

                fn negate(self) -> Self {
                    self.wrapping_neg()
                }

                fn is_negative(&self) -> bool {
                    *self < 0
                }

                fn magnitude(&self) -> Self::Magnitude {
                    self.unsigned_abs()
                }
            }
        )*
    };
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

impl RadixMagnitude for Natural {
    fn is_zero(&self) -> bool {
        *self == Natural::ZERO
    }

    fn div_rem_digit(&mut self, base: u32) -> u32 {
        let divisor = Natural::from(base);
        let remainder = &*self % &divisor;
        *self /= &divisor;
        // The remainder is below `base`, so it always fits
        u32::try_from(&remainder).unwrap_or_default()
    }
}

impl RadixInteger for Natural {
    type Magnitude = Natural;
    const SIGNED: bool = false;

    fn zero() -> Self {
        Natural::ZERO
    }

    fn mul_add_digit(self, base: u32, digit: u32) -> Self {
        self * Natural::from(base) + Natural::from(digit)
    }

    fn negate(self) -> Self {
        self
    }

    fn is_negative(&self) -> bool {
        false
    }

    fn magnitude(&self) -> Self::Magnitude {
        self.clone()
    }
}

impl RadixInteger for Integer {
    type Magnitude = Natural;
    const SIGNED: bool = true;

    fn zero() -> Self {
        Integer::ZERO
    }

    fn mul_add_digit(self, base: u32, digit: u32) -> Self {
        self * Integer::from(base) + Integer::from(digit)
    }

    fn negate(self) -> Self {
        -self
    }

    fn is_negative(&self) -> bool {
        *self < 0
    }

    fn magnitude(&self) -> Self::Magnitude {
        self.clone().unsigned_abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peel<M: RadixMagnitude>(mut m: M, base: u32) -> Vec<u32> {
        let mut digits = Vec::new();
        while !m.is_zero() {
            digits.push(m.div_rem_digit(base));
        }
        digits
    }

    #[test]
    fn test_primitive_magnitude() {
        assert_eq!(peel(123u32, 10), vec![3, 2, 1]);
        assert_eq!(peel(0u8, 10), Vec::<u32>::new());
        assert_eq!((-5i32).magnitude(), 5u32);
        assert_eq!(i64::MIN.magnitude(), 1u64 << 63);
    }

    #[test]
    fn test_base_wider_than_type() {
        // 200 in base 300 is a single digit
        assert_eq!(peel(200u8, 300), vec![200]);
        assert_eq!(0u8.mul_add_digit(300, 200), 200);
    }

    #[test]
    fn test_mul_add_wraps() {
        assert_eq!(255u8.mul_add_digit(2, 1), 255);
        assert_eq!(i8::MAX.mul_add_digit(2, 0), -2);
    }

    #[test]
    fn test_natural_magnitude() {
        let n = Natural::from(36u32 * 36 + 5);
        assert_eq!(peel(n, 36), vec![5, 0, 1]);
    }

    #[test]
    fn test_integer_sign() {
        let n = Integer::from(-42);
        assert!(n.is_negative());
        assert_eq!(n.magnitude(), Natural::from(42u32));
        assert_eq!(Integer::from(42).negate(), Integer::from(-42));
        assert!(!Integer::zero().is_negative());
    }

    #[test]
    fn test_signed_flags() {
        assert!(i32::SIGNED);
        assert!(Integer::SIGNED);
        assert!(!u32::SIGNED);
        assert!(!Natural::SIGNED);
    }
}
