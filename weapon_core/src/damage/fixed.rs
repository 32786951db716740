//! Fixed - base-10 fixed-point number for exact damage arithmetic

use std::fmt;
use std::ops::{Add, Mul};

/// Decimal number with four fractional digits, stored as `value × 10^4`
///
/// Every multiplier the weapon formulas use (1.75, 0.35, 2.5, 1.25) and every
/// product of them with an integer roll is representable exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed {
    raw: i64,
}

impl Fixed {
    /// Number of raw units per whole number
    pub const SCALE: i64 = 10_000;

    pub const ZERO: Fixed = Fixed { raw: 0 };
    pub const ONE: Fixed = Fixed { raw: Self::SCALE };

    /// Create from a whole number
    pub const fn from_int(value: i32) -> Self {
        Fixed {
            raw: value as i64 * Self::SCALE,
        }
    }

    /// Create from hundredths, e.g. `from_hundredths(175)` is 1.75
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Fixed {
            raw: hundredths * (Self::SCALE / 100),
        }
    }

    /// Raw scaled value
    pub const fn raw(&self) -> i64 {
        self.raw
    }

    /// Integer part, truncated toward zero
    pub fn trunc(&self) -> i32 {
        saturate(self.raw / Self::SCALE)
    }

    /// Smallest integer greater than or equal to this value
    pub fn ceil(&self) -> i32 {
        let whole = self.raw.div_euclid(Self::SCALE);
        let carry = if self.raw.rem_euclid(Self::SCALE) != 0 { 1 } else { 0 };
        saturate(whole + carry)
    }
}

fn saturate(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl From<i32> for Fixed {
    fn from(value: i32) -> Self {
        Fixed::from_int(value)
    }
}

impl Add for Fixed {
    type Output = Fixed;

    fn add(self, rhs: Fixed) -> Fixed {
        Fixed {
            raw: self.raw.saturating_add(rhs.raw),
        }
    }
}

impl Mul for Fixed {
    type Output = Fixed;

    fn mul(self, rhs: Fixed) -> Fixed {
        let product = self.raw as i128 * rhs.raw as i128 / Self::SCALE as i128;
        Fixed {
            raw: product.clamp(i64::MIN as i128, i64::MAX as i128) as i64,
        }
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.raw < 0 { "-" } else { "" };
        let abs = self.raw.unsigned_abs();
        let scale = Self::SCALE as u64;
        let whole = abs / scale;
        let frac = abs % scale;
        if frac == 0 {
            return write!(f, "{}{}", sign, whole);
        }
        let digits = format!("{:04}", frac);
        write!(f, "{}{}.{}", sign, whole, digits.trim_end_matches('0'))
    }
}
