// ============================================================================
// Fixed-Point Binary
// Shift-scaled fixed-point numbers with an integer-restricted base range
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fixed_decimal::{pow10, scale_bits, FixedDecimal};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed-point number scaled by a power of two approximating `10^DECIMALS`.
///
/// Internally stores `value × 2^SHIFT` as an i32, where `SHIFT` is the
/// smallest shift with `2^SHIFT >= 10^DECIMALS` (DECIMALS=2 → divisor 128
/// approximating 100). The power-of-two divisor trades exact decimal
/// round-tripping for shift-speed multiply/divide; rendering rounds the
/// binary fraction to `DECIMALS` decimal digits.
///
/// The i32 raw field is what restricts the base range: with DECIMALS=2 the
/// bounds are 16777215.99 / -16777216.00.
///
/// # Type Parameter
/// - `DECIMALS`: Number of decimal digits rendered (1-9).
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct FixedBinary<const DECIMALS: u8>(i32);

impl<const D: u8> FixedBinary<D> {
    /// Bits of the raw value reserved for the fraction
    pub const SHIFT: u32 = scale_bits(D);

    /// The scale factor (2^SHIFT)
    pub const SCALE: i64 = 1i64 << scale_bits(D);

    /// Half scale for rounding
    const HALF_SCALE: i64 = (1i64 << scale_bits(D)) / 2;

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.0)
    pub const ONE: Self = Self((1i64 << scale_bits(D)) as i32);

    /// Maximum representable value (i32::MAX raw)
    pub const MAX: Self = Self(i32::MAX);

    /// Minimum representable value (i32::MIN raw)
    pub const MIN: Self = Self(i32::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation. No range check is performed.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Create from an integer value.
    ///
    /// # Errors
    /// Returns `Overflow`/`Underflow` if the shifted value leaves the i32
    /// raw range.
    #[inline]
    pub fn from_integer(value: i32) -> NumericResult<Self> {
        let shifted = (value as i64) << Self::SHIFT;
        Self::narrow(shifted)
    }

    /// Create from an `f64`, rounding half away from zero.
    ///
    /// The float→int cast saturates at the i32 bounds and maps NaN to zero
    /// (Rust cast semantics).
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self((value * Self::SCALE as f64).round() as i32)
    }

    /// Create from an `f32`, computed in single precision.
    ///
    /// Intentionally lower-fidelity than `from_f64`, mirroring the decimal
    /// family's dual construction paths.
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self((value * Self::SCALE as f32).round() as i32)
    }

    /// Narrow an i64 intermediate back to the i32 raw field.
    #[inline]
    fn narrow(value: i64) -> NumericResult<Self> {
        if value > i32::MAX as i64 {
            Err(NumericError::Overflow)
        } else if value < i32::MIN as i64 {
            Err(NumericError::Underflow)
        } else {
            Ok(Self(value as i32))
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled).
    #[inline]
    pub const fn raw_value(self) -> i32 {
        self.0
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> i32 {
        self.0 / (Self::SCALE as i32)
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if value is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Get absolute value.
    #[inline]
    pub fn abs(self) -> NumericResult<Self> {
        if self.0 == i32::MIN {
            Err(NumericError::Overflow)
        } else {
            Ok(Self(self.0.abs()))
        }
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Convert to `f64`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    /// Convert to `f32` (direct single-precision path).
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / Self::SCALE as f32
    }

    /// The raw value rescaled to a decimal scale of `10^DECIMALS`, rounded
    /// half away from zero. This is what rendering and decimal conversion
    /// are built on.
    #[inline]
    fn decimal_scaled(self) -> i64 {
        let num = (self.0 as i64) * pow10(D);
        if num >= 0 {
            (num + Self::HALF_SCALE) / Self::SCALE
        } else {
            (num - Self::HALF_SCALE) / Self::SCALE
        }
    }

    /// Convert to the decimal-scaled family at precision `M`.
    ///
    /// Exact integer rescale (`round(raw * 10^M / 2^SHIFT)`) through i128.
    #[inline]
    pub fn to_fixed_decimal<const M: u8>(self) -> FixedDecimal<M> {
        let num = self.0 as i128 * FixedDecimal::<M>::SCALE as i128;
        let half = Self::HALF_SCALE as i128;
        let rounded = if num >= 0 {
            (num + half) / Self::SCALE as i128
        } else {
            (num - half) / Self::SCALE as i128
        };
        FixedDecimal::<M>::from_raw(rounded as i64)
    }

    /// Convert from the decimal-scaled family at precision `M`.
    ///
    /// # Errors
    /// Returns `Overflow`/`Underflow` if the value leaves the i32 raw range.
    pub fn from_fixed_decimal<const M: u8>(value: FixedDecimal<M>) -> NumericResult<Self> {
        let num = value.raw_value() as i128 * Self::SCALE as i128;
        let den = FixedDecimal::<M>::SCALE as i128;
        let half = den / 2;
        let rounded = if num >= 0 {
            (num + half) / den
        } else {
            (num - half) / den
        };
        if rounded > i32::MAX as i128 {
            Err(NumericError::Overflow)
        } else if rounded < i32::MIN as i128 {
            Err(NumericError::Underflow)
        } else {
            Ok(Self(rounded as i32))
        }
    }

    /// Render with a specific decimal separator.
    pub fn format_separated(self, separator: char) -> String {
        if separator == '.' {
            return self.to_string();
        }
        self.to_string().replace('.', &separator.to_string())
    }

    /// Parse with a specific decimal separator.
    ///
    /// # Errors
    /// Returns `InvalidInput` on malformed input, `Overflow`/`Underflow` when
    /// the value leaves the i32 raw range.
    pub fn parse_separated(s: &str, separator: char) -> NumericResult<Self> {
        if separator == '.' {
            return s.parse();
        }
        if s.contains('.') {
            return Err(NumericError::InvalidInput);
        }
        s.replace(separator, ".").parse()
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition (plain raw add, scale is additive-invariant).
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 > 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_sub(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 < 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked multiplication with round half away from zero.
    ///
    /// The i64 product is divided back by `SCALE` once, then narrowed.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        let product = (self.0 as i64) * (rhs.0 as i64);
        let rounded = if product >= 0 {
            (product + Self::HALF_SCALE) / Self::SCALE
        } else {
            (product - Self::HALF_SCALE) / Self::SCALE
        };
        Self::narrow(rounded)
    }

    /// Multiply by an integer (no scaling needed).
    #[inline]
    pub fn checked_mul_int(self, rhs: i32) -> NumericResult<Self> {
        self.0
            .checked_mul(rhs)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Checked division with round half away from zero.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow`/`Underflow` if the quotient is out of range
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.0 == 0 {
            return Err(NumericError::DivisionByZero);
        }

        let num = (self.0 as i64) << Self::SHIFT;
        let den = rhs.0 as i64;
        let quot = num / den;
        let rem = num % den;

        let rounded = if rem.unsigned_abs() * 2 >= den.unsigned_abs() {
            if (num < 0) != (den < 0) {
                quot - 1
            } else {
                quot + 1
            }
        } else {
            quot
        };

        Self::narrow(rounded)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Returns the minimum of two values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Returns the maximum of two values.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const D: u8> Default for FixedBinary<D> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const D: u8> PartialEq for FixedBinary<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<const D: u8> Eq for FixedBinary<D> {}

impl<const D: u8> PartialOrd for FixedBinary<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl<const D: u8> Ord for FixedBinary<D> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<const D: u8> Hash for FixedBinary<D> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<const D: u8> Neg for FixedBinary<D> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

// Infallible operators for ergonomics (panic on overflow - use checked_* in
// production paths)
impl<const D: u8> Add for FixedBinary<D> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("FixedBinary addition overflow")
    }
}

impl<const D: u8> Sub for FixedBinary<D> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("FixedBinary subtraction overflow")
    }
}

impl<const D: u8> Mul for FixedBinary<D> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs)
            .expect("FixedBinary multiplication overflow")
    }
}

impl<const D: u8> Div for FixedBinary<D> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("FixedBinary division failed")
    }
}

impl<const D: u8> AddAssign for FixedBinary<D> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const D: u8> SubAssign for FixedBinary<D> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const D: u8> fmt::Debug for FixedBinary<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedBinary<{}>({}, raw={})", D, self, self.0)
    }
}

impl<const D: u8> fmt::Display for FixedBinary<D> {
    /// Renders the binary fraction rounded to exactly `DECIMALS` decimal
    /// digits, sign preserved, never exponential notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dec = pow10(D);
        let scaled = self.decimal_scaled();
        let int_part = scaled / dec;
        let frac_part = (scaled % dec).unsigned_abs();

        if D == 0 {
            write!(f, "{}", int_part)
        } else if scaled < 0 && int_part == 0 {
            // Handle -0.xxx case
            write!(f, "-0.{:0>width$}", frac_part, width = D as usize)
        } else {
            write!(f, "{}.{:0>width$}", int_part, frac_part, width = D as usize)
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<const D: u8> std::str::FromStr for FixedBinary<D> {
    type Err = NumericError;

    /// Parse a decimal string, quantizing onto the binary scale with round
    /// half away from zero. Digits beyond `DECIMALS` round per the decimal
    /// parser this goes through.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dec: FixedDecimal<D> = s.parse()?;
        Self::from_fixed_decimal(dec)
    }
}

// ============================================================================
// Precision Aliases
// ============================================================================

/// The integer-base variant: two decimal digits over a 2^7 divisor, with the
/// base range restricted by the i32 raw width (±16777216).
pub type Fb2 = FixedBinary<2>;

// ============================================================================
// Tests
// ============================================================================
