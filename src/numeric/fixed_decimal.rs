// ============================================================================
// Fixed-Point Decimal
// Scaled-integer decimal numbers with compile-time precision
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed-point decimal number with compile-time precision.
///
/// Internally stores `value × 10^DECIMALS` as an i64. The scale is a true
/// decimal power, so decimal strings round-trip exactly to `DECIMALS`
/// fractional digits.
///
/// # Type Parameter
/// - `DECIMALS`: Number of decimal places (1-18).
///
/// # Value Range
/// `MAX`/`MIN` reserve `ceil(log2(10^DECIMALS))` bits of the 63-bit raw
/// magnitude for the fractional scale and give the rest to the integer part.
/// With DECIMALS=2 that leaves 56 bits: ±72057594037927936.00.
///
/// Raw values beyond `MAX`/`MIN` remain constructible through `from_raw`;
/// no range check is enforced on direct raw assignment.
///
/// # Example
/// ```ignore
/// use fixed_point_decimal::numeric::Fp2;
///
/// let price = Fp2::from_f64(1.23);
/// let qty = Fp2::from_f64(4.56);
/// let total = price.checked_mul(qty)?; // 5.61
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct FixedDecimal<const DECIMALS: u8>(i64);

// ============================================================================
// Scale Constants
// ============================================================================

/// Compute 10^n at compile time
pub(crate) const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Bits reserved for the fractional scale: smallest b with 2^b >= 10^n
pub(crate) const fn scale_bits(n: u8) -> u32 {
    let scale = pow10(n);
    let mut bits = 0u32;
    while (1i64 << bits) < scale {
        bits += 1;
    }
    bits
}

impl<const D: u8> FixedDecimal<D> {
    /// The scale factor (10^DECIMALS)
    pub const SCALE: i64 = pow10(D);

    /// Half scale for rounding (SCALE / 2)
    const HALF_SCALE: i64 = pow10(D) / 2;

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.0). Incrementing by `ONE` steps the real value by exactly 1,
    /// never by one raw unit.
    pub const ONE: Self = Self(pow10(D));

    /// Largest value whose integer part fits the bits left after the
    /// fractional scale is reserved (2^(63 - scale_bits)).
    pub const MAX: Self = Self((1i64 << (63 - scale_bits(D))) * pow10(D));

    /// Negative counterpart of `MAX`.
    pub const MIN: Self = Self(-(1i64 << (63 - scale_bits(D))) * pow10(D));

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation.
    ///
    /// Use this when you already have a scaled value. No range check is
    /// performed.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from an integer value.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is too large to represent.
    #[inline]
    pub fn from_integer(value: i64) -> NumericResult<Self> {
        value
            .checked_mul(Self::SCALE)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Create from integer and fractional parts.
    ///
    /// # Arguments
    /// - `integer`: The integer part (can be negative)
    /// - `fraction`: The fractional part (must be < SCALE, always positive)
    #[inline]
    pub fn from_parts(integer: i64, fraction: u64) -> NumericResult<Self> {
        if fraction >= Self::SCALE as u64 {
            return Err(NumericError::InvalidInput);
        }

        let int_scaled = integer
            .checked_mul(Self::SCALE)
            .ok_or(NumericError::Overflow)?;

        let frac_signed = if integer < 0 {
            -(fraction as i64)
        } else {
            fraction as i64
        };

        int_scaled
            .checked_add(frac_signed)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Create from an `f64`, rounding half away from zero to the nearest
    /// representable value.
    ///
    /// The raw value is `(value * SCALE).round()`. The float→int cast
    /// saturates at the i64 bounds and maps NaN to zero (Rust cast
    /// semantics); values outside `MIN..=MAX` are therefore not rejected.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self((value * Self::SCALE as f64).round() as i64)
    }

    /// Create from an `f32`, computed in single precision before widening.
    ///
    /// This path is intentionally lower-fidelity than `from_f64`: the scale
    /// multiply happens in f32, so the same nominal value can land a few raw
    /// units away from the `from_f64` result at high precisions.
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self((value * Self::SCALE as f32).round() as i64)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled).
    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.0
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> i64 {
        self.0 / Self::SCALE
    }

    /// Get the fractional part as a positive value.
    #[inline]
    pub const fn fractional_part(self) -> u64 {
        (self.0 % Self::SCALE).unsigned_abs()
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
        if self.0 == i64::MIN {
            Err(NumericError::Overflow)
        } else {
            Ok(Self(self.0.abs()))
        }
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Convert to `f64` (`raw / SCALE` in double precision).
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    /// Convert to `f32`.
    ///
    /// Computed directly in single precision, not derived from `to_f64`,
    /// mirroring the dual-path construction.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / Self::SCALE as f32
    }

    /// Rescale to another precision, rounding half away from zero when
    /// precision decreases.
    ///
    /// The rescale multiply runs in i128, so even the widest supported swing
    /// (8 → 2 digits, a 10^6 factor) cannot overflow mid-computation. The
    /// final narrowing to i64 truncates for values beyond the target's raw
    /// width, matching the unchecked raw-assignment contract.
    #[inline]
    pub fn rescale<const M: u8>(self) -> FixedDecimal<M> {
        let num = self.0 as i128 * FixedDecimal::<M>::SCALE as i128;
        let den = Self::SCALE as i128;
        let half = den / 2;
        let rounded = if num >= 0 {
            (num + half) / den
        } else {
            (num - half) / den
        };
        FixedDecimal::<M>(rounded as i64)
    }

    /// Render with a specific decimal separator (invariant rendering uses
    /// `'.'` via `Display`).
    pub fn format_separated(self, separator: char) -> String {
        if separator == '.' {
            return self.to_string();
        }
        self.to_string().replace('.', &separator.to_string())
    }

    /// Parse with a specific decimal separator.
    ///
    /// # Errors
    /// Returns `InvalidInput` on malformed input, including a `'.'` appearing
    /// alongside a non-`'.'` separator.
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

    /// Checked addition. The scale is additive-invariant, so this is a plain
    /// raw add.
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
    /// A naive raw multiply would apply the scale twice, so the product is
    /// divided back by `SCALE` once, using an i128 intermediate to prevent
    /// overflow during the calculation.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        let scale = Self::SCALE as i128;
        let half_scale = Self::HALF_SCALE as i128;
        let product = (self.0 as i128) * (rhs.0 as i128);

        let rounded = if product >= 0 {
            product + half_scale
        } else {
            product - half_scale
        };

        let result = rounded / scale;

        if result > i64::MAX as i128 {
            Err(NumericError::Overflow)
        } else if result < i64::MIN as i128 {
            Err(NumericError::Underflow)
        } else {
            Ok(Self(result as i64))
        }
    }

    /// Multiply by an integer (no scaling needed).
    ///
    /// More efficient than `checked_mul` when multiplying by a whole number.
    #[inline]
    pub fn checked_mul_int(self, rhs: i64) -> NumericResult<Self> {
        self.0
            .checked_mul(rhs)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Checked division with round half away from zero.
    ///
    /// The dividend is pre-multiplied by `SCALE` (in i128) so fractional
    /// precision survives the integer divide; the symmetric correction to
    /// `checked_mul`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow`/`Underflow` if the quotient is out of range
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.0 == 0 {
            return Err(NumericError::DivisionByZero);
        }

        let num = (self.0 as i128) * (Self::SCALE as i128);
        let den = rhs.0 as i128;
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

        if rounded > i64::MAX as i128 {
            Err(NumericError::Overflow)
        } else if rounded < i64::MIN as i128 {
            Err(NumericError::Underflow)
        } else {
            Ok(Self(rounded as i64))
        }
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

impl<const D: u8> Default for FixedDecimal<D> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const D: u8> PartialEq for FixedDecimal<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<const D: u8> Eq for FixedDecimal<D> {}

impl<const D: u8> PartialOrd for FixedDecimal<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl<const D: u8> Ord for FixedDecimal<D> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<const D: u8> Hash for FixedDecimal<D> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<const D: u8> Neg for FixedDecimal<D> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

// Infallible operators for ergonomics (panic on overflow - use checked_* in
// production paths)
impl<const D: u8> Add for FixedDecimal<D> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("FixedDecimal addition overflow")
    }
}

impl<const D: u8> Sub for FixedDecimal<D> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("FixedDecimal subtraction overflow")
    }
}

impl<const D: u8> Mul for FixedDecimal<D> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs)
            .expect("FixedDecimal multiplication overflow")
    }
}

impl<const D: u8> Div for FixedDecimal<D> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("FixedDecimal division failed")
    }
}

impl<const D: u8> AddAssign for FixedDecimal<D> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const D: u8> SubAssign for FixedDecimal<D> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const D: u8> fmt::Debug for FixedDecimal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedDecimal<{}>({}, raw={})", D, self, self.0)
    }
}

impl<const D: u8> fmt::Display for FixedDecimal<D> {
    /// Renders exactly `DECIMALS` digits after the decimal point, sign
    /// preserved, never exponential notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int_part = self.integer_part();
        let frac_part = self.fractional_part();

        if D == 0 {
            write!(f, "{}", int_part)
        } else if self.0 < 0 && int_part == 0 {
            // Handle -0.xxx case
            write!(f, "-0.{:0>width$}", frac_part, width = D as usize)
        } else {
            write!(f, "{}.{:0>width$}", int_part, frac_part, width = D as usize)
        }
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl<const D: u8> FixedDecimal<D> {
    /// Convert from `rust_decimal::Decimal`.
    ///
    /// This is intended for API boundaries only (accepting user input).
    ///
    /// # Errors
    /// - `PrecisionLoss` if significant digits would be lost
    /// - `Overflow` if the value is too large
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        let decimal_scale = d.scale();
        let target_scale = D as u32;

        let multiplier = rust_decimal::Decimal::from(Self::SCALE);
        let scaled = d * multiplier;

        let raw = scaled.to_i64().ok_or(NumericError::Overflow)?;

        if decimal_scale > target_scale {
            let reconstructed = rust_decimal::Decimal::from(raw)
                / rust_decimal::Decimal::from(Self::SCALE);
            if reconstructed != d {
                return Err(NumericError::PrecisionLoss);
            }
        }

        Ok(Self(raw))
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// This is intended for display/debugging only.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        let mut d = rust_decimal::Decimal::from(self.0);
        d.set_scale(D as u32).expect("valid scale");
        d
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<const D: u8> std::str::FromStr for FixedDecimal<D> {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// Fractional digits beyond `DECIMALS` round half away from zero, the
    /// same rule `from_f64` applies, so `"1.005"` at two digits becomes
    /// `1.01` rather than an error.
    ///
    /// # Examples
    /// - "123" -> 123.00
    /// - "123.456" -> 123.46 (at two digits)
    /// - "-0.001" -> -0.00 (at two digits)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            (false, s)
        };

        let (int_str, frac_str) = if let Some(pos) = s.find('.') {
            (&s[..pos], Some(&s[pos + 1..]))
        } else {
            (s, None)
        };

        let mut int_val: i64 = if int_str.is_empty() {
            0
        } else {
            int_str.parse().map_err(|_| NumericError::InvalidInput)?
        };
        if int_val < 0 {
            // Sign was already stripped; a second one is malformed.
            return Err(NumericError::InvalidInput);
        }

        let mut frac_val: u64 = if let Some(frac) = frac_str {
            if frac.is_empty() {
                0
            } else if frac.len() > D as usize {
                let (keep, rest) = frac.split_at(D as usize);
                if !rest.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(NumericError::InvalidInput);
                }
                let kept: u64 = if keep.is_empty() {
                    0
                } else {
                    keep.parse().map_err(|_| NumericError::InvalidInput)?
                };
                // First dropped digit decides the rounding direction
                if rest.as_bytes()[0] >= b'5' {
                    kept + 1
                } else {
                    kept
                }
            } else {
                let padded = format!("{:0<width$}", frac, width = D as usize);
                padded.parse().map_err(|_| NumericError::InvalidInput)?
            }
        } else {
            0
        };

        // Rounding can carry into the integer part ("1.999" -> 2.00)
        if frac_val >= Self::SCALE as u64 {
            int_val = int_val.checked_add(1).ok_or(NumericError::Overflow)?;
            frac_val = 0;
        }

        let mut result = Self::from_parts(int_val, frac_val)?;
        if is_negative {
            result = -result;
        }

        Ok(result)
    }
}

// ============================================================================
// Precision Aliases
// ============================================================================

/// Two fractional decimal digits
pub type Fp2 = FixedDecimal<2>;

/// Four fractional decimal digits
pub type Fp4 = FixedDecimal<4>;

/// Six fractional decimal digits
pub type Fp6 = FixedDecimal<6>;

/// Eight fractional decimal digits
pub type Fp8 = FixedDecimal<8>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Fp2::SCALE, 100);
        assert_eq!(Fp4::SCALE, 10_000);
        assert_eq!(Fp6::SCALE, 1_000_000);
        assert_eq!(Fp8::SCALE, 100_000_000);
        assert_eq!(Fp2::ZERO.raw_value(), 0);
        assert_eq!(Fp2::ONE.raw_value(), 100);
    }

    #[test]
    fn test_bounds_strings() {
        assert_eq!(Fp2::MAX.to_string(), "72057594037927936.00");
        assert_eq!(Fp2::MIN.to_string(), "-72057594037927936.00");
        assert_eq!(Fp4::MAX.to_string(), "562949953421312.0000");
        assert_eq!(Fp4::MIN.to_string(), "-562949953421312.0000");
        assert_eq!(Fp6::MAX.to_string(), "8796093022208.000000");
        assert_eq!(Fp6::MIN.to_string(), "-8796093022208.000000");
        assert_eq!(Fp8::MAX.to_string(), "68719476736.00000000");
        assert_eq!(Fp8::MIN.to_string(), "-68719476736.00000000");
    }

    #[test]
    fn test_from_integer() {
        let x = Fp2::from_integer(100).unwrap();
        assert_eq!(x.raw_value(), 10_000);
        assert_eq!(x.integer_part(), 100);
        assert_eq!(x.fractional_part(), 0);
    }

    #[test]
    fn test_from_parts() {
        let x = Fp4::from_parts(123, 4567).unwrap();
        assert_eq!(x.integer_part(), 123);
        assert_eq!(x.fractional_part(), 4567);
        assert_eq!(x.to_string(), "123.4567");

        let y = Fp4::from_parts(-5, 5000).unwrap();
        assert!(y.is_negative());
        assert_eq!(y.to_string(), "-5.5000");
    }

    #[test]
    fn test_from_parts_invalid() {
        let result = Fp2::from_parts(1, 100);
        assert_eq!(result, Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_from_f64_rounding() {
        assert_eq!(Fp2::from_f64(1.234).raw_value(), 123);
        // 0.125 is exact in binary, so the half case is genuinely exercised
        assert_eq!(Fp2::from_f64(0.125).raw_value(), 13);
        assert_eq!(Fp2::from_f64(-0.125).raw_value(), -13);
        assert_eq!(Fp2::from_f64(3.57).raw_value(), 357);
        assert_eq!(Fp6::from_f64(0.0000007).raw_value(), 1);
    }

    #[test]
    fn test_from_f64_non_finite() {
        // Rust float->int casts: NaN -> 0, infinities saturate
        assert_eq!(Fp2::from_f64(f64::NAN).raw_value(), 0);
        assert_eq!(Fp2::from_f64(f64::INFINITY).raw_value(), i64::MAX);
        assert_eq!(Fp2::from_f64(f64::NEG_INFINITY).raw_value(), i64::MIN);
    }

    #[test]
    fn test_f64_roundtrip() {
        for &v in &[0.0, 1.0, -1.0, 3.57, -123.456, 99999.99] {
            let x = Fp4::from_f64(v);
            assert!((x.to_f64() - v).abs() <= 0.51 / Fp4::SCALE as f64);
        }
    }

    #[test]
    fn test_from_f32_is_a_separate_path() {
        // At low precision the two paths agree
        assert_eq!(Fp2::from_f32(3.57).raw_value(), Fp2::from_f64(3.57).raw_value());

        // At eight digits the f32 path lands away from the f64 path for the
        // same nominal value; this is the expected fidelity gap, not a bug.
        let wide = Fp8::from_f64(123.456789);
        let narrow = Fp8::from_f32(123.456789);
        assert_ne!(wide.raw_value(), narrow.raw_value());
        assert!((narrow.to_f64() - 123.456789).abs() < 1e-4);
    }

    #[test]
    fn test_to_f32() {
        let x = Fp2::from_f64(3.5);
        assert_eq!(x.to_f32(), 3.5f32);
    }

    #[test]
    fn test_checked_add() {
        let a = Fp2::from_integer(100).unwrap();
        let b = Fp2::from_integer(50).unwrap();
        assert_eq!(a.checked_add(b).unwrap().integer_part(), 150);

        let result = Fp2::from_raw(i64::MAX).checked_add(Fp2::ONE);
        assert_eq!(result, Err(NumericError::Overflow));
    }

    #[test]
    fn test_checked_sub() {
        let a = Fp2::from_integer(100).unwrap();
        let b = Fp2::from_integer(30).unwrap();
        assert_eq!(a.checked_sub(b).unwrap().integer_part(), 70);
        assert_eq!(b.checked_sub(a).unwrap().integer_part(), -70);

        let result = Fp2::from_raw(i64::MIN).checked_sub(Fp2::ONE);
        assert_eq!(result, Err(NumericError::Underflow));
    }

    #[test]
    fn test_checked_mul_scale_correction() {
        // 1.23 * 4.56 = 5.6088 -> 5.61; a naive raw multiply would give a
        // wildly wrong magnitude (56088 raw = 560.88)
        let a = Fp2::from_f64(1.23);
        let b = Fp2::from_f64(4.56);
        let c = a.checked_mul(b).unwrap();
        assert_eq!(c.to_string(), "5.61");

        // 2.5 * 4 = 10
        let x = Fp4::from_f64(2.5);
        let y = Fp4::from_integer(4).unwrap();
        assert_eq!(x.checked_mul(y).unwrap().to_string(), "10.0000");
    }

    #[test]
    fn test_checked_mul_overflow() {
        let large = Fp8::from_integer(68_719_476_736).unwrap();
        assert_eq!(large.checked_mul(large), Err(NumericError::Overflow));
    }

    #[test]
    fn test_checked_div() {
        let a = Fp2::from_integer(10).unwrap();
        let b = Fp2::from_integer(4).unwrap();
        assert_eq!(a.checked_div(b).unwrap().to_string(), "2.50");

        // 1 / 3 = 0.33, 2 / 3 = 0.67 (round half away from zero)
        let one = Fp2::ONE;
        let two = Fp2::from_integer(2).unwrap();
        let three = Fp2::from_integer(3).unwrap();
        assert_eq!(one.checked_div(three).unwrap().to_string(), "0.33");
        assert_eq!(two.checked_div(three).unwrap().to_string(), "0.67");
        assert_eq!((-one).checked_div(three).unwrap().to_string(), "-0.33");
    }

    #[test]
    fn test_checked_div_by_zero() {
        let a = Fp2::from_integer(10).unwrap();
        assert_eq!(a.checked_div(Fp2::ZERO), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_rescale_up_and_down() {
        let x = Fp2::from_f64(1.23);
        let up: Fp6 = x.rescale();
        assert_eq!(up.to_string(), "1.230000");

        let down: Fp2 = Fp6::from_f64(1.234567).rescale();
        assert_eq!(down.to_string(), "1.23");

        // Down-conversion rounds, never truncates
        let down2: Fp2 = Fp6::from_f64(1.235999).rescale();
        assert_eq!(down2.to_string(), "1.24");

        let down_neg: Fp2 = Fp6::from_f64(-1.235999).rescale();
        assert_eq!(down_neg.to_string(), "-1.24");
    }

    #[test]
    fn test_rescale_chain_preserves_value() {
        let original = Fp2::from_f64(42.42);
        let chained: Fp2 = original
            .rescale::<4>()
            .rescale::<6>()
            .rescale::<8>()
            .rescale::<2>();
        assert_eq!(chained, original);
    }

    #[test]
    fn test_comparison() {
        let a = Fp2::from_integer(100).unwrap();
        let b = Fp2::from_integer(50).unwrap();

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, a);
        assert_ne!(a, b);
        assert_eq!(a.min(b), b);
        assert_eq!(a.max(b), a);
    }

    #[test]
    fn test_display() {
        assert_eq!(Fp2::from_raw(12345).to_string(), "123.45");
        assert_eq!(Fp2::ZERO.to_string(), "0.00");
        assert_eq!(Fp6::from_raw(12345).to_string(), "0.012345");
        assert_eq!(Fp2::from_raw(-5).to_string(), "-0.05");
        assert_eq!(Fp8::from_raw(1).to_string(), "0.00000001");
    }

    #[test]
    fn test_format_separated() {
        let x = Fp2::from_f64(-3.57);
        assert_eq!(x.format_separated(','), "-3,57");
        assert_eq!(x.format_separated('.'), "-3.57");
    }

    #[test]
    fn test_from_str() {
        let x: Fp2 = "123.45".parse().unwrap();
        assert_eq!(x.raw_value(), 12345);

        let y: Fp2 = "-0.01".parse().unwrap();
        assert_eq!(y.raw_value(), -1);

        let z: Fp2 = "42".parse().unwrap();
        assert_eq!(z.raw_value(), 4200);

        let short: Fp4 = "1.5".parse().unwrap();
        assert_eq!(short.raw_value(), 15_000);
    }

    #[test]
    fn test_from_str_rounds_excess_digits() {
        // Extra digits round (matching from_f64), they do not truncate
        let x: Fp2 = "1.005".parse().unwrap();
        assert_eq!(x.to_string(), "1.01");

        let y: Fp2 = "1.0049".parse().unwrap();
        assert_eq!(y.to_string(), "1.00");

        let z: Fp2 = "-1.005".parse().unwrap();
        assert_eq!(z.to_string(), "-1.01");

        // Carry into the integer part
        let c: Fp2 = "1.999".parse().unwrap();
        assert_eq!(c.to_string(), "2.00");
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!("not_a_number".parse::<Fp2>(), Err(NumericError::InvalidInput));
        assert_eq!("1.2x".parse::<Fp2>(), Err(NumericError::InvalidInput));
        assert_eq!("1.234x5".parse::<Fp2>(), Err(NumericError::InvalidInput));
        assert_eq!("--1".parse::<Fp2>(), Err(NumericError::InvalidInput));
        assert_eq!("".parse::<Fp2>(), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_parse_separated() {
        let x = Fp2::parse_separated("3,57", ',').unwrap();
        assert_eq!(x.to_string(), "3.57");

        assert_eq!(
            Fp2::parse_separated("3.57", ','),
            Err(NumericError::InvalidInput)
        );
    }

    #[test]
    fn test_display_parse_roundtrip() {
        for raw in [0i64, 1, -1, 12345, -12345, 999999, i64::from(i32::MAX)] {
            let x = Fp4::from_raw(raw);
            let parsed: Fp4 = x.to_string().parse().unwrap();
            assert_eq!(parsed, x);
        }
    }

    #[test]
    fn test_from_decimal() {
        use rust_decimal::Decimal;

        let d = Decimal::new(12345, 2); // 123.45
        let x = Fp4::from_decimal(d).unwrap();
        assert_eq!(x.raw_value(), 1_234_500);

        // More digits than the target carries
        let lossy = Decimal::new(123_456, 4); // 12.3456
        assert_eq!(Fp2::from_decimal(lossy), Err(NumericError::PrecisionLoss));
    }

    #[test]
    fn test_to_decimal() {
        let x = Fp4::from_parts(123, 4560).unwrap();
        assert_eq!(x.to_decimal().to_string(), "123.4560");
    }

    #[test]
    fn test_negation_and_abs() {
        let x = Fp2::from_integer(100).unwrap();
        assert_eq!((-x).integer_part(), -100);
        assert_eq!((-x).abs().unwrap(), x);
        assert_eq!(Fp2::from_raw(i64::MIN).abs(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_assign_operators_step_by_one() {
        // += ONE must step the real value by 1.0, not by one raw unit
        let mut x = Fp2::from_f64(3.57);
        x += Fp2::ONE;
        assert_eq!(x.to_string(), "4.57");
        x -= Fp2::ONE;
        assert_eq!(x.to_string(), "3.57");
    }

    #[test]
    fn test_zero_operations() {
        let zero = Fp2::ZERO;
        let one = Fp2::ONE;

        assert_eq!(zero.checked_add(one).unwrap(), one);
        assert_eq!(one.checked_sub(one).unwrap(), zero);
        assert_eq!(zero.checked_mul(one).unwrap(), zero);
        assert_eq!(zero.checked_div(one).unwrap(), zero);
    }
}
