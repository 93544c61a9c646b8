// ============================================================================
// Fixed-Point Interface
// Defines the shared capability contract every precision variant satisfies
// ============================================================================

use crate::numeric::{pow10, scale_bits, FixedBinary, FixedDecimal, NumericResult};
use std::fmt;

/// Capability contract shared by every fixed-point variant.
///
/// The math facade is generic over this trait, so transcendental and
/// aggregate operations are written once and work for any precision. The
/// contract is the minimal surface those operations need: the raw/scale
/// representation, the f64 bridge, and checked arithmetic.
///
/// Implementations are closed over a single variant; nothing here permits
/// mixing precisions without an explicit rescale.
pub trait FixedPoint:
    Copy + PartialEq + PartialOrd + fmt::Display + fmt::Debug + Sized
{
    /// Number of fractional decimal digits this variant renders.
    const PRECISION: u8;

    /// Ratio between the raw representation and the real value.
    const SCALE: i64;

    /// Construct directly from a raw scaled value (widened to i64).
    ///
    /// Variants with a narrower raw field truncate; no range check is
    /// performed, matching the raw constructors on the concrete types.
    fn from_raw_i64(raw: i64) -> Self;

    /// The raw scaled value, widened to i64.
    fn raw_i64(self) -> i64;

    /// Quantize an `f64` onto this variant's grid (round half away from
    /// zero).
    fn from_f64(value: f64) -> Self;

    /// The real value in double precision.
    fn to_f64(self) -> f64;

    /// Checked addition.
    fn checked_add(self, rhs: Self) -> NumericResult<Self>;

    /// Checked subtraction.
    fn checked_sub(self, rhs: Self) -> NumericResult<Self>;

    /// Checked multiplication (single scale correction applied).
    fn checked_mul(self, rhs: Self) -> NumericResult<Self>;

    /// Checked division; fails with `DivisionByZero` on a zero divisor.
    fn checked_div(self, rhs: Self) -> NumericResult<Self>;

    /// Absolute value.
    fn abs(self) -> NumericResult<Self>;

    /// Check if value is zero.
    fn is_zero(self) -> bool;

    /// Check if value is positive.
    fn is_positive(self) -> bool;

    /// Check if value is negative.
    fn is_negative(self) -> bool;

    /// Additive identity.
    fn zero() -> Self {
        Self::from_raw_i64(0)
    }

    /// Multiplicative identity (1.0 in real terms, `SCALE` raw units).
    fn one() -> Self {
        Self::from_raw_i64(Self::SCALE)
    }
}

impl<const D: u8> FixedPoint for FixedDecimal<D> {
    const PRECISION: u8 = D;
    const SCALE: i64 = pow10(D);

    #[inline]
    fn from_raw_i64(raw: i64) -> Self {
        FixedDecimal::from_raw(raw)
    }

    #[inline]
    fn raw_i64(self) -> i64 {
        self.raw_value()
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        FixedDecimal::from_f64(value)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        FixedDecimal::to_f64(self)
    }

    #[inline]
    fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        FixedDecimal::checked_add(self, rhs)
    }

    #[inline]
    fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        FixedDecimal::checked_sub(self, rhs)
    }

    #[inline]
    fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        FixedDecimal::checked_mul(self, rhs)
    }

    #[inline]
    fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        FixedDecimal::checked_div(self, rhs)
    }

    #[inline]
    fn abs(self) -> NumericResult<Self> {
        FixedDecimal::abs(self)
    }

    #[inline]
    fn is_zero(self) -> bool {
        FixedDecimal::is_zero(self)
    }

    #[inline]
    fn is_positive(self) -> bool {
        FixedDecimal::is_positive(self)
    }

    #[inline]
    fn is_negative(self) -> bool {
        FixedDecimal::is_negative(self)
    }
}

impl<const D: u8> FixedPoint for FixedBinary<D> {
    const PRECISION: u8 = D;
    const SCALE: i64 = 1i64 << scale_bits(D);

    #[inline]
    fn from_raw_i64(raw: i64) -> Self {
        FixedBinary::from_raw(raw as i32)
    }

    #[inline]
    fn raw_i64(self) -> i64 {
        self.raw_value() as i64
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        FixedBinary::from_f64(value)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        FixedBinary::to_f64(self)
    }

    #[inline]
    fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        FixedBinary::checked_add(self, rhs)
    }

    #[inline]
    fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        FixedBinary::checked_sub(self, rhs)
    }

    #[inline]
    fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        FixedBinary::checked_mul(self, rhs)
    }

    #[inline]
    fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        FixedBinary::checked_div(self, rhs)
    }

    #[inline]
    fn abs(self) -> NumericResult<Self> {
        FixedBinary::abs(self)
    }

    #[inline]
    fn is_zero(self) -> bool {
        FixedBinary::is_zero(self)
    }

    #[inline]
    fn is_positive(self) -> bool {
        FixedBinary::is_positive(self)
    }

    #[inline]
    fn is_negative(self) -> bool {
        FixedBinary::is_negative(self)
    }
}
