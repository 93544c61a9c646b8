// ============================================================================
// Math Facade
// Generic transcendental and aggregate operations over any fixed-point type
// ============================================================================
//
// Arithmetic and comparison members delegate to the checked operators on the
// concrete variant. Transcendental and rounding members convert the operand
// to f64, apply the standard double-precision function and quantize the
// result back onto the variant's grid. That trade (double-precision
// transcendentals instead of pure integer CORDIC) is deliberate: the grid is
// coarser than an f64 everywhere these functions are defined, so the
// re-quantized result is as accurate as the type can express.

use crate::interfaces::FixedPoint;
use crate::numeric::NumericResult;
use tracing::warn;

/// Quantize a double-precision intermediate back onto `T`'s grid.
///
/// Non-finite intermediates are not saturated: NaN maps to zero and the
/// infinities map to the raw integer bounds (Rust cast semantics). Callers
/// that can produce them (sqrt of a negative, log of zero) get a warning in
/// the log rather than a silent fixup.
#[inline]
fn requantize<T: FixedPoint>(value: f64) -> T {
    if !value.is_finite() {
        warn!(
            value,
            precision = T::PRECISION,
            "re-quantizing a non-finite intermediate"
        );
    }
    T::from_f64(value)
}

// ============================================================================
// Arithmetic and Comparison
// ============================================================================

/// Checked addition.
#[inline]
pub fn add<T: FixedPoint>(a: T, b: T) -> NumericResult<T> {
    a.checked_add(b)
}

/// Checked subtraction.
#[inline]
pub fn sub<T: FixedPoint>(a: T, b: T) -> NumericResult<T> {
    a.checked_sub(b)
}

/// Checked multiplication.
#[inline]
pub fn mul<T: FixedPoint>(a: T, b: T) -> NumericResult<T> {
    a.checked_mul(b)
}

/// Checked division.
#[inline]
pub fn div<T: FixedPoint>(a: T, b: T) -> NumericResult<T> {
    a.checked_div(b)
}

/// Absolute value.
#[inline]
pub fn abs<T: FixedPoint>(value: T) -> NumericResult<T> {
    value.abs()
}

/// Check if value is zero.
#[inline]
pub fn is_zero<T: FixedPoint>(value: T) -> bool {
    value.is_zero()
}

/// Check if value is positive.
#[inline]
pub fn is_positive<T: FixedPoint>(value: T) -> bool {
    value.is_positive()
}

/// Check if value is negative.
#[inline]
pub fn is_negative<T: FixedPoint>(value: T) -> bool {
    value.is_negative()
}

/// Returns the smaller of two values.
#[inline]
pub fn min<T: FixedPoint>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// Returns the larger of two values.
#[inline]
pub fn max<T: FixedPoint>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

// ============================================================================
// Transcendental Functions (through f64)
// ============================================================================

/// Square root. A negative operand produces the re-quantization of NaN.
#[inline]
pub fn sqrt<T: FixedPoint>(value: T) -> T {
    requantize(value.to_f64().sqrt())
}

/// Raise `base` to the power `exponent`.
#[inline]
pub fn pow<T: FixedPoint>(base: T, exponent: T) -> T {
    requantize(base.to_f64().powf(exponent.to_f64()))
}

/// Natural logarithm. Zero and negative operands produce the
/// re-quantization of -inf/NaN.
#[inline]
pub fn ln<T: FixedPoint>(value: T) -> T {
    requantize(value.to_f64().ln())
}

/// Exponential function (e^value).
#[inline]
pub fn exp<T: FixedPoint>(value: T) -> T {
    requantize(value.to_f64().exp())
}

/// Sine (operand in radians).
#[inline]
pub fn sin<T: FixedPoint>(value: T) -> T {
    requantize(value.to_f64().sin())
}

/// Cosine (operand in radians).
#[inline]
pub fn cos<T: FixedPoint>(value: T) -> T {
    requantize(value.to_f64().cos())
}

/// Tangent (operand in radians).
#[inline]
pub fn tan<T: FixedPoint>(value: T) -> T {
    requantize(value.to_f64().tan())
}

/// Arcsine, in radians.
#[inline]
pub fn asin<T: FixedPoint>(value: T) -> T {
    requantize(value.to_f64().asin())
}

/// Arccosine, in radians.
#[inline]
pub fn acos<T: FixedPoint>(value: T) -> T {
    requantize(value.to_f64().acos())
}

/// Arctangent, in radians.
#[inline]
pub fn atan<T: FixedPoint>(value: T) -> T {
    requantize(value.to_f64().atan())
}

/// Four-quadrant arctangent of `y/x`, in radians.
#[inline]
pub fn atan2<T: FixedPoint>(y: T, x: T) -> T {
    requantize(y.to_f64().atan2(x.to_f64()))
}

// ============================================================================
// Rounding (whole-number boundaries)
// ============================================================================

/// Round to the nearest whole number (half away from zero). The result
/// always lands exactly on a whole-number boundary of the fixed scale.
#[inline]
pub fn round<T: FixedPoint>(value: T) -> T {
    requantize(value.to_f64().round())
}

/// Round down to a whole number.
#[inline]
pub fn floor<T: FixedPoint>(value: T) -> T {
    requantize(value.to_f64().floor())
}

/// Round up to a whole number.
#[inline]
pub fn ceil<T: FixedPoint>(value: T) -> T {
    requantize(value.to_f64().ceil())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Fb2, Fp2, Fp4};

    fn assert_close<T: FixedPoint>(actual: T, expected: f64) {
        let diff = (actual.to_f64() - expected).abs();
        assert!(diff < 0.01, "{} !~ {}", actual, expected);
    }

    #[test]
    fn test_sqrt() {
        assert_close(sqrt(Fp4::from_f64(4.0)), 2.0);
        assert_close(sqrt(Fp4::from_f64(2.0)), std::f64::consts::SQRT_2);
        assert_close(sqrt(Fb2::from_f64(4.0)), 2.0);
    }

    #[test]
    fn test_sqrt_negative_requantizes_nan() {
        // NaN through the float->int cast becomes raw zero; callers must
        // not assume saturation
        let result = sqrt(Fp4::from_f64(-4.0));
        assert_eq!(result.raw_i64(), 0);
    }

    #[test]
    fn test_pow() {
        assert_close(pow(Fp4::from_f64(2.0), Fp4::from_f64(3.0)), 8.0);
        assert_close(pow(Fp4::from_f64(9.0), Fp4::from_f64(0.5)), 3.0);
    }

    #[test]
    fn test_ln_exp() {
        assert_close(ln(Fp4::from_f64(std::f64::consts::E)), 1.0);
        assert_close(exp(Fp4::from_f64(1.0)), std::f64::consts::E);
        assert_close(exp(ln(Fp4::from_f64(5.0))), 5.0);
    }

    #[test]
    fn test_ln_zero_requantizes_neg_infinity() {
        // -inf saturates to the raw integer minimum
        let result = ln(Fp4::ZERO);
        assert_eq!(result.raw_i64(), i64::MIN);
    }

    #[test]
    fn test_trig() {
        use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

        assert_close(sin(Fp4::ZERO), 0.0);
        assert_close(cos(Fp4::ZERO), 1.0);
        assert_close(sin(Fp4::from_f64(FRAC_PI_2)), 1.0);
        assert_close(tan(Fp4::from_f64(FRAC_PI_4)), 1.0);
        assert_close(asin(Fp4::from_f64(1.0)), FRAC_PI_2);
        assert_close(acos(Fp4::from_f64(1.0)), 0.0);
        assert_close(atan(Fp4::from_f64(1.0)), FRAC_PI_4);
        assert_close(atan2(Fp4::from_f64(1.0), Fp4::from_f64(1.0)), FRAC_PI_4);
        assert_close(atan2(Fp4::from_f64(1.0), Fp4::from_f64(-1.0)), 3.0 * PI / 4.0);
    }

    #[test]
    fn test_rounding_lands_on_whole_boundaries() {
        assert_eq!(round(Fp2::from_f64(1.49)).to_string(), "1.00");
        assert_eq!(round(Fp2::from_f64(1.5)).to_string(), "2.00");
        assert_eq!(round(Fp2::from_f64(-1.5)).to_string(), "-2.00");
        assert_eq!(floor(Fp2::from_f64(1.75)).to_string(), "1.00");
        assert_eq!(floor(Fp2::from_f64(-1.25)).to_string(), "-2.00");
        assert_eq!(ceil(Fp2::from_f64(1.25)).to_string(), "2.00");
        assert_eq!(ceil(Fp2::from_f64(-1.75)).to_string(), "-1.00");

        // Binary-scaled values round onto exact whole boundaries too
        assert_eq!(round(Fb2::from_f64(1.49)).raw_i64(), 128);
    }

    #[test]
    fn test_min_max() {
        let a = Fp2::from_f64(1.5);
        let b = Fp2::from_f64(2.5);
        assert_eq!(min(a, b), a);
        assert_eq!(max(a, b), b);
        assert_eq!(min(a, a), a);
    }

    #[test]
    fn test_arithmetic_delegation() {
        let a = Fp2::from_f64(1.23);
        let b = Fp2::from_f64(4.56);
        assert_eq!(add(a, b).unwrap().to_string(), "5.79");
        assert_eq!(sub(b, a).unwrap().to_string(), "3.33");
        assert_eq!(mul(a, b).unwrap().to_string(), "5.61");
        assert_eq!(div(b, a).unwrap().to_string(), "3.71");
        assert!(is_positive(a));
        assert!(!is_negative(a));
        assert!(is_zero(sub(a, a).unwrap()));
        assert_eq!(abs(sub(a, b).unwrap()).unwrap().to_string(), "3.33");
    }
}
