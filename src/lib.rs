// ============================================================================
// Fixed-Point Decimal Library
// Scaled-integer decimal arithmetic with compile-time precision
// ============================================================================

//! # Fixed-Point Decimal
//!
//! Fixed-point numeric value types over scaled integers, with a generic math
//! facade shared by every precision.
//!
//! ## Features
//!
//! - **`FixedDecimal<D>`** - decimal-scaled (`10^D`) fixed point over an i64
//!   raw value, for 2/4/6/8 fractional digits (`Fp2`..`Fp8`)
//! - **`FixedBinary<D>`** - shift-scaled fixed point over an i32 raw value,
//!   the integer-restricted variant (`Fb2`)
//! - **Checked arithmetic** - every fallible operation returns `Result`;
//!   division by zero and overflow are errors, not wraparound
//! - **Explicit rescaling** - no implicit cross-precision conversions
//! - **Generic math facade** - sqrt/pow/log/trig/rounding written once over
//!   the `FixedPoint` trait, delegating through f64
//!
//! ## Example
//!
//! ```rust
//! use fixed_point_decimal::prelude::*;
//!
//! let price = Fp2::from_f64(1.23);
//! let qty = Fp2::from_f64(4.56);
//!
//! let total = price.checked_mul(qty).unwrap();
//! assert_eq!(total.to_string(), "5.61");
//!
//! // Rescaling is always explicit
//! let wide: Fp6 = price.rescale();
//! assert_eq!(wide.to_string(), "1.230000");
//!
//! // Transcendentals go through the generic facade
//! let root = math::sqrt(Fp4::from_f64(2.0));
//! assert_eq!(root.to_string(), "1.4142");
//! ```

pub mod interfaces;
pub mod math;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::interfaces::FixedPoint;
    pub use crate::math;
    pub use crate::numeric::{
        Fb2, FixedBinary, FixedDecimal, Fp2, Fp4, Fp6, Fp8, NumericError, NumericResult,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_accumulation_scenario() {
        // Each addition re-quantizes correctly with no drift
        let mut x = Fp2::from_f64(3.57);
        assert_eq!(x.to_string(), "3.57");

        x += Fp2::ONE;
        assert_eq!(x.to_string(), "4.57");

        x += Fp2::from_f64(1.8);
        assert_eq!(x.to_string(), "6.37");

        x += Fp2::from_f64(55.01);
        assert_eq!(x.to_string(), "61.38");
    }

    #[test]
    fn test_cross_precision_round_trip() {
        // Up through every precision and back down preserves the original
        // within the lowest precision's tolerance
        let original = Fp2::from_f64(123.45);
        let back: Fp2 = original
            .rescale::<4>()
            .rescale::<6>()
            .rescale::<8>()
            .rescale::<2>();
        assert!((back.to_f64() - original.to_f64()).abs() < 0.01);
        assert_eq!(back, original);
    }

    #[test]
    fn test_binary_to_decimal_round_trip() {
        let b = Fb2::from_f64(96.45);
        let d: Fp2 = b.to_fixed_decimal();
        let back = Fb2::from_fixed_decimal(d).unwrap();
        // Bit-for-bit reproducible text across the conversion
        assert_eq!(b.to_string(), back.to_string());
    }

    #[test]
    fn test_facade_over_every_variant() {
        assert_eq!(math::sqrt(Fp2::from_f64(4.0)).to_string(), "2.00");
        assert_eq!(math::sqrt(Fp4::from_f64(4.0)).to_string(), "2.0000");
        assert_eq!(math::sqrt(Fp6::from_f64(4.0)).to_string(), "2.000000");
        assert_eq!(math::sqrt(Fp8::from_f64(4.0)).to_string(), "2.00000000");
        assert_eq!(math::sqrt(Fb2::from_f64(4.0)).to_string(), "2.00");
    }

    #[test]
    fn test_mixed_workflow() {
        // Parse -> arithmetic -> facade -> render, staying on the grid
        let deposit: Fp4 = "1000.50".parse().unwrap();
        let rate: Fp4 = "1.05".parse().unwrap();

        let grown = deposit.checked_mul(rate).unwrap();
        assert_eq!(grown.to_string(), "1050.5250");

        let bounded = math::min(grown, Fp4::from_integer(1_000_000).unwrap());
        assert_eq!(bounded, grown);

        let whole = math::floor(grown);
        assert_eq!(whole.to_string(), "1050.0000");
    }
}
