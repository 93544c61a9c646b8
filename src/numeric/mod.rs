// ============================================================================
// Numeric Module
// Fixed-point scaled-integer number families
// ============================================================================
//
// This module provides:
// - FixedDecimal<D>: decimal-scaled (10^D) fixed point over an i64 raw value
// - FixedBinary<D>: shift-scaled (2^ceil(log2(10^D))) fixed point over an
//   i32 raw value, the integer-restricted variant family
// - NumericError: Error types for arithmetic operations
// - Fp2/Fp4/Fp6/Fp8 and Fb2 aliases for the supported precisions
//
// Design principles:
// - Plain value semantics: operators return new values, never mutate
// - All fallible arithmetic returns Result (no panics outside the
//   infallible operator sugar)
// - Arithmetic is closed within one variant; changing precision is always
//   an explicit rescale call

mod errors;
mod fixed_binary;
mod fixed_decimal;

pub use errors::{NumericError, NumericResult};
pub use fixed_binary::{Fb2, FixedBinary};
pub use fixed_decimal::{Fp2, Fp4, Fp6, Fp8, FixedDecimal};

pub(crate) use fixed_decimal::{pow10, scale_bits};
