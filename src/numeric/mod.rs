// ============================================================================
// Numeric Module
// Exact decimal and rational values for monetary amounts
// ============================================================================
//
// This module provides:
// - DecimalParts: sign / digits / exponent decomposition of a base-10 number
// - Rational: exact numerator/denominator value
// - convert: the decimal-to-rational conversion itself
// - RoundingMode: rounding when moving a value to a fixed denominator
// - NumericError: Error types for all of the above
//
// Design principles:
// - No floating-point operations
// - Arbitrary-precision storage (num-bigint / num-rational): any digit
//   sequence and exponent converts, nothing wraps or saturates
// - Fallible operations return Result; only the `/` operator panics, on a
//   zero divisor

mod decimal_parts;
mod errors;
mod rational;
mod rounding;

pub use decimal_parts::DecimalParts;
pub use errors::{NumericError, NumericResult};
pub use rational::{convert, Rational};
pub use rounding::RoundingMode;
