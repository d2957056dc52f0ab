// ============================================================================
// Decimal Rational Library
// Exact conversion of base-10 amounts into numerator/denominator rationals
// ============================================================================

//! # Decimal Rational
//!
//! Turns decimal amounts such as `201.43` into exact rationals such as
//! `20143/100`, without any floating-point step.
//!
//! ## Features
//!
//! - **Exact conversion** from sign / digits / exponent to numerator / denominator
//! - **Decimal parsing** of plain and scientific notation, and of `rust_decimal::Decimal`
//! - **Fixed denominators** with explicit rounding modes (e.g. cents)
//! - **Round trip** back to decimal form when the value allows it
//! - **Arbitrary precision**: any digit count and exponent, backed by `num-bigint`
//! - **Exact arithmetic**: `+`, `-`, `*`, `/` on [`Rational`](numeric::Rational)
//!
//! ## Example
//!
//! ```rust
//! use decimal_rational::prelude::*;
//!
//! // The core conversion
//! let (num, denom) = convert(false, &[2, 0, 1, 4, 3], -2).unwrap();
//! assert_eq!((num, denom), (BigInt::from(20143), BigInt::from(100)));
//!
//! // From text
//! let price = Rational::from_str_decimal("201.43").unwrap();
//! assert_eq!(price.to_string(), "20143/100");
//!
//! // Onto a currency's smallest unit
//! let converter = RationalConverter::from_config(ConverterConfig::currency(100)).unwrap();
//! let rounded = converter.convert_str("19.999").unwrap();
//! assert_eq!(rounded.to_string(), "2000/100");
//! ```

pub mod converter;
pub mod numeric;

pub use num_bigint::BigInt;
pub use num_rational::BigRational;

// Re-exports for convenience
pub mod prelude {
    pub use crate::converter::{ConverterConfig, RationalConverter};
    pub use crate::{BigInt, BigRational};
    pub use crate::numeric::{
        convert, DecimalParts, NumericError, NumericResult, Rational, RoundingMode,
    };
}
