// ============================================================================
// Numeric Errors
// Error types for exact decimal and rational conversions
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while building or converting exact values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericError {
    /// Value does not fit the target representation
    Overflow,
    /// A rational was given a zero denominator
    ZeroDenominator,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Input string or value is invalid
    InvalidInput,
    /// A decimal value was given no digits
    EmptyDigits,
    /// A digit outside 0-9
    InvalidDigit(u8),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "overflow: value does not fit the target representation")
            },
            NumericError::ZeroDenominator => write!(f, "denominator must not be zero"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::EmptyDigits => write!(f, "decimal value has no digits"),
            NumericError::InvalidDigit(d) => write!(f, "invalid decimal digit: {}", d),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
