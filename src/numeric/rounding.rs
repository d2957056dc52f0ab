// ============================================================================
// Rounding Modes
// How a quotient is rounded when a value is moved to a coarser denominator
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding applied when an exact quotient has a non-zero remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Toward negative infinity
    Floor,
    /// Toward positive infinity
    Ceiling,
    /// Toward zero
    Truncate,
    /// Away from zero
    Promote,
    /// Nearest; ties toward zero
    HalfDown,
    /// Nearest; ties away from zero
    HalfUp,
    /// Nearest; ties to the even neighbour (banker's rounding)
    HalfEven,
    /// Refuse to round: any remainder is an error
    Never,
}

impl RoundingMode {
    /// Round `dividend / divisor` to an integer.
    ///
    /// `divisor` must be positive.
    ///
    /// # Errors
    /// Returns `PrecisionLoss` for `Never` when the division is inexact.
    pub fn divide(self, dividend: &BigInt, divisor: &BigInt) -> NumericResult<BigInt> {
        debug_assert!(divisor.is_positive(), "divisor must be positive");

        // Truncating division; the remainder carries the sign of the dividend
        let (quotient, remainder) = dividend.div_rem(divisor);
        if remainder.is_zero() {
            return Ok(quotient);
        }

        let step_away = match self {
            RoundingMode::Truncate => false,
            RoundingMode::Floor => remainder.is_negative(),
            RoundingMode::Ceiling => remainder.is_positive(),
            RoundingMode::Promote => true,
            RoundingMode::Never => return Err(NumericError::PrecisionLoss),
            RoundingMode::HalfDown | RoundingMode::HalfUp | RoundingMode::HalfEven => {
                let twice = remainder.abs() * 2u32;
                match twice.cmp(divisor) {
                    Ordering::Less => false,
                    Ordering::Greater => true,
                    Ordering::Equal => match self {
                        RoundingMode::HalfUp => true,
                        RoundingMode::HalfEven => quotient.is_odd(),
                        _ => false,
                    },
                }
            },
        };

        tracing::debug!(
            mode = ?self,
            divisor_bits = divisor.bits(),
            step_away,
            "rounding inexact quotient"
        );

        if !step_away {
            Ok(quotient)
        } else if remainder.is_negative() {
            Ok(quotient - 1u32)
        } else {
            Ok(quotient + 1u32)
        }
    }
}
