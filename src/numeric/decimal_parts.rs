// ============================================================================
// Decimal Parts
// Sign / digit sequence / exponent decomposition of a base-10 number
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, ToPrimitive, Zero};
use smallvec::SmallVec;
use std::fmt::{self, Write as _};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inline capacity for digit storage
const INLINE_DIGITS: usize = 32;

/// Largest scale a `rust_decimal::Decimal` accepts.
const MAX_DECIMAL_SCALE: u32 = 28;

/// Most zeros `Display` pads with before switching to `<digits>e<exponent>`.
const POSITIONAL_ZEROS_LIMIT: usize = 32;

/// A base-10 number held as `sign * digits * 10^exponent`.
///
/// Digits are stored most-significant first and are always in `0..=9`.
/// The sequence is never empty. Equality is structural: `5e3` and `5000`
/// are different decompositions of the same value.
///
/// # Example
/// ```
/// use decimal_rational::numeric::DecimalParts;
///
/// let amount: DecimalParts = "201.43".parse().unwrap();
/// assert_eq!(amount.digits(), &[2, 0, 1, 4, 3]);
/// assert_eq!(amount.exponent(), -2);
/// assert!(!amount.is_negative());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "DecimalPartsRepr", into = "DecimalPartsRepr")
)]
pub struct DecimalParts {
    negative: bool,
    digits: SmallVec<[u8; INLINE_DIGITS]>,
    exponent: i32,
}

impl DecimalParts {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a sign, a digit sequence and an exponent.
    ///
    /// # Errors
    /// - `EmptyDigits` if `digits` is empty
    /// - `InvalidDigit` if any digit is greater than 9
    pub fn new(negative: bool, digits: &[u8], exponent: i32) -> NumericResult<Self> {
        if digits.is_empty() {
            return Err(NumericError::EmptyDigits);
        }
        if let Some(&bad) = digits.iter().find(|&&d| d > 9) {
            return Err(NumericError::InvalidDigit(bad));
        }

        Ok(Self {
            negative,
            digits: SmallVec::from_slice(digits),
            exponent,
        })
    }

    /// Build from an unsigned magnitude and its base-10 digits.
    pub(crate) fn from_magnitude(negative: bool, magnitude: &BigUint, exponent: i32) -> Self {
        Self {
            negative,
            digits: SmallVec::from_vec(magnitude.to_radix_be(10)),
            exponent,
        }
    }

    /// Decompose a `rust_decimal::Decimal` into its mantissa digits and scale.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        let magnitude = BigUint::from(d.mantissa().unsigned_abs());
        let exponent = -(d.scale() as i32);
        Self::from_magnitude(d.is_sign_negative(), &magnitude, exponent)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// True when the sign is negative (including negative zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Digits, most-significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    #[inline]
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Check if every digit is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// The digits read as a base-10 integer, ignoring sign and exponent.
    ///
    /// Digits are accumulated from least to most significant, each scaled by
    /// its place value.
    pub fn magnitude(&self) -> BigInt {
        let ten = BigInt::from(10u32);
        let (magnitude, _) = self.digits.iter().rev().fold(
            (BigInt::zero(), BigInt::one()),
            |(acc, place_value), &digit| {
                let acc = if digit == 0 {
                    acc
                } else {
                    acc + &place_value * BigInt::from(digit)
                };
                (acc, place_value * &ten)
            },
        );

        magnitude
    }

    // ========================================================================
    // Conversion to rust_decimal
    // ========================================================================

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// Zero always converts, keeping its scale when that scale is
    /// representable.
    ///
    /// # Errors
    /// - `PrecisionLoss` if a non-zero value needs more than 28 decimal places
    /// - `Overflow` if the mantissa does not fit in 96 bits
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let scale = if self.exponent < 0 {
            self.exponent.unsigned_abs()
        } else {
            0
        };

        if self.is_zero() {
            return Ok(rust_decimal::Decimal::new(0, scale.min(MAX_DECIMAL_SCALE)));
        }
        if scale > MAX_DECIMAL_SCALE {
            return Err(NumericError::PrecisionLoss);
        }

        let mut mantissa = self.magnitude();
        if self.exponent > 0 {
            // Any non-zero value times 10^29 exceeds the 96-bit mantissa
            if self.exponent > MAX_DECIMAL_SCALE as i32 {
                return Err(NumericError::Overflow);
            }
            mantissa *= BigInt::from(10u32).pow(self.exponent.unsigned_abs());
        }
        if self.negative {
            mantissa = -mantissa;
        }

        let mantissa = mantissa.to_i128().ok_or(NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, scale)
            .map_err(|_| NumericError::Overflow)
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// Field-wise wire form; deserializing re-validates the digits.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct DecimalPartsRepr {
    negative: bool,
    digits: Vec<u8>,
    exponent: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<DecimalPartsRepr> for DecimalParts {
    type Error = NumericError;

    fn try_from(repr: DecimalPartsRepr) -> Result<Self, Self::Error> {
        Self::new(repr.negative, &repr.digits, repr.exponent)
    }
}

#[cfg(feature = "serde")]
impl From<DecimalParts> for DecimalPartsRepr {
    fn from(parts: DecimalParts) -> Self {
        Self {
            negative: parts.negative,
            digits: parts.digits.into_vec(),
            exponent: parts.exponent,
        }
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for DecimalParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecimalParts({}, digits={:?}, exponent={})",
            if self.negative { '-' } else { '+' },
            self.digits.as_slice(),
            self.exponent
        )
    }
}

fn write_zeros(f: &mut fmt::Formatter<'_>, count: usize) -> fmt::Result {
    for _ in 0..count {
        f.write_char('0')?;
    }
    Ok(())
}

impl fmt::Display for DecimalParts {
    /// Plain positional notation (`-7.5`, `5000`, `0.05`) unless that needs
    /// more than a few dozen padding zeros; then `<digits>e<exponent>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_char('-')?;
        }
        let len = self.digits.len();
        let frac_len = self.exponent.unsigned_abs() as usize;

        let padding = if self.exponent >= 0 {
            frac_len
        } else {
            frac_len.saturating_sub(len)
        };
        if padding > POSITIONAL_ZEROS_LIMIT {
            for &d in &self.digits {
                f.write_char(char::from(b'0' + d))?;
            }
            return write!(f, "e{}", self.exponent);
        }

        if self.exponent >= 0 {
            for &d in &self.digits {
                f.write_char(char::from(b'0' + d))?;
            }
            return write_zeros(f, frac_len);
        }

        if len > frac_len {
            for (i, &d) in self.digits.iter().enumerate() {
                if i == len - frac_len {
                    f.write_char('.')?;
                }
                f.write_char(char::from(b'0' + d))?;
            }
            Ok(())
        } else {
            f.write_str("0.")?;
            write_zeros(f, frac_len - len)?;
            for &d in &self.digits {
                f.write_char(char::from(b'0' + d))?;
            }
            Ok(())
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for DecimalParts {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "201.43" -> digits [2,0,1,4,3], exponent -2
    /// - "-7.5" -> negative, digits [7,5], exponent -1
    /// - "1.5E+3" -> digits [1,5], exponent 2
    /// - "0.05" -> digits [5], exponent -2
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let (negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            (false, s.strip_prefix('+').unwrap_or(s))
        };

        // Split off the exponent
        let (mantissa, exp_val) = match s.find(['e', 'E']) {
            Some(pos) => {
                let exp_str = &s[pos + 1..];
                let exp_digits = exp_str.strip_prefix(['+', '-']).unwrap_or(exp_str);
                if exp_digits.is_empty() || !exp_digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(NumericError::InvalidInput);
                }
                let exp: i32 = exp_str.parse().map_err(|_| NumericError::InvalidInput)?;
                (&s[..pos], exp)
            },
            None => (s, 0),
        };

        // Split on decimal point
        let (int_str, frac_str) = match mantissa.find('.') {
            Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
            None => (mantissa, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if !int_str.bytes().chain(frac_str.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(NumericError::InvalidInput);
        }

        let frac_len = i32::try_from(frac_str.len()).map_err(|_| NumericError::InvalidInput)?;
        let exponent = exp_val
            .checked_sub(frac_len)
            .ok_or(NumericError::InvalidInput)?;

        let all_digits = int_str.bytes().chain(frac_str.bytes()).map(|b| b - b'0');
        let mut digits: SmallVec<[u8; INLINE_DIGITS]> =
            all_digits.skip_while(|&d| d == 0).collect();
        if digits.is_empty() {
            digits.push(0);
        }

        Ok(Self {
            negative,
            digits,
            exponent,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
