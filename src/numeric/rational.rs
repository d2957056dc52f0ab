// ============================================================================
// Rational
// Exact numerator/denominator values built from decimal parts
// ============================================================================

use super::decimal_parts::DecimalParts;
use super::errors::{NumericError, NumericResult};
use super::rounding::RoundingMode;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u32).pow(exp)
}

/// Exact rational number `numerator / denominator`.
///
/// The denominator is always positive. Values built from decimals are not
/// kept in lowest terms: `-7.5` becomes `-75/10`, not `-15/2`. Equality,
/// ordering and hashing compare by value, so `-75/10 == -15/2`.
///
/// Arithmetic results are in lowest terms.
///
/// # Example
/// ```
/// use decimal_rational::numeric::Rational;
///
/// let price = Rational::from_str_decimal("201.43").unwrap();
/// assert_eq!(price.to_string(), "20143/100");
///
/// let total = &price * &Rational::from_integer(3);
/// assert_eq!(total.to_string(), "60429/100");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Rational(BigRational);

/// Convert a decimal given as sign, digits and exponent into an exact
/// `(numerator, denominator)` pair.
///
/// # Errors
/// - `EmptyDigits` if `digits` is empty
/// - `InvalidDigit` if a digit is greater than 9
///
/// # Example
/// ```
/// use decimal_rational::numeric::convert;
/// use decimal_rational::BigInt;
///
/// let (num, denom) = convert(true, &[7, 5], -1).unwrap();
/// assert_eq!((num, denom), (BigInt::from(-75), BigInt::from(10)));
/// ```
pub fn convert(negative: bool, digits: &[u8], exponent: i32) -> NumericResult<(BigInt, BigInt)> {
    let parts = DecimalParts::new(negative, digits, exponent)?;
    Ok(Rational::from_decimal_parts(&parts).into_parts())
}

impl Rational {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a numerator and a denominator, keeping the given form.
    ///
    /// A negative denominator moves its sign onto the numerator.
    ///
    /// # Errors
    /// Returns `ZeroDenominator` if `denom` is zero.
    pub fn new(num: impl Into<BigInt>, denom: impl Into<BigInt>) -> NumericResult<Self> {
        let (num, denom) = (num.into(), denom.into());
        match denom.sign() {
            num_bigint::Sign::NoSign => Err(NumericError::ZeroDenominator),
            num_bigint::Sign::Plus => Ok(Self(BigRational::new_raw(num, denom))),
            num_bigint::Sign::Minus => Ok(Self(BigRational::new_raw(-num, -denom))),
        }
    }

    /// Create from an integer (denominator 1).
    #[inline]
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    /// Exact conversion of a decimal value.
    ///
    /// A negative exponent becomes a power-of-ten denominator; a zero or
    /// positive exponent scales the numerator and leaves the denominator at 1.
    pub fn from_decimal_parts(parts: &DecimalParts) -> Self {
        let magnitude = parts.magnitude();
        let base = if parts.is_negative() {
            -magnitude
        } else {
            magnitude
        };

        let exponent = parts.exponent();
        let (num, denom) = if exponent < 0 {
            (base, pow10(exponent.unsigned_abs()))
        } else if base.is_zero() {
            (base, BigInt::one())
        } else {
            (base * pow10(exponent.unsigned_abs()), BigInt::one())
        };

        let rational = Self(BigRational::new_raw(num, denom));
        tracing::trace!(decimal = %parts, rational = %rational, "converted decimal to rational");
        rational
    }

    /// Parse a decimal string and convert it exactly.
    ///
    /// # Errors
    /// Any parse error from [`DecimalParts`].
    pub fn from_str_decimal(s: &str) -> NumericResult<Self> {
        let parts: DecimalParts = s.parse()?;
        Ok(Self::from_decimal_parts(&parts))
    }

    /// Exact conversion of a `rust_decimal::Decimal` (mantissa over 10^scale).
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        Self::from_decimal_parts(&DecimalParts::from_decimal(d))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn numerator(&self) -> &BigInt {
        self.0.numer()
    }

    /// Always positive.
    #[inline]
    pub fn denominator(&self) -> &BigInt {
        self.0.denom()
    }

    /// Split into `(numerator, denominator)` as stored.
    pub fn into_parts(self) -> (BigInt, BigInt) {
        self.0.into_raw()
    }

    #[inline]
    pub fn as_big_rational(&self) -> &BigRational {
        &self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.numer().is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.numer().is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.numer().is_positive()
    }

    /// True when numerator and denominator share no common factor.
    pub fn is_reduced(&self) -> bool {
        self.0.numer().gcd(self.0.denom()).is_one()
    }

    // ========================================================================
    // Transformations
    // ========================================================================

    /// Reduce to lowest terms. Zero reduces to 0/1.
    pub fn reduce(&self) -> Self {
        Self(self.0.reduced())
    }

    /// Absolute value, keeping the stored form.
    pub fn abs(&self) -> Self {
        Self(BigRational::new_raw(
            self.0.numer().abs(),
            self.0.denom().clone(),
        ))
    }

    /// Division that reports a zero divisor instead of panicking.
    ///
    /// # Errors
    /// Returns `ZeroDenominator` if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::ZeroDenominator);
        }
        Ok(Self(&self.0 / &rhs.0))
    }

    /// Express the value over `denom`, rounding the numerator with `mode`.
    ///
    /// ```
    /// use decimal_rational::numeric::{Rational, RoundingMode};
    ///
    /// let third = Rational::new(1, 3).unwrap();
    /// let cents = third.convert_denom(100, RoundingMode::HalfUp).unwrap();
    /// assert_eq!(cents.to_string(), "33/100");
    /// ```
    ///
    /// # Errors
    /// - `ZeroDenominator` if `denom` is zero
    /// - `InvalidInput` if `denom` is negative
    /// - `PrecisionLoss` if `mode` is `Never` and rounding would be needed
    pub fn convert_denom(&self, denom: impl Into<BigInt>, mode: RoundingMode) -> NumericResult<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(NumericError::ZeroDenominator);
        }
        if denom.is_negative() {
            return Err(NumericError::InvalidInput);
        }
        if &denom == self.0.denom() {
            return Ok(self.clone());
        }

        let reduced = self.0.reduced();
        let g = reduced.denom().gcd(&denom);
        let scaled = reduced.numer() * (&denom / &g);
        let num = mode.divide(&scaled, &(reduced.denom() / &g))?;

        Ok(Self(BigRational::new_raw(num, denom)))
    }

    /// Exact decimal form of the value.
    ///
    /// Works whenever the reduced denominator has no prime factors other
    /// than 2 and 5.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the value has no finite decimal expansion
    /// - `Overflow` if the number of decimal places does not fit an `i32`
    pub fn to_decimal_parts(&self) -> NumericResult<DecimalParts> {
        let reduced = self.0.reduced();

        let mut rest = reduced.denom().clone();
        let (mut twos, mut fives) = (0u64, 0u64);
        while (&rest % 2u32).is_zero() {
            rest /= 2u32;
            twos += 1;
        }
        while (&rest % 5u32).is_zero() {
            rest /= 5u32;
            fives += 1;
        }
        if !rest.is_one() {
            return Err(NumericError::PrecisionLoss);
        }

        // 10^places / denom == 2^(places - twos) * 5^(places - fives)
        let places = twos.max(fives);
        let exponent = i32::try_from(places).map_err(|_| NumericError::Overflow)?;
        let places = exponent.unsigned_abs();
        let factor = BigInt::from(2u32).pow(places - twos as u32)
            * BigInt::from(5u32).pow(places - fives as u32);
        let num = reduced.numer() * factor;

        Ok(DecimalParts::from_magnitude(
            num.is_negative(),
            num.magnitude(),
            -exponent,
        ))
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// As [`Rational::to_decimal_parts`], plus `PrecisionLoss` when more
    /// than 28 decimal places are needed and `Overflow` when the value
    /// exceeds the 96-bit mantissa.
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        self.to_decimal_parts()?.to_decimal()
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

// Infallible Div for ergonomics (panics on a zero divisor - use checked_div
// when the divisor is untrusted)
macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp for Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, rhs: Rational) -> Rational {
                Rational(self.0.$method(rhs.0))
            }
        }

        impl<'a> $imp<&'a Rational> for &'a Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, rhs: &'a Rational) -> Rational {
                Rational((&self.0).$method(&rhs.0))
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);

impl Neg for Rational {
    type Output = Rational;

    /// Negation keeps the stored form: `-(75/10)` is `-75/10`.
    #[inline]
    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    #[inline]
    fn neg(self) -> Rational {
        Rational(-&self.0)
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| &acc + x)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::one(), |acc, x| acc * x)
    }
}

impl Zero for Rational {
    #[inline]
    fn zero() -> Self {
        Self(BigRational::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    #[inline]
    fn one() -> Self {
        Self(BigRational::one())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Rational {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigRational> for Rational {
    fn from(value: BigRational) -> Self {
        Self(value)
    }
}

impl From<Rational> for BigRational {
    fn from(value: Rational) -> Self {
        value.0
    }
}

impl From<&DecimalParts> for Rational {
    fn from(parts: &DecimalParts) -> Self {
        Self::from_decimal_parts(parts)
    }
}

// ============================================================================
// Display, Debug and Parsing
// ============================================================================

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.0.numer(), self.0.denom())
    }
}

impl fmt::Display for Rational {
    /// Always `n/d`, including `/1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0.numer(), self.0.denom())
    }
}

impl FromStr for Rational {
    type Err = NumericError;

    /// Parse `"n/d"` or a plain integer `"n"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (num_str, denom_str) = match s.split_once('/') {
            Some((n, d)) => (n.trim(), Some(d.trim())),
            None => (s, None),
        };

        let num: BigInt = num_str.parse().map_err(|_| NumericError::InvalidInput)?;
        let denom: BigInt = match denom_str {
            Some(d) => d.parse().map_err(|_| NumericError::InvalidInput)?,
            None => BigInt::one(),
        };

        Self::new(num, denom)
    }
}

impl TryFrom<String> for Rational {
    type Error = NumericError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rational> for String {
    fn from(value: Rational) -> Self {
        value.to_string()
    }
}

impl PartialEq<i64> for Rational {
    fn eq(&self, other: &i64) -> bool {
        self.0.is_integer() && self.0.to_integer() == BigInt::from(*other)
    }
}

impl PartialOrd<i64> for Rational {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.0.cmp(&BigRational::from_integer(BigInt::from(*other))))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::ToPrimitive;
    use std::collections::HashSet;

    fn pair(r: &Rational) -> (i128, i128) {
        (
            r.numerator().to_i128().unwrap(),
            r.denominator().to_i128().unwrap(),
        )
    }

    fn converted(negative: bool, digits: &[u8], exponent: i32) -> (i128, i128) {
        let (num, denom) = convert(negative, digits, exponent).unwrap();
        (num.to_i128().unwrap(), denom.to_i128().unwrap())
    }

    fn rat(num: i64, denom: i64) -> Rational {
        Rational::new(num, denom).unwrap()
    }

    #[test]
    fn test_convert_invoice_amount() {
        // 201.43
        assert_eq!(converted(false, &[2, 0, 1, 4, 3], -2), (20143, 100));
    }

    #[test]
    fn test_convert_unit() {
        assert_eq!(converted(false, &[1], 0), (1, 1));
    }

    #[test]
    fn test_convert_positive_exponent() {
        assert_eq!(converted(false, &[5], 3), (5000, 1));
    }

    #[test]
    fn test_convert_negative() {
        // -7.5
        assert_eq!(converted(true, &[7, 5], -1), (-75, 10));
    }

    #[test]
    fn test_convert_zero() {
        assert_eq!(converted(false, &[0], 0), (0, 1));
        assert_eq!(converted(true, &[0], 0), (0, 1));
        assert_eq!(converted(false, &[0], 500), (0, 1));
        assert_eq!(converted(false, &[0], -2), (0, 100));
    }

    #[test]
    fn test_convert_rejects_malformed_digits() {
        assert_eq!(convert(false, &[], 0), Err(NumericError::EmptyDigits));
        assert_eq!(
            convert(false, &[1, 2, 42], -1),
            Err(NumericError::InvalidDigit(42))
        );
    }

    #[test]
    fn test_convert_beyond_machine_width() {
        // Forty-five digits over 10^20
        let digits: Vec<u8> = (0..45).map(|i| (i % 9 + 1) as u8).collect();
        let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        let (num, denom) = convert(true, &digits, -20).unwrap();
        assert_eq!(num, -text.parse::<BigInt>().unwrap());
        assert_eq!(denom, pow10(20));

        let (num, denom) = convert(false, &[1], 100).unwrap();
        assert_eq!(num, pow10(100));
        assert_eq!(denom, BigInt::one());

        let (num, denom) = convert(false, &[3], -150).unwrap();
        assert_eq!(num, BigInt::from(3));
        assert_eq!(denom, pow10(150));
    }

    #[test]
    fn test_new_normalizes_sign() {
        assert_eq!(pair(&rat(3, -4)), (-3, 4));
        assert_eq!(pair(&rat(-3, -4)), (3, 4));
        assert_eq!(Rational::new(1, 0), Err(NumericError::ZeroDenominator));
        // Form is kept as given
        assert_eq!(pair(&rat(50, 100)), (50, 100));
    }

    #[test]
    fn test_reduce() {
        assert_eq!(pair(&rat(-75, 10).reduce()), (-15, 2));
        assert_eq!(pair(&rat(0, 100).reduce()), (0, 1));
        assert_eq!(pair(&rat(20143, 100).reduce()), (20143, 100));
        assert!(rat(20143, 100).is_reduced());
        assert!(!rat(50, 100).is_reduced());
    }

    #[test]
    fn test_equality_is_by_value() {
        let a = rat(1, 2);
        let b = rat(50, 100);
        assert_eq!(a, b);
        assert_ne!(a, rat(51, 100));

        let set: HashSet<Rational> = [a, b, Rational::from_integer(1)].into_iter().collect();
        assert_eq!(set.len(), 2);

        assert_eq!(rat(10, 2), 5i64);
        assert!(rat(-1, 3) < 0i64);
    }

    #[test]
    fn test_ordering() {
        let third = rat(1, 3);
        let half = rat(1, 2);
        let neg = rat(-7, 2);

        assert!(third < half);
        assert!(neg < third);
        assert_eq!(half.cmp(&rat(2, 4)), Ordering::Equal);
        assert!(rat(-1, 3) > rat(-1, 2));

        let huge = Rational::from_str_decimal("1e120").unwrap();
        let huger = Rational::from_str_decimal("1.000000000000000000000000000000000000000001e120").unwrap();
        assert!(huge < huger);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(pair(&(rat(1, 2) + rat(1, 3))), (5, 6));
        assert_eq!(pair(&(rat(1, 4) + rat(1, 4))), (1, 2));
        assert_eq!(pair(&(rat(1, 2) - rat(3, 4))), (-1, 4));
        assert_eq!(pair(&(rat(2, 3) * rat(9, 4))), (3, 2));
        assert_eq!(pair(&(rat(1, 2) / rat(1, 4))), (2, 1));
        assert_eq!(pair(&(rat(1, 2) / rat(-3, 1))), (-1, 6));

        let a = rat(7, 10);
        let b = rat(3, 10);
        assert_eq!(&a + &b, Rational::one());
        assert_eq!(pair(&(&a - &b)), (2, 5));
        assert_eq!(pair(&(&a * &b)), (21, 100));
        assert_eq!(pair(&(&a / &b)), (7, 3));
    }

    #[test]
    fn test_invoice_line_total() {
        // 3 x 201.43, then 7.5% tax rounded to cents
        let price = Rational::from_str_decimal("201.43").unwrap();
        let quantity = Rational::from_str_decimal("3").unwrap();
        let net = &price * &quantity;
        assert_eq!(pair(&net), (60429, 100));

        let tax = &net * &Rational::from_str_decimal("0.075").unwrap();
        let tax_cents = tax.convert_denom(100, RoundingMode::HalfUp).unwrap();
        assert_eq!(pair(&tax_cents), (4532, 100));

        let lines = [net.clone(), tax_cents.clone()];
        let total: Rational = lines.iter().sum();
        assert_eq!(total.to_decimal().unwrap().to_string(), "649.61");
    }

    #[test]
    fn test_neg_and_abs_keep_form() {
        let x = rat(-75, 10);
        assert_eq!(pair(&-x.clone()), (75, 10));
        assert_eq!(pair(&-&x), (75, 10));
        assert_eq!(pair(&x.abs()), (75, 10));
        assert_eq!(pair(&rat(3, 4).abs()), (3, 4));
        assert!(Rational::zero().abs().is_zero());
    }

    #[test]
    fn test_checked_div() {
        assert_eq!(
            rat(1, 2).checked_div(&Rational::zero()),
            Err(NumericError::ZeroDenominator)
        );
        assert_eq!(pair(&rat(1, 2).checked_div(&rat(3, 1)).unwrap()), (1, 6));
    }

    #[test]
    #[should_panic]
    fn test_div_by_zero_panics() {
        let _ = rat(1, 2) / Rational::zero();
    }

    #[test]
    fn test_sum_and_product() {
        let parts = [rat(1, 2), rat(1, 3), rat(1, 6)];
        let sum: Rational = parts.iter().sum();
        assert_eq!(sum, Rational::one());

        let product: Rational = parts.into_iter().product();
        assert_eq!(pair(&product), (1, 36));

        let empty: Rational = Vec::<Rational>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_arithmetic_beyond_machine_width() {
        let big = Rational::from_str_decimal("123456789012345678901234567890123456789012.5").unwrap();
        let doubled = &big + &big;
        assert_eq!(
            doubled.to_decimal_parts().unwrap().to_string(),
            "246913578024691357802469135780246913578025"
        );
        assert_eq!(&doubled - &big, big);
    }

    #[test]
    fn test_convert_denom() {
        let price = Rational::from_str_decimal("201.43").unwrap();
        let cents = price.convert_denom(100, RoundingMode::Never).unwrap();
        assert_eq!(pair(&cents), (20143, 100));

        let mills = price.convert_denom(1000, RoundingMode::Never).unwrap();
        assert_eq!(pair(&mills), (201430, 1000));

        let whole = price.convert_denom(1, RoundingMode::HalfUp).unwrap();
        assert_eq!(pair(&whole), (201, 1));

        let neg = rat(-2, 3);
        assert_eq!(pair(&neg.convert_denom(100, RoundingMode::HalfUp).unwrap()), (-67, 100));
        assert_eq!(pair(&neg.convert_denom(100, RoundingMode::Truncate).unwrap()), (-66, 100));
    }

    #[test]
    fn test_convert_denom_errors() {
        let x = rat(1, 3);
        assert_eq!(
            x.convert_denom(100, RoundingMode::Never),
            Err(NumericError::PrecisionLoss)
        );
        assert_eq!(
            x.convert_denom(0, RoundingMode::HalfUp),
            Err(NumericError::ZeroDenominator)
        );
        assert_eq!(
            x.convert_denom(-100, RoundingMode::HalfUp),
            Err(NumericError::InvalidInput)
        );
    }

    #[test]
    fn test_to_decimal_parts() {
        assert_eq!(rat(-75, 10).to_decimal_parts().unwrap().to_string(), "-7.5");
        assert_eq!(rat(1, 4).to_decimal_parts().unwrap().to_string(), "0.25");
        assert_eq!(rat(5000, 1).to_decimal_parts().unwrap().to_string(), "5000");
        assert_eq!(rat(0, 100).to_decimal_parts().unwrap().to_string(), "0");
        assert_eq!(rat(1, 3).to_decimal_parts(), Err(NumericError::PrecisionLoss));

        let tiny = Rational::from_str_decimal("-3e-150").unwrap();
        let parts = tiny.to_decimal_parts().unwrap();
        assert_eq!((parts.digits(), parts.exponent()), (&[3u8][..], -150));
        assert!(parts.is_negative());
    }

    #[test]
    fn test_round_trip() {
        let inputs = [
            "201.43",
            "-7.5",
            "5e3",
            "0",
            "0.001",
            "-123456789.987654321",
            "98765432109876543210987654321098765432109876.54321",
            "7e-120",
            "-4e130",
        ];
        for input in inputs {
            let parts: DecimalParts = input.parse().unwrap();
            let rational = Rational::from_decimal_parts(&parts);
            let back = Rational::from_decimal_parts(&rational.to_decimal_parts().unwrap());
            assert_eq!(back, rational, "input {}", input);
        }
    }

    #[test]
    fn test_decimal_conversions() {
        use rust_decimal::Decimal;

        let d = Decimal::new(20143, 2);
        let r = Rational::from_decimal(d);
        assert_eq!(pair(&r), (20143, 100));
        assert_eq!(r.to_decimal().unwrap(), d);

        assert_eq!(rat(-1, 8).to_decimal().unwrap().to_string(), "-0.125");
        assert_eq!(
            Rational::from_str_decimal("1e40").unwrap().to_decimal(),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_display_and_parse() {
        let r = rat(-75, 10);
        assert_eq!(r.to_string(), "-75/10");
        assert_eq!(format!("{:?}", r), "Rational(-75/10)");
        assert_eq!(Rational::from_integer(5000).to_string(), "5000/1");

        let parsed: Rational = " -75 / 10 ".parse().unwrap();
        assert_eq!(pair(&parsed), (-75, 10));

        let integer: Rational = "42".parse().unwrap();
        assert_eq!(pair(&integer), (42, 1));

        let wide: Rational = "1/100000000000000000000000000000000000000000000".parse().unwrap();
        assert_eq!(wide.denominator(), &pow10(44));

        assert_eq!("1/0".parse::<Rational>(), Err(NumericError::ZeroDenominator));
        assert_eq!("1.5/2".parse::<Rational>(), Err(NumericError::InvalidInput));
        assert_eq!("/2".parse::<Rational>(), Err(NumericError::InvalidInput));
    }
}
