// ============================================================================
// Rational Converter
// Applies a validated configuration around the exact conversion
// ============================================================================

use super::config::ConverterConfig;
use crate::numeric::{DecimalParts, NumericError, NumericResult, Rational};

/// Converts decimal input into rationals according to a [`ConverterConfig`].
///
/// # Example
/// ```
/// use decimal_rational::converter::{ConverterConfig, RationalConverter};
///
/// let converter = RationalConverter::from_config(ConverterConfig::currency(100)).unwrap();
/// let price = converter.convert_str("201.435").unwrap();
/// assert_eq!(price.to_string(), "20144/100");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RationalConverter {
    config: ConverterConfig,
}

impl RationalConverter {
    /// Creates a converter from configuration
    ///
    /// # Returns
    /// * `Result<RationalConverter, String>` - Converter or validation error
    pub fn from_config(config: ConverterConfig) -> Result<Self, String> {
        config.validate()?;

        tracing::debug!(
            max_digits = ?config.max_digits,
            max_exponent = ?config.max_exponent,
            reduce = config.reduce,
            target_denominator = ?config.target_denominator,
            rounding = ?config.rounding,
            "rational converter configured"
        );

        Ok(Self { config })
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert decimal parts.
    ///
    /// # Errors
    /// - `InvalidInput` if the value exceeds the digit or exponent limit
    /// - any error from the exact conversion or the denominator change
    pub fn convert(&self, parts: &DecimalParts) -> NumericResult<Rational> {
        let too_long = self
            .config
            .max_digits
            .is_some_and(|max| parts.digits().len() > max);
        let too_far = self
            .config
            .max_exponent
            .is_some_and(|max| parts.exponent().unsigned_abs() > max);
        if too_long || too_far {
            return Err(NumericError::InvalidInput);
        }

        let exact = Rational::from_decimal_parts(parts);

        match self.config.target_denominator {
            Some(denom) => exact.convert_denom(denom, self.config.rounding),
            None if self.config.reduce => Ok(exact.reduce()),
            None => Ok(exact),
        }
    }

    /// Parse and convert a decimal string such as `"201.43"` or `"1.5E+3"`.
    pub fn convert_str(&self, s: &str) -> NumericResult<Rational> {
        let parts: DecimalParts = s.parse()?;
        self.convert(&parts)
    }

    /// Convert a `rust_decimal::Decimal`.
    pub fn convert_decimal(&self, d: rust_decimal::Decimal) -> NumericResult<Rational> {
        self.convert(&DecimalParts::from_decimal(d))
    }
}
