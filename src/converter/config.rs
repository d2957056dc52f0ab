// ============================================================================
// Converter Configuration
// Limits and post-processing applied around the exact conversion
// ============================================================================

use crate::numeric::RoundingMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`RationalConverter`](super::RationalConverter)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Optional: maximum number of digits accepted in an input value.
    /// None accepts any length.
    pub max_digits: Option<usize>,

    /// Optional: maximum absolute exponent accepted in an input value.
    /// None accepts any exponent.
    pub max_exponent: Option<u32>,

    /// Reduce results to lowest terms
    pub reduce: bool,

    /// Optional: express every result over this fixed denominator
    /// (e.g. 100 for a currency with cents). None keeps the exact
    /// power-of-ten denominator.
    pub target_denominator: Option<u64>,

    /// Rounding used when moving to `target_denominator`
    pub rounding: RoundingMode,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            max_digits: None,
            max_exponent: None,
            reduce: false,
            target_denominator: None,
            rounding: RoundingMode::Never,
        }
    }
}

impl ConverterConfig {
    /// Builder method: Set digit limit
    pub fn with_max_digits(mut self, max_digits: usize) -> Self {
        self.max_digits = Some(max_digits);
        self
    }

    /// Builder method: Set exponent limit
    pub fn with_max_exponent(mut self, max_exponent: u32) -> Self {
        self.max_exponent = Some(max_exponent);
        self
    }

    /// Builder method: Fix the output denominator
    pub fn with_target_denominator(mut self, denom: u64, rounding: RoundingMode) -> Self {
        self.target_denominator = Some(denom);
        self.rounding = rounding;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_digits == Some(0) {
            return Err("Digit limit must be at least 1".to_string());
        }

        if let Some(denom) = self.target_denominator {
            if denom == 0 {
                return Err("Target denominator must be positive".to_string());
            }
            if self.reduce {
                return Err("Cannot both reduce and fix the denominator".to_string());
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ConverterConfig {
    /// Exact conversion
    /// - Power-of-ten denominators, never reduced
    /// - No digit or exponent limits
    pub fn exact() -> Self {
        Self::default()
    }

    /// Exact conversion in lowest terms
    pub fn reduced() -> Self {
        Self {
            reduce: true,
            ..Self::default()
        }
    }

    /// Currency amounts over a fixed smallest unit
    /// - `denom` is the number of units per whole (100 for cents)
    /// - Half-up rounding
    pub fn currency(denom: u64) -> Self {
        Self::default().with_target_denominator(denom, RoundingMode::HalfUp)
    }

    /// Untrusted text input: exact, but bounded in size
    /// - At most 64 digits
    /// - Exponent within ±1000
    pub fn bounded() -> Self {
        Self::default().with_max_digits(64).with_max_exponent(1000)
    }
}
