//! Evaluation weight value object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::to_decimal;

use crate::error::GradingError;
use crate::{MAX_EVALUATION_WEIGHT_PERCENTAGE, MIN_EVALUATION_WEIGHT_PERCENTAGE};

/// Share of the final grade carried by one evaluation, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct WeightPercentage {
    value: f64,
    exact: Decimal,
}

impl WeightPercentage {
    /// Field name reported in validation errors
    pub const FIELD: &'static str = "WeightPercentage";

    /// Creates a weight, validating that it is finite and within `[0, 100]`
    ///
    /// # Errors
    ///
    /// Returns `GradingError::InvalidValue` on NaN, infinities, or
    /// out-of-range values.
    pub fn new(value: f64) -> Result<Self, GradingError> {
        if !value.is_finite() {
            return Err(GradingError::invalid_value(Self::FIELD, "must be a finite number"));
        }

        if !(MIN_EVALUATION_WEIGHT_PERCENTAGE..=MAX_EVALUATION_WEIGHT_PERCENTAGE).contains(&value) {
            return Err(GradingError::invalid_value(
                Self::FIELD,
                format!(
                    "must be between {} and {}",
                    MIN_EVALUATION_WEIGHT_PERCENTAGE, MAX_EVALUATION_WEIGHT_PERCENTAGE
                ),
            ));
        }

        let exact = to_decimal(Self::FIELD, value)?;
        Ok(Self { value, exact })
    }

    /// Returns the percentage exactly as it was given
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the percentage as an exact decimal
    pub fn as_decimal(&self) -> Decimal {
        self.exact
    }

    /// Returns the weight as a multiplication factor (50% -> 0.5)
    pub fn decimal_factor(&self) -> f64 {
        self.value / MAX_EVALUATION_WEIGHT_PERCENTAGE
    }
}

impl fmt::Display for WeightPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.value)
    }
}

impl TryFrom<f64> for WeightPercentage {
    type Error = GradingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeightPercentage> for f64 {
    fn from(weight: WeightPercentage) -> f64 {
        weight.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_factor() {
        assert_eq!(WeightPercentage::new(50.0).unwrap().decimal_factor(), 0.5);
        assert_eq!(WeightPercentage::new(100.0).unwrap().decimal_factor(), 1.0);
    }

    #[test]
    fn test_display_has_no_fixed_decimals() {
        assert_eq!(WeightPercentage::new(50.0).unwrap().to_string(), "50%");
        assert_eq!(WeightPercentage::new(33.33).unwrap().to_string(), "33.33%");
    }
}
