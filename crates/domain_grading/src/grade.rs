//! Grade value object
//!
//! Grades live on the 0–20 scale. The raw value is kept exactly as given;
//! rounding only happens when a grade is displayed or explicitly rounded.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{round_half_away_from_zero, to_decimal};

use crate::error::GradingError;
use crate::{GRADE_DECIMAL_PRECISION, MAX_GRADE, MIN_GRADE};

/// A grade obtained in an evaluation, in `[MIN_GRADE, MAX_GRADE]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Grade {
    value: f64,
    exact: Decimal,
}

impl Grade {
    /// Field name reported in validation errors
    pub const FIELD: &'static str = "Grade";

    /// Creates a grade, validating that it is finite and within range
    ///
    /// # Errors
    ///
    /// Returns `GradingError::InvalidValue` if the value is NaN, infinite,
    /// or outside `[0, 20]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use domain_grading::Grade;
    ///
    /// let grade = Grade::new(15.5).unwrap();
    /// assert_eq!(grade.to_string(), "15.50");
    /// assert!(Grade::new(20.5).is_err());
    /// ```
    pub fn new(value: f64) -> Result<Self, GradingError> {
        if !value.is_finite() {
            return Err(GradingError::invalid_value(Self::FIELD, "must be a finite number"));
        }

        if !(MIN_GRADE..=MAX_GRADE).contains(&value) {
            return Err(GradingError::invalid_value(
                Self::FIELD,
                format!("must be between {} and {}", MIN_GRADE, MAX_GRADE),
            ));
        }

        let exact = to_decimal(Self::FIELD, value)?;
        Ok(Self { value, exact })
    }

    /// Returns the grade exactly as it was given
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the grade as an exact decimal
    pub fn as_decimal(&self) -> Decimal {
        self.exact
    }

    /// Returns the grade rounded to two decimals, ties away from zero
    pub fn rounded_value(&self) -> Decimal {
        round_half_away_from_zero(self.exact, GRADE_DECIMAL_PRECISION)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.dp$}",
            self.rounded_value(),
            dp = GRADE_DECIMAL_PRECISION as usize
        )
    }
}

impl TryFrom<f64> for Grade {
    type Error = GradingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Grade> for f64 {
    fn from(grade: Grade) -> f64 {
        grade.value
    }
}

/// Formats any grade-like number the way grades are displayed
///
/// Computed results such as a final grade are not `Grade` instances, but
/// they follow the same contract: two decimals, ties away from zero.
pub fn format_grade(value: f64) -> String {
    let dp = GRADE_DECIMAL_PRECISION as usize;
    match to_decimal(Grade::FIELD, value) {
        Ok(exact) => format!(
            "{:.dp$}",
            round_half_away_from_zero(exact, GRADE_DECIMAL_PRECISION),
            dp = dp
        ),
        Err(_) => format!("{:.dp$}", value, dp = dp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_grade_keeps_raw_value() {
        let grade = Grade::new(15.12345).unwrap();
        assert_eq!(grade.value(), 15.12345);
    }

    #[test]
    fn test_rounded_value() {
        assert_eq!(Grade::new(15.12345).unwrap().rounded_value(), dec!(15.12));
        assert_eq!(Grade::new(15.126).unwrap().rounded_value(), dec!(15.13));
        assert_eq!(Grade::new(15.125).unwrap().rounded_value(), dec!(15.13));
    }

    #[test]
    fn test_rounding_starts_from_shortest_decimal_form() {
        // 1.005 is stored as 1.00499999999999989..., but rounds as written
        let grade = Grade::new(1.005).unwrap();
        assert_eq!(grade.rounded_value(), dec!(1.01));
        assert_eq!(grade.to_string(), "1.01");
        assert_eq!(format_grade(1.005), "1.01");
    }

    #[test]
    fn test_display_always_two_decimals() {
        assert_eq!(Grade::new(15.5).unwrap().to_string(), "15.50");
        assert_eq!(Grade::new(20.0).unwrap().to_string(), "20.00");
        assert_eq!(Grade::new(0.0).unwrap().to_string(), "0.00");
    }

    #[test]
    fn test_format_grade() {
        assert_eq!(format_grade(15.2), "15.20");
        assert_eq!(format_grade(15.126), "15.13");
    }
}
