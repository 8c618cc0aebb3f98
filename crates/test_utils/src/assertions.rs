//! Custom Test Assertions
//!
//! Assertion helpers for grades and grading errors that give more useful
//! failure messages than plain `assert!`.

use rust_decimal::Decimal;

use domain_grading::GradingError;

/// Default tolerance when comparing computed grades
pub const GRADE_EPSILON: f64 = 1e-9;

/// Asserts that two grades are equal within `GRADE_EPSILON`
pub fn assert_grade_approx_eq(actual: f64, expected: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= GRADE_EPSILON,
        "Grades differ: actual={}, expected={}, diff={}",
        actual,
        expected,
        diff
    );
}

/// Asserts that `error` is an invalid-value error for `field`
pub fn assert_invalid_value(error: &GradingError, field: &str) {
    match error {
        GradingError::InvalidValue { field: actual, .. } => assert_eq!(
            actual, field,
            "Invalid value reported for {} instead of {}",
            actual, field
        ),
        other => panic!("Expected invalid value for {}, got {:?}", field, other),
    }
}

/// Asserts that `error` reports the given weight sum
pub fn assert_weight_sum_error(error: &GradingError, actual_sum: Decimal) {
    match error {
        GradingError::InvalidWeightSum { actual, .. } => assert_eq!(
            *actual, actual_sum,
            "Weight sum reported as {} instead of {}",
            actual, actual_sum
        ),
        other => panic!("Expected invalid weight sum {}, got {:?}", actual_sum, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_grade_approx_eq() {
        assert_grade_approx_eq(0.1 + 0.2, 0.3);
    }

    #[test]
    #[should_panic(expected = "Grades differ")]
    fn test_grade_approx_eq_fails() {
        assert_grade_approx_eq(15.2, 15.3);
    }

    #[test]
    fn test_invalid_value() {
        assert_invalid_value(&GradingError::invalid_value("Grade", "too high"), "Grade");
    }

    #[test]
    fn test_weight_sum_error() {
        let error = GradingError::InvalidWeightSum {
            actual: dec!(80),
            expected: dec!(100),
        };
        assert_weight_sum_error(&error, dec!(80));
    }
}
