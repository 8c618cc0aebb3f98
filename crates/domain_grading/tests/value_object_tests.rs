//! Value Object Tests
//!
//! Tests for Grade, WeightPercentage, the policy flags and Evaluation.
//!
//! # Test Organization
//!
//! - `grade` - range validation, rounding and display
//! - `weight_percentage` - range validation and decimal factor
//! - `policies` - trivial flag wrappers
//! - `evaluation` - construction and weighted contribution
//! - `properties` - proptest checks over the valid ranges

use domain_grading::{
    format_grade, AttendancePolicy, Evaluation, ExtraPointsPolicy, Grade, GradingError,
    WeightPercentage,
};
use proptest::prelude::*;
use rust_decimal_macros::dec;

fn assert_invalid_field(result: Result<impl std::fmt::Debug, GradingError>, expected_field: &str) {
    match result {
        Err(GradingError::InvalidValue { field, .. }) => assert_eq!(field, expected_field),
        other => panic!("expected invalid {} error, got {:?}", expected_field, other),
    }
}

// ============================================================================
// GRADE
// ============================================================================

mod grade {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(Grade::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Grade::new(20.0).unwrap().value(), 20.0);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_invalid_field(Grade::new(-0.01), "Grade");
        assert_invalid_field(Grade::new(20.01), "Grade");
        assert_invalid_field(Grade::new(25.0), "Grade");
    }

    #[test]
    fn rejects_non_finite() {
        assert_invalid_field(Grade::new(f64::NAN), "Grade");
        assert_invalid_field(Grade::new(f64::INFINITY), "Grade");
        assert_invalid_field(Grade::new(f64::NEG_INFINITY), "Grade");
    }

    #[test]
    fn error_message_names_the_field() {
        let err = Grade::new(21.0).unwrap_err();
        assert!(err.to_string().starts_with("Invalid Grade:"));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(Grade::new(15.12345).unwrap().rounded_value(), dec!(15.12));
        assert_eq!(Grade::new(15.126).unwrap().rounded_value(), dec!(15.13));
        assert_eq!(Grade::new(15.125).unwrap().rounded_value(), dec!(15.13));
    }

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Grade::new(15.12345).unwrap().to_string(), "15.12");
        assert_eq!(Grade::new(7.0).unwrap().to_string(), "7.00");
        assert_eq!(format_grade(15.2), "15.20");
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(Grade::new(12.5).unwrap(), Grade::new(12.5).unwrap());
        assert_ne!(Grade::new(12.5).unwrap(), Grade::new(12.0).unwrap());
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let grade: Grade = serde_json::from_str("15.5").unwrap();
        assert_eq!(grade.value(), 15.5);
        assert_eq!(serde_json::to_string(&grade).unwrap(), "15.5");
        assert!(serde_json::from_str::<Grade>("21.0").is_err());
    }
}

// ============================================================================
// WEIGHT PERCENTAGE
// ============================================================================

mod weight_percentage {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(WeightPercentage::new(0.0).unwrap().value(), 0.0);
        assert_eq!(WeightPercentage::new(100.0).unwrap().value(), 100.0);
    }

    #[test]
    fn rejects_out_of_range_and_non_finite() {
        assert_invalid_field(WeightPercentage::new(-1.0), "WeightPercentage");
        assert_invalid_field(WeightPercentage::new(100.5), "WeightPercentage");
        assert_invalid_field(WeightPercentage::new(f64::NAN), "WeightPercentage");
    }

    #[test]
    fn decimal_factor_divides_by_hundred() {
        assert_eq!(WeightPercentage::new(30.0).unwrap().decimal_factor(), 0.3);
        assert_eq!(WeightPercentage::new(0.0).unwrap().decimal_factor(), 0.0);
    }

    #[test]
    fn exact_decimal_matches_literal() {
        assert_eq!(WeightPercentage::new(40.01).unwrap().as_decimal(), dec!(40.01));
    }

    #[test]
    fn serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<WeightPercentage>("101").is_err());
        assert!(serde_json::from_str::<WeightPercentage>("50").is_ok());
    }
}

// ============================================================================
// POLICIES
// ============================================================================

mod policies {
    use super::*;

    #[test]
    fn attendance_reports_its_flag() {
        assert!(AttendancePolicy::new(true).meets_minimum_requirement());
        assert!(!AttendancePolicy::new(false).meets_minimum_requirement());
    }

    #[test]
    fn extra_points_reports_its_flag() {
        assert!(ExtraPointsPolicy::new(true).allows_extra_points());
        assert!(!ExtraPointsPolicy::new(false).allows_extra_points());
    }

    #[test]
    fn serialize_as_plain_booleans() {
        assert_eq!(serde_json::to_string(&AttendancePolicy::new(true)).unwrap(), "true");
        let policy: ExtraPointsPolicy = serde_json::from_str("false").unwrap();
        assert!(!policy.value());
    }
}

// ============================================================================
// EVALUATION
// ============================================================================

mod evaluation {
    use super::*;

    #[test]
    fn weighted_contribution() {
        let evaluation = Evaluation::new(17.5, 30.0).unwrap();
        assert_eq!(evaluation.weighted_contribution(), 5.25);
    }

    #[test]
    fn zero_weight_contributes_nothing() {
        let evaluation = Evaluation::new(18.0, 0.0).unwrap();
        assert_eq!(evaluation.weighted_contribution(), 0.0);
    }

    #[test]
    fn invalid_grade_propagates() {
        assert_invalid_field(Evaluation::new(-1.0, 50.0), "Grade");
    }

    #[test]
    fn invalid_weight_propagates() {
        assert_invalid_field(Evaluation::new(15.0, 150.0), "WeightPercentage");
    }

    #[test]
    fn from_parts_matches_new() {
        let parts = Evaluation::from_parts(
            Grade::new(12.0).unwrap(),
            WeightPercentage::new(25.0).unwrap(),
        );
        assert_eq!(parts, Evaluation::new(12.0, 25.0).unwrap());
    }

    #[test]
    fn display() {
        let evaluation = Evaluation::new(15.5, 50.0).unwrap();
        assert_eq!(evaluation.to_string(), "Evaluation(grade=15.50, weight=50%)");
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

mod properties {
    use super::*;

    proptest! {
        #[test]
        fn valid_grades_keep_their_value(value in 0.0f64..=20.0) {
            let grade = Grade::new(value).unwrap();
            prop_assert_eq!(grade.value(), value);
        }

        #[test]
        fn valid_weights_keep_their_value(value in 0.0f64..=100.0) {
            let weight = WeightPercentage::new(value).unwrap();
            prop_assert_eq!(weight.value(), value);
        }

        #[test]
        fn grades_above_range_fail(value in 20.000001f64..1.0e6) {
            prop_assert!(Grade::new(value).is_err());
        }

        #[test]
        fn negative_weights_fail(value in -1.0e6f64..-0.000001) {
            prop_assert!(WeightPercentage::new(value).is_err());
        }

        #[test]
        fn contribution_never_exceeds_grade(grade in 0.0f64..=20.0, weight in 0.0f64..=100.0) {
            let evaluation = Evaluation::new(grade, weight).unwrap();
            let contribution = evaluation.weighted_contribution();
            prop_assert!(contribution >= 0.0);
            prop_assert!(contribution <= grade + 1e-12);
        }
    }
}
