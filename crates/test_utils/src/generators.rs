//! Property-Based Test Generators
//!
//! Proptest strategies producing inputs that satisfy (or deliberately
//! violate) the grading invariants.

use proptest::prelude::*;

use core_kernel::{MAX_STUDENT_ID_LENGTH, MIN_STUDENT_ID_LENGTH};
use domain_grading::{MAX_EVALUATIONS_PER_STUDENT, MAX_GRADE};

/// Strategy for grades in [0, 20]
pub fn grade_strategy() -> impl Strategy<Value = f64> {
    0.0f64..=MAX_GRADE
}

/// Strategy for grades with at most two decimals
pub fn hundredths_grade_strategy() -> impl Strategy<Value = f64> {
    (0u32..=2000u32).prop_map(|n| n as f64 / 100.0)
}

/// Strategy for weights in [0, 100]
pub fn weight_strategy() -> impl Strategy<Value = f64> {
    0.0f64..=100.0
}

/// Strategy for grades outside [0, 20]
pub fn out_of_range_grade_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![-1.0e6f64..-0.001, 20.001f64..1.0e6]
}

/// Strategy for valid student identifiers
pub fn student_id_strategy() -> impl Strategy<Value = String> {
    let pattern = format!(
        "[A-Za-z0-9]{{{},{}}}",
        MIN_STUDENT_ID_LENGTH, MAX_STUDENT_ID_LENGTH
    );
    proptest::string::string_regex(&pattern)
        .unwrap_or_else(|e| panic!("invalid student id pattern: {}", e))
}

/// Strategy for 1 to 10 whole-number weights that sum to exactly 100
///
/// Weights are obtained by cutting [0, 100] at random points, so zero
/// weights are possible.
pub fn balanced_weights_strategy() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(0u32..=100u32, 0..MAX_EVALUATIONS_PER_STUDENT).prop_map(|mut cuts| {
        cuts.sort_unstable();
        let mut previous = 0u32;
        let mut weights = Vec::with_capacity(cuts.len() + 1);
        for cut in cuts {
            weights.push((cut - previous) as f64);
            previous = cut;
        }
        weights.push((100 - previous) as f64);
        weights
    })
}

/// Strategy for complete balanced evaluation sets as (grade, weight) pairs
pub fn balanced_evaluations_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    balanced_weights_strategy().prop_flat_map(|weights| {
        let count = weights.len();
        proptest::collection::vec(hundredths_grade_strategy(), count)
            .prop_map(move |grades| grades.into_iter().zip(weights.clone()).collect())
    })
}
