//! Evaluation entity

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GradingError;
use crate::grade::Grade;
use crate::weight::WeightPercentage;

/// One graded piece of work: the grade obtained and its weight in the final grade
///
/// Evaluations have no identity of their own; they are addressed by their
/// position in the owning student's list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    grade: Grade,
    weight_percentage: WeightPercentage,
}

impl Evaluation {
    /// Validates both numbers and builds an evaluation
    ///
    /// # Errors
    ///
    /// Returns the validation error of the grade first, then of the weight.
    pub fn new(grade: f64, weight_percentage: f64) -> Result<Self, GradingError> {
        let grade = Grade::new(grade)?;
        let weight_percentage = WeightPercentage::new(weight_percentage)?;
        Ok(Self::from_parts(grade, weight_percentage))
    }

    /// Builds an evaluation from already validated value objects
    pub fn from_parts(grade: Grade, weight_percentage: WeightPercentage) -> Self {
        Self { grade, weight_percentage }
    }

    /// Returns the grade
    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Returns the weight percentage
    pub fn weight(&self) -> WeightPercentage {
        self.weight_percentage
    }

    /// Points this evaluation contributes to the final grade: `grade × weight / 100`
    pub fn weighted_contribution(&self) -> f64 {
        self.grade.value() * self.weight_percentage.decimal_factor()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Evaluation(grade={}, weight={})", self.grade, self.weight_percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contribution() {
        let evaluation = Evaluation::new(16.0, 50.0).unwrap();
        assert_eq!(evaluation.weighted_contribution(), 8.0);
    }

    #[test]
    fn test_grade_error_reported_before_weight_error() {
        let err = Evaluation::new(25.0, 150.0).unwrap_err();
        assert!(matches!(err, GradingError::InvalidValue { ref field, .. } if field == "Grade"));
    }

    #[test]
    fn test_display() {
        let evaluation = Evaluation::new(15.5, 50.0).unwrap();
        assert_eq!(evaluation.to_string(), "Evaluation(grade=15.50, weight=50%)");
    }
}
