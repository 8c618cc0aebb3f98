//! Calculation detail read model
//!
//! A snapshot explaining how a final grade was obtained. It is built by the
//! student aggregate and handed out as plain data.

use serde::{Deserialize, Serialize};

use crate::grade::format_grade;

/// Contribution of a single evaluation to the final grade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationBreakdown {
    /// 1-based position in registration order
    pub evaluation_number: usize,
    pub grade: f64,
    pub weight: f64,
    pub contribution: f64,
}

/// Full explanation of a student's final grade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationDetail {
    pub student_id: String,
    pub evaluations: Vec<EvaluationBreakdown>,
    pub base_grade: f64,
    pub has_reached_minimum_classes: bool,
    pub all_years_teachers: bool,
    /// Attendance met AND teachers agreed; informational only
    pub can_receive_extra_points: bool,
    pub final_grade: f64,
}

impl CalculationDetail {
    /// Returns true if the student has no evaluations yet
    pub fn is_empty(&self) -> bool {
        self.evaluations.is_empty()
    }

    /// Final grade formatted for display, e.g. `15.20`
    pub fn formatted_final_grade(&self) -> String {
        format_grade(self.final_grade)
    }
}
