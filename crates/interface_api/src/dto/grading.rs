//! Grading DTOs
//!
//! Bodies for the student routes. The student ID always comes from the path.

use serde::{Deserialize, Serialize};

use app_grading::dto::StudentSummary;
use domain_grading::CalculationDetail;

#[derive(Debug, Deserialize)]
pub struct RegisterEvaluationBody {
    pub grade: f64,
    pub weight_percentage: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAttendanceBody {
    pub has_reached_minimum_classes: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateExtraPointsPolicyBody {
    pub all_years_teachers: bool,
}

#[derive(Debug, Serialize)]
pub struct CalculationDetailResponse {
    pub success: bool,
    pub message: String,
    pub detail: CalculationDetail,
}

#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub success: bool,
    pub total: usize,
    pub students: Vec<StudentSummary>,
}
