//! Request and response DTOs for the grading use cases

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_grading::{CalculationDetail, Student};

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterEvaluationRequest {
    pub student_id: String,
    pub grade: f64,
    pub weight_percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterEvaluationResponse {
    pub success: bool,
    pub message: String,
    pub student_id: String,
    pub total_evaluations: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAttendanceRequest {
    pub student_id: String,
    pub has_reached_minimum_classes: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateAttendanceResponse {
    pub success: bool,
    pub message: String,
    pub student_id: String,
    pub has_reached_minimum_classes: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExtraPointsPolicyRequest {
    pub student_id: String,
    pub all_years_teachers: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateExtraPointsPolicyResponse {
    pub success: bool,
    pub message: String,
    pub student_id: String,
    pub all_years_teachers: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalculateFinalGradeRequest {
    pub student_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalculateFinalGradeResponse {
    pub success: bool,
    pub message: String,
    pub student_id: String,
    pub final_grade: f64,
    /// Final grade rounded to two decimals for display
    pub formatted_final_grade: String,
    pub calculation_time_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetCalculationDetailRequest {
    pub student_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetCalculationDetailResponse {
    pub success: bool,
    pub message: String,
    pub detail: CalculationDetail,
}

/// Overview of one stored student
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub student_id: String,
    pub total_evaluations: usize,
    pub total_weight: Decimal,
    pub has_reached_minimum_classes: bool,
    pub all_years_teachers: bool,
    pub can_finalize: bool,
}

impl From<&Student> for StudentSummary {
    fn from(student: &Student) -> Self {
        Self {
            student_id: student.id().to_string(),
            total_evaluations: student.evaluation_count(),
            total_weight: student.total_weight(),
            has_reached_minimum_classes: student.attendance_policy().value(),
            all_years_teachers: student.extra_points_policy().value(),
            can_finalize: student.can_finalize(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RemoveStudentResponse {
    pub success: bool,
    pub message: String,
    pub student_id: String,
}
