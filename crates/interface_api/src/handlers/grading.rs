//! Student grading handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use app_grading::dto::{
    CalculateFinalGradeResponse, RegisterEvaluationResponse, RemoveStudentResponse,
    UpdateAttendanceResponse, UpdateExtraPointsPolicyResponse,
};

use crate::dto::grading::*;
use crate::{error::ApiError, AppState};

/// Registers an evaluation, creating the student if needed
pub async fn register_evaluation(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(body): Json<RegisterEvaluationBody>,
) -> Result<(StatusCode, Json<RegisterEvaluationResponse>), ApiError> {
    let response = state
        .calculator
        .register_evaluation(&student_id, body.grade, body.weight_percentage)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Sets the attendance flag
pub async fn update_attendance(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(body): Json<UpdateAttendanceBody>,
) -> Result<Json<UpdateAttendanceResponse>, ApiError> {
    let response = state
        .calculator
        .update_attendance(&student_id, body.has_reached_minimum_classes)
        .await?;
    Ok(Json(response))
}

/// Sets the extra points flag
pub async fn update_extra_points_policy(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(body): Json<UpdateExtraPointsPolicyBody>,
) -> Result<Json<UpdateExtraPointsPolicyResponse>, ApiError> {
    let response = state
        .calculator
        .update_extra_points_policy(&student_id, body.all_years_teachers)
        .await?;
    Ok(Json(response))
}

/// Calculates the final grade
pub async fn final_grade(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<CalculateFinalGradeResponse>, ApiError> {
    let response = state.calculator.final_grade_report(&student_id).await?;
    Ok(Json(response))
}

/// Explains how the final grade is obtained
pub async fn calculation_detail(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<CalculationDetailResponse>, ApiError> {
    let detail = state.calculator.get_calculation_detail(&student_id).await?;
    Ok(Json(CalculationDetailResponse {
        success: true,
        message: "Calculation detail retrieved successfully".to_string(),
        detail,
    }))
}

/// Lists all students
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<StudentListResponse>, ApiError> {
    let students = state.calculator.list_students().await?;
    Ok(Json(StudentListResponse {
        success: true,
        total: students.len(),
        students,
    }))
}

/// Removes a student
pub async fn remove_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<RemoveStudentResponse>, ApiError> {
    let response = state.calculator.remove_student(&student_id).await?;
    Ok(Json(response))
}
