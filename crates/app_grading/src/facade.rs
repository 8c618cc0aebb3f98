//! GradeCalculator facade
//!
//! Single entry point over the grading use cases. Mutations are serialized
//! through one async mutex so concurrent callers never interleave a
//! find-modify-save sequence and lose an update. Reads go straight to the
//! store.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{info, instrument};

use core_kernel::StudentId;
use domain_grading::{CalculationDetail, StudentRepository, MAX_CALCULATION_TIME_MS};

use crate::dto::{
    CalculateFinalGradeRequest, CalculateFinalGradeResponse, GetCalculationDetailRequest,
    RegisterEvaluationRequest, RegisterEvaluationResponse, RemoveStudentResponse,
    StudentSummary, UpdateAttendanceRequest, UpdateAttendanceResponse,
    UpdateExtraPointsPolicyRequest, UpdateExtraPointsPolicyResponse,
};
use crate::error::ApplicationError;
use crate::use_cases::{
    CalculateFinalGradeUseCase, GetCalculationDetailUseCase, RegisterEvaluationUseCase,
    UpdateAttendanceUseCase, UpdateExtraPointsPolicyUseCase,
};

/// Facade over every grading operation
pub struct GradeCalculator {
    repository: Arc<dyn StudentRepository>,
    register_evaluation: RegisterEvaluationUseCase,
    update_attendance: UpdateAttendanceUseCase,
    update_extra_points_policy: UpdateExtraPointsPolicyUseCase,
    calculate_final_grade: CalculateFinalGradeUseCase,
    get_calculation_detail: GetCalculationDetailUseCase,
    write_lock: Mutex<()>,
}

impl GradeCalculator {
    /// Creates a calculator with the default calculation budget
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self::with_calculation_budget(repository, Duration::from_millis(MAX_CALCULATION_TIME_MS))
    }

    /// Creates a calculator that warns when a calculation exceeds `budget`
    pub fn with_calculation_budget(repository: Arc<dyn StudentRepository>, budget: Duration) -> Self {
        Self {
            register_evaluation: RegisterEvaluationUseCase::new(Arc::clone(&repository)),
            update_attendance: UpdateAttendanceUseCase::new(Arc::clone(&repository)),
            update_extra_points_policy: UpdateExtraPointsPolicyUseCase::new(Arc::clone(&repository)),
            calculate_final_grade: CalculateFinalGradeUseCase::with_budget(
                Arc::clone(&repository),
                budget,
            ),
            get_calculation_detail: GetCalculationDetailUseCase::new(Arc::clone(&repository)),
            repository,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the underlying store, e.g. for health checks
    pub fn repository(&self) -> &Arc<dyn StudentRepository> {
        &self.repository
    }

    pub async fn register_evaluation(
        &self,
        student_id: &str,
        grade: f64,
        weight_percentage: f64,
    ) -> Result<RegisterEvaluationResponse, ApplicationError> {
        let _guard = self.write_lock.lock().await;
        self.register_evaluation
            .execute(RegisterEvaluationRequest {
                student_id: student_id.to_string(),
                grade,
                weight_percentage,
            })
            .await
    }

    pub async fn update_attendance(
        &self,
        student_id: &str,
        has_reached_minimum_classes: bool,
    ) -> Result<UpdateAttendanceResponse, ApplicationError> {
        let _guard = self.write_lock.lock().await;
        self.update_attendance
            .execute(UpdateAttendanceRequest {
                student_id: student_id.to_string(),
                has_reached_minimum_classes,
            })
            .await
    }

    pub async fn update_extra_points_policy(
        &self,
        student_id: &str,
        all_years_teachers: bool,
    ) -> Result<UpdateExtraPointsPolicyResponse, ApplicationError> {
        let _guard = self.write_lock.lock().await;
        self.update_extra_points_policy
            .execute(UpdateExtraPointsPolicyRequest {
                student_id: student_id.to_string(),
                all_years_teachers,
            })
            .await
    }

    /// Returns the final grade only
    pub async fn calculate_final_grade(&self, student_id: &str) -> Result<f64, ApplicationError> {
        Ok(self.final_grade_report(student_id).await?.final_grade)
    }

    /// Returns the final grade along with its formatted form and timing
    pub async fn final_grade_report(
        &self,
        student_id: &str,
    ) -> Result<CalculateFinalGradeResponse, ApplicationError> {
        self.calculate_final_grade
            .execute(CalculateFinalGradeRequest {
                student_id: student_id.to_string(),
            })
            .await
    }

    pub async fn get_calculation_detail(
        &self,
        student_id: &str,
    ) -> Result<CalculationDetail, ApplicationError> {
        let response = self
            .get_calculation_detail
            .execute(GetCalculationDetailRequest {
                student_id: student_id.to_string(),
            })
            .await?;
        Ok(response.detail)
    }

    /// Summaries of all stored students, ordered by ID
    #[instrument(skip(self))]
    pub async fn list_students(&self) -> Result<Vec<StudentSummary>, ApplicationError> {
        let students = self.repository.find_all().await?;
        Ok(students.iter().map(StudentSummary::from).collect())
    }

    /// Deletes a student and all of its evaluations
    #[instrument(skip(self))]
    pub async fn remove_student(
        &self,
        student_id: &str,
    ) -> Result<RemoveStudentResponse, ApplicationError> {
        let id = StudentId::new(student_id)?;
        let _guard = self.write_lock.lock().await;

        if !self.repository.delete(&id).await? {
            return Err(ApplicationError::StudentNotFound(id.into_inner()));
        }

        info!(student_id = %id, "Student removed");

        Ok(RemoveStudentResponse {
            success: true,
            message: "Student removed successfully".to_string(),
            student_id: id.into_inner(),
        })
    }
}
