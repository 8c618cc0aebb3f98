//! Register evaluation use case

use std::sync::Arc;
use tracing::{info, instrument};

use core_kernel::StudentId;
use domain_grading::{
    AttendancePolicy, ExtraPointsPolicy, Student, StudentRepository,
};

use super::publish_events;
use crate::dto::{RegisterEvaluationRequest, RegisterEvaluationResponse};
use crate::error::ApplicationError;

/// Appends an evaluation to a student, creating the student if needed
///
/// New students start with both policies off. Nothing is saved when the
/// evaluation is rejected.
pub struct RegisterEvaluationUseCase {
    repository: Arc<dyn StudentRepository>,
}

impl RegisterEvaluationUseCase {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, request), fields(student_id = %request.student_id))]
    pub async fn execute(
        &self,
        request: RegisterEvaluationRequest,
    ) -> Result<RegisterEvaluationResponse, ApplicationError> {
        let id = StudentId::new(&request.student_id)?;

        let mut student = match self.repository.find_by_id(&id).await? {
            Some(student) => student,
            None => Student::new(
                id.clone(),
                AttendancePolicy::new(false),
                ExtraPointsPolicy::new(false),
            ),
        };

        student.add_evaluation(request.grade, request.weight_percentage)?;
        self.repository.save(&student).await?;
        publish_events(&mut student);

        let total_evaluations = student.evaluation_count();
        info!(
            grade = request.grade,
            weight_percentage = request.weight_percentage,
            total_evaluations,
            "Evaluation registered"
        );

        Ok(RegisterEvaluationResponse {
            success: true,
            message: "Evaluation registered successfully".to_string(),
            student_id: id.into_inner(),
            total_evaluations,
        })
    }
}
