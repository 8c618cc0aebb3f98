//! Calculate final grade use case

use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, instrument, warn};

use core_kernel::StudentId;
use domain_grading::{format_grade, StudentRepository};

use super::load_existing;
use crate::dto::{CalculateFinalGradeRequest, CalculateFinalGradeResponse};
use crate::error::ApplicationError;

/// Calculates a student's final grade and reports how long it took
///
/// The time budget is only observed: a slow calculation is logged as a
/// warning but still returned.
pub struct CalculateFinalGradeUseCase {
    repository: Arc<dyn StudentRepository>,
    budget: Duration,
}

impl CalculateFinalGradeUseCase {
    pub fn with_budget(repository: Arc<dyn StudentRepository>, budget: Duration) -> Self {
        Self { repository, budget }
    }

    #[instrument(skip(self, request), fields(student_id = %request.student_id))]
    pub async fn execute(
        &self,
        request: CalculateFinalGradeRequest,
    ) -> Result<CalculateFinalGradeResponse, ApplicationError> {
        let start = Instant::now();

        let id = StudentId::new(&request.student_id)?;
        let student = load_existing(self.repository.as_ref(), &id).await?;
        let final_grade = student.calculate_final_grade()?;

        let elapsed = start.elapsed();
        let calculation_time_ms = elapsed.as_millis() as u64;

        if elapsed > self.budget {
            warn!(
                calculation_time_ms,
                budget_ms = self.budget.as_millis() as u64,
                "Final grade calculation exceeded its time budget"
            );
        }

        info!(final_grade, calculation_time_ms, "Final grade calculated");

        Ok(CalculateFinalGradeResponse {
            success: true,
            message: "Final grade calculated successfully".to_string(),
            student_id: id.into_inner(),
            final_grade,
            formatted_final_grade: format_grade(final_grade),
            calculation_time_ms,
        })
    }
}
