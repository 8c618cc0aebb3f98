//! Grading use cases
//!
//! One struct per operation, each holding the repository port. Mutating use
//! cases follow find-or-create, apply, save; read use cases fail with
//! `ApplicationError::StudentNotFound` for unknown identifiers.

pub mod register_evaluation;
pub mod update_attendance;
pub mod update_extra_points_policy;
pub mod calculate_final_grade;
pub mod get_calculation_detail;

pub use register_evaluation::RegisterEvaluationUseCase;
pub use update_attendance::UpdateAttendanceUseCase;
pub use update_extra_points_policy::UpdateExtraPointsPolicyUseCase;
pub use calculate_final_grade::CalculateFinalGradeUseCase;
pub use get_calculation_detail::GetCalculationDetailUseCase;

use tracing::debug;

use core_kernel::StudentId;
use domain_grading::{Student, StudentRepository};

use crate::error::ApplicationError;

/// Drains and logs the events recorded by the last commands
pub(crate) fn publish_events(student: &mut Student) {
    for event in student.take_events() {
        debug!(
            event_type = event.event_type(),
            student_id = %event.student_id(),
            timestamp = %event.timestamp(),
            "Domain event"
        );
    }
}

/// Loads a student or fails with `StudentNotFound`
pub(crate) async fn load_existing(
    repository: &dyn StudentRepository,
    id: &StudentId,
) -> Result<Student, ApplicationError> {
    repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApplicationError::StudentNotFound(id.to_string()))
}
