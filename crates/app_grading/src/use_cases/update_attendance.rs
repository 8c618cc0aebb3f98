//! Update attendance use case

use std::sync::Arc;
use tracing::{info, instrument};

use core_kernel::StudentId;
use domain_grading::{
    AttendancePolicy, ExtraPointsPolicy, Student, StudentRepository,
};

use super::publish_events;
use crate::dto::{UpdateAttendanceRequest, UpdateAttendanceResponse};
use crate::error::ApplicationError;

/// Records whether a student reached the minimum attendance
///
/// An unknown student is created with this flag and extra points off.
pub struct UpdateAttendanceUseCase {
    repository: Arc<dyn StudentRepository>,
}

impl UpdateAttendanceUseCase {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, request), fields(student_id = %request.student_id))]
    pub async fn execute(
        &self,
        request: UpdateAttendanceRequest,
    ) -> Result<UpdateAttendanceResponse, ApplicationError> {
        let id = StudentId::new(&request.student_id)?;
        let flag = request.has_reached_minimum_classes;

        let mut student = match self.repository.find_by_id(&id).await? {
            Some(mut student) => {
                student.update_attendance_policy(flag);
                student
            }
            None => Student::new(
                id.clone(),
                AttendancePolicy::new(flag),
                ExtraPointsPolicy::new(false),
            ),
        };

        self.repository.save(&student).await?;
        publish_events(&mut student);
        info!(has_reached_minimum_classes = flag, "Attendance policy updated");

        Ok(UpdateAttendanceResponse {
            success: true,
            message: "Attendance policy updated successfully".to_string(),
            student_id: id.into_inner(),
            has_reached_minimum_classes: flag,
        })
    }
}
