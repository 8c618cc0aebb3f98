//! Update extra points policy use case

use std::sync::Arc;
use tracing::{info, instrument};

use core_kernel::StudentId;
use domain_grading::{
    AttendancePolicy, ExtraPointsPolicy, Student, StudentRepository,
};

use super::publish_events;
use crate::dto::{UpdateExtraPointsPolicyRequest, UpdateExtraPointsPolicyResponse};
use crate::error::ApplicationError;

/// Records whether the teachers agreed to grant extra points
///
/// An unknown student is created with attendance off and this flag.
pub struct UpdateExtraPointsPolicyUseCase {
    repository: Arc<dyn StudentRepository>,
}

impl UpdateExtraPointsPolicyUseCase {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, request), fields(student_id = %request.student_id))]
    pub async fn execute(
        &self,
        request: UpdateExtraPointsPolicyRequest,
    ) -> Result<UpdateExtraPointsPolicyResponse, ApplicationError> {
        let id = StudentId::new(&request.student_id)?;
        let flag = request.all_years_teachers;

        let mut student = match self.repository.find_by_id(&id).await? {
            Some(mut student) => {
                student.update_extra_points_policy(flag);
                student
            }
            None => Student::new(
                id.clone(),
                AttendancePolicy::new(false),
                ExtraPointsPolicy::new(flag),
            ),
        };

        self.repository.save(&student).await?;
        publish_events(&mut student);
        info!(all_years_teachers = flag, "Extra points policy updated");

        Ok(UpdateExtraPointsPolicyResponse {
            success: true,
            message: "Extra points policy updated successfully".to_string(),
            student_id: id.into_inner(),
            all_years_teachers: flag,
        })
    }
}
