//! Get calculation detail use case

use std::sync::Arc;
use tracing::{debug, instrument};

use core_kernel::StudentId;
use domain_grading::StudentRepository;

use super::load_existing;
use crate::dto::{GetCalculationDetailRequest, GetCalculationDetailResponse};
use crate::error::ApplicationError;

/// Returns the breakdown behind a student's final grade
pub struct GetCalculationDetailUseCase {
    repository: Arc<dyn StudentRepository>,
}

impl GetCalculationDetailUseCase {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, request), fields(student_id = %request.student_id))]
    pub async fn execute(
        &self,
        request: GetCalculationDetailRequest,
    ) -> Result<GetCalculationDetailResponse, ApplicationError> {
        let id = StudentId::new(&request.student_id)?;
        let student = load_existing(self.repository.as_ref(), &id).await?;
        let detail = student.calculation_detail()?;

        debug!(
            evaluations = detail.evaluations.len(),
            can_receive_extra_points = detail.can_receive_extra_points,
            "Calculation detail built"
        );

        Ok(GetCalculationDetailResponse {
            success: true,
            message: "Calculation detail retrieved successfully".to_string(),
            detail,
        })
    }
}
