//! Grading Domain Ports
//!
//! The `StudentRepository` trait is the only thing the grading core needs
//! from the outside world: somewhere to keep student aggregates between
//! requests. Adapters live in `infra_store`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_grading::{StudentRepository, StudentRepositoryExt};
//! use std::sync::Arc;
//!
//! pub struct GradeService {
//!     repository: Arc<dyn StudentRepository>,
//! }
//!
//! impl GradeService {
//!     pub async fn final_grade(&self, id: &StudentId) -> Result<f64, ApplicationError> {
//!         let student = self.repository.get_required(id).await?;
//!         Ok(student.calculate_final_grade()?)
//!     }
//! }
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PortError, StudentId};

use crate::student::Student;

/// Storage port for student aggregates
///
/// Implementations hand out copies: mutating a returned `Student` has no
/// effect until it is passed back to `save`.
#[async_trait]
pub trait StudentRepository: DomainPort + HealthCheckable {
    /// Finds a student by ID
    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, PortError>;

    /// Inserts or replaces a student keyed by its ID
    async fn save(&self, student: &Student) -> Result<(), PortError>;

    /// Removes a student; returns true if it existed
    async fn delete(&self, id: &StudentId) -> Result<bool, PortError>;

    /// Returns every stored student, ordered by ID
    async fn find_all(&self) -> Result<Vec<Student>, PortError>;

    /// Returns the number of stored students
    async fn count(&self) -> Result<usize, PortError> {
        Ok(self.find_all().await?.len())
    }
}

/// Extension trait with convenience lookups
#[async_trait]
pub trait StudentRepositoryExt: StudentRepository {
    /// Gets a student or returns `PortError::NotFound`
    async fn get_required(&self, id: &StudentId) -> Result<Student, PortError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| PortError::not_found("Student", id.as_str()))
    }

    /// Returns true if a student with this ID is stored
    async fn exists(&self, id: &StudentId) -> Result<bool, PortError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

impl<T: StudentRepository + ?Sized> StudentRepositoryExt for T {}
