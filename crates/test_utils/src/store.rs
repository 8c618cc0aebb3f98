//! Store Test Helpers
//!
//! Seeded in-memory repositories for application and HTTP tests.

use std::sync::Arc;

use domain_grading::{Student, StudentRepository};
use infra_store::InMemoryStudentRepository;

/// Returns an empty repository behind the port trait
pub fn empty_repository() -> Arc<dyn StudentRepository> {
    Arc::new(InMemoryStudentRepository::new())
}

/// Returns a repository pre-populated with `students`
pub async fn seeded_repository(students: Vec<Student>) -> Arc<InMemoryStudentRepository> {
    Arc::new(InMemoryStudentRepository::with_students(students).await)
}
