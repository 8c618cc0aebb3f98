//! In-memory Student Adapter
//!
//! Students are kept as `StudentSnapshot`s keyed by identifier, so pending
//! domain events never leak into storage and every read rebuilds a fresh
//! aggregate. Callers never share state with the store: mutating a returned
//! `Student` changes nothing until it is saved again.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use core_kernel::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError, StudentId,
};
use domain_grading::{Student, StudentRepository, StudentSnapshot};

/// Process-local implementation of `StudentRepository`
///
/// Cloning the repository yields a handle to the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStudentRepository {
    students: Arc<RwLock<HashMap<StudentId, StudentSnapshot>>>,
}

impl InMemoryStudentRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the repository, replacing duplicates by ID
    pub async fn with_students(students: Vec<Student>) -> Self {
        let repository = Self::new();
        {
            let mut map = repository.students.write().await;
            for student in students {
                map.insert(student.id().clone(), student.snapshot());
            }
        }
        repository
    }

    /// Removes every stored student
    #[instrument(skip(self))]
    pub async fn clear(&self) {
        let mut students = self.students.write().await;
        let removed = students.len();
        students.clear();
        debug!(removed, "Cleared student store");
    }

    fn restore(snapshot: &StudentSnapshot) -> Result<Student, PortError> {
        Student::try_from(snapshot.clone()).map_err(|e| {
            PortError::transformation(format!(
                "stored student {} is invalid: {}",
                snapshot.student_id, e
            ))
        })
    }
}

impl DomainPort for InMemoryStudentRepository {}

#[async_trait]
impl HealthCheckable for InMemoryStudentRepository {
    async fn health_check(&self) -> HealthCheckResult {
        let start = Instant::now();
        let stored = self.students.read().await.len();

        HealthCheckResult {
            adapter_id: "in-memory-student-store".to_string(),
            status: AdapterHealth::Healthy,
            latency_ms: start.elapsed().as_millis() as u64,
            message: Some(format!("{} students stored", stored)),
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    #[instrument(skip(self), fields(student_id = %id))]
    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, PortError> {
        let students = self.students.read().await;
        let found = students.get(id).map(Self::restore).transpose()?;
        debug!(found = found.is_some(), "Looked up student");
        Ok(found)
    }

    #[instrument(skip(self, student), fields(student_id = %student.id()))]
    async fn save(&self, student: &Student) -> Result<(), PortError> {
        let snapshot = student.snapshot();
        let evaluations = snapshot.evaluations.len();
        self.students
            .write()
            .await
            .insert(student.id().clone(), snapshot);
        debug!(evaluations, "Saved student");
        Ok(())
    }

    #[instrument(skip(self), fields(student_id = %id))]
    async fn delete(&self, id: &StudentId) -> Result<bool, PortError> {
        let removed = self.students.write().await.remove(id).is_some();
        debug!(removed, "Deleted student");
        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Student>, PortError> {
        let students = self.students.read().await;
        let mut snapshots: Vec<&StudentSnapshot> = students.values().collect();
        snapshots.sort_by(|a, b| a.student_id.cmp(&b.student_id));
        snapshots.into_iter().map(Self::restore).collect()
    }

    async fn count(&self) -> Result<usize, PortError> {
        Ok(self.students.read().await.len())
    }
}
