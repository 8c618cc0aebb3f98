//! In-memory Student Store Tests
//!
//! Exercises the `StudentRepository` contract against
//! `InMemoryStudentRepository`: upsert-by-id, isolation of returned copies,
//! deletion, listing order and clearing.

use core_kernel::{HealthCheckable, StudentId};
use domain_grading::{Student, StudentRepository, StudentRepositoryExt};
use infra_store::InMemoryStudentRepository;
use std::sync::Arc;

fn student(id: &str) -> Student {
    Student::create(id, false, false).unwrap()
}

fn id(value: &str) -> StudentId {
    StudentId::new(value).unwrap()
}

// ============================================================================
// LOOKUP AND SAVE
// ============================================================================

#[tokio::test]
async fn missing_student_is_none() {
    let repository = InMemoryStudentRepository::new();
    assert!(repository.find_by_id(&id("U000")).await.unwrap().is_none());
    assert!(!repository.exists(&id("U000")).await.unwrap());
}

#[tokio::test]
async fn save_then_find_returns_equal_state() {
    let repository = InMemoryStudentRepository::new();
    let mut original = Student::create("U202012345", true, false).unwrap();
    original.add_evaluation(16.0, 60.0).unwrap();
    original.add_evaluation(14.0, 40.0).unwrap();

    repository.save(&original).await.unwrap();
    let found = repository.find_by_id(original.id()).await.unwrap().unwrap();

    assert_eq!(found.snapshot(), original.snapshot());
}

#[tokio::test]
async fn save_replaces_existing_record() {
    let repository = InMemoryStudentRepository::new();
    let mut record = student("U202012345");
    repository.save(&record).await.unwrap();

    record.add_evaluation(12.0, 100.0).unwrap();
    repository.save(&record).await.unwrap();

    assert_eq!(repository.count().await.unwrap(), 1);
    let found = repository.get_required(record.id()).await.unwrap();
    assert_eq!(found.evaluation_count(), 1);
}

#[tokio::test]
async fn returned_copies_are_isolated() {
    let repository = InMemoryStudentRepository::new();
    repository.save(&student("U202012345")).await.unwrap();

    let mut copy = repository.get_required(&id("U202012345")).await.unwrap();
    copy.add_evaluation(20.0, 100.0).unwrap();

    let stored = repository.get_required(&id("U202012345")).await.unwrap();
    assert_eq!(stored.evaluation_count(), 0);
}

#[tokio::test]
async fn restored_students_have_no_pending_events() {
    let repository = InMemoryStudentRepository::new();
    repository.save(&student("U202012345")).await.unwrap();

    let mut found = repository.get_required(&id("U202012345")).await.unwrap();
    assert!(found.take_events().is_empty());
}

#[tokio::test]
async fn get_required_reports_not_found() {
    let repository = InMemoryStudentRepository::new();
    let err = repository.get_required(&id("U404")).await.unwrap_err();
    assert!(err.is_not_found());
}

// ============================================================================
// DELETE, LIST AND CLEAR
// ============================================================================

#[tokio::test]
async fn delete_reports_whether_record_existed() {
    let repository = InMemoryStudentRepository::with_students(vec![student("U001")]).await;

    assert!(repository.delete(&id("U001")).await.unwrap());
    assert!(!repository.delete(&id("U001")).await.unwrap());
    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn find_all_is_ordered_by_id() {
    let repository = InMemoryStudentRepository::with_students(vec![
        student("U003"),
        student("U001"),
        student("U002"),
    ])
    .await;

    let ids: Vec<String> = repository
        .find_all()
        .await
        .unwrap()
        .iter()
        .map(|s| s.id().to_string())
        .collect();
    assert_eq!(ids, vec!["U001", "U002", "U003"]);
}

#[tokio::test]
async fn clear_removes_everything() {
    let repository =
        InMemoryStudentRepository::with_students(vec![student("U001"), student("U002")]).await;

    repository.clear().await;
    assert_eq!(repository.count().await.unwrap(), 0);
    assert!(repository.find_all().await.unwrap().is_empty());
}

// ============================================================================
// CONCURRENCY
// ============================================================================

#[tokio::test]
async fn concurrent_saves_of_distinct_students() {
    let repository = Arc::new(InMemoryStudentRepository::new());

    let handles: Vec<_> = (0..50)
        .map(|n| {
            let repository = Arc::clone(&repository);
            tokio::spawn(async move {
                let record = student(&format!("U{:04}", n));
                repository.save(&record).await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(repository.count().await.unwrap(), 50);
}

#[tokio::test]
async fn usable_through_trait_object() {
    let repository: Arc<dyn StudentRepository> = Arc::new(InMemoryStudentRepository::new());
    repository.save(&student("U202012345")).await.unwrap();

    assert!(repository.exists(&id("U202012345")).await.unwrap());
    assert_eq!(repository.health_check().await.adapter_id, "in-memory-student-store");
}
