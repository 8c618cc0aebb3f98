//! Grading Application Layer
//!
//! Orchestrates the grading domain against a `StudentRepository`: each use
//! case loads a student, applies one domain operation and persists the
//! result. `GradeCalculator` bundles the use cases behind a single facade.
//!
//! # Example
//!
//! ```rust,ignore
//! use app_grading::GradeCalculator;
//! use infra_store::InMemoryStudentRepository;
//! use std::sync::Arc;
//!
//! let calculator = GradeCalculator::new(Arc::new(InMemoryStudentRepository::new()));
//! calculator.register_evaluation("U202012345", 16.0, 60.0).await?;
//! calculator.register_evaluation("U202012345", 14.0, 40.0).await?;
//! let grade = calculator.calculate_final_grade("U202012345").await?;
//! ```

pub mod dto;
pub mod error;
pub mod facade;
pub mod use_cases;

pub use error::ApplicationError;
pub use facade::GradeCalculator;
pub use use_cases::{
    CalculateFinalGradeUseCase, GetCalculationDetailUseCase, RegisterEvaluationUseCase,
    UpdateAttendanceUseCase, UpdateExtraPointsPolicyUseCase,
};
