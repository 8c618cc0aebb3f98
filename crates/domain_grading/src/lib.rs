//! Grading Domain
//!
//! This crate implements the rules that turn a student's weighted evaluations
//! into a final grade, following Domain-Driven Design (DDD) and Hexagonal
//! Architecture principles.
//!
//! # Architecture
//!
//! The domain layer is infrastructure-agnostic, containing only business logic:
//! - **Aggregates**: Student is the aggregate root
//! - **Entities**: Evaluation (a grade paired with its weight)
//! - **Value Objects**: Grade, WeightPercentage, AttendancePolicy, ExtraPointsPolicy
//! - **Domain Events**: StudentRegistered, EvaluationRegistered, policy updates
//! - **Ports**: StudentRepository
//!
//! # Final Grade
//!
//! ```text
//! final = Σ grade_i × weight_i / 100      (Σ weight_i = 100 ± 0.01)
//! ```
//!
//! Extra points eligibility (attendance AND teacher agreement) is reported in
//! the calculation detail but is never added to the grade.
//!
//! # Example
//!
//! ```rust
//! use domain_grading::Student;
//!
//! let mut student = Student::create("U202012345", true, false).unwrap();
//! student.add_evaluation(16.0, 60.0).unwrap();
//! student.add_evaluation(14.0, 40.0).unwrap();
//!
//! let final_grade = student.calculate_final_grade().unwrap();
//! assert!((final_grade - 15.2).abs() < 1e-9);
//! ```

pub mod grade;
pub mod weight;
pub mod policies;
pub mod evaluation;
pub mod student;
pub mod detail;
pub mod events;
pub mod error;
pub mod ports;

pub use grade::{Grade, format_grade};
pub use weight::WeightPercentage;
pub use policies::{AttendancePolicy, ExtraPointsPolicy};
pub use evaluation::Evaluation;
pub use student::{Student, StudentSnapshot};
pub use detail::{CalculationDetail, EvaluationBreakdown};
pub use events::GradingEvent;
pub use error::GradingError;
pub use ports::{StudentRepository, StudentRepositoryExt};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Maximum number of evaluations a single student may hold
pub const MAX_EVALUATIONS_PER_STUDENT: usize = 10;

/// Maximum number of users the service is sized for
pub const MAX_CONCURRENT_USERS: usize = 50;

/// Latency budget for a final grade calculation, in milliseconds
pub const MAX_CALCULATION_TIME_MS: u64 = 300;

/// Lowest valid grade
pub const MIN_GRADE: f64 = 0.0;

/// Highest valid grade
pub const MAX_GRADE: f64 = 20.0;

/// Lowest valid evaluation weight, in percent
pub const MIN_EVALUATION_WEIGHT_PERCENTAGE: f64 = 0.0;

/// Highest valid evaluation weight, in percent
pub const MAX_EVALUATION_WEIGHT_PERCENTAGE: f64 = 100.0;

/// Sum that all evaluation weights of a student must reach
pub const TOTAL_WEIGHT_PERCENTAGE: Decimal = dec!(100);

/// Absolute tolerance when comparing the weight sum against the total
pub const WEIGHT_SUM_TOLERANCE: Decimal = dec!(0.01);

/// Decimal places used when rounding and displaying grades
pub const GRADE_DECIMAL_PRECISION: u32 = 2;
