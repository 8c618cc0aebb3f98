//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! grade calculator test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built students and evaluation sets
//! - `builders`: Builder for students with chosen policies and evaluations
//! - `store`: Seeded in-memory repositories
//! - `assertions`: Assertion helpers for grades and grading errors
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod store;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use store::*;
pub use assertions::*;
pub use generators::*;
