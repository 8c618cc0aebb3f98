//! Storage Infrastructure Layer
//!
//! Adapters implementing the `StudentRepository` port defined in
//! `domain_grading`. Records live only for the lifetime of the process.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::InMemoryStudentRepository;
//! use domain_grading::StudentRepository;
//! use std::sync::Arc;
//!
//! let repository: Arc<dyn StudentRepository> = Arc::new(InMemoryStudentRepository::new());
//! ```

pub mod memory;

pub use memory::InMemoryStudentRepository;
