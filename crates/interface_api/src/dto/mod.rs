//! Request/Response DTOs

pub mod grading;
