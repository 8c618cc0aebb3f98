//! Request handlers

pub mod grading;
pub mod health;
