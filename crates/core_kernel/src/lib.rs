//! Core Kernel - Foundational types and utilities for the grade calculator
//!
//! This crate provides the building blocks shared by every other crate:
//! - Strongly-typed, self-validating student identifiers
//! - Decimal precision helpers for exact comparisons and rounding
//! - Port infrastructure for the hexagonal architecture (errors, health checks)

pub mod identifiers;
pub mod precision;
pub mod ports;
pub mod error;

pub use identifiers::{StudentId, MIN_STUDENT_ID_LENGTH, MAX_STUDENT_ID_LENGTH};
pub use precision::{to_decimal, round_half_away_from_zero, within_tolerance};
pub use ports::{PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth};
pub use error::CoreError;
