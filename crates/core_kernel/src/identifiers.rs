//! Strongly-typed identifiers for domain entities
//!
//! Student identifiers are free-form strings issued by the institution
//! (e.g. `U202012345`). Wrapping them in a validating newtype keeps
//! untrimmed or out-of-range keys from ever reaching the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Minimum length of a student identifier, after trimming
pub const MIN_STUDENT_ID_LENGTH: usize = 3;

/// Maximum length of a student identifier, after trimming
pub const MAX_STUDENT_ID_LENGTH: usize = 50;

/// Unique identifier of a student
///
/// The stored value is always the trimmed form of the input. Length is
/// measured in characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentId(String);

impl StudentId {
    /// Field name reported in validation errors
    pub const FIELD: &'static str = "StudentId";

    /// Creates a student identifier, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidValue` if the trimmed value is empty or its
    /// length falls outside `[MIN_STUDENT_ID_LENGTH, MAX_STUDENT_ID_LENGTH]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use core_kernel::StudentId;
    ///
    /// let id = StudentId::new("  U202012345 ").unwrap();
    /// assert_eq!(id.as_str(), "U202012345");
    /// ```
    pub fn new(value: impl AsRef<str>) -> Result<Self, CoreError> {
        let trimmed = value.as_ref().trim();

        if trimmed.is_empty() {
            return Err(CoreError::invalid_value(Self::FIELD, "cannot be empty"));
        }

        let length = trimmed.chars().count();
        if !(MIN_STUDENT_ID_LENGTH..=MAX_STUDENT_ID_LENGTH).contains(&length) {
            return Err(CoreError::invalid_value(
                Self::FIELD,
                format!(
                    "must be between {} and {} characters",
                    MIN_STUDENT_ID_LENGTH, MAX_STUDENT_ID_LENGTH
                ),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier and returns the owned string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for StudentId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for StudentId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for StudentId {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StudentId> for String {
    fn from(id: StudentId) -> String {
        id.0
    }
}

impl AsRef<str> for StudentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
