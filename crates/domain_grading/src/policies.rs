//! Academic policies attached to a student
//!
//! Both policies are plain flags recorded by the teacher. They carry no
//! validation of their own; any boolean is a legal policy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the student reached the minimum class attendance required by the
/// academic regulations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendancePolicy {
    has_reached_minimum_classes: bool,
}

impl AttendancePolicy {
    /// Creates an attendance policy
    pub fn new(has_reached_minimum_classes: bool) -> Self {
        Self { has_reached_minimum_classes }
    }

    /// Returns true if the attendance requirement is met
    pub fn meets_minimum_requirement(&self) -> bool {
        self.has_reached_minimum_classes
    }

    /// Returns the raw flag
    pub fn value(&self) -> bool {
        self.has_reached_minimum_classes
    }
}

impl fmt::Display for AttendancePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AttendancePolicy(hasReachedMinimumClasses={})",
            self.has_reached_minimum_classes
        )
    }
}

/// Whether the course's teachers collectively agreed to grant extra points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtraPointsPolicy {
    all_years_teachers: bool,
}

impl ExtraPointsPolicy {
    /// Creates an extra points policy
    pub fn new(all_years_teachers: bool) -> Self {
        Self { all_years_teachers }
    }

    /// Returns true if extra points may be granted
    pub fn allows_extra_points(&self) -> bool {
        self.all_years_teachers
    }

    /// Returns the raw flag
    pub fn value(&self) -> bool {
        self.all_years_teachers
    }
}

impl fmt::Display for ExtraPointsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExtraPointsPolicy(allYearsTeachers={})", self.all_years_teachers)
    }
}
