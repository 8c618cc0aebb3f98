//! Domain events for the student aggregate
//!
//! Events are recorded by every successful mutation and drained by the
//! application layer, which logs them as an audit trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::StudentId;

/// Domain events emitted by the Student aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GradingEvent {
    /// A student record was created
    StudentRegistered {
        student_id: StudentId,
        timestamp: DateTime<Utc>,
    },

    /// An evaluation was appended to the student's list
    EvaluationRegistered {
        student_id: StudentId,
        evaluation_number: usize,
        grade: f64,
        weight_percentage: f64,
        timestamp: DateTime<Utc>,
    },

    /// The attendance flag was replaced
    AttendancePolicyUpdated {
        student_id: StudentId,
        has_reached_minimum_classes: bool,
        timestamp: DateTime<Utc>,
    },

    /// The extra points flag was replaced
    ExtraPointsPolicyUpdated {
        student_id: StudentId,
        all_years_teachers: bool,
        timestamp: DateTime<Utc>,
    },
}

impl GradingEvent {
    /// Returns the student ID associated with this event
    pub fn student_id(&self) -> &StudentId {
        match self {
            GradingEvent::StudentRegistered { student_id, .. } => student_id,
            GradingEvent::EvaluationRegistered { student_id, .. } => student_id,
            GradingEvent::AttendancePolicyUpdated { student_id, .. } => student_id,
            GradingEvent::ExtraPointsPolicyUpdated { student_id, .. } => student_id,
        }
    }

    /// Returns the timestamp of this event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            GradingEvent::StudentRegistered { timestamp, .. } => *timestamp,
            GradingEvent::EvaluationRegistered { timestamp, .. } => *timestamp,
            GradingEvent::AttendancePolicyUpdated { timestamp, .. } => *timestamp,
            GradingEvent::ExtraPointsPolicyUpdated { timestamp, .. } => *timestamp,
        }
    }

    /// Returns the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            GradingEvent::StudentRegistered { .. } => "StudentRegistered",
            GradingEvent::EvaluationRegistered { .. } => "EvaluationRegistered",
            GradingEvent::AttendancePolicyUpdated { .. } => "AttendancePolicyUpdated",
            GradingEvent::ExtraPointsPolicyUpdated { .. } => "ExtraPointsPolicyUpdated",
        }
    }
}
