//! Student aggregate root
//!
//! A student owns an ordered list of evaluations and two policy flags.
//! All mutation goes through methods that enforce the evaluation cap and
//! record a domain event. The final grade is a pure function of the state.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{within_tolerance, StudentId};

use crate::detail::{CalculationDetail, EvaluationBreakdown};
use crate::error::GradingError;
use crate::evaluation::Evaluation;
use crate::events::GradingEvent;
use crate::policies::{AttendancePolicy, ExtraPointsPolicy};
use crate::{MAX_EVALUATIONS_PER_STUDENT, TOTAL_WEIGHT_PERCENTAGE, WEIGHT_SUM_TOLERANCE};

/// The Student aggregate root
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StudentSnapshot", into = "StudentSnapshot")]
pub struct Student {
    id: StudentId,
    evaluations: Vec<Evaluation>,
    attendance_policy: AttendancePolicy,
    extra_points_policy: ExtraPointsPolicy,
    events: Vec<GradingEvent>,
}

impl Student {
    /// Creates a student with no evaluations
    ///
    /// # Errors
    ///
    /// Returns `GradingError::InvalidValue` if the identifier is empty or
    /// outside the allowed length once trimmed.
    pub fn create(
        student_id: impl AsRef<str>,
        has_reached_minimum_classes: bool,
        all_years_teachers: bool,
    ) -> Result<Self, GradingError> {
        let id = StudentId::new(student_id)?;
        Ok(Self::new(
            id,
            AttendancePolicy::new(has_reached_minimum_classes),
            ExtraPointsPolicy::new(all_years_teachers),
        ))
    }

    /// Creates a student from an already validated identifier
    pub fn new(
        id: StudentId,
        attendance_policy: AttendancePolicy,
        extra_points_policy: ExtraPointsPolicy,
    ) -> Self {
        let events = vec![GradingEvent::StudentRegistered {
            student_id: id.clone(),
            timestamp: Utc::now(),
        }];

        Self {
            id,
            evaluations: Vec::new(),
            attendance_policy,
            extra_points_policy,
            events,
        }
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Returns the student ID
    pub fn id(&self) -> &StudentId {
        &self.id
    }

    /// Evaluations in registration order
    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    /// Returns the number of registered evaluations
    pub fn evaluation_count(&self) -> usize {
        self.evaluations.len()
    }

    /// Returns the attendance policy
    pub fn attendance_policy(&self) -> AttendancePolicy {
        self.attendance_policy
    }

    /// Returns the extra points policy
    pub fn extra_points_policy(&self) -> ExtraPointsPolicy {
        self.extra_points_policy
    }

    /// Takes and clears pending domain events
    pub fn take_events(&mut self) -> Vec<GradingEvent> {
        std::mem::take(&mut self.events)
    }

    /// Exact sum of all evaluation weights
    pub fn total_weight(&self) -> Decimal {
        self.evaluations
            .iter()
            .map(|e| e.weight().as_decimal())
            .sum()
    }

    /// Returns true if a final grade can be calculated right now
    pub fn can_finalize(&self) -> bool {
        !self.evaluations.is_empty() && self.weights_balanced()
    }

    /// Returns true if extra points would be granted under the current policies
    pub fn can_receive_extra_points(&self) -> bool {
        self.attendance_policy.meets_minimum_requirement()
            && self.extra_points_policy.allows_extra_points()
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Appends an evaluation
    ///
    /// The cap is checked before the numbers, so an eleventh evaluation is
    /// rejected as `MaxEvaluationsExceeded` even if it is also out of range.
    pub fn add_evaluation(&mut self, grade: f64, weight_percentage: f64) -> Result<(), GradingError> {
        if self.evaluations.len() >= MAX_EVALUATIONS_PER_STUDENT {
            return Err(GradingError::MaxEvaluationsExceeded {
                limit: MAX_EVALUATIONS_PER_STUDENT,
            });
        }

        let evaluation = Evaluation::new(grade, weight_percentage)?;
        self.evaluations.push(evaluation);

        self.events.push(GradingEvent::EvaluationRegistered {
            student_id: self.id.clone(),
            evaluation_number: self.evaluations.len(),
            grade,
            weight_percentage,
            timestamp: Utc::now(),
        });

        Ok(())
    }

    /// Replaces the attendance policy
    pub fn update_attendance_policy(&mut self, has_reached_minimum_classes: bool) {
        self.attendance_policy = AttendancePolicy::new(has_reached_minimum_classes);

        self.events.push(GradingEvent::AttendancePolicyUpdated {
            student_id: self.id.clone(),
            has_reached_minimum_classes,
            timestamp: Utc::now(),
        });
    }

    /// Replaces the extra points policy
    pub fn update_extra_points_policy(&mut self, all_years_teachers: bool) {
        self.extra_points_policy = ExtraPointsPolicy::new(all_years_teachers);

        self.events.push(GradingEvent::ExtraPointsPolicyUpdated {
            student_id: self.id.clone(),
            all_years_teachers,
            timestamp: Utc::now(),
        });
    }

    // ========================================================================
    // Calculation
    // ========================================================================

    /// Calculates the weighted final grade
    ///
    /// Extra points are never added; eligibility only shows up in
    /// [`Student::calculation_detail`].
    ///
    /// # Errors
    ///
    /// - `NoEvaluations` if nothing has been registered
    /// - `InvalidWeightSum` if the weights are not 100% within 0.01
    pub fn calculate_final_grade(&self) -> Result<f64, GradingError> {
        if self.evaluations.is_empty() {
            return Err(GradingError::NoEvaluations);
        }

        self.validate_weight_sum()?;

        Ok(self.base_grade())
    }

    /// Explains how the final grade is obtained
    ///
    /// A student without evaluations yields an empty detail with zero
    /// grades. Otherwise the weight sum must be valid.
    pub fn calculation_detail(&self) -> Result<CalculationDetail, GradingError> {
        let final_grade = if self.evaluations.is_empty() {
            0.0
        } else {
            self.calculate_final_grade()?
        };

        let evaluations = self
            .evaluations
            .iter()
            .enumerate()
            .map(|(index, evaluation)| EvaluationBreakdown {
                evaluation_number: index + 1,
                grade: evaluation.grade().value(),
                weight: evaluation.weight().value(),
                contribution: evaluation.weighted_contribution(),
            })
            .collect();

        Ok(CalculationDetail {
            student_id: self.id.to_string(),
            evaluations,
            base_grade: self.base_grade(),
            has_reached_minimum_classes: self.attendance_policy.meets_minimum_requirement(),
            all_years_teachers: self.extra_points_policy.allows_extra_points(),
            can_receive_extra_points: self.can_receive_extra_points(),
            final_grade,
        })
    }

    fn base_grade(&self) -> f64 {
        self.evaluations
            .iter()
            .fold(0.0, |sum, e| sum + e.weighted_contribution())
    }

    fn weights_balanced(&self) -> bool {
        within_tolerance(self.total_weight(), TOTAL_WEIGHT_PERCENTAGE, WEIGHT_SUM_TOLERANCE)
    }

    fn validate_weight_sum(&self) -> Result<(), GradingError> {
        if self.weights_balanced() {
            Ok(())
        } else {
            Err(GradingError::InvalidWeightSum {
                actual: self.total_weight(),
                expected: TOTAL_WEIGHT_PERCENTAGE,
            })
        }
    }
}

/// Serializable state of a student, without pending events
///
/// Deserializing goes through `TryFrom`, so a snapshot with more than
/// `MAX_EVALUATIONS_PER_STUDENT` evaluations is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSnapshot {
    pub student_id: StudentId,
    pub evaluations: Vec<Evaluation>,
    pub has_reached_minimum_classes: bool,
    pub all_years_teachers: bool,
}

impl TryFrom<StudentSnapshot> for Student {
    type Error = GradingError;

    fn try_from(snapshot: StudentSnapshot) -> Result<Self, Self::Error> {
        if snapshot.evaluations.len() > MAX_EVALUATIONS_PER_STUDENT {
            return Err(GradingError::MaxEvaluationsExceeded {
                limit: MAX_EVALUATIONS_PER_STUDENT,
            });
        }

        Ok(Self {
            id: snapshot.student_id,
            evaluations: snapshot.evaluations,
            attendance_policy: AttendancePolicy::new(snapshot.has_reached_minimum_classes),
            extra_points_policy: ExtraPointsPolicy::new(snapshot.all_years_teachers),
            events: Vec::new(),
        })
    }
}

impl From<Student> for StudentSnapshot {
    fn from(student: Student) -> Self {
        Self {
            student_id: student.id,
            evaluations: student.evaluations,
            has_reached_minimum_classes: student.attendance_policy.value(),
            all_years_teachers: student.extra_points_policy.value(),
        }
    }
}

impl Student {
    /// Returns a serializable copy of the current state
    pub fn snapshot(&self) -> StudentSnapshot {
        StudentSnapshot {
            student_id: self.id.clone(),
            evaluations: self.evaluations.clone(),
            has_reached_minimum_classes: self.attendance_policy.value(),
            all_years_teachers: self.extra_points_policy.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_records_registration_event() {
        let mut student = Student::create("U202012345", false, false).unwrap();
        let events = student.take_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "StudentRegistered");
        assert!(student.take_events().is_empty());
    }

    #[test]
    fn test_total_weight_is_exact() {
        let mut student = Student::create("U202012345", false, false).unwrap();
        student.add_evaluation(10.0, 60.0).unwrap();
        student.add_evaluation(10.0, 40.01).unwrap();
        assert_eq!(student.total_weight(), dec!(100.01));
        assert!(student.can_finalize());
    }

    #[test]
    fn test_snapshot_drops_events() {
        let mut student = Student::create("U202012345", true, true).unwrap();
        student.add_evaluation(15.0, 100.0).unwrap();
        let restored = Student::try_from(student.snapshot()).unwrap();
        assert_eq!(restored.evaluation_count(), 1);
        assert!(restored.can_receive_extra_points());
        let mut restored = restored;
        assert!(restored.take_events().is_empty());
    }
}
