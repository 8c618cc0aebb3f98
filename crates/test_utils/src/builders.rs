//! Test Data Builders
//!
//! Builds students with only the relevant fields specified and defaults for
//! everything else.

use domain_grading::Student;

use crate::fixtures::IdFixtures;

/// Builder for constructing test students
pub struct TestStudentBuilder {
    student_id: String,
    has_reached_minimum_classes: bool,
    all_years_teachers: bool,
    evaluations: Vec<(f64, f64)>,
    keep_events: bool,
}

impl Default for TestStudentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestStudentBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            student_id: IdFixtures::student_id().to_string(),
            has_reached_minimum_classes: false,
            all_years_teachers: false,
            evaluations: Vec::new(),
            keep_events: false,
        }
    }

    /// Sets the student ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.student_id = id.into();
        self
    }

    /// Sets the attendance flag
    pub fn with_attendance(mut self, has_reached_minimum_classes: bool) -> Self {
        self.has_reached_minimum_classes = has_reached_minimum_classes;
        self
    }

    /// Sets the extra points flag
    pub fn with_extra_points(mut self, all_years_teachers: bool) -> Self {
        self.all_years_teachers = all_years_teachers;
        self
    }

    /// Appends one evaluation
    pub fn with_evaluation(mut self, grade: f64, weight_percentage: f64) -> Self {
        self.evaluations.push((grade, weight_percentage));
        self
    }

    /// Appends several evaluations in order
    pub fn with_evaluations(mut self, evaluations: impl IntoIterator<Item = (f64, f64)>) -> Self {
        self.evaluations.extend(evaluations);
        self
    }

    /// Leaves the recorded domain events in place
    pub fn keeping_events(mut self) -> Self {
        self.keep_events = true;
        self
    }

    /// Builds the student
    ///
    /// # Panics
    ///
    /// Panics if the ID or any evaluation is invalid; use the domain API
    /// directly to test failures.
    pub fn build(self) -> Student {
        let mut student = Student::create(
            &self.student_id,
            self.has_reached_minimum_classes,
            self.all_years_teachers,
        )
        .unwrap_or_else(|e| panic!("invalid test student id {:?}: {}", self.student_id, e));

        for (grade, weight) in self.evaluations {
            student
                .add_evaluation(grade, weight)
                .unwrap_or_else(|e| panic!("invalid test evaluation ({}, {}): {}", grade, weight, e));
        }

        if !self.keep_events {
            student.take_events();
        }

        student
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let student = TestStudentBuilder::new().build();
        assert_eq!(student.id().as_str(), IdFixtures::student_id());
        assert_eq!(student.evaluation_count(), 0);
        assert!(!student.attendance_policy().value());
    }

    #[test]
    fn test_builder_drops_events_by_default() {
        let mut student = TestStudentBuilder::new().with_evaluation(10.0, 100.0).build();
        assert!(student.take_events().is_empty());

        let mut student = TestStudentBuilder::new()
            .with_evaluation(10.0, 100.0)
            .keeping_events()
            .build();
        assert_eq!(student.take_events().len(), 2);
    }
}
