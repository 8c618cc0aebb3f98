//! Pre-built Test Fixtures
//!
//! Consistent, predictable data for grading tests. The reference scenario
//! is two evaluations, (16, 60%) and (14, 40%), whose final grade is 15.2.

use domain_grading::Student;

/// Fixture for student identifiers
pub struct IdFixtures;

impl IdFixtures {
    /// A typical university code
    pub fn student_id() -> &'static str {
        "U202012345"
    }

    /// A second, distinct student
    pub fn other_student_id() -> &'static str {
        "U202054321"
    }

    /// Shortest accepted identifier
    pub fn shortest_id() -> &'static str {
        "abc"
    }

    /// Too short to be accepted
    pub fn too_short_id() -> &'static str {
        "ab"
    }
}

/// Fixture for (grade, weight_percentage) sets
pub struct EvaluationFixtures;

impl EvaluationFixtures {
    /// (16, 60) and (14, 40); final grade 15.2
    pub fn reference() -> Vec<(f64, f64)> {
        vec![(16.0, 60.0), (14.0, 40.0)]
    }

    /// Two perfect halves; final grade 20
    pub fn perfect() -> Vec<(f64, f64)> {
        vec![(20.0, 50.0), (20.0, 50.0)]
    }

    /// Weights summing to 80
    pub fn unbalanced() -> Vec<(f64, f64)> {
        vec![(15.0, 40.0), (15.0, 40.0)]
    }

    /// Ten evaluations at 10% each; fills the per-student cap
    pub fn full_load() -> Vec<(f64, f64)> {
        (0..10).map(|n| (10.0 + n as f64, 10.0)).collect()
    }
}

/// Fixture for complete students
pub struct StudentFixtures;

impl StudentFixtures {
    /// Student with no evaluations and both policies off
    pub fn fresh() -> Student {
        crate::builders::TestStudentBuilder::new().build()
    }

    /// Reference student: attendance met, teachers agreed, final grade 15.2
    pub fn reference() -> Student {
        crate::builders::TestStudentBuilder::new()
            .with_attendance(true)
            .with_extra_points(true)
            .with_evaluations(EvaluationFixtures::reference())
            .build()
    }

    /// Student whose weights sum to 80
    pub fn unbalanced() -> Student {
        crate::builders::TestStudentBuilder::new()
            .with_evaluations(EvaluationFixtures::unbalanced())
            .build()
    }
}
