//! Tests for core_kernel error types

use core_kernel::error::CoreError;

#[test]
fn test_core_error_invalid_value() {
    let error = CoreError::invalid_value("StudentId", "cannot be empty");

    match error {
        CoreError::InvalidValue { field, reason } => {
            assert_eq!(field, "StudentId");
            assert_eq!(reason, "cannot be empty");
        }
        _ => panic!("Expected InvalidValue error"),
    }
}

#[test]
fn test_core_error_precision() {
    let error = CoreError::precision("Grade", "value is not finite");

    assert!(matches!(error, CoreError::Precision { .. }));
    assert_eq!(error.field(), "Grade");
}

#[test]
fn test_core_error_display() {
    let error = CoreError::invalid_value("StudentId", "cannot be empty");
    assert_eq!(error.to_string(), "Invalid StudentId: cannot be empty");
}
