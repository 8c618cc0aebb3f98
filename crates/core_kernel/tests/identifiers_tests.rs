//! Unit tests for the StudentId value object
//!
//! Tests cover trimming, length bounds, error reasons, conversions
//! and serde round trips through the validating constructor.

use core_kernel::{CoreError, StudentId, MAX_STUDENT_ID_LENGTH, MIN_STUDENT_ID_LENGTH};

fn reason_of(error: CoreError) -> String {
    match error {
        CoreError::InvalidValue { field, reason } => {
            assert_eq!(field, "StudentId");
            reason
        }
        other => panic!("Expected InvalidValue error, got {:?}", other),
    }
}

mod creation {
    use super::*;

    #[test]
    fn test_valid_identifier() {
        let id = StudentId::new("U202012345").unwrap();
        assert_eq!(id.as_str(), "U202012345");
    }

    #[test]
    fn test_trimmed_form_is_stored() {
        let id = StudentId::new("   U202012345   ").unwrap();
        assert_eq!(id.as_str(), "U202012345");
        assert_eq!(id, StudentId::new("U202012345").unwrap());
    }

    #[test]
    fn test_minimum_length_accepted() {
        let id = StudentId::new("a".repeat(MIN_STUDENT_ID_LENGTH)).unwrap();
        assert_eq!(id.as_str().len(), MIN_STUDENT_ID_LENGTH);
    }

    #[test]
    fn test_maximum_length_accepted() {
        let id = StudentId::new("a".repeat(MAX_STUDENT_ID_LENGTH)).unwrap();
        assert_eq!(id.as_str().len(), MAX_STUDENT_ID_LENGTH);
    }

    #[test]
    fn test_length_counts_characters() {
        assert!(StudentId::new("ñño").is_ok());
    }
}

mod rejection {
    use super::*;

    #[test]
    fn test_empty_string_rejected() {
        assert_eq!(reason_of(StudentId::new("").unwrap_err()), "cannot be empty");
    }

    #[test]
    fn test_whitespace_only_rejected() {
        assert_eq!(reason_of(StudentId::new("   \t ").unwrap_err()), "cannot be empty");
    }

    #[test]
    fn test_too_short_rejected() {
        assert_eq!(
            reason_of(StudentId::new("AB").unwrap_err()),
            "must be between 3 and 50 characters"
        );
    }

    #[test]
    fn test_too_short_after_trim_rejected() {
        assert!(StudentId::new("  AB  ").is_err());
    }

    #[test]
    fn test_too_long_rejected() {
        let long = "a".repeat(MAX_STUDENT_ID_LENGTH + 1);
        assert_eq!(
            reason_of(StudentId::new(long).unwrap_err()),
            "must be between 3 and 50 characters"
        );
    }
}

mod serde_support {
    use super::*;

    #[test]
    fn test_serializes_as_plain_string() {
        let id = StudentId::new("U202012345").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"U202012345\"");
    }

    #[test]
    fn test_deserialization_trims() {
        let id: StudentId = serde_json::from_str("\"  U202012345 \"").unwrap();
        assert_eq!(id.as_str(), "U202012345");
    }

    #[test]
    fn test_deserialization_validates() {
        let result: Result<StudentId, _> = serde_json::from_str("\"AB\"");
        assert!(result.is_err());
    }
}
