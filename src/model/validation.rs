use thiserror::Error;

use super::post::PostField;

/// Validation errors for post form fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
}

/// Validates that a required field holds a non-blank value.
///
/// Whitespace-only values count as blank. The value itself is never
/// modified; trimming applies to the check only.
pub fn validate_required(field: PostField, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(field.label()))
    } else {
        Ok(())
    }
}

/// Returns the displayable error message for a field value, or `None`
/// when the value is acceptable.
pub fn field_error(field: PostField, value: &str) -> Option<String> {
    validate_required(field, value).err().map(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    use super::*;

    // --- validate_required ---

    #[test]
    fn accepts_non_blank_value() {
        assert!(validate_required(PostField::Title, "hello").is_ok());
    }

    #[test]
    fn accepts_value_with_surrounding_whitespace() {
        assert!(validate_required(PostField::Content, "  hello world  ").is_ok());
    }

    #[test]
    fn rejects_empty_value() {
        assert_eq!(
            validate_required(PostField::Title, ""),
            Err(ValidationError::Required("Title"))
        );
    }

    #[test]
    fn rejects_whitespace_only_value() {
        assert_eq!(
            validate_required(PostField::Author, " \t\n "),
            Err(ValidationError::Required("Author"))
        );
    }

    #[test]
    fn messages_name_the_field() {
        let cases = [
            (PostField::Title, "Title is required"),
            (PostField::Content, "Content is required"),
            (PostField::Author, "Author is required"),
        ];
        for (field, expected) in cases {
            let err = validate_required(field, "").unwrap_err();
            assert_eq!(err.to_string(), expected);
        }
    }

    #[quickcheck]
    fn accepts_iff_trimmed_non_empty(value: String) -> bool {
        let accepted = validate_required(PostField::Title, &value).is_ok();
        accepted == !value.trim().is_empty()
    }

    #[quickcheck]
    fn rejection_message_is_exact(value: String) -> TestResult {
        if !value.trim().is_empty() {
            return TestResult::discard();
        }
        let err = validate_required(PostField::Author, &value).unwrap_err();
        TestResult::from_bool(err.to_string() == "Author is required")
    }

    // --- field_error ---

    #[test]
    fn field_error_is_none_when_valid() {
        assert_eq!(field_error(PostField::Title, "x"), None);
    }

    #[test]
    fn field_error_carries_message_when_blank() {
        assert_eq!(
            field_error(PostField::Content, "   "),
            Some("Content is required".to_string())
        );
    }
}
