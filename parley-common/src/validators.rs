//! Field validation
//!
//! The service imposes exactly one rule on usernames, passwords, and message
//! text: they must be non-empty. There is deliberately no length cap or
//! character-set restriction on any field; the framing layer's line limit is
//! the only size bound.

/// Validation error for request fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The field is empty
    Empty,
}

/// Validate a username
pub fn validate_username(username: &str) -> Result<(), FieldError> {
    if username.is_empty() {
        return Err(FieldError::Empty);
    }
    Ok(())
}

/// Validate a password
pub fn validate_password(password: &str) -> Result<(), FieldError> {
    if password.is_empty() {
        return Err(FieldError::Empty);
    }
    Ok(())
}

/// Validate message text
pub fn validate_text(text: &str) -> Result<(), FieldError> {
    if text.is_empty() {
        return Err(FieldError::Empty);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_fields() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_password("pw1").is_ok());
        assert!(validate_text("hello").is_ok());
        // Unicode is fine
        assert!(validate_username("Пользователь").is_ok());
        assert!(validate_text("привет").is_ok());
        // So is whitespace, punctuation, anything at all
        assert!(validate_username(" ").is_ok());
        assert!(validate_password("p@s\tsword").is_ok());
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(validate_username(""), Err(FieldError::Empty));
        assert_eq!(validate_password(""), Err(FieldError::Empty));
        assert_eq!(validate_text(""), Err(FieldError::Empty));
    }
}
