//! Thought message validation

use super::ValidationError;

/// Minimum length for a thought message, in characters
pub const MIN_MESSAGE_LEN: usize = 5;

/// Maximum length for a thought message, in characters
pub const MAX_MESSAGE_LEN: usize = 140;

/// Validated thought message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThoughtMessage(String);

impl ThoughtMessage {
    /// Validate a candidate message, collecting every violated rule.
    ///
    /// # Rules
    /// - Present and non-empty after trimming whitespace
    /// - Trimmed length within 5..=140 characters
    ///
    /// # Example
    /// ```
    /// use thoughts_server::models::ThoughtMessage;
    ///
    /// assert!(ThoughtMessage::new(Some("Hello world")).is_ok());
    /// assert!(ThoughtMessage::new(Some("hi")).is_err());
    /// assert!(ThoughtMessage::new(None).is_err());
    /// ```
    pub fn new(candidate: Option<&str>) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();
        let trimmed = candidate.map(str::trim).unwrap_or_default();

        if trimmed.is_empty() {
            errors.push(ValidationError::Required { field: "Message" });
        } else {
            // Character count, not byte length
            let len = trimmed.chars().count();
            if len < MIN_MESSAGE_LEN {
                errors.push(ValidationError::TooShort {
                    field: "Message",
                    min: MIN_MESSAGE_LEN,
                });
            }
            if len > MAX_MESSAGE_LEN {
                errors.push(ValidationError::TooLong {
                    field: "Message",
                    max: MAX_MESSAGE_LEN,
                });
            }
        }

        if errors.is_empty() {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(errors)
        }
    }

    /// Get the message as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ThoughtMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_messages() {
        assert!(ThoughtMessage::new(Some("Hello world")).is_ok());
        assert!(ThoughtMessage::new(Some("12345")).is_ok());
        assert!(ThoughtMessage::new(Some("  Trimmed message  ")).is_ok());
    }

    #[test]
    fn trims_whitespace() {
        let message = ThoughtMessage::new(Some("  hello there  ")).unwrap();
        assert_eq!(message.as_str(), "hello there");
    }

    #[test]
    fn rejects_missing() {
        let errors = ThoughtMessage::new(None).unwrap_err();
        assert_eq!(errors, vec![ValidationError::Required { field: "Message" }]);
    }

    #[test]
    fn rejects_empty_and_whitespace_only() {
        for candidate in ["", "   "] {
            let errors = ThoughtMessage::new(Some(candidate)).unwrap_err();
            assert_eq!(errors, vec![ValidationError::Required { field: "Message" }]);
        }
    }

    #[test]
    fn length_boundaries() {
        // 5 and 140 chars pass
        assert!(ThoughtMessage::new(Some("a".repeat(5).as_str())).is_ok());
        assert!(ThoughtMessage::new(Some("a".repeat(140).as_str())).is_ok());

        // 4 chars fails
        let errors = ThoughtMessage::new(Some("abcd")).unwrap_err();
        assert!(matches!(errors[0], ValidationError::TooShort { min: 5, .. }));

        // 141 chars fails
        let errors = ThoughtMessage::new(Some("a".repeat(141).as_str())).unwrap_err();
        assert!(matches!(errors[0], ValidationError::TooLong { max: 140, .. }));
    }

    #[test]
    fn too_short_after_trim() {
        // 6 raw chars, 4 after trimming
        let errors = ThoughtMessage::new(Some(" abcd ")).unwrap_err();
        assert!(matches!(errors[0], ValidationError::TooShort { .. }));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 5 multibyte chars (15 bytes) are within bounds
        assert!(ThoughtMessage::new(Some("ねこねこね")).is_ok());
    }
}
