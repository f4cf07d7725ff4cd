//! Contact-form validation.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("name, email, and message are all required")]
    MissingFields,
}

/// Trimmed contact-form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    /// Capture raw input values, trimming surrounding whitespace.
    pub fn from_fields(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// All three fields must be present; there is nothing to send to, so
    /// no deeper address validation happens here.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_submission_passes() {
        let s = Submission::from_fields("Ada", "ada@example.com", "hello");
        assert_eq!(s.validate(), Ok(()));
    }

    #[test]
    fn whitespace_only_fields_are_missing() {
        let s = Submission::from_fields("  ", "ada@example.com", "hello");
        assert_eq!(s.validate(), Err(FormError::MissingFields));
        let s = Submission::from_fields("Ada", "ada@example.com", "\n\t");
        assert_eq!(s.validate(), Err(FormError::MissingFields));
    }

    #[test]
    fn fields_are_trimmed_on_capture() {
        let s = Submission::from_fields(" Ada ", " a@b.c ", " hi ");
        assert_eq!(s.name, "Ada");
        assert_eq!(s.email, "a@b.c");
        assert_eq!(s.message, "hi");
    }
}
