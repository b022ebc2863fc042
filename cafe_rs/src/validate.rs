//! Contact and newsletter form rules.
//!
//! Values are trimmed before checking. Error messages are the exact text shown
//! under each field.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex literal"))
}

/// Loose `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Sender name.
    Name,
    /// Sender email.
    Email,
    /// Message body.
    Message,
}

impl Field {
    /// Element id of the field in the page markup.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    fn min_len(self) -> Option<usize> {
        match self {
            Field::Name => Some(3),
            Field::Message => Some(10),
            Field::Email => None,
        }
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Empty after trimming.
    #[error("Please enter your {}", .0.id())]
    Required(Field),
    /// Shorter than the field minimum.
    #[error("{} must be at least {min} characters", .field.title())]
    TooShort {
        /// Offending field.
        field: Field,
        /// Minimum length in characters.
        min: usize,
    },
    /// Not an email address.
    #[error("Please enter a valid email")]
    InvalidEmail,
}

impl FieldError {
    /// Field the error belongs to.
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field) | FieldError::TooShort { field, .. } => *field,
            FieldError::InvalidEmail => Field::Email,
        }
    }
}

/// Check one field value.
pub fn validate_field(field: Field, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(FieldError::Required(field));
    }
    if let Some(min) = field.min_len() {
        if value.chars().count() < min {
            return Err(FieldError::TooShort { field, min });
        }
    }
    if field == Field::Email && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// Message to show under a field while the user types, `None` when valid.
pub fn live_message(field: Field, raw: &str) -> Option<String> {
    validate_field(field, raw).err().map(|e| e.to_string())
}

/// Raw contact form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Name as typed.
    pub name: String,
    /// Email as typed.
    pub email: String,
    /// Message as typed.
    pub message: String,
}

/// A contact form that passed validation, trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactForm {
    /// Validate every field, collecting all errors in field order.
    pub fn validate(&self) -> Result<ContactSubmission, Vec<FieldError>> {
        let errors: Vec<FieldError> = [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ]
        .into_iter()
        .filter_map(|(field, value)| validate_field(field, value).err())
        .collect();

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

/// Validate a newsletter signup, returning the trimmed address.
pub fn validate_newsletter(raw: &str) -> Result<String, FieldError> {
    validate_field(Field::Email, raw)?;
    Ok(raw.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("ana@cafe.pt"));
        assert!(is_valid_email("a.b+c@sub.domain.io"));
        assert!(!is_valid_email("ana@cafe"));
        assert!(!is_valid_email("ana cafe@x.pt"));
        assert!(!is_valid_email("@cafe.pt"));
        assert!(!is_valid_email("ana@@cafe.pt"));
    }

    #[test]
    fn field_messages() {
        assert_eq!(
            validate_field(Field::Name, "   ").unwrap_err().to_string(),
            "Please enter your name"
        );
        assert_eq!(
            validate_field(Field::Name, " Al ").unwrap_err().to_string(),
            "Name must be at least 3 characters"
        );
        assert_eq!(
            validate_field(Field::Message, "too short").unwrap_err().to_string(),
            "Message must be at least 10 characters"
        );
        assert_eq!(
            validate_field(Field::Email, "nope").unwrap_err().to_string(),
            "Please enter a valid email"
        );
        assert!(validate_field(Field::Name, "Ana").is_ok());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(validate_field(Field::Name, "Zoë").is_ok());
    }

    #[test]
    fn form_collects_every_error() {
        let form = ContactForm {
            name: "".into(),
            email: "x@y".into(),
            message: "hi".into(),
        };
        let errors = form.validate().unwrap_err();
        let fields: Vec<Field> = errors.iter().map(FieldError::field).collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Message]);
    }

    #[test]
    fn valid_form_is_trimmed() {
        let form = ContactForm {
            name: "  Ana Lima ".into(),
            email: " ana@cafe.pt ".into(),
            message: " Do you roast on site? ".into(),
        };
        assert_eq!(
            form.validate().unwrap(),
            ContactSubmission {
                name: "Ana Lima".into(),
                email: "ana@cafe.pt".into(),
                message: "Do you roast on site?".into(),
            }
        );
    }

    #[test]
    fn newsletter() {
        assert_eq!(validate_newsletter(" ana@cafe.pt ").unwrap(), "ana@cafe.pt");
        assert_eq!(
            validate_newsletter("").unwrap_err(),
            FieldError::Required(Field::Email)
        );
        assert_eq!(validate_newsletter("ana").unwrap_err(), FieldError::InvalidEmail);
    }

    #[test]
    fn live_message_reports_from_the_first_keystroke() {
        assert_eq!(
            live_message(Field::Name, "A").as_deref(),
            Some("Name must be at least 3 characters")
        );
        assert_eq!(live_message(Field::Name, "Ana"), None);
        assert_eq!(
            live_message(Field::Email, "ana@").as_deref(),
            Some("Please enter a valid email")
        );
        assert_eq!(
            live_message(Field::Message, " ").as_deref(),
            Some("Please enter your message")
        );
    }
}
