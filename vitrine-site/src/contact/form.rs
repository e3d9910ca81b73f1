//! Contact form state and field validation.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\s+\-()]{8,}$").expect("phone pattern"));

/// The form's input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl Field {
    fn form_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("this field is required")]
    Required,
    #[error("must be at least {min} characters")]
    TooShort { min: usize },
    #[error("enter a valid email address")]
    InvalidEmail,
    #[error("enter a valid phone number")]
    InvalidPhone,
}

/// Submission status shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success(String),
    Error(String),
}

/// Contact form state.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    /// Failed fields and why; a field absent here currently validates.
    pub errors: HashMap<Field, FieldError>,
    pub status: FormStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Validate one field, updating the error map. Returns whether it passed.
    pub fn validate_field(&mut self, field: Field) -> bool {
        match check(field, self.value(field)) {
            Ok(()) => {
                self.errors.remove(&field);
                true
            }
            Err(error) => {
                self.errors.insert(field, error);
                false
            }
        }
    }

    /// Validate every field. Returns whether the whole form passed.
    pub fn validate_all(&mut self) -> bool {
        let mut valid = true;
        for field in [
            Field::Name,
            Field::Email,
            Field::Phone,
            Field::Subject,
            Field::Message,
        ] {
            valid &= self.validate_field(field);
        }
        valid
    }

    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }

    /// Field values as wire pairs, plus the submission metadata the
    /// endpoint uses for threading replies.
    pub fn field_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = [
            Field::Name,
            Field::Email,
            Field::Phone,
            Field::Subject,
            Field::Message,
        ]
        .into_iter()
        .map(|field| {
            (field.form_name().to_string(), self.value(field).to_string())
        })
        .collect();
        pairs.push((
            "_subject".to_string(),
            "New message from the showcase site".to_string(),
        ));
        pairs.push(("_replyto".to_string(), self.email.clone()));
        pairs
    }

    /// Clear the inputs after a successful send, keeping the status.
    pub fn reset_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.subject.clear();
        self.message.clear();
        self.errors.clear();
    }
}

fn check(field: Field, value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    match field {
        Field::Name => {
            if trimmed.is_empty() {
                Err(FieldError::Required)
            } else if trimmed.chars().count() < 2 {
                Err(FieldError::TooShort { min: 2 })
            } else {
                Ok(())
            }
        }
        Field::Email => {
            if trimmed.is_empty() {
                Err(FieldError::Required)
            } else if !EMAIL_RE.is_match(trimmed) {
                Err(FieldError::InvalidEmail)
            } else {
                Ok(())
            }
        }
        // Optional: only checked when something was entered.
        Field::Phone => {
            if !trimmed.is_empty() && !PHONE_RE.is_match(trimmed) {
                Err(FieldError::InvalidPhone)
            } else {
                Ok(())
            }
        }
        Field::Subject => Ok(()),
        Field::Message => {
            if trimmed.is_empty() {
                Err(FieldError::Required)
            } else if trimmed.chars().count() < 10 {
                Err(FieldError::TooShort { min: 10 })
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.name = "Ada Lovelace".to_string();
        form.email = "ada@example.test".to_string();
        form.message = "I would like to talk about a commission.".to_string();
        form
    }

    #[test]
    fn a_filled_form_validates() {
        let mut form = filled_form();
        assert!(form.validate_all());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn required_fields_reject_whitespace() {
        let mut form = ContactForm::new();
        form.name = "   ".to_string();
        assert!(!form.validate_field(Field::Name));
        assert_eq!(form.errors.get(&Field::Name), Some(&FieldError::Required));
    }

    #[test]
    fn short_name_and_message_are_rejected() {
        let mut form = filled_form();
        form.name = "A".to_string();
        form.message = "too short".to_string();
        assert!(!form.validate_all());
        assert_eq!(
            form.errors.get(&Field::Name),
            Some(&FieldError::TooShort { min: 2 })
        );
        assert_eq!(
            form.errors.get(&Field::Message),
            Some(&FieldError::TooShort { min: 10 })
        );
    }

    #[test]
    fn email_shape_is_enforced() {
        let mut form = filled_form();
        for bad in ["plainaddress", "a @b.c", "nodomain@", "@nouser.test"] {
            form.email = bad.to_string();
            assert!(!form.validate_field(Field::Email), "accepted {bad:?}");
        }
        form.email = "user@domain.test".to_string();
        assert!(form.validate_field(Field::Email));
    }

    #[test]
    fn phone_is_optional_but_checked_when_present() {
        let mut form = filled_form();
        assert!(form.validate_field(Field::Phone));

        form.phone = "not-a-number".to_string();
        assert!(!form.validate_field(Field::Phone));

        form.phone = "+33 1 23 45 67 89".to_string();
        assert!(form.validate_field(Field::Phone));
    }

    #[test]
    fn field_pairs_carry_reply_metadata() {
        let form = filled_form();
        let pairs = form.field_pairs();
        assert!(pairs.contains(&(
            "_replyto".to_string(),
            "ada@example.test".to_string()
        )));
        assert!(pairs.iter().any(|(name, _)| name == "_subject"));
    }

    #[test]
    fn reset_clears_inputs_and_errors() {
        let mut form = filled_form();
        form.phone = "bad".to_string();
        form.validate_all();
        form.reset_fields();
        assert!(form.name.is_empty());
        assert!(form.errors.is_empty());
    }
}
