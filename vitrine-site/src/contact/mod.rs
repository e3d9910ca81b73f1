//! Contact form domain: field validation and submission.

pub mod form;
pub mod submit;

pub use form::{ContactForm, Field, FieldError, FormStatus};
pub use submit::{SubmissionRequest, SubmitError, submit};

use crate::messages::{ContactMessage, Effect};

/// Handle a contact-form message against the form state.
///
/// `endpoint` is the effective submission endpoint; `None` selects demo
/// mode. Returns the effects the host must execute.
pub fn update(
    form: &mut ContactForm,
    message: ContactMessage,
    endpoint: Option<&str>,
) -> Vec<Effect> {
    match message {
        ContactMessage::FieldEdited(field, value) => {
            form.set_value(field, value);
            // Re-validate eagerly only once a field has already failed, so
            // typing clears the error as soon as the value is acceptable.
            if form.errors.contains_key(&field) {
                form.validate_field(field);
            }
            Vec::new()
        }
        ContactMessage::FieldBlurred(field) => {
            form.validate_field(field);
            Vec::new()
        }
        ContactMessage::SubmitRequested => {
            if form.is_sending() {
                return Vec::new();
            }
            if !form.validate_all() {
                form.status = FormStatus::Error(
                    "Please correct the errors in the form.".to_string(),
                );
                return Vec::new();
            }
            form.status = FormStatus::Sending;
            vec![Effect::SubmitContact(SubmissionRequest {
                endpoint: endpoint.map(str::to_string),
                fields: form.field_pairs(),
            })]
        }
        ContactMessage::SubmitFinished(Ok(())) => {
            form.status = FormStatus::Success(
                "Thanks! Your message has been sent.".to_string(),
            );
            form.reset_fields();
            Vec::new()
        }
        ContactMessage::SubmitFinished(Err(reason)) => {
            log::warn!("contact: submission failed: {reason}");
            form.status = FormStatus::Error(
                "Something went wrong while sending. Please try again."
                    .to_string(),
            );
            Vec::new()
        }
    }
}
