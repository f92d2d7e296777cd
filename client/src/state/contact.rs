//! Contact form state: fields, per-field errors and submission status.
//!
//! At most one submission is in flight: [`ContactState::begin_submit`] hands
//! out a request only from a non-submitting state with valid fields.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::ContactRequest;

/// Shown under the form when the backend call fails for any reason.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again later.";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("static email pattern compiles"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    #[must_use]
    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub subject: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Subject => self.subject,
            Field::Message => self.message,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Subject => self.subject = None,
            Field::Message => self.message = None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.subject.is_none() && self.message.is_none()
    }
}

/// Check every field.
#[must_use]
pub fn validate(form: &ContactForm) -> FieldErrors {
    let required = |value: &str, msg: &'static str| value.trim().is_empty().then_some(msg);
    let email = if form.email.trim().is_empty() {
        Some("Email is required")
    } else if !EMAIL_PATTERN.is_match(&form.email) {
        Some("Email address is invalid")
    } else {
        None
    };
    FieldErrors {
        name: required(&form.name, "Name is required"),
        email,
        subject: required(&form.subject, "Subject is required"),
        message: required(&form.message, "Message is required"),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub status: SubmitStatus,
}

impl ContactState {
    /// Store a keystroke and drop that field's error.
    pub fn set_field(&mut self, field: Field, value: String) {
        *self.form.slot(field) = value;
        self.errors.clear(field);
    }

    /// Validate and, if clean, move to `Submitting` and return the body to post.
    ///
    /// Returns `None` when validation fails (errors are populated) or another
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactRequest> {
        if self.status == SubmitStatus::Submitting {
            return None;
        }
        self.errors = validate(&self.form);
        if !self.errors.is_empty() {
            return None;
        }
        self.status = SubmitStatus::Submitting;
        Some(self.form.to_request())
    }

    /// Apply the outcome of the in-flight submission.
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        if self.status != SubmitStatus::Submitting {
            return;
        }
        match outcome {
            Ok(()) => {
                self.form = ContactForm::default();
                self.status = SubmitStatus::Success;
            }
            Err(_) => self.status = SubmitStatus::Error,
        }
    }

    /// "Send another message": back to editing.
    pub fn reset_to_editing(&mut self) {
        self.status = SubmitStatus::Idle;
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }
}
