//! Contact form state machine.
//!
//! DESIGN
//! ======
//! Transitions here are pure. The contact section drives the transport and the
//! timers, and every async continuation carries the [`Ticket`] it was issued.
//! Each status transition bumps a generation counter, so a continuation whose
//! ticket is stale is dropped. That is how a pending success reset is
//! cancelled once a newer submission starts.
//!
//! ```text
//! Idle/Error/Success --begin_submit (invalid)--> Error
//! Idle/Error/Success --begin_submit (valid)----> Loading
//! Loading --finish_submit (Ok)--> Success --expire--> Idle
//! Loading --finish_submit (Err)-> Error
//! ```

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay between a successful submission and the automatic return to idle.
pub const RESET_DELAY: Duration = Duration::from_secs(3);

/// Delay used by the simulated delivery transport.
pub const SIMULATED_DELIVERY_DELAY: Duration = Duration::from_secs(2);

pub const SENDING_MESSAGE: &str = "Sending your message...";
pub const SUCCESS_MESSAGE: &str = "Your message was sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Failed to send your message. Please try again.";

// =============================================================================
// FORM FIELDS
// =============================================================================

/// The four inquiry fields. Also the JSON body of `POST /api/contact`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactForm {
    #[must_use]
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check the fields in display order; the first failure wins.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first empty or malformed field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(&self.name) {
            return Err(ValidationError::MissingName);
        }
        if is_blank(&self.email) {
            return Err(ValidationError::MissingEmail);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if is_blank(&self.subject) {
            return Err(ValidationError::MissingSubject);
        }
        if is_blank(&self.message) {
            return Err(ValidationError::MissingMessage);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a name.")]
    MissingName,
    #[error("Please enter an email.")]
    MissingEmail,
    #[error("Please enter a valid email format.")]
    InvalidEmail,
    #[error("Please enter a subject.")]
    MissingSubject,
    #[error("Please enter a message.")]
    MissingMessage,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Lenient `local@domain.tld` shape check.
///
/// Accepts exactly one `@`, no whitespace anywhere, a non-empty local part,
/// and a domain with a `.` that has at least one character on each side.
/// The value is not trimmed, so surrounding spaces fail the check.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let bytes = domain.as_bytes();
    bytes.len() >= 3 && bytes[1..bytes.len() - 1].contains(&b'.')
}

// =============================================================================
// STATUS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Identifies one transition of a [`ContactFormState`]. Only the most recent
/// ticket is honored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("contact delivery is only available in the browser")]
    Unavailable,
    #[error("network error: {0}")]
    Network(String),
    #[error("rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("server returned {0}")]
    Status(u16),
}

/// Form fields plus submission status for the contact section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    form: ContactForm,
    status: FormStatus,
    message: String,
    generation: u64,
}

impl ContactFormState {
    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Human-readable line shown next to the status; empty while idle.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// A submission is in flight; the submit control is disabled.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.status == FormStatus::Loading
    }

    /// Keystroke update. Does not touch the status.
    pub fn set_field(&mut self, field: ContactField, value: String) {
        self.form.set(field, value);
    }

    /// Validate and enter `Loading`.
    ///
    /// Returns the ticket and a snapshot of the payload to deliver. Returns
    /// `None` while another submission is in flight, or after recording a
    /// validation error.
    pub fn begin_submit(&mut self) -> Option<(Ticket, ContactForm)> {
        if self.is_busy() {
            return None;
        }
        if let Err(e) = self.form.validate() {
            self.transition(FormStatus::Error, e.to_string());
            return None;
        }
        let ticket = self.transition(FormStatus::Loading, SENDING_MESSAGE.to_owned());
        Some((ticket, self.form.clone()))
    }

    /// Apply the delivery outcome for `ticket`.
    ///
    /// On success the fields are cleared and a reset ticket is returned for
    /// [`ContactFormState::expire`]. Failures keep the fields for a retry.
    pub fn finish_submit(&mut self, ticket: Ticket, outcome: Result<(), SubmitError>) -> Option<Ticket> {
        if !self.is_current(ticket) || !self.is_busy() {
            return None;
        }
        match outcome {
            Ok(()) => {
                self.form.clear();
                Some(self.transition(FormStatus::Success, SUCCESS_MESSAGE.to_owned()))
            }
            Err(_) => {
                self.transition(FormStatus::Error, FAILURE_MESSAGE.to_owned());
                None
            }
        }
    }

    /// Deferred return to idle after a success. Ignored when any transition
    /// happened after `ticket` was issued. Returns whether the reset applied.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) || self.status != FormStatus::Success {
            return false;
        }
        self.transition(FormStatus::Idle, String::new());
        true
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    fn transition(&mut self, status: FormStatus, message: String) -> Ticket {
        self.generation += 1;
        self.status = status;
        self.message = message;
        Ticket(self.generation)
    }
}
