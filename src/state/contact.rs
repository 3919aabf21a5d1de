//! Contact form submission lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The contact form posts to a hosted form relay. This module owns the whole
//! attempt: local validation, one outbound request, mapping the response to
//! a `SubmissionOutcome`, and the notification the user sees.
//!
//! DESIGN
//! ======
//! The controller talks to the page only through `FormSurface`, and to the
//! network only through `RelayTransport`, so the flow runs natively in tests
//! with fabricated fields and canned responses.
//!
//! The submitting state is held by `SubmittingGuard`; dropping it (normal
//! return or a dropped future) re-enables the submit control.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::cell::Cell;

use crate::net::relay::{GENERIC_REJECTION, RelayResponse, RelayTransport};
use crate::state::notification::Notification;

pub const SUCCESS_TEXT: &str = "Message sent successfully! Thank you.";
pub const NETWORK_FAILURE_TEXT: &str = "A network error occurred. Please check your connection.";

/// Current values of the four contact form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.subject.is_empty() && self.message.is_empty()
    }
}

/// Why a form failed local validation. `Display` is the user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingField,
    #[error("Please enter a valid email address.")]
    MalformedEmail,
}

/// Check that every field is filled and the email is shaped `local@domain.tld`.
///
/// # Errors
///
/// `MissingField` when any field is empty (checked first), otherwise
/// `MalformedEmail` when the address shape is wrong.
pub fn validate(fields: &ContactFields) -> Result<(), ValidationError> {
    let filled = [&fields.name, &fields.email, &fields.subject, &fields.message]
        .iter()
        .all(|value| !value.is_empty());
    if !filled {
        return Err(ValidationError::MissingField);
    }
    if !is_valid_email(&fields.email) {
        return Err(ValidationError::MalformedEmail);
    }
    Ok(())
}

/// Matches `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
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
    // Needs a dot with at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// A validated submission bound to its relay endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSubmission {
    fields: ContactFields,
    endpoint: String,
}

impl FormSubmission {
    /// Build a submission from fields that pass `validate`.
    ///
    /// # Errors
    ///
    /// Returns the validation failure when the fields are incomplete or the
    /// email is malformed.
    pub fn new(fields: ContactFields, endpoint: impl Into<String>) -> Result<Self, ValidationError> {
        validate(&fields)?;
        Ok(Self { fields, endpoint: endpoint.into() })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// Field name/value pairs in form order.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("name", self.fields.name.as_str()),
            ("email", self.fields.email.as_str()),
            ("subject", self.fields.subject.as_str()),
            ("message", self.fields.message.as_str()),
        ]
    }
}

/// Result of one submission attempt that reached the network step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Rejected(Vec<String>),
    NetworkFailure,
}

impl SubmissionOutcome {
    /// Map a relay response: 2xx is success, anything else a rejection with
    /// the relay's messages or the generic fallback.
    #[must_use]
    pub fn from_response(resp: &RelayResponse) -> Self {
        if resp.is_success() {
            return Self::Success;
        }
        Self::Rejected(
            resp.error_messages()
                .unwrap_or_else(|| vec![GENERIC_REJECTION.to_owned()]),
        )
    }
}

/// The notification shown for `outcome`.
#[must_use]
pub fn notify(outcome: &SubmissionOutcome) -> Notification {
    match outcome {
        SubmissionOutcome::Success => Notification::success(SUCCESS_TEXT),
        SubmissionOutcome::Rejected(messages) => Notification::error(messages.join(", ")),
        SubmissionOutcome::NetworkFailure => Notification::error(NETWORK_FAILURE_TEXT),
    }
}

/// Per-form submission phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    InFlight,
}

/// What the controller needs from the rendered form.
pub trait FormSurface {
    /// Snapshot of the current field values.
    fn read_fields(&self) -> ContactFields;
    /// Disable the submit control and show its busy label, or restore both.
    fn set_submitting(&self, submitting: bool);
    /// Clear every field.
    fn reset_fields(&self);
    fn show_notification(&self, notification: Notification);
}

/// How a submit action ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitReport {
    /// Refused locally; nothing was sent.
    Invalid(ValidationError),
    /// A request is already in flight; the action was ignored.
    Busy,
    Completed(SubmissionOutcome),
}

/// Owns the contact form's submission lifecycle for one form instance.
pub struct ContactController<T> {
    endpoint: String,
    transport: T,
    phase: Cell<SubmitPhase>,
}

impl<T: RelayTransport> ContactController<T> {
    /// Returns `None` when the page supplies no endpoint, which disables the
    /// contact feature.
    pub fn new(endpoint: Option<&str>, transport: T) -> Option<Self> {
        let endpoint = endpoint.map(str::trim).filter(|e| !e.is_empty())?;
        Some(Self {
            endpoint: endpoint.to_owned(),
            transport,
            phase: Cell::new(SubmitPhase::Idle),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase.get()
    }

    /// Handle one submit action against `surface`.
    pub async fn submit<S: FormSurface>(&self, surface: &S) -> SubmitReport {
        if self.phase.get() != SubmitPhase::Idle {
            log::debug!("contact submit ignored: request already in flight");
            return SubmitReport::Busy;
        }

        self.phase.set(SubmitPhase::Validating);
        let submission = match FormSubmission::new(surface.read_fields(), self.endpoint.as_str()) {
            Ok(submission) => submission,
            Err(err) => {
                self.phase.set(SubmitPhase::Idle);
                surface.show_notification(Notification::error(err.to_string()));
                return SubmitReport::Invalid(err);
            }
        };

        let guard = SubmittingGuard::acquire(surface, &self.phase);
        let outcome = self.send(&submission).await;
        if outcome == SubmissionOutcome::Success {
            surface.reset_fields();
        }
        surface.show_notification(notify(&outcome));
        drop(guard);
        SubmitReport::Completed(outcome)
    }

    /// Send one request and map the result. Transport errors are logged in
    /// full and reported as `NetworkFailure`.
    pub async fn send(&self, submission: &FormSubmission) -> SubmissionOutcome {
        match self.transport.post_form(submission).await {
            Ok(resp) => {
                let outcome = SubmissionOutcome::from_response(&resp);
                if outcome == SubmissionOutcome::Success {
                    log::info!("contact form relayed: status={}", resp.status);
                } else {
                    log::warn!("relay rejected contact form: status={} body={}", resp.status, resp.body);
                }
                outcome
            }
            Err(e) => {
                log::error!("contact form submission error: endpoint={} error={e}", submission.endpoint());
                SubmissionOutcome::NetworkFailure
            }
        }
    }
}

/// Holds the in-flight state; releasing it re-enables the submit control.
struct SubmittingGuard<'a, S: FormSurface> {
    surface: &'a S,
    phase: &'a Cell<SubmitPhase>,
}

impl<'a, S: FormSurface> SubmittingGuard<'a, S> {
    fn acquire(surface: &'a S, phase: &'a Cell<SubmitPhase>) -> Self {
        phase.set(SubmitPhase::InFlight);
        surface.set_submitting(true);
        Self { surface, phase }
    }
}

impl<S: FormSurface> Drop for SubmittingGuard<'_, S> {
    fn drop(&mut self) {
        self.phase.set(SubmitPhase::Idle);
        self.surface.set_submitting(false);
    }
}
