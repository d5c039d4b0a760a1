//! Contact form state machine.

use thiserror::Error;

use super::transport::{SubmissionTransport, TransportError};
use crate::domain::entities::{ContactField, ContactSubmission};
use crate::domain::{FieldErrors, validate_submission};

/// Form-level message shown when a validated submission could not be delivered.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// Fields are editable and the submit control is enabled.
    Editing,
    /// A request is in flight; the submit control is disabled.
    Submitting,
    /// Terminal until [`ContactForm::reset`].
    Submitted { acknowledgement: String },
}

/// Why a submit action did not complete.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{} field(s) need attention", .0.len())]
    Invalid(FieldErrors),

    #[error("a submission is already in progress")]
    InFlight,

    #[error("the form has already been submitted")]
    AlreadySubmitted,

    #[error("no submission is in progress")]
    NotSubmitting,

    #[error("Something went wrong. Please try again.")]
    Failed(#[source] TransportError),
}

/// A contact form instance.
///
/// Submitting is two-phase so a UI can render the `Submitting` state while the
/// request is in flight: [`begin_submit`](Self::begin_submit) validates and
/// hands out the payload, [`complete_submit`](Self::complete_submit) applies
/// the outcome. [`submit`](Self::submit) does both around one transport call.
#[derive(Debug, Clone)]
pub struct ContactForm {
    values: ContactSubmission,
    state: FormState,
    field_errors: FieldErrors,
    form_error: Option<String>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    /// A blank form in the `Editing` state.
    pub fn new() -> Self {
        Self {
            values: ContactSubmission::default(),
            state: FormState::Editing,
            field_errors: FieldErrors::new(),
            form_error: None,
        }
    }

    /// Updates a field. Clears that field's error.
    ///
    /// Returns `false` (and changes nothing) unless the form is `Editing`.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        if self.state != FormState::Editing {
            return false;
        }
        self.values.set(field, value);
        self.field_errors.remove(field);
        true
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &ContactSubmission {
        &self.values
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn acknowledgement(&self) -> Option<&str> {
        match &self.state {
            FormState::Submitted { acknowledgement } => Some(acknowledgement),
            _ => None,
        }
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.state == FormState::Editing
    }

    /// Validates the form and, if valid, moves to `Submitting`.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::InFlight`] / [`SubmitError::AlreadySubmitted`] when not `Editing`
    /// - [`SubmitError::Invalid`] when a field fails; errors are kept on the form
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, SubmitError> {
        match self.state {
            FormState::Editing => {}
            FormState::Submitting => return Err(SubmitError::InFlight),
            FormState::Submitted { .. } => return Err(SubmitError::AlreadySubmitted),
        }

        self.form_error = None;

        if let Err(errors) = validate_submission(&self.values) {
            self.field_errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }

        self.field_errors.clear();
        self.state = FormState::Submitting;
        Ok(self.values.clone())
    }

    /// Applies the transport outcome to a `Submitting` form.
    ///
    /// Success moves to `Submitted`. Field errors reported by the server return
    /// to `Editing` with those errors shown next to their fields; any other
    /// failure returns to `Editing` with [`GENERIC_FAILURE`] as the form error.
    /// Values are kept either way.
    pub fn complete_submit(
        &mut self,
        result: Result<String, TransportError>,
    ) -> Result<(), SubmitError> {
        if self.state != FormState::Submitting {
            return Err(SubmitError::NotSubmitting);
        }

        match result {
            Ok(acknowledgement) => {
                self.state = FormState::Submitted { acknowledgement };
                Ok(())
            }
            Err(TransportError::InvalidFields(errors)) => {
                self.state = FormState::Editing;
                self.field_errors = errors.clone();
                Err(SubmitError::Invalid(errors))
            }
            Err(e) => {
                self.state = FormState::Editing;
                self.form_error = Some(GENERIC_FAILURE.to_string());
                Err(SubmitError::Failed(e))
            }
        }
    }

    /// Validates and, if valid, sends the form through `transport` exactly once.
    pub async fn submit<T>(&mut self, transport: &T) -> Result<(), SubmitError>
    where
        T: SubmissionTransport + ?Sized,
    {
        let submission = self.begin_submit()?;
        let result = transport.submit(&submission).await;
        self.complete_submit(result)
    }

    /// Clears every field and error and returns to a blank `Editing` form.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
