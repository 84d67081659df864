//! The contact submission pipeline: form state, validation, and the visible
//! submission state machine around the relay dispatch.
//!
//! The machine is `Idle -> Submitting -> {Success, Error}`, with
//! `Success -> Idle` on a timed dismissal and `Error -> Submitting` only via
//! a fresh user-initiated submit. `Submitting` is never entered from
//! `Success`, and at most one dispatch is in flight at a time.

use std::fmt;
use std::time::Duration;

use crate::config::RelaySettings;
use crate::error::{SubmitError, ValidationError};
use crate::relay::{RelayRequest, RelayTransport};

/// How long the success banner stays up before the status returns to idle.
pub const SUCCESS_DISMISS: Duration = Duration::from_secs(5);

pub const NOTICE_SUCCESS: &str = "Message sent successfully! We'll get back to you soon.";
pub const NOTICE_FAILURE: &str = "Failed to send message. Please try again or email us directly.";
pub const NOTICE_NOT_CONFIGURED: &str = "Email service is not configured. Please contact support.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Message => "message",
        };
        f.write_str(name)
    }
}

/// Form fields. `phone` is the one optional field; the rest are mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField(ContactField::Name));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField(ContactField::Email));
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::MissingField(ContactField::Message));
        }
        Ok(())
    }

    fn clear(&mut self) {
        *self = ContactForm::default();
    }
}

/// Shallow shape check, not RFC parsing; the relay rejects anything the
/// provider cannot deliver to.
fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !value.contains(char::is_whitespace)
        && !domain.contains('@')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// User-facing notification capability (toasts in the web frontend, a
/// recording stub in tests). Text passed here is always generic copy; raw
/// failure detail never goes through this seam.
pub trait Notifier {
    fn notify(&self, kind: NoticeKind, text: &str);
}

#[derive(Debug, Clone, Default)]
pub struct ContactPipeline {
    form: ContactForm,
    status: SubmissionStatus,
}

impl ContactPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// The only mutation path for form fields.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.form.name = value,
            ContactField::Email => self.form.email = value,
            ContactField::Phone => self.form.phone = value,
            ContactField::Message => self.form.message = value,
        }
    }

    /// Starts a submission attempt. Returns the relay payload to dispatch,
    /// or `None` when the attempt cannot proceed:
    ///
    /// - already `Submitting` or showing `Success`: no-op, the sole guard
    ///   against concurrent dispatches;
    /// - validation failure: status unchanged, inline feedback only;
    /// - missing credentials: "not configured" notice, status forced back to
    ///   `Idle`, the relay is never invoked.
    pub fn begin_submit(
        &mut self,
        settings: &RelaySettings,
        notifier: &dyn Notifier,
    ) -> Option<RelayRequest> {
        match self.status {
            SubmissionStatus::Submitting | SubmissionStatus::Success => return None,
            SubmissionStatus::Idle | SubmissionStatus::Error => {}
        }

        if self.form.validate().is_err() {
            return None;
        }

        let credentials = match settings.credentials() {
            Ok(credentials) => credentials,
            Err(_) => {
                notifier.notify(NoticeKind::Error, NOTICE_NOT_CONFIGURED);
                self.status = SubmissionStatus::Idle;
                return None;
            }
        };

        let request = RelayRequest::new(credentials, &self.form, settings.recipient());
        self.status = SubmissionStatus::Submitting;
        Some(request)
    }

    /// Applies the relay outcome. Only meaningful while `Submitting`; a call
    /// in any other status is a no-op so a stale dispatch callback cannot
    /// corrupt the machine.
    pub fn complete_submit(
        &mut self,
        result: anyhow::Result<()>,
        notifier: &dyn Notifier,
    ) -> SubmissionStatus {
        if self.status != SubmissionStatus::Submitting {
            return self.status;
        }

        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                notifier.notify(NoticeKind::Success, NOTICE_SUCCESS);
                self.form.clear();
            }
            Err(source) => {
                self.status = SubmissionStatus::Error;
                notifier.notify(NoticeKind::Error, NOTICE_FAILURE);
                if cfg!(debug_assertions) {
                    let err = SubmitError::Dispatch(source);
                    tracing::error!(error = ?err, "contact dispatch failed");
                }
            }
        }
        self.status
    }

    /// `Success -> Idle`, the success banner's timed auto-dismiss.
    pub fn dismiss_success(&mut self) -> bool {
        if self.status != SubmissionStatus::Success {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }

    /// Full submit cycle against a transport: begin, dispatch exactly once,
    /// complete. The web page runs the same sequence with the dispatch
    /// awaited on the UI task so the `Submitting` state stays observable.
    pub async fn submit(
        &mut self,
        relay: &dyn RelayTransport,
        notifier: &dyn Notifier,
        settings: &RelaySettings,
    ) -> SubmissionStatus {
        let Some(request) = self.begin_submit(settings, notifier) else {
            return self.status;
        };
        let result = relay.send(&request).await;
        self.complete_submit(result, notifier)
    }
}

#[cfg(test)]
#[path = "tests/contact_tests.rs"]
mod tests;
