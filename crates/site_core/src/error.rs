use thiserror::Error;

use crate::contact::ContactField;

/// Local form validation failures. These never produce a notification; the
/// contact page surfaces them as inline field feedback only.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field is empty: {0}")]
    MissingField(ContactField),
    #[error("email address is not valid")]
    InvalidEmail,
}

/// Failures of a single submission attempt.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Relay credentials are missing from the build configuration. Fatal for
    /// this attempt, never retried automatically.
    #[error("email relay credentials are not configured")]
    NotConfigured,
    /// The relay call itself failed. The wrapped detail is for developer
    /// diagnostics only and must never reach the user-visible layer.
    #[error("relay dispatch failed")]
    Dispatch(#[source] anyhow::Error),
}
