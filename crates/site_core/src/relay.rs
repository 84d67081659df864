//! The email-relay collaborator: the wire payload and an HTTP transport for
//! the EmailJS REST dispatch endpoint. The pipeline treats the transport as
//! opaque; nothing beyond success/failure crosses back over the seam.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::Serialize;

use crate::config::RelayCredentials;
use crate::contact::ContactForm;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub message: String,
    pub to_email: String,
}

/// One relay dispatch, shaped for the EmailJS REST API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    /// EmailJS calls the public key `user_id` on the wire.
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl RelayRequest {
    pub fn new(credentials: RelayCredentials<'_>, form: &ContactForm, recipient: &str) -> Self {
        Self {
            service_id: credentials.service_id.to_string(),
            template_id: credentials.template_id.to_string(),
            user_id: credentials.public_key.to_string(),
            template_params: TemplateParams {
                from_name: form.name.clone(),
                from_email: form.email.clone(),
                phone: form.phone.clone(),
                message: form.message.clone(),
                to_email: recipient.to_string(),
            },
        }
    }
}

/// Dispatch seam. `?Send` because the wasm event loop is single-threaded.
#[async_trait(?Send)]
pub trait RelayTransport {
    async fn send(&self, request: &RelayRequest) -> Result<()>;
}

/// HTTP transport against the EmailJS endpoint. On wasm32 reqwest rides the
/// browser fetch API; natively it is a plain HTTP client, which is what the
/// test server exercises.
pub struct EmailJsTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl EmailJsTransport {
    pub fn new() -> Self {
        Self::with_endpoint(EMAILJS_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for EmailJsTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl RelayTransport for EmailJsTransport {
    async fn send(&self, request: &RelayRequest) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .context("relay request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("relay rejected the request with status {status}");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/relay_tests.rs"]
mod tests;
