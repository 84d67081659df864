//! Relay configuration. A CSR wasm bundle has no runtime process
//! environment, so values are captured at compile time with `option_env!`;
//! the pipeline still reads them at submit time, never at startup.

use crate::error::SubmitError;

/// Recipient used when no override address is configured.
pub const DEFAULT_RECIPIENT: &str = "hello@kindlight.org";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelaySettings {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    pub recipient: Option<String>,
}

/// Borrowed view of the three mandatory credentials.
#[derive(Debug, Clone, Copy)]
pub struct RelayCredentials<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub public_key: &'a str,
}

impl RelaySettings {
    /// All three relay credentials, or `NotConfigured` if any is absent.
    pub fn credentials(&self) -> Result<RelayCredentials<'_>, SubmitError> {
        match (
            self.service_id.as_deref(),
            self.template_id.as_deref(),
            self.public_key.as_deref(),
        ) {
            (Some(service_id), Some(template_id), Some(public_key)) => Ok(RelayCredentials {
                service_id,
                template_id,
                public_key,
            }),
            _ => Err(SubmitError::NotConfigured),
        }
    }

    pub fn recipient(&self) -> &str {
        self.recipient.as_deref().unwrap_or(DEFAULT_RECIPIENT)
    }
}

pub fn load_settings() -> RelaySettings {
    RelaySettings {
        service_id: non_empty(option_env!("KINDLIGHT_EMAILJS_SERVICE_ID")),
        template_id: non_empty(option_env!("KINDLIGHT_EMAILJS_TEMPLATE_ID")),
        public_key: non_empty(option_env!("KINDLIGHT_EMAILJS_PUBLIC_KEY")),
        recipient: non_empty(option_env!("KINDLIGHT_CONTACT_EMAIL")),
    }
}

fn non_empty(value: Option<&'static str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}
