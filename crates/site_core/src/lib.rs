//! Behavioral core of the Kindlight site: the session-gated intro sequence,
//! per-route document metadata, the declarative route table, and the contact
//! submission pipeline with its email-relay client. No UI framework types
//! appear here; the web frontend plugs in through the trait seams
//! ([`intro::SessionStore`], [`contact::Notifier`], [`relay::RelayTransport`]),
//! which is also what keeps every state machine unit-testable on the native
//! host.

pub mod config;
pub mod contact;
pub mod error;
pub mod intro;
pub mod metadata;
pub mod relay;
pub mod routes;

pub use contact::{
    ContactField, ContactForm, ContactPipeline, NoticeKind, Notifier, SubmissionStatus,
};
pub use error::{SubmitError, ValidationError};
pub use intro::{IntroGate, IntroPhase, SessionStore};
pub use metadata::{PageMetadata, RouteMetadata};
pub use routes::Route;
