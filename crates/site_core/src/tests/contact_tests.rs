use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;

use super::*;
use crate::config::{RelaySettings, DEFAULT_RECIPIENT};
use crate::error::ValidationError;
use crate::relay::{RelayRequest, RelayTransport};

struct StubRelay {
    fail_with: Option<String>,
    calls: Arc<Mutex<u32>>,
    requests: Arc<Mutex<Vec<RelayRequest>>>,
}

impl StubRelay {
    fn ok() -> Self {
        Self {
            fail_with: None,
            calls: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing(err: impl Into<String>) -> Self {
        let mut relay = Self::ok();
        relay.fail_with = Some(err.into());
        relay
    }

    fn call_count(&self) -> u32 {
        *self.calls.lock().expect("calls lock")
    }
}

#[async_trait(?Send)]
impl RelayTransport for StubRelay {
    async fn send(&self, request: &RelayRequest) -> anyhow::Result<()> {
        *self.calls.lock().expect("calls lock") += 1;
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());
        if let Some(err) = &self.fail_with {
            return Err(anyhow!(err.clone()));
        }
        Ok(())
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<(NoticeKind, String)>>,
}

impl RecordingNotifier {
    fn notices(&self) -> Vec<(NoticeKind, String)> {
        self.notices.lock().expect("notices lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, text: &str) {
        self.notices
            .lock()
            .expect("notices lock")
            .push((kind, text.to_string()));
    }
}

fn configured_settings() -> RelaySettings {
    RelaySettings {
        service_id: Some("svc_kindlight".into()),
        template_id: Some("tpl_contact".into()),
        public_key: Some("pk_test".into()),
        recipient: None,
    }
}

fn filled_pipeline() -> ContactPipeline {
    let mut pipeline = ContactPipeline::new();
    pipeline.set_field(ContactField::Name, "Ayaan");
    pipeline.set_field(ContactField::Email, "a@b.com");
    pipeline.set_field(ContactField::Message, "Hello");
    pipeline
}

#[tokio::test]
async fn successful_submit_clears_fields_and_notifies_once() {
    let mut pipeline = filled_pipeline();
    let relay = StubRelay::ok();
    let notifier = RecordingNotifier::default();

    let status = pipeline
        .submit(&relay, &notifier, &configured_settings())
        .await;

    assert_eq!(status, SubmissionStatus::Success);
    assert_eq!(pipeline.form(), &ContactForm::default());
    assert_eq!(relay.call_count(), 1);
    assert_eq!(
        notifier.notices(),
        vec![(NoticeKind::Success, NOTICE_SUCCESS.to_string())]
    );
}

#[tokio::test]
async fn failed_submit_preserves_fields_and_hides_detail() {
    let mut pipeline = filled_pipeline();
    let relay = StubRelay::failing("relay exploded: upstream 503");
    let notifier = RecordingNotifier::default();

    let status = pipeline
        .submit(&relay, &notifier, &configured_settings())
        .await;

    assert_eq!(status, SubmissionStatus::Error);
    assert_eq!(pipeline.form().name, "Ayaan");
    assert_eq!(pipeline.form().email, "a@b.com");
    assert_eq!(pipeline.form().message, "Hello");

    let notices = notifier.notices();
    assert_eq!(notices, vec![(NoticeKind::Error, NOTICE_FAILURE.to_string())]);
    // The raw failure text never reaches the user-visible layer.
    assert!(!notices[0].1.contains("503"));
    assert!(!notices[0].1.contains("exploded"));
}

#[tokio::test]
async fn missing_configuration_never_invokes_the_relay() {
    let mut pipeline = filled_pipeline();
    let relay = StubRelay::ok();
    let notifier = RecordingNotifier::default();
    let settings = RelaySettings::default();

    let status = pipeline.submit(&relay, &notifier, &settings).await;

    assert_eq!(status, SubmissionStatus::Idle);
    assert_eq!(relay.call_count(), 0);
    assert_eq!(
        notifier.notices(),
        vec![(NoticeKind::Error, NOTICE_NOT_CONFIGURED.to_string())]
    );
    // Fields stay put so the user can fix configuration and resubmit.
    assert_eq!(pipeline.form().name, "Ayaan");
}

#[test]
fn submit_while_submitting_is_a_no_op() {
    let mut pipeline = filled_pipeline();
    let notifier = RecordingNotifier::default();
    let settings = configured_settings();

    let first = pipeline.begin_submit(&settings, &notifier);
    assert!(first.is_some());
    assert_eq!(pipeline.status(), SubmissionStatus::Submitting);

    // A second user-initiated submit while one is in flight yields nothing.
    let second = pipeline.begin_submit(&settings, &notifier);
    assert!(second.is_none());
    assert_eq!(pipeline.status(), SubmissionStatus::Submitting);
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn validation_blocks_before_the_relay_is_reached() {
    let relay = StubRelay::ok();
    let notifier = RecordingNotifier::default();
    let settings = configured_settings();

    let mut missing_message = ContactPipeline::new();
    missing_message.set_field(ContactField::Name, "Ayaan");
    missing_message.set_field(ContactField::Email, "a@b.com");
    let status = missing_message.submit(&relay, &notifier, &settings).await;
    assert_eq!(status, SubmissionStatus::Idle);

    let mut bad_email = filled_pipeline();
    bad_email.set_field(ContactField::Email, "not-an-email");
    let status = bad_email.submit(&relay, &notifier, &settings).await;
    assert_eq!(status, SubmissionStatus::Idle);

    assert_eq!(relay.call_count(), 0);
    // Validation produces inline feedback only, never a notice.
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn error_status_allows_a_manual_resubmit() {
    let mut pipeline = filled_pipeline();
    let notifier = RecordingNotifier::default();
    let settings = configured_settings();

    let failing = StubRelay::failing("down");
    pipeline.submit(&failing, &notifier, &settings).await;
    assert_eq!(pipeline.status(), SubmissionStatus::Error);

    let healthy = StubRelay::ok();
    let status = pipeline.submit(&healthy, &notifier, &settings).await;
    assert_eq!(status, SubmissionStatus::Success);
    assert_eq!(healthy.call_count(), 1);
}

#[tokio::test]
async fn success_blocks_resubmission_until_dismissed() {
    let mut pipeline = filled_pipeline();
    let relay = StubRelay::ok();
    let notifier = RecordingNotifier::default();
    let settings = configured_settings();

    pipeline.submit(&relay, &notifier, &settings).await;
    assert_eq!(pipeline.status(), SubmissionStatus::Success);

    // While the success banner shows, a new submit cannot start.
    assert!(pipeline.begin_submit(&settings, &notifier).is_none());

    assert!(pipeline.dismiss_success());
    assert_eq!(pipeline.status(), SubmissionStatus::Idle);
    assert!(!pipeline.dismiss_success());

    // After dismissal a fresh, refilled submission goes through.
    pipeline.set_field(ContactField::Name, "Ayaan");
    pipeline.set_field(ContactField::Email, "a@b.com");
    pipeline.set_field(ContactField::Message, "Hello again");
    let status = pipeline.submit(&relay, &notifier, &settings).await;
    assert_eq!(status, SubmissionStatus::Success);
    assert_eq!(relay.call_count(), 2);
}

#[tokio::test]
async fn payload_maps_fields_and_falls_back_to_the_default_recipient() {
    let mut pipeline = filled_pipeline();
    pipeline.set_field(ContactField::Phone, "+91 88912 20997");
    let relay = StubRelay::ok();
    let notifier = RecordingNotifier::default();

    pipeline
        .submit(&relay, &notifier, &configured_settings())
        .await;

    let requests = relay.requests.lock().expect("requests lock");
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.service_id, "svc_kindlight");
    assert_eq!(request.template_id, "tpl_contact");
    assert_eq!(request.user_id, "pk_test");
    assert_eq!(request.template_params.from_name, "Ayaan");
    assert_eq!(request.template_params.from_email, "a@b.com");
    assert_eq!(request.template_params.phone, "+91 88912 20997");
    assert_eq!(request.template_params.message, "Hello");
    assert_eq!(request.template_params.to_email, DEFAULT_RECIPIENT);
}

#[tokio::test]
async fn configured_recipient_overrides_the_default() {
    let mut settings = configured_settings();
    settings.recipient = Some("team@kindlight.org".into());
    let mut pipeline = filled_pipeline();
    let relay = StubRelay::ok();
    let notifier = RecordingNotifier::default();

    pipeline.submit(&relay, &notifier, &settings).await;

    let requests = relay.requests.lock().expect("requests lock");
    assert_eq!(requests[0].template_params.to_email, "team@kindlight.org");
}

#[test]
fn phone_is_optional_for_validation() {
    let form = ContactForm {
        name: "Ayaan".into(),
        email: "a@b.com".into(),
        phone: String::new(),
        message: "Hello".into(),
    };
    assert!(form.validate().is_ok());
}

#[test]
fn validation_reports_the_first_problem() {
    let mut form = ContactForm::default();
    assert_eq!(
        form.validate(),
        Err(ValidationError::MissingField(ContactField::Name))
    );

    form.name = "Ayaan".into();
    assert_eq!(
        form.validate(),
        Err(ValidationError::MissingField(ContactField::Email))
    );

    form.email = "a@".into();
    assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));

    form.email = "a@b.com".into();
    assert_eq!(
        form.validate(),
        Err(ValidationError::MissingField(ContactField::Message))
    );
}

#[test]
fn stale_completion_outside_submitting_is_ignored() {
    let mut pipeline = filled_pipeline();
    let notifier = RecordingNotifier::default();

    let status = pipeline.complete_submit(Ok(()), &notifier);
    assert_eq!(status, SubmissionStatus::Idle);
    assert_eq!(pipeline.form().name, "Ayaan");
    assert!(notifier.notices().is_empty());
}
