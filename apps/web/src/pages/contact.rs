use leptos::ev::SubmitEvent;
use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use leptos::task::spawn_local;
use site_core::config::{load_settings, DEFAULT_RECIPIENT};
use site_core::contact::{ContactField, ContactPipeline, SubmissionStatus, SUCCESS_DISMISS};
use site_core::metadata::{PageMetadata, SITE_URL};
use site_core::relay::{EmailJsTransport, RelayTransport};

use crate::components::PageSeo;
use crate::notify::ToastNotifier;

/// Contact page: channel cards plus the lead-capture form driven by the core
/// submission pipeline. The dispatch is awaited inside `spawn_local` so the
/// `Submitting` state stays observable; the success banner's auto-dismiss
/// timer is held as a cancelable handle and cleared on unmount.
#[component]
pub fn Contact() -> impl IntoView {
    let notifier = expect_context::<ToastNotifier>();
    let pipeline = RwSignal::new(ContactPipeline::new());
    let dismiss_timer = StoredValue::new_local(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(handle) = dismiss_timer.get_value() {
            handle.clear();
        }
    });

    let status = move || pipeline.with(|p| p.status());
    let name = move || pipeline.with(|p| p.form().name.clone());
    let email = move || pipeline.with(|p| p.form().email.clone());
    let phone = move || pipeline.with(|p| p.form().phone.clone());
    let message = move || pipeline.with(|p| p.form().message.clone());

    let edit = move |field: ContactField| {
        move |ev| pipeline.update(|p| p.set_field(field, event_target_value(&ev)))
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let settings = load_settings();
        let Some(request) = pipeline
            .try_update(|p| p.begin_submit(&settings, &notifier))
            .flatten()
        else {
            return;
        };

        spawn_local(async move {
            let transport = EmailJsTransport::new();
            let result = transport.send(&request).await;
            let outcome = pipeline.try_update(|p| p.complete_submit(result, &notifier));

            if outcome == Some(SubmissionStatus::Success) {
                // A replacement timer always clears its predecessor first.
                if let Some(handle) = dismiss_timer.get_value() {
                    handle.clear();
                }
                let armed = set_timeout_with_handle(
                    move || {
                        pipeline.update(|p| {
                            p.dismiss_success();
                        });
                    },
                    SUCCESS_DISMISS,
                );
                match armed {
                    Ok(handle) => dismiss_timer.set_value(Some(handle)),
                    Err(err) => tracing::warn!(?err, "failed to arm success dismiss timer"),
                }
            }
        });
    };

    view! {
        <PageSeo page=PageMetadata {
            title: Some("Contact Us".into()),
            description: Some(
                "Get in touch with KINDLIGHT. Whether you want to donate, volunteer, \
                 or partner with us, we'd love to hear from you."
                    .into(),
            ),
            canonical_url: Some(format!("{SITE_URL}/contact")),
            ..Default::default()
        } />

        <section class="page-hero">
            <h1>"Get in Touch"</h1>
            <p>"Have questions or want to get involved? We'd love to hear from you."</p>
        </section>

        <div class="contact-layout">
            <div class="contact-channels">
                <h2>"Let's Connect"</h2>
                <div class="channel-card">
                    <h3>"Email Us"</h3>
                    <a href=format!("mailto:{DEFAULT_RECIPIENT}")>{DEFAULT_RECIPIENT}</a>
                </div>
                <div class="channel-card">
                    <h3>"Call Us"</h3>
                    <a href="tel:+918891220997">"+91 88912 20997"</a>
                </div>
                <div class="channel-card">
                    <h3>"Location"</h3>
                    <p>"Serving globally, based in India"</p>
                </div>

                <div class="mission-card">
                    <h3>"Join Our Mission"</h3>
                    <p>
                        "Whether you're looking to donate, volunteer, or partner with us, \
                         we're excited to work together to create positive change."
                    </p>
                    <ul>
                        <li>"Fast response times"</li>
                        <li>"Transparent communication"</li>
                        <li>"Global support network"</li>
                    </ul>
                </div>
            </div>

            <form class="contact-form" on:submit=on_submit>
                <div class="form-field">
                    <label for="name">"Your Name"</label>
                    <input
                        id="name"
                        name="name"
                        type="text"
                        required
                        placeholder="Ayaan"
                        prop:value=name
                        on:input=edit(ContactField::Name)
                    />
                </div>

                <div class="form-field">
                    <label for="email">"Email Address"</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        required
                        placeholder="you@example.com"
                        prop:value=email
                        on:input=edit(ContactField::Email)
                    />
                </div>

                <div class="form-field">
                    <label for="phone">"Phone Number (Optional)"</label>
                    <input
                        id="phone"
                        name="phone"
                        type="tel"
                        placeholder="+1 (555) 000-0000"
                        prop:value=phone
                        on:input=edit(ContactField::Phone)
                    />
                </div>

                <div class="form-field">
                    <label for="message">"Your Message"</label>
                    <textarea
                        id="message"
                        name="message"
                        required
                        rows=6
                        placeholder="Tell us how you'd like to help or what questions you have..."
                        prop:value=message
                        on:input=edit(ContactField::Message)
                    ></textarea>
                </div>

                <button
                    type="submit"
                    class="cta-button submit-button"
                    prop:disabled=move || {
                        matches!(
                            status(),
                            SubmissionStatus::Submitting | SubmissionStatus::Success
                        )
                    }
                >
                    {move || match status() {
                        SubmissionStatus::Success => "Message Sent!",
                        SubmissionStatus::Submitting => "Sending...",
                        SubmissionStatus::Idle | SubmissionStatus::Error => "Send Message",
                    }}
                </button>

                <p class="form-note">"We typically respond within 24 hours"</p>
            </form>
        </div>
    }
}
