use leptos::prelude::*;
use leptos_router::components::A;
use site_core::metadata::{PageMetadata, SITE_URL};
use site_core::routes::Route;

use crate::components::PageSeo;

#[component]
pub fn Platform() -> impl IntoView {
    view! {
        <PageSeo page=PageMetadata {
            title: Some("Our Platform".into()),
            description: Some(
                "How the KINDLIGHT platform works: who it serves, how causes are \
                 verified, and what happens from request to impact."
                    .into(),
            ),
            canonical_url: Some(format!("{SITE_URL}/platform")),
            ..Default::default()
        } />

        <section class="page-hero">
            <h1>"Our Platform"</h1>
            <p>"A clear path from a request for help to real, visible impact."</p>
        </section>

        <section class="feature-band">
            <h2>"What the platform provides"</h2>
            <div class="card-grid">
                <div class="feature-card">
                    <h3>"Cause Listings"</h3>
                    <p>"Verified requests for help, each with its story, its need, and \
                        its progress."</p>
                </div>
                <div class="feature-card">
                    <h3>"Giver Profiles"</h3>
                    <p>"Follow the causes you support and see exactly what changed."</p>
                </div>
                <div class="feature-card">
                    <h3>"Helper Network"</h3>
                    <p>"Volunteers and partners who carry help the last mile."</p>
                </div>
            </div>
        </section>

        <section class="prose-section">
            <h2>"Who it serves"</h2>
            <ul class="audience-list">
                <li>"People facing urgent, verifiable need."</li>
                <li>"Individual givers who want certainty about their impact."</li>
                <li>"Volunteers offering time and skills instead of money."</li>
                <li>"Organizations seeking trustworthy causes to back."</li>
            </ul>
        </section>

        <section class="prose-section">
            <h2>"How we verify"</h2>
            <ul class="policy-list">
                <li>"Every cause is reviewed by a human before it is listed."</li>
                <li>"Supporting documents are checked against the stated need."</li>
                <li>"Local partners confirm the situation on the ground."</li>
                <li>"Completed causes publish their outcome before closing."</li>
            </ul>
        </section>

        <section class="prose-section">
            <h2>"How it works"</h2>
            <ol class="steps-list">
                <li>"A request for help is submitted with its story and documents."</li>
                <li>"Verification confirms the need and publishes the cause."</li>
                <li>"Givers and helpers connect directly with the cause."</li>
                <li>"Progress and outcome stay visible until the cause closes."</li>
            </ol>
        </section>

        <section class="closing-cta">
            <h2>"See a cause through"</h2>
            <A href=Route::Contact.path() attr:class="cta-button">
                "Get Involved"
            </A>
        </section>
    }
}
