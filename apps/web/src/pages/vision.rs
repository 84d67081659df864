use leptos::prelude::*;
use site_core::metadata::{PageMetadata, SITE_URL};

use crate::components::PageSeo;

#[component]
pub fn Vision() -> impl IntoView {
    view! {
        <PageSeo page=PageMetadata {
            title: Some("Vision & Mission".into()),
            description: Some(
                "KINDLIGHT's vision of a world where no call for help goes unheard, and \
                 the mission and values that get us there."
                    .into(),
            ),
            canonical_url: Some(format!("{SITE_URL}/vision")),
            ..Default::default()
        } />

        <section class="page-hero">
            <h1>"Vision & Mission"</h1>
            <p>"What we are building toward, and how we hold ourselves to it."</p>
        </section>

        <div class="panel-pair">
            <section class="panel">
                <h2>"Our Vision"</h2>
                <p>
                    "A world where no genuine call for help goes unheard, and no act of \
                     generosity goes unseen."
                </p>
            </section>
            <section class="panel">
                <h2>"Our Mission"</h2>
                <p>
                    "To connect people in need with people who want to help through a \
                     platform built on verification, transparency, and human dignity."
                </p>
            </section>
        </div>

        <section class="values-section">
            <h2>"Core Values"</h2>
            <div class="card-grid">
                <div class="value-card">
                    <h3>"Trust"</h3>
                    <p>"Earned through verification, kept through openness."</p>
                </div>
                <div class="value-card">
                    <h3>"Dignity"</h3>
                    <p>"Asking for help takes courage. We honor it."</p>
                </div>
                <div class="value-card">
                    <h3>"Transparency"</h3>
                    <p>"Every step of every act of giving stays visible."</p>
                </div>
                <div class="value-card">
                    <h3>"Community"</h3>
                    <p>"Giving is a relationship, not a transaction."</p>
                </div>
            </div>
        </section>

        <section class="prose-section">
            <h2>"Our Goals"</h2>
            <ol class="goal-list">
                <li>"Verify and list causes within 24 hours of a request."</li>
                <li>"Keep direct giving free of platform fees, always."</li>
                <li>"Publish the outcome of every completed cause."</li>
                <li>"Grow local helper networks in every region we serve."</li>
            </ol>
        </section>
    }
}
