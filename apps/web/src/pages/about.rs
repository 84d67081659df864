use leptos::prelude::*;
use leptos_router::components::A;
use site_core::metadata::{PageMetadata, SITE_URL};
use site_core::routes::Route;

use crate::components::PageSeo;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <PageSeo page=PageMetadata {
            title: Some("About Us".into()),
            description: Some(
                "The story behind KINDLIGHT: why we built a transparent bridge between \
                 people who need help and people who want to give it."
                    .into(),
            ),
            canonical_url: Some(format!("{SITE_URL}/about")),
            ..Default::default()
        } />

        <section class="page-hero">
            <h1>"Our Story"</h1>
            <p>"KINDLIGHT began with a simple question: why is it so hard to help well?"</p>
        </section>

        <section class="prose-section">
            <h2>"Where we started"</h2>
            <p>
                "We watched generous people hesitate to give because they could not see \
                 where their money went, and we watched people in genuine need go unheard \
                 because no one could vouch for them. The distance between those two \
                 groups is not a lack of kindness. It is a lack of trust."
            </p>
        </section>

        <section class="prose-section">
            <h2>"The problems we address"</h2>
            <ul class="problem-list">
                <li>"Donations that disappear into overhead with no visible impact."</li>
                <li>"Unverified appeals that make givers wary of every appeal."</li>
                <li>"Help that arrives too late because requests get lost in noise."</li>
                <li>"Communities with willing helpers and no way to find each other."</li>
            </ul>
        </section>

        <section class="prose-section">
            <h2>"What KINDLIGHT is"</h2>
            <p>
                "KINDLIGHT is a social-giving initiative that verifies every cause, \
                 connects givers directly with receivers, and keeps the whole journey \
                 visible. We are not a fund and we hold no money; we are the light that \
                 lets both sides see each other clearly."
            </p>
        </section>

        <section class="closing-cta">
            <h2>"Be part of the story"</h2>
            <A href=Route::Contact.path() attr:class="cta-button">
                "Reach Out"
            </A>
        </section>
    }
}
