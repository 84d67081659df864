use leptos::prelude::*;
use leptos_router::components::A;
use site_core::metadata::PageMetadata;
use site_core::routes::Route;

use crate::components::PageSeo;

#[component]
pub fn Home() -> impl IntoView {
    // The home page uses the site-wide metadata defaults.
    view! {
        <PageSeo page=PageMetadata::default() />

        <section class="hero">
            <h1>"Light the way for someone today"</h1>
            <p class="hero-sub">
                "KINDLIGHT connects people in need with people ready to help, so every \
                 act of giving is transparent, trusted, and real."
            </p>
            <div class="hero-actions">
                <A href=Route::Platform.path() attr:class="cta-button">
                    "Explore the Platform"
                </A>
                <A href=Route::About.path() attr:class="cta-button cta-secondary">
                    "Our Story"
                </A>
            </div>
        </section>

        <section class="feature-band">
            <h2>"Why KINDLIGHT?"</h2>
            <div class="card-grid">
                <div class="feature-card">
                    <h3>"Verified Causes"</h3>
                    <p>"Every request for help is checked before it reaches a giver, so \
                        your support lands where it is needed."</p>
                </div>
                <div class="feature-card">
                    <h3>"Radical Transparency"</h3>
                    <p>"Follow your contribution from pledge to impact. No black boxes, \
                        no vanishing funds."</p>
                </div>
                <div class="feature-card">
                    <h3>"Direct Connection"</h3>
                    <p>"Givers and receivers meet as people, not as line items in a \
                        ledger."</p>
                </div>
            </div>
        </section>

        <section class="stats-band">
            <div class="stat">
                <span class="stat-number">"100%"</span>
                <span class="stat-label">"of causes verified before listing"</span>
            </div>
            <div class="stat">
                <span class="stat-number">"0"</span>
                <span class="stat-label">"platform fees on direct giving"</span>
            </div>
            <div class="stat">
                <span class="stat-number">"24h"</span>
                <span class="stat-label">"typical response to new requests"</span>
            </div>
        </section>

        <section class="closing-cta">
            <h2>"Ready to make a difference?"</h2>
            <p>"Join a community that believes helping should be simple and honest."</p>
            <A href=Route::Contact.path() attr:class="cta-button">
                "Get Involved"
            </A>
        </section>
    }
}
