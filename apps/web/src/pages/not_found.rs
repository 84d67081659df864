use leptos::prelude::*;
use leptos_router::components::A;
use site_core::metadata::PageMetadata;
use site_core::routes::Route;

use crate::components::PageSeo;

/// Fallback view for any path outside the route table.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <PageSeo page=PageMetadata {
            title: Some("Page Not Found".into()),
            description: Some("The page you are looking for does not exist.".into()),
            ..Default::default()
        } />

        <section class="page-hero not-found">
            <h1>"404"</h1>
            <p>"This page wandered off. The light is back on the home page."</p>
            <A href=Route::Home.path() attr:class="cta-button">
                "Return Home"
            </A>
        </section>
    }
}
