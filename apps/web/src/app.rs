use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use site_core::intro::IntroGate;

use crate::components::{Footer, Header, IntroScreen};
use crate::notify::{ToastHost, ToastNotifier};
use crate::pages::{About, Contact, Home, NotFound, Platform, Vision};
use crate::session::BrowserSessionStore;

/// Root composition. The intro gate decides what mounts: until it reaches
/// `Done` only the intro surface exists; afterwards the chrome and routed
/// content mount in header, page, footer order. The gate starts at `Done`
/// when the session flag is already set, so returning visitors never see the
/// intro mount at all.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ToastNotifier::new());

    let gate = RwSignal::new(IntroGate::new(BrowserSessionStore));

    view! {
        <Show
            when=move || gate.with(|g| g.is_done())
            fallback=move || view! { <IntroScreen gate=gate /> }
        >
            <Router>
                <Header />
                <main class="page-content">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=Home />
                        <Route path=path!("/about") view=About />
                        <Route path=path!("/vision") view=Vision />
                        <Route path=path!("/platform") view=Platform />
                        <Route path=path!("/contact") view=Contact />
                    </Routes>
                </main>
                <Footer />
            </Router>
        </Show>
        <ToastHost />
    }
}
