use leptos::prelude::*;
use leptos_router::components::A;
use site_core::config::DEFAULT_RECIPIENT;
use site_core::routes::Route;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <span class="brand-name">"KINDLIGHT"</span>
                    <p>
                        "A global platform that connects people in need with people who \
                         want to help, bringing transparency, trust, and real impact to \
                         social giving."
                    </p>
                    <p class="footer-heart">"Making a difference, together"</p>
                </div>

                <div class="footer-links">
                    <h3>"Quick Links"</h3>
                    <ul>
                        {Route::ALL
                            .into_iter()
                            .map(|route| {
                                view! {
                                    <li>
                                        <A href=route.path()>{route.label()}</A>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer-contact">
                    <h3>"Reach Us"</h3>
                    <ul>
                        <li>
                            <a href=format!("mailto:{DEFAULT_RECIPIENT}")>{DEFAULT_RECIPIENT}</a>
                        </li>
                        <li>
                            <a href="tel:+918891220997">"+91 88912 20997"</a>
                        </li>
                        <li>"Serving globally, based in India"</li>
                    </ul>
                </div>
            </div>

            <p class="footer-note">
                "© 2026 KINDLIGHT. Every verified cause, every transparent rupee."
            </p>
        </footer>
    }
}
