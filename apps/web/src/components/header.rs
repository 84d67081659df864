use leptos::prelude::*;
use leptos_router::components::A;
use site_core::routes::Route;

/// Fixed navigation chrome. Links come from the core route table so the
/// header can never drift from the router. The mobile menu is the only local
/// state; it closes on navigation.
#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="site-header">
            <nav class="nav-bar">
                <A href="/" attr:class="brand">
                    <span class="brand-mark" aria-hidden="true">"✦"</span>
                    <span class="brand-text">
                        <span class="brand-name">"KINDLIGHT"</span>
                        <span class="brand-tagline">"A social-giving initiative"</span>
                    </span>
                </A>

                <ul class="nav-links">
                    {Route::ALL
                        .into_iter()
                        .map(|route| {
                            view! {
                                <li>
                                    <A href=route.path() attr:class="nav-link">
                                        {route.label()}
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <A href=Route::Contact.path() attr:class="cta-button nav-cta">
                    "Get Involved"
                </A>

                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </nav>

            <Show when=move || menu_open.get()>
                <ul class="mobile-nav">
                    {Route::ALL
                        .into_iter()
                        .map(|route| {
                            view! {
                                <li on:click=move |_| set_menu_open.set(false)>
                                    <A href=route.path() attr:class="nav-link">
                                        {route.label()}
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </header>
    }
}
