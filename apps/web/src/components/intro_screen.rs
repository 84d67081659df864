use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use site_core::intro::{IntroGate, IntroPhase, INTRO_DURATION, INTRO_FADE_OUT};

use crate::session::BrowserSessionStore;

/// The one-time intro surface. Arms the deadline timer on mount; when it
/// fires the gate starts fading, and a second timer completes the gate after
/// the fade-out window. Both handles are cleared on unmount so neither
/// callback can run against a torn-down surface.
#[component]
pub fn IntroScreen(gate: RwSignal<IntroGate<BrowserSessionStore>>) -> impl IntoView {
    let deadline = StoredValue::new_local(None::<TimeoutHandle>);
    let fade_out = StoredValue::new_local(None::<TimeoutHandle>);

    let armed = set_timeout_with_handle(
        move || {
            gate.update(|g| {
                g.begin_fade();
            });
            match set_timeout_with_handle(
                move || {
                    gate.update(|g| {
                        g.complete();
                    });
                },
                INTRO_FADE_OUT,
            ) {
                Ok(handle) => fade_out.set_value(Some(handle)),
                Err(err) => tracing::warn!(?err, "failed to arm intro fade-out timer"),
            }
        },
        INTRO_DURATION,
    );
    match armed {
        Ok(handle) => deadline.set_value(Some(handle)),
        Err(err) => tracing::warn!(?err, "failed to arm intro deadline timer"),
    }

    on_cleanup(move || {
        if let Some(handle) = deadline.get_value() {
            handle.clear();
        }
        if let Some(handle) = fade_out.get_value() {
            handle.clear();
        }
    });

    let fading = move || gate.with(|g| g.phase() == IntroPhase::Fading);

    view! {
        <div class="intro-screen" class=("intro-fading", fading)>
            <div class="intro-content">
                <h1 class="intro-wordmark">"KINDLIGHT"</h1>
                <div class="intro-rule"></div>
                <blockquote class="intro-quote">
                    "\"I am not handsome but I can give my hand to someone who needs help. \
                     Because beauty is required in the heart not in the face.\""
                </blockquote>
                <p class="intro-attribution">"— Dr APJ Abdul Kalam"</p>
                <div class="intro-pulse" aria-hidden="true">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
            </div>
        </div>
    }
}
