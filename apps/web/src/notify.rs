//! Toast notifications. The contact pipeline only sees the core `Notifier`
//! trait; this module renders the notices as a fixed stack that auto-dismisses
//! on cancelable timers cleared when the host unmounts.

use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use site_core::contact::{NoticeKind, Notifier};

pub const TOAST_DISMISS: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Shared notifier handle, provided as context from the app root.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<Vec<Toast>>,
    timers: StoredValue<Vec<TimeoutHandle>, LocalStorage>,
    next_id: StoredValue<u64>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            timers: StoredValue::new_local(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn clear_timers(&self) {
        self.timers.update_value(|timers| {
            for handle in timers.drain(..) {
                handle.clear();
            }
        });
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: NoticeKind, text: &str) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                text: text.to_string(),
            })
        });

        let this = *self;
        match set_timeout_with_handle(move || this.dismiss(id), TOAST_DISMISS) {
            Ok(handle) => self.timers.update_value(|timers| timers.push(handle)),
            Err(err) => tracing::warn!(?err, "failed to arm toast dismiss timer"),
        }
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let notifier = expect_context::<ToastNotifier>();

    on_cleanup(move || notifier.clear_timers());

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || notifier.toasts.get()
                key=|toast| toast.id
                children=|toast: Toast| {
                    let class = match toast.kind {
                        NoticeKind::Success => "toast toast-success",
                        NoticeKind::Error => "toast toast-error",
                    };
                    view! { <div class=class>{toast.text}</div> }
                }
            />
        </div>
    }
}
