//! Toast stack rendering queued notifications.
//!
//! Each toast dismisses itself after `TOAST_DURATION_MS` in the browser, or
//! on click of its close button.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};
#[cfg(feature = "csr")]
use crate::state::toast::TOAST_DURATION_MS;

/// Fixed-position container for all active toasts.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| view! { <ToastItem toast=toast/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let id = toast.id;

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DURATION_MS)).await;
        toasts.update(|t| t.dismiss(id));
    });

    let class = format!("toast {}", toast.level.css_modifier());
    view! {
        <div class=class role="alert">
            <span class="toast__message">{toast.message}</span>
            <button class="toast__close" on:click=move |_| toasts.update(|t| t.dismiss(id))>
                "×"
            </button>
        </div>
    }
}
