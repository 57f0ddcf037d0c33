//! Toast stack rendered in the top-right corner.

#[cfg(test)]
#[path = "toast_host_test.rs"]
mod toast_host_test;

use leptos::prelude::*;

use crate::state::toast::{TOAST_TTL_MS, ToastKind, ToastState};

/// CSS modifier class for a toast kind.
pub fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Loading => "toast toast--loading",
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}

/// Queue a toast, scheduling its dismissal if the kind expires.
pub fn push_toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) -> u64 {
    let message = message.into();
    let id = toasts.try_update(|t| t.push(kind, message)).unwrap_or_default();
    schedule_expiry(toasts, id, kind);
    id
}

/// Replace toast `id` with an outcome, scheduling its dismissal if it expires.
pub fn replace_toast(toasts: RwSignal<ToastState>, id: u64, kind: ToastKind, message: impl Into<String>) -> u64 {
    let message = message.into();
    let new_id = toasts.try_update(|t| t.replace(id, kind, message)).unwrap_or_default();
    schedule_expiry(toasts, new_id, kind);
    new_id
}

fn schedule_expiry(toasts: RwSignal<ToastState>, id: u64, kind: ToastKind) {
    if !kind.expires() {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
        toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toasts, id, TOAST_TTL_MS);
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast_class(toast.kind) role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| {
                                    toasts.update(|t| {
                                        t.dismiss(id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
