//! Signed-in identity and sign-out control for the nav bar.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::util::auth::{LOGIN_PATH, unauth_redirect_options};

#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let busy = RwSignal::new(false);
    let signed_out = RwSignal::new(false);

    let navigate = leptos_router::hooks::use_navigate();
    Effect::new(move || {
        if signed_out.get() {
            navigate(LOGIN_PATH, unauth_redirect_options());
        }
    });

    let label = move || {
        auth.with(|a| a.session.as_ref().map(|s| s.user.label().to_owned()))
            .unwrap_or_default()
    };

    let on_sign_out = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::sign_out(&config).await {
                    log::error!("sign-out failed: {e}");
                }
                auth.set(AuthState::resolved(None));
                busy.set(false);
                signed_out.set(true);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &config;
            busy.set(false);
        }
    };

    view! {
        <Show when=move || auth.with(|a| a.session.is_some())>
            <div class="user-menu">
                <span class="user-menu__name">{label}</span>
                <button class="btn user-menu__sign-out" on:click=on_sign_out.clone() disabled=move || busy.get()>
                    "Sign out"
                </button>
            </div>
        </Show>
    }
}
