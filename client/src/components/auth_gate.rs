//! Route wrapper that only renders its children for a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session from context. While the identity provider has not
//! answered, a full-page loader is shown; once it answers without a session
//! the user is sent to `/login` and the loader stays up until navigation.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading::Loading;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.with(AuthState::is_authenticated)
            fallback=|| {
                view! {
                    <main class="page page--centered">
                        <Loading size="xxl"/>
                    </main>
                }
            }
        >
            {children()}
        </Show>
    }
}
