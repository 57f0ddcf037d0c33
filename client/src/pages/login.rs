//! Sign-in page.
//!
//! Sign-in itself happens on the identity provider's hosted page. This
//! screen links there with a return URL pointing back at the app root, and
//! forwards already signed-in users straight to `/`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use url::Url;

use crate::components::footer::Footer;
use crate::components::loading::Loading;
use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::util::auth::unauth_redirect_options;
use crate::util::browser::current_origin;

/// App root (`origin/`) for `href`, or `/` when `href` has no network origin.
pub fn app_root_url(href: &str) -> String {
    match Url::parse(href).map(|url| url.origin()) {
        Ok(origin) if origin.is_tuple() => format!("{}/", origin.ascii_serialization()),
        Ok(_) => "/".to_owned(),
        Err(e) => {
            log::debug!("no origin in {href:?}: {e}");
            "/".to_owned()
        }
    }
}

/// Provider sign-in link, or an empty string when the provider base is unusable.
pub fn sign_in_href(config: &ClientConfig, return_to: &str) -> String {
    match config.sign_in_url(return_to) {
        Ok(url) => url.into(),
        Err(e) => {
            log::error!("invalid identity provider base {:?}: {e}", config.auth_base);
            String::new()
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let return_to = RwSignal::new("/".to_owned());
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(origin) = current_origin() {
            return_to.set(app_root_url(&origin));
        }
    });
    Effect::new(move || {
        if auth.with(AuthState::is_authenticated) {
            navigate("/", unauth_redirect_options());
        }
    });

    let href = move || sign_in_href(&config, &return_to.get());

    view! {
        <div class="page page--centered">
            <main class="login">
                <h1 class="login__title">"EyeOnDesk"</h1>
                <Show
                    when=move || !auth.with(|a| a.loading)
                    fallback=|| view! { <Loading size="lg"/> }
                >
                    <p class="login__lead">"Sign in to view desk status and configure your desk space."</p>
                    <a class="btn btn--primary login__sign-in" href=href.clone()>
                        "Sign in"
                    </a>
                </Show>
            </main>
            <Footer/>
        </div>
    }
}
