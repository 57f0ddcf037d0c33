//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::config::ClientConfig;
use crate::pages::{camera::CameraPage, config::ConfigPage, home::HomePage, login::LoginPage};
use crate::state::{auth::AuthState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Resolve the session once on the client and publish it to `auth`.
fn resolve_session(auth: RwSignal<AuthState>, config: &ClientConfig) {
    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let session = match crate::net::api::fetch_session(&config).await {
                Ok(session) => session,
                Err(e) => {
                    log::error!("failed to resolve session: {e}");
                    None
                }
            };
            log::debug!("session resolved, signed in: {}", session.is_some());
            auth.set(AuthState::resolved(session));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, config);
}

/// Root application component.
///
/// Provides the session, endpoint config, and toast queue through context,
/// then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let config = ClientConfig::from_build_env();
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(config.clone());
    provide_context(toasts);

    Effect::new(move |resolved: Option<()>| {
        if resolved.is_none() {
            resolve_session(auth, &config);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/eyeondesk.css"/>
        <Title text="EyeOnDesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("camera") view=CameraPage/>
                <Route path=StaticSegment("config") view=ConfigPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
