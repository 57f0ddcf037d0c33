//! Desk-space configuration screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lays the rectangle editor over the live video. Nothing is interactive
//! until the video reports its rendered size; at that point the stored zone
//! (if any) is fetched and shown in the committed phase. One primary button
//! toggles between "Edit" (leave committed) and "Save" (persist the zone).
//!
//! ERROR HANDLING
//! ==============
//! Load failures are logged and leave the default rectangle in place. Save
//! failures surface as an error toast and keep the editor in the editing
//! phase so the user can retry.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::*;

use crate::components::auth_gate::AuthGate;
use crate::components::client_only::ClientOnly;
use crate::components::footer::Footer;
use crate::components::loading::Loading;
use crate::components::nav_bar::NavBar;
use crate::components::rect_editor::RectEditor;
use crate::components::toast_host::push_toast;
#[cfg(feature = "hydrate")]
use crate::components::toast_host::replace_toast;
use crate::components::video_player::VideoPlayer;
use crate::config::ClientConfig;
use crate::net::api::ApiError;
use crate::state::auth::AuthState;
use crate::state::editor::{EditorPhase, EditorState};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::rect::SurfaceBounds;

pub const SAVING_MESSAGE: &str = "Saving desk space configuration...";
pub const SAVED_MESSAGE: &str = "Desk space configuration saved successfully!";
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Sign in again.";

/// What the single action button does in the current editor phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimaryAction {
    Save,
    Edit,
}

impl PrimaryAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Save => "Save",
            Self::Edit => "Edit",
        }
    }
}

pub fn primary_action(state: &EditorState) -> PrimaryAction {
    match state.phase {
        EditorPhase::Committed => PrimaryAction::Edit,
        EditorPhase::Editing => PrimaryAction::Save,
    }
}

pub fn primary_enabled(state: &EditorState) -> bool {
    match primary_action(state) {
        PrimaryAction::Edit => !state.saving,
        PrimaryAction::Save => state.can_save(),
    }
}

/// Toast text for a failed save. A server rejection reads differently from
/// a request that never completed.
pub fn save_failure_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Status(_) => "Failed to save configuration",
        _ => "Error saving configuration",
    }
}

#[component]
pub fn ConfigPage() -> impl IntoView {
    view! {
        <AuthGate>
            <ConfigPageContent/>
        </AuthGate>
    }
}

#[cfg(feature = "hydrate")]
async fn load_persisted(config: &ClientConfig, editor: RwSignal<EditorState>) {
    match crate::net::api::fetch_coordinates(config).await {
        Ok(Some(unit)) => match editor.try_update(|e| e.apply_persisted(unit)) {
            Some(Ok(())) => log::info!("loaded stored desk space"),
            Some(Err(crate::state::editor::EditorError::Edited)) => {
                log::info!("keeping in-progress edit over stored desk space {unit:?}");
            }
            Some(Err(e)) => log::warn!("ignoring stored desk space {unit:?}: {e}"),
            None => {}
        },
        Ok(None) => log::info!("no desk space stored yet"),
        Err(e) => log::error!("failed to load desk space configuration: {e}"),
    }
}

#[component]
fn ConfigPageContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let editor = RwSignal::new(EditorState::default());

    let bounds_known = Memo::new(move |_| editor.with(|e| e.bounds.is_some()));
    let on_ready = Callback::new(move |bounds: SurfaceBounds| {
        editor.update(|e| e.set_bounds(bounds));
    });

    {
        let config = config.clone();
        Effect::new(move |requested: Option<bool>| {
            if requested == Some(true) {
                return true;
            }
            if !bounds_known.get() {
                return false;
            }
            #[cfg(feature = "hydrate")]
            {
                let config = config.clone();
                leptos::task::spawn_local(async move { load_persisted(&config, editor).await });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = &config;
            true
        });
    }

    let on_primary = move |_| {
        if editor.with_untracked(|e| e.phase == EditorPhase::Committed) {
            editor.update(EditorState::begin_edit);
            return;
        }
        let Some(token) = auth.with_untracked(|a| a.bearer_token().map(str::to_owned)) else {
            log::warn!("save attempted without a session token");
            push_toast(toasts, ToastKind::Error, SESSION_EXPIRED_MESSAGE);
            return;
        };
        let payload = match editor.try_update(EditorState::prepare_save) {
            Some(Ok(payload)) => payload,
            Some(Err(e)) => {
                log::warn!("save refused: {e}");
                return;
            }
            None => return,
        };
        let pending = push_toast(toasts, ToastKind::Loading, SAVING_MESSAGE);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::save_coordinates(&config, &token, &payload).await;
                editor.update(|e| e.finish_save(result.is_ok()));
                match result {
                    Ok(()) => {
                        log::info!("saved desk space {payload:?}");
                        replace_toast(toasts, pending, ToastKind::Success, SAVED_MESSAGE);
                    }
                    Err(e) => {
                        log::error!("failed to save desk space: {e}");
                        replace_toast(toasts, pending, ToastKind::Error, save_failure_message(&e));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, token, payload, pending);
            editor.update(|e| e.finish_save(false));
        }
    };

    view! {
        <div class="page">
            <NavBar title="Configure Desk Space"/>
            <main class="config">
                <Show when=move || !bounds_known.get()>
                    <div class="config__loader">
                        <Loading size="xl"/>
                    </div>
                </Show>
                <div
                    class="config__workspace"
                    style=move || if bounds_known.get() { "" } else { "visibility: hidden;" }
                >
                    <RectEditor editor=editor>
                        <ClientOnly>
                            <VideoPlayer on_ready=on_ready/>
                        </ClientOnly>
                    </RectEditor>
                    <div class="config__actions">
                        <button
                            class="btn btn--primary"
                            disabled=move || !editor.with(primary_enabled)
                            on:click=on_primary
                        >
                            {move || editor.with(|e| primary_action(e).label())}
                        </button>
                    </div>
                </div>
            </main>
            <Footer/>
        </div>
    }
}
