//! Live status screen.
//!
//! The video surface is mounted hidden so the camera stream stays warm while
//! the status panel is the only visible content.

use leptos::prelude::*;

use crate::components::auth_gate::AuthGate;
use crate::components::client_only::ClientOnly;
use crate::components::footer::Footer;
use crate::components::nav_bar::NavBar;
use crate::components::status_panel::StatusPanel;
use crate::components::video_player::VideoPlayer;

#[component]
pub fn CameraPage() -> impl IntoView {
    view! {
        <AuthGate>
            <div class="page">
                <NavBar title="Camera"/>
                <main class="camera">
                    <StatusPanel/>
                    <ClientOnly>
                        <VideoPlayer hidden=true/>
                    </ClientOnly>
                </main>
                <Footer/>
            </div>
        </AuthGate>
    }
}
