//! Top navigation bar: brand link, optional page title, user menu.

use leptos::prelude::*;

use crate::components::client_only::ClientOnly;
use crate::components::user_menu::UserMenu;

#[component]
pub fn NavBar(#[prop(optional, into)] title: Option<String>) -> impl IntoView {
    view! {
        <div class="nav-bar">
            <div class="nav-bar__inner">
                <a href="/" class="nav-bar__brand">
                    <h2 class="nav-bar__brand-name">"EyeOnDesk"</h2>
                    <span class="nav-bar__brand-icon" aria-hidden="true">"🪔"</span>
                </a>
                <h1 class="nav-bar__title">{title}</h1>
                <ClientOnly>
                    <UserMenu/>
                </ClientOnly>
            </div>
        </div>
    }
}
