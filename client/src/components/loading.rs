//! Spinner shown while auth or the video surface resolves.

use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(optional)] size: Option<&'static str>) -> impl IntoView {
    let class = format!("loading loading--{}", size.unwrap_or("md"));
    view! {
        <div class=class role="status" aria-label="Loading">
            <div class="loading__spinner"></div>
        </div>
    }
}
