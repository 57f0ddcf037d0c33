//! Render children only after hydration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-only widgets (the video surface, the user menu) would render
//! differently on the server than on the first client pass. Effects never
//! run during SSR, so flipping a flag from an effect yields identical server
//! and hydration markup and swaps the real content in afterwards.

use leptos::prelude::*;

#[component]
pub fn ClientOnly(#[prop(optional, into)] fallback: ViewFn, children: ChildrenFn) -> impl IntoView {
    let mounted = RwSignal::new(false);
    Effect::new(move || mounted.set(true));

    view! {
        <Show when=move || mounted.get() fallback=fallback>
            {children()}
        </Show>
    }
}
