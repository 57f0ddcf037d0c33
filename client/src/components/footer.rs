//! Page footer with the copyright year.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::util::browser::current_year;

/// Footer text for `year`.
pub fn copyright_line(year: u32) -> String {
    format!("© {year} EyeOnDesk. All rights reserved.")
}

/// Footer. The year comes from the browser clock, so nothing renders until
/// after hydration.
#[component]
pub fn Footer() -> impl IntoView {
    let year = RwSignal::new(None::<u32>);
    Effect::new(move || year.set(current_year()));

    view! {
        <Show when=move || year.get().is_some()>
            <footer class="footer">
                <p>{move || year.get().map(copyright_line).unwrap_or_default()}</p>
                <p class="footer__credit">"Made with ❤️ by Majd Mousa and David Nour"</p>
            </footer>
        </Show>
    }
}
