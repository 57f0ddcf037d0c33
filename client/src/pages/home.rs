//! Landing page linking to the two working screens.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::nav_bar::NavBar;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <NavBar/>
            <main class="home">
                <h1 class="home__title">"Desk occupancy at a glance"</h1>
                <p class="home__lead">"Watch the live camera status or configure which part of the frame counts as the desk."</p>
                <div class="home__links">
                    <a class="btn btn--primary" href="/camera">"Camera"</a>
                    <a class="btn" href="/config">"Configure"</a>
                </div>
            </main>
            <Footer/>
        </div>
    }
}
