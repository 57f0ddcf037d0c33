//! Live occupancy indicator fed by the space-status stream.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns its `EventSource` for exactly as long as it is mounted. The stream
//! is opened in the component body (browser only) and torn down from
//! `on_cleanup` through a teardown signal.

#[cfg(test)]
#[path = "status_panel_test.rs"]
mod status_panel_test;

use leptos::prelude::*;

use crate::state::status::{Occupancy, StatusState, StreamStatus};

/// Class for one of the two indicator pills.
pub fn indicator_class(indicator: Occupancy, current: Occupancy) -> &'static str {
    match (indicator, indicator == current) {
        (Occupancy::Occupied, true) => "status-pill status-pill--occupied status-pill--active",
        (Occupancy::Available, true) => "status-pill status-pill--available status-pill--active",
        _ => "status-pill",
    }
}

/// Text under the indicators: the latest label, or a placeholder.
pub fn label_text(state: &StatusState) -> String {
    state.label.clone().unwrap_or_else(|| "Waiting for status...".to_owned())
}

pub fn stream_text(stream: StreamStatus) -> &'static str {
    match stream {
        StreamStatus::Disconnected => "Disconnected",
        StreamStatus::Connecting => "Connecting",
        StreamStatus::Live => "Live",
    }
}

#[component]
pub fn StatusPanel() -> impl IntoView {
    let status = RwSignal::new(StatusState::default());

    #[cfg(feature = "hydrate")]
    {
        let config = expect_context::<crate::config::ClientConfig>();
        let (teardown_tx, teardown_rx) = futures::channel::oneshot::channel();
        crate::net::status_stream::open_status_stream(&config.status_stream_url(), status, teardown_rx);
        on_cleanup(move || crate::net::connection::signal_teardown(teardown_tx));
    }

    let occupancy = move || status.with(StatusState::occupancy);

    view! {
        <section class="status-panel">
            <div class="status-panel__indicators">
                <span class=move || indicator_class(Occupancy::Occupied, occupancy())>"Occupied"</span>
                <span class=move || indicator_class(Occupancy::Available, occupancy())>"Available"</span>
            </div>
            <p class="status-panel__label">{move || status.with(label_text)}</p>
            <p class="status-panel__stream">{move || stream_text(status.with(|s| s.stream))}</p>
        </section>
    }
}
