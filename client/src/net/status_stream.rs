//! Space-status event stream.
//!
//! The browser side opens an `EventSource` on the status endpoint and pumps
//! its `message` events into `StatusState`. The pump itself is generic over
//! the message stream and the connection handle so the close-exactly-once
//! behavior can be exercised without a browser.
//!
//! ERROR HANDLING
//! ==============
//! A stream error closes the connection and leaves the panel showing
//! `Disconnected`. There is no reconnect loop.

#[cfg(test)]
#[path = "status_stream_test.rs"]
mod status_stream_test;

use std::fmt::Debug;

use futures::channel::oneshot;
use futures::future::{self, Either};
use futures::{Stream, StreamExt};

use super::connection::{Closable, ConnectionSlot};

/// Why a status pump stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PumpEnd {
    /// The owning component was unmounted.
    TornDown,
    /// The transport reported an error.
    Failed,
    /// The stream ended on its own.
    Finished,
}

/// Forward stream payloads to `on_message` until teardown, error, or end.
///
/// The slot is released on every exit path.
pub async fn pump_status_stream<C, S, E>(
    slot: &ConnectionSlot<C>,
    mut messages: S,
    mut teardown: oneshot::Receiver<()>,
    mut on_message: impl FnMut(&str),
) -> PumpEnd
where
    C: Closable,
    S: Stream<Item = Result<String, E>> + Unpin,
    E: Debug,
{
    let end = loop {
        match future::select(messages.next(), &mut teardown).await {
            Either::Left((Some(Ok(data)), _)) => on_message(&data),
            Either::Left((Some(Err(e)), _)) => {
                log::warn!("space-status stream error: {e:?}");
                break PumpEnd::Failed;
            }
            Either::Left((None, _)) => break PumpEnd::Finished,
            Either::Right(_) => break PumpEnd::TornDown,
        }
    };
    slot.release();
    end
}

#[cfg(feature = "hydrate")]
pub use browser::open_status_stream;

#[cfg(feature = "hydrate")]
mod browser {
    use futures::StreamExt;
    use futures::channel::oneshot;
    use gloo_net::eventsource::futures::EventSource;
    use leptos::prelude::*;

    use super::{PumpEnd, pump_status_stream};
    use crate::net::connection::{Closable, ConnectionSlot};
    use crate::state::status::{StatusState, StreamStatus};

    struct BrowserEventSource(Option<EventSource>);

    impl Closable for BrowserEventSource {
        fn close(&mut self) {
            if let Some(source) = self.0.take() {
                source.close();
            }
        }
    }

    /// Open the status stream and drive `status` until `teardown` fires.
    pub fn open_status_stream(url: &str, status: RwSignal<StatusState>, teardown: oneshot::Receiver<()>) {
        let mut source = match EventSource::new(url) {
            Ok(source) => source,
            Err(e) => {
                log::error!("failed to open space-status stream {url}: {e:?}");
                status.update(|s| s.stream = StreamStatus::Disconnected);
                return;
            }
        };
        let subscription = match source.subscribe("message") {
            Ok(sub) => sub,
            Err(e) => {
                log::error!("failed to subscribe to space-status messages: {e:?}");
                source.close();
                status.update(|s| s.stream = StreamStatus::Disconnected);
                return;
            }
        };
        let slot = ConnectionSlot::new();
        slot.install(BrowserEventSource(Some(source)));
        status.update(|s| s.stream = StreamStatus::Connecting);

        let messages = subscription.map(|item| item.map(|(_, event)| event.data().as_string().unwrap_or_default()));
        leptos::task::spawn_local(async move {
            let end = pump_status_stream(&slot, messages, teardown, |data| {
                status.update(|s| {
                    if !s.apply_message(data) {
                        log::warn!("ignoring malformed space-status payload: {data:?}");
                    }
                });
            })
            .await;
            if end != PumpEnd::TornDown {
                status.update(|s| s.stream = StreamStatus::Disconnected);
            }
        });
    }
}
