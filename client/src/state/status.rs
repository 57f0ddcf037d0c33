//! Occupancy status fed by the space-status event stream.
//!
//! SYSTEM CONTEXT
//! ==============
//! The classifier publishes lines like `"status: occupied"`. Only the value
//! after the first colon matters; the latest value replaces the previous one
//! and no history is kept.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Lifecycle of the status stream connection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StreamStatus {
    /// Not opened yet, or closed after an error.
    #[default]
    Disconnected,
    /// `EventSource` created, no message received yet.
    Connecting,
    /// At least one message received.
    Live,
}

/// Coarse classification of the label, used for styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occupancy {
    Occupied,
    Available,
    Unknown,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusState {
    /// Latest label, trimmed. `None` until the first usable message.
    pub label: Option<String>,
    pub stream: StreamStatus,
}

impl StatusState {
    /// Apply one raw event payload. Returns `false` if it was not usable.
    pub fn apply_message(&mut self, data: &str) -> bool {
        let Some(label) = parse_status_message(data) else {
            return false;
        };
        self.label = Some(label);
        self.stream = StreamStatus::Live;
        true
    }

    pub fn occupancy(&self) -> Occupancy {
        self.label.as_deref().map_or(Occupancy::Unknown, classify_label)
    }
}

/// Extract the trimmed value after the first `:`.
///
/// Returns `None` when there is no colon or the value is blank.
pub fn parse_status_message(data: &str) -> Option<String> {
    let (_, value) = data.split_once(':')?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Map a label onto the two states the panel highlights.
pub fn classify_label(label: &str) -> Occupancy {
    match label.to_ascii_lowercase().as_str() {
        "occupied" | "busy" | "taken" => Occupancy::Occupied,
        "empty" | "free" | "available" | "unoccupied" | "vacant" => Occupancy::Available,
        _ => Occupancy::Unknown,
    }
}
