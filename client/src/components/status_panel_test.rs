use super::*;

#[test]
fn indicator_class_highlights_matching_state() {
    assert_eq!(
        indicator_class(Occupancy::Occupied, Occupancy::Occupied),
        "status-pill status-pill--occupied status-pill--active"
    );
    assert_eq!(indicator_class(Occupancy::Available, Occupancy::Occupied), "status-pill");
    assert_eq!(indicator_class(Occupancy::Occupied, Occupancy::Unknown), "status-pill");
}

#[test]
fn label_text_shows_latest_label() {
    let mut state = StatusState::default();
    state.apply_message("status: occupied");
    assert_eq!(label_text(&state), "occupied");
}

#[test]
fn label_text_before_first_message() {
    let state = StatusState { label: None, stream: StreamStatus::Connecting };
    assert_eq!(label_text(&state), "Waiting for status...");
    assert_eq!(label_text(&StatusState::default()), "Waiting for status...");
}

#[test]
fn label_survives_disconnect() {
    let mut state = StatusState::default();
    state.apply_message("status: empty");
    state.stream = StreamStatus::Disconnected;
    assert_eq!(label_text(&state), "empty");
    assert_eq!(stream_text(state.stream), "Disconnected");
}

#[test]
fn stream_text_per_state() {
    assert_eq!(stream_text(StreamStatus::Live), "Live");
    assert_eq!(stream_text(StreamStatus::Disconnected), "Disconnected");
}
