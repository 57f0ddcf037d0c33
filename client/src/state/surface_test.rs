use super::*;

#[test]
fn default_load_awaits_nothing() {
    let load = SurfaceLoad::default();
    assert!(!load.awaiting_report(0));
}

#[test]
fn reports_once_per_generation() {
    let mut load = SurfaceLoad::default();
    let generation = load.begin();
    assert!(load.mark_loaded(generation));
    let first = load.take_report(generation, 800.0, 450.0);
    assert_eq!(first, SurfaceBounds::new(800.0, 450.0));
    assert!(!load.awaiting_report(generation));
    assert_eq!(load.take_report(generation, 800.0, 450.0), None);
}

#[test]
fn zero_measurement_is_not_reported_and_can_retry() {
    let mut load = SurfaceLoad::default();
    let generation = load.begin();
    load.mark_loaded(generation);
    assert_eq!(load.take_report(generation, 0.0, 0.0), None);
    assert!(load.awaiting_report(generation));
    assert!(load.take_report(generation, 640.0, 360.0).is_some());
}

#[test]
fn no_report_before_load() {
    let mut load = SurfaceLoad::default();
    let generation = load.begin();
    assert_eq!(load.take_report(generation, 640.0, 360.0), None);
}

#[test]
fn stale_generation_is_ignored() {
    let mut load = SurfaceLoad::default();
    let old = load.begin();
    let current = load.begin();
    assert!(!load.mark_loaded(old));
    assert!(load.mark_loaded(current));
    assert_eq!(load.take_report(old, 640.0, 360.0), None);
    assert!(load.take_report(current, 640.0, 360.0).is_some());
}

#[test]
fn new_generation_reports_again() {
    let mut load = SurfaceLoad::default();
    let first = load.begin();
    load.mark_loaded(first);
    load.take_report(first, 640.0, 360.0);
    let second = load.begin();
    assert!(!load.awaiting_report(second));
    load.mark_loaded(second);
    assert!(load.take_report(second, 1280.0, 720.0).is_some());
}

// =============================================================
// re-measure after a zero-sized first frame
// =============================================================

#[test]
fn single_load_event_keeps_awaiting_until_measured() {
    let mut load = SurfaceLoad::default();
    let generation = load.begin();
    assert!(load.mark_loaded(generation));

    let mut frames = 0;
    let sizes = [(0.0, 0.0), (0.0, 360.0), (640.0, 360.0)];
    let mut reported = None;
    for (w, h) in sizes {
        if !load.awaiting_report(generation) {
            break;
        }
        frames += 1;
        reported = load.take_report(generation, w, h);
    }

    assert_eq!(frames, 3);
    assert_eq!(reported, SurfaceBounds::new(640.0, 360.0));
    assert!(!load.awaiting_report(generation));
}

#[test]
fn retire_stops_pending_measurement() {
    let mut load = SurfaceLoad::default();
    let generation = load.begin();
    load.mark_loaded(generation);
    assert_eq!(load.take_report(generation, 0.0, 0.0), None);

    load.retire();

    assert!(!load.awaiting_report(generation));
    assert_eq!(load.take_report(generation, 640.0, 360.0), None);
}

#[test]
fn next_attempt_stops_at_frame_budget() {
    let mut load = SurfaceLoad::default();
    let generation = load.begin();
    load.mark_loaded(generation);

    assert_eq!(load.next_attempt(generation, 0), Some(1));
    assert_eq!(load.next_attempt(generation, MAX_MEASURE_FRAMES - 1), Some(MAX_MEASURE_FRAMES));
    assert_eq!(load.next_attempt(generation, MAX_MEASURE_FRAMES), None);
}

#[test]
fn next_attempt_stops_once_reported() {
    let mut load = SurfaceLoad::default();
    let generation = load.begin();
    load.mark_loaded(generation);
    assert!(load.take_report(generation, 640.0, 360.0).is_some());
    assert_eq!(load.next_attempt(generation, 1), None);
}
