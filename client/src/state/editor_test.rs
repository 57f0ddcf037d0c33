use super::*;

fn surface() -> SurfaceBounds {
    SurfaceBounds::new(800.0, 600.0).expect("valid bounds")
}

fn ready_editor() -> EditorState {
    let mut state = EditorState::default();
    state.set_bounds(surface());
    state
}

// =============================================================
// Defaults and bounds
// =============================================================

#[test]
fn default_editor_is_editing_without_bounds() {
    let state = EditorState::default();
    assert_eq!(state.rect, DEFAULT_RECT);
    assert_eq!(state.phase, EditorPhase::Editing);
    assert!(state.bounds.is_none());
    assert!(!state.can_interact());
    assert!(!state.saving);
}

#[test]
fn set_bounds_fits_default_rect_into_small_surface() {
    let mut state = EditorState::default();
    state.set_bounds(SurfaceBounds::new(250.0, 200.0).expect("valid bounds"));
    assert_eq!(state.rect, Rect::new(50.0, 50.0, 200.0, 150.0));
}

#[test]
fn set_bounds_rescales_after_surface_resize() {
    let mut state = ready_editor();
    state.set_bounds(SurfaceBounds::new(400.0, 300.0).expect("valid bounds"));
    assert!(state.rect.approx_eq(&Rect::new(50.0, 50.0, 100.0, 75.0)));
}

#[test]
fn set_bounds_with_same_size_keeps_rect() {
    let mut state = ready_editor();
    state.rect = Rect::new(10.0, 20.0, 30.0, 40.0);
    state.set_bounds(surface());
    assert_eq!(state.rect, Rect::new(10.0, 20.0, 30.0, 40.0));
}

// =============================================================
// Move gestures
// =============================================================

#[test]
fn move_translates_by_pointer_delta() {
    let mut state = ready_editor();
    assert!(state.pointer_down(DragKind::Move, Point::new(150.0, 150.0)));
    assert!(state.pointer_move(Point::new(190.0, 130.0)));
    assert_eq!(state.rect, Rect::new(140.0, 80.0, 200.0, 150.0));
}

#[test]
fn move_is_computed_from_snapshot_not_incrementally() {
    let mut state = ready_editor();
    state.pointer_down(DragKind::Move, Point::new(150.0, 150.0));
    state.pointer_move(Point::new(2000.0, 2000.0));
    state.pointer_move(Point::new(160.0, 160.0));
    assert_eq!(state.rect, Rect::new(110.0, 110.0, 200.0, 150.0));
}

#[test]
fn move_never_leaves_surface() {
    let mut state = ready_editor();
    state.pointer_down(DragKind::Move, Point::new(200.0, 200.0));
    let pointers = [(-5000.0, -5000.0), (5000.0, 5000.0), (-10.0, 900.0), (799.0, -1.0), (400.0, 300.0)];
    for (px, py) in pointers {
        state.pointer_move(Point::new(px, py));
        let r = state.rect;
        assert!((0.0..=800.0 - r.width).contains(&r.x), "x out of range: {r:?}");
        assert!((0.0..=600.0 - r.height).contains(&r.y), "y out of range: {r:?}");
        assert_eq!((r.width, r.height), (200.0, 150.0));
    }
}

#[test]
fn move_pins_to_far_corner() {
    let mut state = ready_editor();
    state.pointer_down(DragKind::Move, Point::new(150.0, 150.0));
    state.pointer_move(Point::new(10_000.0, 10_000.0));
    assert_eq!(state.rect, Rect::new(600.0, 450.0, 200.0, 150.0));
}

// =============================================================
// Resize gestures
// =============================================================

#[test]
fn resize_keeps_origin_and_follows_pointer() {
    let mut state = ready_editor();
    assert!(state.pointer_down(DragKind::Resize, Point::new(300.0, 250.0)));
    state.pointer_move(Point::new(420.0, 300.0));
    assert_eq!(state.rect, Rect::new(100.0, 100.0, 320.0, 200.0));
}

#[test]
fn resize_never_below_min_size() {
    let mut state = ready_editor();
    state.pointer_down(DragKind::Resize, Point::new(300.0, 250.0));
    state.pointer_move(Point::new(-400.0, 101.0));
    assert_eq!(state.rect.width, MIN_SIZE);
    assert_eq!(state.rect.height, MIN_SIZE);
    assert_eq!((state.rect.x, state.rect.y), (100.0, 100.0));
}

#[test]
fn resize_never_exceeds_remaining_space() {
    let mut state = ready_editor();
    state.pointer_down(DragKind::Resize, Point::new(300.0, 250.0));
    let pointers = [(9000.0, 9000.0), (805.0, 50.0), (0.0, 650.0)];
    for (px, py) in pointers {
        state.pointer_move(Point::new(px, py));
        let r = state.rect;
        assert!(r.width >= MIN_SIZE && r.width <= 800.0 - r.x, "{r:?}");
        assert!(r.height >= MIN_SIZE && r.height <= 600.0 - r.y, "{r:?}");
    }
}

#[test]
fn pointer_up_ends_session() {
    let mut state = ready_editor();
    state.pointer_down(DragKind::Resize, Point::new(300.0, 250.0));
    assert_eq!(state.cursor(), "nwse-resize");
    assert!(state.pointer_up());
    assert!(state.drag.is_none());
    assert!(!state.pointer_move(Point::new(500.0, 500.0)));
    assert!(!state.pointer_up());
    assert_eq!(state.cursor(), "default");
}

#[test]
fn pointer_down_refused_without_bounds() {
    let mut state = EditorState::default();
    assert!(!state.pointer_down(DragKind::Move, Point::new(1.0, 1.0)));
    assert!(state.drag.is_none());
}

// =============================================================
// Persisted zone + commit phase
// =============================================================

#[test]
fn apply_persisted_denormalizes_and_commits() {
    let mut state = ready_editor();
    let unit = NormalizedRect { x: 0.125, y: 0.25, width: 0.25, height: 0.5 };
    assert_eq!(state.apply_persisted(unit), Ok(()));
    assert!(state.rect.approx_eq(&Rect::new(100.0, 150.0, 200.0, 300.0)));
    assert_eq!(state.phase, EditorPhase::Committed);
    assert!(!state.can_save());
}

#[test]
fn apply_persisted_requires_bounds() {
    let mut state = EditorState::default();
    let unit = NormalizedRect { x: 0.1, y: 0.1, width: 0.1, height: 0.1 };
    assert_eq!(state.apply_persisted(unit), Err(EditorError::SurfaceUnknown));
    assert_eq!(state.phase, EditorPhase::Editing);
}

#[test]
fn apply_persisted_rejects_out_of_range_zone() {
    let mut state = ready_editor();
    let unit = NormalizedRect { x: 0.9, y: 0.1, width: 0.5, height: 0.1 };
    assert_eq!(state.apply_persisted(unit), Err(EditorError::OutOfRange));
    assert_eq!(state.rect, DEFAULT_RECT);
}

#[test]
fn apply_persisted_refused_during_drag() {
    let mut state = ready_editor();
    assert!(state.pointer_down(DragKind::Move, Point::new(150.0, 150.0)));
    assert!(state.pointer_move(Point::new(170.0, 160.0)));
    let dragged = state.rect;
    let unit = NormalizedRect { x: 0.5, y: 0.5, width: 0.1, height: 0.1 };
    assert_eq!(state.apply_persisted(unit), Err(EditorError::Edited));
    assert_eq!(state.rect, dragged);
    assert_eq!(state.drag_kind(), Some(DragKind::Move));
    assert_eq!(state.phase, EditorPhase::Editing);
}

#[test]
fn apply_persisted_refused_after_finished_edit() {
    let mut state = ready_editor();
    assert!(state.pointer_down(DragKind::Resize, Point::new(300.0, 250.0)));
    assert!(state.pointer_move(Point::new(350.0, 300.0)));
    assert!(state.pointer_up());
    let edited = state.rect;
    let unit = NormalizedRect { x: 0.1, y: 0.1, width: 0.2, height: 0.2 };
    assert_eq!(state.apply_persisted(unit), Err(EditorError::Edited));
    assert_eq!(state.rect, edited);
    assert_eq!(state.phase, EditorPhase::Editing);
}

#[test]
fn surface_below_min_size_keeps_min_zone_at_origin() {
    let mut state = EditorState::default();
    state.rect = Rect::new(0.0, 0.0, 5.0, 5.0);
    state.set_bounds(SurfaceBounds::new(10.0, 10.0).expect("valid bounds"));
    assert_eq!(state.rect, Rect::new(0.0, 0.0, MIN_SIZE, MIN_SIZE));
}

#[test]
fn committed_zone_ignores_gestures_until_begin_edit() {
    let mut state = ready_editor();
    state.apply_persisted(NormalizedRect { x: 0.1, y: 0.1, width: 0.2, height: 0.2 }).expect("apply");
    assert!(!state.pointer_down(DragKind::Move, Point::new(100.0, 100.0)));
    state.begin_edit();
    assert!(state.pointer_down(DragKind::Move, Point::new(100.0, 100.0)));
    assert!(state.can_interact());
}

// =============================================================
// Save guard
// =============================================================

#[test]
fn prepare_save_refuses_unknown_surface() {
    let mut state = EditorState::default();
    assert_eq!(state.prepare_save(), Err(EditorError::SurfaceUnknown));
    assert!(!state.saving);
}

#[test]
fn prepare_save_normalizes_against_current_bounds() {
    let mut state = ready_editor();
    let payload = state.prepare_save().expect("payload");
    assert!((payload.x - 0.125).abs() < 1e-9);
    assert!((payload.width - 0.25).abs() < 1e-9);
    assert!(payload.is_within_unit());
    assert!(state.saving);
}

#[test]
fn prepare_save_rejects_concurrent_save() {
    let mut state = ready_editor();
    state.prepare_save().expect("first save");
    assert_eq!(state.prepare_save(), Err(EditorError::Busy));
}

#[test]
fn prepare_save_rejects_committed_zone() {
    let mut state = ready_editor();
    state.phase = EditorPhase::Committed;
    assert_eq!(state.prepare_save(), Err(EditorError::Committed));
}

#[test]
fn finish_save_success_commits() {
    let mut state = ready_editor();
    state.prepare_save().expect("payload");
    state.finish_save(true);
    assert!(!state.saving);
    assert_eq!(state.phase, EditorPhase::Committed);
}

#[test]
fn finish_save_failure_stays_editable() {
    let mut state = ready_editor();
    state.prepare_save().expect("payload");
    state.finish_save(false);
    assert!(!state.saving);
    assert_eq!(state.phase, EditorPhase::Editing);
    assert!(state.can_save());
}

#[test]
fn editor_error_messages_are_user_readable() {
    assert_eq!(EditorError::Busy.to_string(), "a save is already in progress");
    assert_eq!(EditorError::SurfaceUnknown.to_string(), "video surface size is not known yet");
    assert_eq!(EditorError::Edited.to_string(), "zone was edited before the stored zone arrived");
}
