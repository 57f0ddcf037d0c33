//! Detection-zone editor state machine.
//!
//! DESIGN
//! ======
//! The editor keeps its rectangle in surface pixels and only converts to the
//! normalized wire form at load/save boundaries. Pointer gestures open a
//! `DragSession` that snapshots the rectangle at pointer-down; every
//! pointer-move is computed from that snapshot rather than incrementally, so
//! clamping never accumulates drift.
//!
//! Phases:
//! - `Editing`: gestures and saving are allowed.
//! - `Committed`: the rectangle matches what the server stores. Entered after
//!   a successful load or save; left only through `begin_edit`.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::util::rect::{MIN_SIZE, NormalizedRect, Point, Rect, SurfaceBounds, clamp, denormalize, normalize};

/// Rectangle shown before any persisted zone is loaded.
pub const DEFAULT_RECT: Rect = Rect { x: 100.0, y: 100.0, width: 200.0, height: 150.0 };

/// Which gesture a drag session performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragKind {
    /// Pointer-down on the rectangle body: translate.
    Move,
    /// Pointer-down on the corner handle: change width/height, origin fixed.
    Resize,
}

/// Transient gesture state between pointer-down and pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub kind: DragKind,
    /// Pointer position at pointer-down, surface-relative.
    pub origin: Point,
    /// Rectangle at pointer-down.
    pub snapshot: Rect,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorPhase {
    #[default]
    Editing,
    Committed,
}

/// Reasons an editor operation was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("a save is already in progress")]
    Busy,
    #[error("video surface size is not known yet")]
    SurfaceUnknown,
    #[error("zone is already saved; choose Edit to change it")]
    Committed,
    #[error("stored zone lies outside the frame")]
    OutOfRange,
    #[error("zone was edited before the stored zone arrived")]
    Edited,
}

/// Editor state, held in a `RwSignal` by the config page.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorState {
    pub rect: Rect,
    pub bounds: Option<SurfaceBounds>,
    pub drag: Option<DragSession>,
    pub phase: EditorPhase,
    pub saving: bool,
    /// Set by the first accepted gesture; a late stored zone must not clobber it.
    edited: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self { rect: DEFAULT_RECT, bounds: None, drag: None, phase: EditorPhase::Editing, saving: false, edited: false }
    }
}

impl EditorState {
    /// Record newly measured surface bounds.
    ///
    /// The first measurement fits the current rectangle into the surface. A
    /// later, different measurement rescales the rectangle so its normalized
    /// position is unchanged.
    pub fn set_bounds(&mut self, bounds: SurfaceBounds) {
        if !bounds.holds_min_size() {
            log::warn!(
                "video surface {}x{} is smaller than the minimum zone; zone will overhang",
                bounds.width(),
                bounds.height()
            );
        }
        self.rect = match self.bounds {
            Some(previous) if previous == bounds => self.rect,
            Some(previous) => self.rect.rescale(previous, bounds).fit_within(bounds),
            None => self.rect.fit_within(bounds),
        };
        self.bounds = Some(bounds);
        self.drag = None;
    }

    pub fn can_interact(&self) -> bool {
        self.phase == EditorPhase::Editing && self.bounds.is_some() && !self.saving
    }

    pub fn can_save(&self) -> bool {
        self.can_interact()
    }

    pub fn drag_kind(&self) -> Option<DragKind> {
        self.drag.map(|d| d.kind)
    }

    /// Open a drag session. Returns `false` when interaction is not allowed.
    pub fn pointer_down(&mut self, kind: DragKind, pointer: Point) -> bool {
        if !self.can_interact() {
            return false;
        }
        self.drag = Some(DragSession { kind, origin: pointer, snapshot: self.rect });
        self.edited = true;
        true
    }

    /// Apply a pointer-move to the active drag session.
    ///
    /// Returns `true` when the rectangle changed.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let (Some(drag), Some(bounds)) = (self.drag, self.bounds) else {
            return false;
        };
        let next = match drag.kind {
            DragKind::Move => moved_rect(drag, pointer, bounds),
            DragKind::Resize => resized_rect(drag, pointer, bounds),
        };
        if next == self.rect {
            return false;
        }
        self.rect = next;
        true
    }

    /// Close the drag session. Returns `true` if one was open.
    pub fn pointer_up(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Show a zone loaded from the server and enter `Committed`.
    ///
    /// # Errors
    ///
    /// `Edited` once the user has started a gesture, `SurfaceUnknown` before
    /// bounds are measured, `OutOfRange` when the stored fractions do not
    /// describe a rectangle inside the frame.
    pub fn apply_persisted(&mut self, unit: NormalizedRect) -> Result<(), EditorError> {
        if self.edited || self.drag.is_some() {
            return Err(EditorError::Edited);
        }
        let bounds = self.bounds.ok_or(EditorError::SurfaceUnknown)?;
        if !unit.is_within_unit() {
            return Err(EditorError::OutOfRange);
        }
        self.rect = denormalize(unit, bounds).fit_within(bounds);
        self.drag = None;
        self.phase = EditorPhase::Committed;
        Ok(())
    }

    /// Leave `Committed` so the zone can be dragged and saved again.
    pub fn begin_edit(&mut self) {
        self.phase = EditorPhase::Editing;
    }

    /// Mark a save as in flight and return the payload to send.
    ///
    /// # Errors
    ///
    /// Refuses while another save is running, before the surface is
    /// measured, and while the zone is committed.
    pub fn prepare_save(&mut self) -> Result<NormalizedRect, EditorError> {
        if self.saving {
            return Err(EditorError::Busy);
        }
        let bounds = self.bounds.ok_or(EditorError::SurfaceUnknown)?;
        if self.phase == EditorPhase::Committed {
            return Err(EditorError::Committed);
        }
        self.saving = true;
        self.drag = None;
        Ok(normalize(self.rect, bounds))
    }

    /// Clear the busy flag; a successful save commits the zone.
    pub fn finish_save(&mut self, succeeded: bool) {
        self.saving = false;
        if succeeded {
            self.phase = EditorPhase::Committed;
        }
    }

    /// CSS cursor for the editing surface.
    pub fn cursor(&self) -> &'static str {
        match self.drag_kind() {
            Some(DragKind::Move) => "move",
            Some(DragKind::Resize) => "nwse-resize",
            None => "default",
        }
    }
}

fn moved_rect(drag: DragSession, pointer: Point, bounds: SurfaceBounds) -> Rect {
    let start = drag.snapshot;
    let dx = pointer.x - drag.origin.x;
    let dy = pointer.y - drag.origin.y;
    Rect {
        x: clamp(start.x + dx, 0.0, bounds.width() - start.width),
        y: clamp(start.y + dy, 0.0, bounds.height() - start.height),
        ..start
    }
}

fn resized_rect(drag: DragSession, pointer: Point, bounds: SurfaceBounds) -> Rect {
    let start = drag.snapshot;
    Rect {
        width: clamp(pointer.x - start.x, MIN_SIZE, bounds.width() - start.x),
        height: clamp(pointer.y - start.y, MIN_SIZE, bounds.height() - start.y),
        ..start
    }
}
