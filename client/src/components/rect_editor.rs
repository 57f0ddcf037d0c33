//! Draggable, resizable detection-zone overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the video surface in a positioned container and draws the zone on
//! top of it. Pointer coordinates are taken relative to the container, which
//! has the same origin as the rendered video. Pointer capture keeps the drag
//! alive when the pointer leaves the rectangle; releasing or losing capture
//! ends the session.
//!
//! All geometry lives in `EditorState`; this component only translates DOM
//! pointer events into editor calls.

#[cfg(test)]
#[path = "rect_editor_test.rs"]
mod rect_editor_test;

use leptos::prelude::*;

use crate::state::editor::{EditorPhase, EditorState};
#[cfg(feature = "hydrate")]
use crate::state::editor::DragKind;
use crate::util::rect::{Point, Rect};

/// Absolute-position style for the zone overlay.
pub fn rect_style(rect: &Rect) -> String {
    format!("left: {}px; top: {}px; width: {}px; height: {}px;", rect.x, rect.y, rect.width, rect.height)
}

/// Convert viewport client coordinates into container-relative coordinates.
pub fn relative_point(client_x: f64, client_y: f64, origin_left: f64, origin_top: f64) -> Point {
    Point::new(client_x - origin_left, client_y - origin_top)
}

/// Class list for the zone overlay.
pub fn zone_class(state: &EditorState) -> &'static str {
    match (state.phase, state.drag.is_some()) {
        (EditorPhase::Committed, _) => "rect-editor__zone rect-editor__zone--committed",
        (EditorPhase::Editing, true) => "rect-editor__zone rect-editor__zone--dragging",
        (EditorPhase::Editing, false) => "rect-editor__zone",
    }
}

#[cfg(feature = "hydrate")]
fn event_point(container: &web_sys::HtmlDivElement, ev: &leptos::ev::PointerEvent) -> Point {
    let origin = container.get_bounding_client_rect();
    relative_point(f64::from(ev.client_x()), f64::from(ev.client_y()), origin.left(), origin.top())
}

#[component]
pub fn RectEditor(editor: RwSignal<EditorState>, children: Children) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    let start_drag = move |kind: DragKind, ev: leptos::ev::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let Some(el) = container.get_untracked() else {
            return;
        };
        let point = event_point(&el, &ev);
        if editor.try_update(|e| e.pointer_down(kind, point)).unwrap_or(false) {
            ev.prevent_default();
            let _ = el.set_pointer_capture(ev.pointer_id());
        }
    };

    let on_body_down = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| start_drag(DragKind::Move, ev)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_handle_down = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                ev.stop_propagation();
                start_drag(DragKind::Resize, ev);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                if editor.with_untracked(|e| e.drag.is_none()) {
                    return;
                }
                let Some(el) = container.get_untracked() else {
                    return;
                };
                let point = event_point(&el, &ev);
                editor.update(|e| {
                    e.pointer_move(point);
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                if let Some(el) = container.get_untracked() {
                    let _ = el.release_pointer_capture(ev.pointer_id());
                }
                if editor.with_untracked(|e| e.drag.is_some()) {
                    editor.update(|e| {
                        e.pointer_up();
                    });
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_capture_lost = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::PointerEvent| {
                if editor.with_untracked(|e| e.drag.is_some()) {
                    editor.update(|e| {
                        e.pointer_up();
                    });
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    view! {
        <div
            class="rect-editor"
            node_ref=container
            style=move || format!("cursor: {};", editor.with(EditorState::cursor))
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_up
            on:lostpointercapture=on_capture_lost
        >
            {children()}
            <Show when=move || editor.with(|e| e.bounds.is_some())>
                <div
                    class=move || editor.with(zone_class)
                    style=move || editor.with(|e| rect_style(&e.rect))
                    on:pointerdown=on_body_down
                >
                    <Show when=move || editor.with(EditorState::can_interact)>
                        <div class="rect-editor__handle" on:pointerdown=on_handle_down></div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
