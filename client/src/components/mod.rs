//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome, the video surface, the zone editor and the
//! status panel, reading shared state from Leptos context providers.

pub mod auth_gate;
pub mod client_only;
pub mod footer;
pub mod loading;
pub mod nav_bar;
pub mod rect_editor;
pub mod status_panel;
pub mod toast_host;
pub mod user_menu;
pub mod video_player;
