//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate geometry and browser/environment concerns from
//! page and component logic to improve reuse and testability.

pub mod auth;
pub mod browser;
pub mod rect;
