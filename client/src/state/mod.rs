//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `editor`, `status`, etc.) so individual
//! components can depend on small focused models. Each model is plain data
//! with pure transition methods; components hold them in `RwSignal`s.

pub mod auth;
pub mod editor;
pub mod status;
pub mod surface;
pub mod toast;
