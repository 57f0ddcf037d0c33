//! Networking modules for the REST + server-sent-event APIs.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `status_stream` pumps the occupancy event
//! stream, `connection` owns long-lived browser connections, and `types`
//! defines the wire schema.

pub mod api;
pub mod connection;
pub mod status_stream;
pub mod types;
