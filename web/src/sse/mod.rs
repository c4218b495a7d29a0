//! SSE HTTP handler for the web layer.
//!
//! This module contains only the Axum handler for the answer stream endpoint.
//! The event types and the paced emitter live in the `sse` crate.

pub(crate) mod handler;
