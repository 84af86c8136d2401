//! Adapter layer: inbound interfaces
//!
//! Currently a single adapter, the axum HTTP surface.

pub mod http;
