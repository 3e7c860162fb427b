//! Maquette Studio
//!
//! Application core for turning an architectural concept into a generated
//! concept image, then into a self-contained interactive 3D document, and
//! driving that document over a best-effort control channel once it runs
//! inside a sandboxed rendering surface.
//!
//! ## Module Organization
//!
//! - `services::streaming` - assembly of incremental generation output
//! - `services::document` - document extraction and post-processing
//! - `services::bridge` - the embedded-runtime control channel
//! - `services::generation` - the end-to-end generation pipeline
//! - `state` - host-owned state container
//! - `utils` - error types and helpers

pub mod services;
pub mod state;
pub mod utils;

pub use state::StudioState;
pub use utils::error::{StudioError, StudioResult};
