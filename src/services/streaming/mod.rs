//! Streaming
//!
//! Assembly of incremental generation-model output into a document buffer
//! and a live progress label.

pub mod assembler;

pub use assembler::{StreamAssembler, PLACEHOLDER_LABEL};
