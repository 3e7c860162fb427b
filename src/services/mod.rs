//! Services
//!
//! The application's service layer:
//!
//! - `streaming` - assembly of the incremental generation stream
//! - `document` - extraction and post-processing of generated documents
//! - `bridge` - the control channel into the embedded rendering surface
//! - `generation` - the pipeline tying providers, assembly, and transforms together

pub mod bridge;
pub mod document;
pub mod generation;
pub mod streaming;
