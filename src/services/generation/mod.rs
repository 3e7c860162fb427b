//! Generation Pipeline
//!
//! Prompt construction and the service orchestrating the remote calls,
//! stream assembly, extraction, and transforms.

pub mod prompts;
pub mod service;

pub use service::{GeneratedModel, GenerationService, TransformOptions};
