//! Unified Stream Event Types
//!
//! Provider-agnostic event types and adapter trait for processing streamed
//! generation-model responses. These types are shared across the LLM crate
//! (provider implementations) and the main crate (stream assembler,
//! generation pipeline).

use serde::{Deserialize, Serialize};

/// Unified streaming event that provider adapters convert to.
///
/// A generation stream interleaves two kinds of text: reasoning narration
/// (the model thinking out loud about what it is building) and final
/// content (the document being emitted). Downstream consumers treat them
/// very differently, so the distinction is made here, at the adapter
/// boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Reasoning/progress narration delta from the model
    ReasoningDelta { content: String },

    /// Final-content delta (part of the document being generated)
    ContentDelta { content: String },

    /// Token usage information
    Usage {
        prompt_tokens: u32,
        output_tokens: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        thoughts_tokens: Option<u32>,
    },

    /// Error during streaming
    Error { message: String },

    /// Stream complete
    Complete {
        #[serde(skip_serializing_if = "Option::is_none")]
        finish_reason: Option<String>,
    },
}

/// Errors that can occur during stream adaptation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AdapterError {
    /// Invalid format that couldn't be parsed
    InvalidFormat(String),
    /// JSON/data parsing error
    ParseError(String),
    /// Event type not supported by this adapter
    UnsupportedEvent(String),
}

impl std::fmt::Display for AdapterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdapterError::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
            AdapterError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AdapterError::UnsupportedEvent(msg) => write!(f, "Unsupported event: {}", msg),
        }
    }
}

impl std::error::Error for AdapterError {}

/// Trait for adapting provider-specific stream formats to unified events.
///
/// A single input line may produce zero, one, or multiple events. Empty
/// and keepalive lines produce zero events.
pub trait FragmentAdapter: Send + Sync {
    /// Returns the provider name for logging and identification.
    fn provider_name(&self) -> &'static str;

    /// Adapt a raw stream line/chunk to unified events.
    fn adapt(&mut self, input: &str) -> Result<Vec<StreamEvent>, AdapterError>;

    /// Reset adapter state for a new stream.
    fn reset(&mut self) {
        // Stateless adapters need nothing here
    }
}
