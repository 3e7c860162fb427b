//! Maquette LLM
//!
//! Remote generation collaborators for Maquette Studio: the provider
//! trait, the Gemini implementation, and the stream adapter that turns
//! the provider's wire format into unified stream events.
//!
//! ## Module Organization
//!
//! - `types` - Provider configuration and the generation error taxonomy
//! - `provider` - The `GenerationProvider` trait and HTTP error helpers
//! - `adapter` - SSE wire types and the `GeminiStreamAdapter`
//! - `gemini` - The `GeminiProvider` implementation over reqwest

pub mod adapter;
pub mod gemini;
pub mod provider;
pub mod types;

pub use adapter::GeminiStreamAdapter;
pub use gemini::GeminiProvider;
pub use provider::{missing_api_key_error, parse_http_error, GenerationProvider};
pub use types::{AspectRatio, GenError, GenResult, ProviderConfig};
