//! Generation Provider Trait
//!
//! Defines the common interface for remote generation collaborators.

use async_trait::async_trait;
use tokio::sync::mpsc;

use maquette_core::streaming::StreamEvent;

use super::types::{AspectRatio, GenError, GenResult, ProviderConfig};

/// Trait for the three remote generation calls the studio makes.
///
/// Provides a unified interface for:
/// - Concept image generation (prompt -> data-URI image)
/// - Interactive 3D document generation (image -> streamed text)
/// - Realistic render generation (screenshot -> data-URI image)
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Generate a concept image from a text prompt.
    ///
    /// With `optimize` set, the provider is asked to expand the prompt
    /// into a richer photographic description before rendering.
    ///
    /// # Returns
    /// A `data:image/...;base64,...` URI. Fails with `EmptyArtifact` when
    /// the response contains no image payload.
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
        optimize: bool,
    ) -> GenResult<String>;

    /// Generate an interactive 3D document from a concept image.
    ///
    /// Fragments are delivered through `tx` as they arrive: reasoning
    /// narration and final content are distinguished at the adapter
    /// boundary. The full accumulated text is returned at stream end.
    ///
    /// Send failures on `tx` are not errors: a dropped receiver means the
    /// caller abandoned this generation, and the eventual result is simply
    /// dropped with it.
    async fn generate_document(
        &self,
        image_data_uri: &str,
        prompt: &str,
        tx: mpsc::Sender<StreamEvent>,
    ) -> GenResult<String>;

    /// Generate a realistic render from a runtime screenshot.
    ///
    /// Same failure shape as `generate_image`.
    async fn generate_render(
        &self,
        screenshot_data_uri: &str,
        style_prompt: &str,
    ) -> GenResult<String>;

    /// Check if the provider is reachable and the API key is valid.
    async fn health_check(&self) -> GenResult<()>;

    /// Get the configuration for this provider.
    fn config(&self) -> &ProviderConfig;
}

/// Helper function to create an error for a missing API key
pub fn missing_api_key_error(provider: &str) -> GenError {
    GenError::AuthenticationFailed {
        message: format!("API key not configured for {}", provider),
    }
}

/// Helper function to parse HTTP error status codes
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> GenError {
    match status {
        401 => GenError::AuthenticationFailed {
            message: format!("{}: Invalid API key", provider),
        },
        403 => GenError::AuthenticationFailed {
            message: format!("{}: Access denied", provider),
        },
        429 => GenError::RateLimited {
            message: body.to_string(),
            retry_after: None,
        },
        400 | 404 => GenError::InvalidRequest {
            message: body.to_string(),
        },
        500..=599 => GenError::ServerError {
            message: body.to_string(),
            status: Some(status),
        },
        _ => GenError::Other {
            message: format!("HTTP {}: {}", status, body),
        },
    }
}
