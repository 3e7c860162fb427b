//! Generation Types
//!
//! Core types for remote generation-model interactions.

use serde::{Deserialize, Serialize};
use url::Url;

/// Aspect ratios accepted by the image-generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    Square,
    Landscape,
    Portrait,
    Wide,
}

impl AspectRatio {
    /// The ratio string the API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Landscape => "4:3",
            AspectRatio::Portrait => "3:4",
            AspectRatio::Wide => "16:9",
        }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::Landscape
    }
}

/// Configuration for a generation provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL override (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Model used for concept images and realistic renders
    #[serde(default = "default_image_model")]
    pub image_model: String,
    /// Model used for interactive 3D document generation
    #[serde(default = "default_document_model")]
    pub document_model: String,
    /// Maximum tokens to generate for a document
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// Temperature (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Stream the model's reasoning alongside the document
    #[serde(default = "default_enable_thoughts")]
    pub enable_thoughts: bool,
    /// Thinking budget tokens, when the model supports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_budget: Option<u32>,
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_document_model() -> String {
    "gemini-2.5-pro".to_string()
}

fn default_max_output_tokens() -> u32 {
    65_536
}

fn default_temperature() -> f32 {
    0.9
}

fn default_enable_thoughts() -> bool {
    true
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            image_model: default_image_model(),
            document_model: default_document_model(),
            max_output_tokens: default_max_output_tokens(),
            temperature: default_temperature(),
            enable_thoughts: default_enable_thoughts(),
            thinking_budget: None,
        }
    }
}

impl ProviderConfig {
    /// Validate the base URL override, when one is set.
    pub fn validate(&self) -> GenResult<()> {
        if let Some(base) = &self.base_url {
            Url::parse(base).map_err(|e| GenError::InvalidRequest {
                message: format!("invalid base_url {:?}: {}", base, e),
            })?;
        }
        Ok(())
    }
}

/// Errors from generation providers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum GenError {
    /// Authentication failed (invalid API key)
    AuthenticationFailed { message: String },
    /// Rate limit exceeded
    RateLimited {
        message: String,
        retry_after: Option<u32>,
    },
    /// Invalid request (bad parameters)
    InvalidRequest { message: String },
    /// Server error from the provider
    ServerError {
        message: String,
        status: Option<u16>,
    },
    /// Network/connection error
    NetworkError { message: String },
    /// Response parsing error
    ParseError { message: String },
    /// The call succeeded but produced no usable artifact
    /// (no image payload, or an empty document)
    EmptyArtifact { message: String },
    /// Other error
    Other { message: String },
}

impl std::fmt::Display for GenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenError::AuthenticationFailed { message } => {
                write!(f, "Authentication failed: {}", message)
            }
            GenError::RateLimited { message, .. } => {
                write!(f, "Rate limited: {}", message)
            }
            GenError::InvalidRequest { message } => {
                write!(f, "Invalid request: {}", message)
            }
            GenError::ServerError { message, status } => {
                if let Some(s) = status {
                    write!(f, "Server error ({}): {}", s, message)
                } else {
                    write!(f, "Server error: {}", message)
                }
            }
            GenError::NetworkError { message } => {
                write!(f, "Network error: {}", message)
            }
            GenError::ParseError { message } => {
                write!(f, "Parse error: {}", message)
            }
            GenError::EmptyArtifact { message } => {
                write!(f, "No usable artifact produced: {}", message)
            }
            GenError::Other { message } => {
                write!(f, "Error: {}", message)
            }
        }
    }
}

impl std::error::Error for GenError {}

/// Result type for generation operations
pub type GenResult<T> = Result<T, GenError>;
