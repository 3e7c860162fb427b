//! Data-URI Handling
//!
//! Parsing and formatting of `data:<mime>;base64,<payload>` strings, the
//! wire format for every image artifact in the system (generated concept
//! images, realistic renders, runtime screenshots).

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{CoreError, CoreResult};

/// A parsed base64 data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    /// MIME type, e.g. `image/png`
    pub mime_type: String,
    /// Raw base64 payload (not decoded)
    pub data: String,
}

impl DataUri {
    /// Parse a `data:<mime>;base64,<payload>` string.
    ///
    /// The payload is checked to be decodable base64 so downstream
    /// consumers can trust the artifact is not truncated garbage.
    pub fn parse(input: &str) -> CoreResult<Self> {
        let rest = input
            .strip_prefix("data:")
            .ok_or_else(|| CoreError::parse("not a data URI (missing data: prefix)"))?;

        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| CoreError::parse("data URI has no payload separator"))?;

        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| CoreError::parse("data URI is not base64-encoded"))?;

        if mime_type.is_empty() {
            return Err(CoreError::parse("data URI has an empty MIME type"));
        }

        STANDARD
            .decode(payload)
            .map_err(|e| CoreError::parse(format!("invalid base64 payload: {}", e)))?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: payload.to_string(),
        })
    }

    /// Format raw bytes into a data-URI string.
    pub fn format(mime_type: &str, bytes: &[u8]) -> String {
        format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
    }

    /// Format an already-base64 payload into a data-URI string.
    pub fn from_base64(mime_type: &str, payload: &str) -> String {
        format!("data:{};base64,{}", mime_type, payload)
    }

    /// Whether the payload is an image of any subtype.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// Decode the payload into raw bytes.
    pub fn decode(&self) -> CoreResult<Vec<u8>> {
        STANDARD
            .decode(&self.data)
            .map_err(|e| CoreError::parse(format!("invalid base64 payload: {}", e)))
    }
}

impl std::fmt::Display for DataUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.data)
    }
}
