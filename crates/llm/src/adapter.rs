//! Gemini Stream Adapter
//!
//! Handles the Gemini SSE format for `streamGenerateContent` responses.
//! Parts flagged `thought: true` carry reasoning narration; plain text
//! parts carry the document being generated.

use serde::Deserialize;

use maquette_core::streaming::{AdapterError, FragmentAdapter, StreamEvent};

/// Wire shape of one generateContent (or stream chunk) response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub thought: bool,
    #[serde(default)]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
    #[serde(default)]
    pub thoughts_token_count: Option<u32>,
}

/// Adapter for the Gemini streaming format.
pub struct GeminiStreamAdapter {
    /// Whether a Complete event has already been emitted for this stream
    finished: bool,
}

impl GeminiStreamAdapter {
    pub fn new() -> Self {
        Self { finished: false }
    }
}

impl Default for GeminiStreamAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentAdapter for GeminiStreamAdapter {
    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn adapt(&mut self, input: &str) -> Result<Vec<StreamEvent>, AdapterError> {
        let trimmed = input.trim();

        // Handle SSE format
        let json_str = if let Some(rest) = trimmed.strip_prefix("data: ") {
            rest
        } else if trimmed.is_empty() {
            return Ok(vec![]);
        } else {
            trimmed
        };

        if json_str.is_empty() || json_str == "[DONE]" {
            return Ok(vec![]);
        }

        let chunk: GenerateContentResponse =
            serde_json::from_str(json_str).map_err(|e| AdapterError::ParseError(e.to_string()))?;

        let mut events = vec![];

        if let Some(usage) = chunk.usage_metadata {
            events.push(StreamEvent::Usage {
                prompt_tokens: usage.prompt_token_count,
                output_tokens: usage.candidates_token_count,
                thoughts_tokens: usage.thoughts_token_count,
            });
        }

        for candidate in chunk.candidates {
            if let Some(content) = candidate.content {
                for part in content.parts {
                    let Some(text) = part.text else {
                        continue;
                    };
                    if text.is_empty() {
                        continue;
                    }
                    if part.thought {
                        events.push(StreamEvent::ReasoningDelta { content: text });
                    } else {
                        events.push(StreamEvent::ContentDelta { content: text });
                    }
                }
            }

            if let Some(reason) = candidate.finish_reason {
                if !self.finished {
                    self.finished = true;
                    events.push(StreamEvent::Complete {
                        finish_reason: Some(reason),
                    });
                }
            }
        }

        Ok(events)
    }

    fn reset(&mut self) {
        self.finished = false;
    }
}
