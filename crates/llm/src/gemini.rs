//! Gemini Provider
//!
//! Implementation of the GenerationProvider trait over the Gemini API:
//! non-streaming `generateContent` calls for images and renders, and a
//! streaming `streamGenerateContent` call (SSE) for 3D documents with
//! reasoning narration enabled.

use async_trait::async_trait;
use futures_util::StreamExt;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use maquette_core::data_uri::DataUri;
use maquette_core::streaming::{FragmentAdapter, StreamEvent};

use super::adapter::{GeminiStreamAdapter, GenerateContentResponse};
use super::provider::{missing_api_key_error, parse_http_error, GenerationProvider};
use super::types::{AspectRatio, GenError, GenResult, ProviderConfig};

/// Default Gemini API endpoint
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini generation provider
pub struct GeminiProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider with the given configuration.
    pub fn new(config: ProviderConfig) -> GenResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            client: reqwest::Client::new(),
        })
    }

    /// Get the API base URL
    fn base_url(&self) -> &str {
        self.config.base_url.as_deref().unwrap_or(GEMINI_API_URL)
    }

    /// Build a model endpoint URL, e.g. `.../v1beta/models/<model>:generateContent`
    fn model_url(&self, model: &str, method: &str) -> String {
        format!(
            "{}/v1beta/models/{}:{}",
            self.base_url().trim_end_matches('/'),
            model,
            method
        )
    }

    fn api_key(&self) -> GenResult<&str> {
        self.config
            .api_key
            .as_deref()
            .ok_or_else(|| missing_api_key_error("gemini"))
    }

    /// Build the request body for an image-producing call.
    fn build_image_request_body(
        &self,
        parts: Vec<serde_json::Value>,
        aspect_ratio: AspectRatio,
    ) -> serde_json::Value {
        serde_json::json!({
            "contents": [{ "parts": parts }],
            "generationConfig": {
                "responseModalities": ["TEXT", "IMAGE"],
                "imageConfig": { "aspectRatio": aspect_ratio.as_str() }
            }
        })
    }

    /// Build the request body for the streamed document call.
    fn build_document_request_body(
        &self,
        image: &DataUri,
        prompt: &str,
    ) -> serde_json::Value {
        let mut generation_config = serde_json::json!({
            "temperature": self.config.temperature,
            "maxOutputTokens": self.config.max_output_tokens,
        });

        if self.config.enable_thoughts {
            let mut thinking = serde_json::json!({ "includeThoughts": true });
            if let Some(budget) = self.config.thinking_budget {
                thinking["thinkingBudget"] = serde_json::json!(budget);
            }
            generation_config["thinkingConfig"] = thinking;
        }

        serde_json::json!({
            "contents": [{
                "parts": [
                    { "inlineData": { "mimeType": image.mime_type, "data": image.data } },
                    { "text": prompt }
                ]
            }],
            "generationConfig": generation_config
        })
    }

    async fn post_generate(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> GenResult<reqwest::Response> {
        let api_key = self.api_key()?;
        self.client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GenError::NetworkError {
                message: e.to_string(),
            })
    }

    /// Pull the first inline image out of a generateContent response.
    fn image_from_response(response: &GenerateContentResponse) -> GenResult<String> {
        for candidate in &response.candidates {
            if let Some(content) = &candidate.content {
                for part in &content.parts {
                    if let Some(inline) = &part.inline_data {
                        return Ok(DataUri::from_base64(&inline.mime_type, &inline.data));
                    }
                }
            }
        }
        Err(GenError::EmptyArtifact {
            message: "response contained no image payload".to_string(),
        })
    }

    /// Shared path for the two image-producing calls.
    async fn generate_image_like(
        &self,
        parts: Vec<serde_json::Value>,
        aspect_ratio: AspectRatio,
    ) -> GenResult<String> {
        let url = self.model_url(&self.config.image_model, "generateContent");
        let body = self.build_image_request_body(parts, aspect_ratio);

        let response = self.post_generate(&url, &body).await?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| GenError::NetworkError {
            message: e.to_string(),
        })?;
        if status != 200 {
            return Err(parse_http_error(status, &text, "gemini"));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&text).map_err(|e| GenError::ParseError {
                message: format!("Failed to parse response: {}", e),
            })?;
        Self::image_from_response(&parsed)
    }
}

#[async_trait]
impl GenerationProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
        optimize: bool,
    ) -> GenResult<String> {
        let prompt = if optimize {
            format!(
                "First expand the following brief into a rich photographic \
                 description (composition, materials, light, atmosphere), then \
                 render that description.\n\n{}",
                prompt
            )
        } else {
            prompt.to_string()
        };

        debug!(model = %self.config.image_model, optimize, "gemini: generating concept image");
        self.generate_image_like(
            vec![serde_json::json!({ "text": prompt })],
            aspect_ratio,
        )
        .await
    }

    async fn generate_document(
        &self,
        image_data_uri: &str,
        prompt: &str,
        tx: mpsc::Sender<StreamEvent>,
    ) -> GenResult<String> {
        let image = DataUri::parse(image_data_uri).map_err(|e| GenError::InvalidRequest {
            message: format!("input image is not a valid data URI: {}", e),
        })?;
        if !image.is_image() {
            return Err(GenError::InvalidRequest {
                message: format!("expected an image payload, got {}", image.mime_type),
            });
        }

        let url = format!(
            "{}?alt=sse",
            self.model_url(&self.config.document_model, "streamGenerateContent")
        );
        let body = self.build_document_request_body(&image, prompt);

        debug!(model = %self.config.document_model, "gemini: streaming document generation");
        let response = self.post_generate(&url, &body).await?;
        let status = response.status().as_u16();
        if status != 200 {
            let text = response.text().await.map_err(|e| GenError::NetworkError {
                message: e.to_string(),
            })?;
            return Err(parse_http_error(status, &text, "gemini"));
        }

        let mut adapter = GeminiStreamAdapter::new();
        let mut accumulated = String::new();
        let mut buffer = String::new();
        let mut receiver_gone = false;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| GenError::NetworkError {
                message: e.to_string(),
            })?;
            buffer.push_str(&String::from_utf8_lossy(&chunk));

            while let Some(line_end) = buffer.find('\n') {
                let line = buffer[..line_end].to_string();
                buffer = buffer[line_end + 1..].to_string();

                let events = match adapter.adapt(&line) {
                    Ok(events) => events,
                    Err(e) => {
                        warn!(error = %e, "gemini: skipping unparseable stream line");
                        continue;
                    }
                };

                for event in events {
                    if let StreamEvent::ContentDelta { content } = &event {
                        accumulated.push_str(content);
                    }
                    if !receiver_gone && tx.send(event).await.is_err() {
                        // Receiver dropped: the caller abandoned this
                        // generation, keep accumulating for the return value
                        debug!("gemini: fragment receiver dropped");
                        receiver_gone = true;
                    }
                }
            }
        }

        // Flush a final unterminated line
        if !buffer.trim().is_empty() {
            if let Ok(events) = adapter.adapt(&buffer) {
                for event in events {
                    if let StreamEvent::ContentDelta { content } = &event {
                        accumulated.push_str(content);
                    }
                    if !receiver_gone && tx.send(event).await.is_err() {
                        receiver_gone = true;
                    }
                }
            }
        }

        Ok(accumulated)
    }

    async fn generate_render(
        &self,
        screenshot_data_uri: &str,
        style_prompt: &str,
    ) -> GenResult<String> {
        let screenshot =
            DataUri::parse(screenshot_data_uri).map_err(|e| GenError::InvalidRequest {
                message: format!("screenshot is not a valid data URI: {}", e),
            })?;

        debug!(model = %self.config.image_model, "gemini: generating realistic render");
        self.generate_image_like(
            vec![
                serde_json::json!({
                    "inlineData": { "mimeType": screenshot.mime_type, "data": screenshot.data }
                }),
                serde_json::json!({ "text": style_prompt }),
            ],
            AspectRatio::Landscape,
        )
        .await
    }

    async fn health_check(&self) -> GenResult<()> {
        let api_key = self.api_key()?;
        let url = format!("{}/v1beta/models", self.base_url().trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .header("x-goog-api-key", api_key)
            .send()
            .await
            .map_err(|e| GenError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            let text = response.text().await.unwrap_or_default();
            return Err(parse_http_error(status, &text, "gemini"));
        }
        Ok(())
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}
