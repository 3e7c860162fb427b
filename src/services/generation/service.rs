//! Generation Service
//!
//! Orchestrates one generation end to end: provider stream -> assembler
//! (with live progress labels) -> extractor -> transforms. The output is
//! the document handed verbatim to the sandboxed rendering surface.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, warn};
use uuid::Uuid;

use maquette_core::data_uri::DataUri;
use maquette_llm::{AspectRatio, GenerationProvider};

use crate::services::document::{
    extract_document, rescale_camera_distance, suppress_overlays, ExtractionRule,
    DEFAULT_CAMERA_FACTOR,
};
use crate::services::streaming::StreamAssembler;
use crate::utils::error::{StudioError, StudioResult};

/// Options for the document post-processing passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformOptions {
    /// Factor applied to generated camera distances
    pub camera_distance_factor: f64,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            camera_distance_factor: DEFAULT_CAMERA_FACTOR,
        }
    }
}

/// A generated, transformed, embeddable 3D document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedModel {
    /// Fresh id per generation; a new generation replaces the old one
    pub id: Uuid,
    /// The transformed document, ready to embed
    pub document: String,
    /// Which extraction rule recovered the document
    pub extraction_rule: ExtractionRule,
    /// Length of the raw assembled buffer, for diagnostics
    pub source_len: usize,
}

/// Orchestrates the remote generation calls and the document pipeline.
pub struct GenerationService {
    provider: Arc<dyn GenerationProvider>,
}

impl GenerationService {
    pub fn new(provider: Arc<dyn GenerationProvider>) -> Self {
        Self { provider }
    }

    /// Generate a concept image from a design brief.
    ///
    /// `optimize` asks the provider to expand the prompt into a richer
    /// photographic description before rendering.
    pub async fn generate_concept_image(
        &self,
        brief: &str,
        aspect_ratio: AspectRatio,
        optimize: bool,
    ) -> StudioResult<String> {
        if brief.trim().is_empty() {
            return Err(StudioError::validation("design brief is empty"));
        }
        let prompt = super::prompts::image_prompt(brief);
        let uri = self
            .provider
            .generate_image(&prompt, aspect_ratio, optimize)
            .await?;
        Ok(uri)
    }

    /// Generate the interactive 3D document from a concept image.
    ///
    /// Progress labels derived from the model's reasoning stream are sent
    /// through `progress_tx` as they change. The returned document has
    /// both post-processing passes applied.
    pub async fn generate_model(
        &self,
        image_data_uri: &str,
        options: &TransformOptions,
        progress_tx: Option<mpsc::Sender<String>>,
    ) -> StudioResult<GeneratedModel> {
        let image = DataUri::parse(image_data_uri)?;
        if !image.is_image() {
            return Err(StudioError::validation(format!(
                "expected an image data URI, got {}",
                image.mime_type
            )));
        }

        let (tx, mut rx) = mpsc::channel(64);
        let provider = Arc::clone(&self.provider);
        let image_uri = image_data_uri.to_string();
        let prompt = super::prompts::document_prompt();

        let request = tokio::spawn(async move {
            provider.generate_document(&image_uri, &prompt, tx).await
        });

        let mut assembler = StreamAssembler::new();
        while let Some(event) = rx.recv().await {
            if let Some(label) = assembler.push(&event) {
                debug!(label = %label, "generation stage changed");
                if let Some(progress) = &progress_tx {
                    // A dropped progress receiver only loses labels
                    let _ = progress.send(label).await;
                }
            }
        }

        let raw = request
            .await
            .map_err(|e| StudioError::internal(format!("generation task failed: {}", e)))??;

        let buffer = assembler.finish();
        debug!(
            raw_len = raw.len(),
            buffer_len = buffer.len(),
            "document stream complete"
        );

        let extraction = extract_document(&buffer);
        if extraction.content.trim().is_empty() {
            return Err(StudioError::empty_artifact(
                "model produced no document content",
            ));
        }
        if !extraction.is_document() {
            warn!(
                len = extraction.content.len(),
                "no document-root marker found; passing raw content through"
            );
        }

        let document = suppress_overlays(&extraction.content);
        let document = rescale_camera_distance(&document, options.camera_distance_factor);

        Ok(GeneratedModel {
            id: Uuid::new_v4(),
            document,
            extraction_rule: extraction.rule,
            source_len: buffer.len(),
        })
    }

    /// Generate a photorealistic render from a runtime screenshot.
    pub async fn generate_realistic_render(
        &self,
        screenshot_data_uri: &str,
        style: &str,
    ) -> StudioResult<String> {
        DataUri::parse(screenshot_data_uri)?;
        let prompt = super::prompts::render_prompt(style);
        let uri = self
            .provider
            .generate_render(screenshot_data_uri, &prompt)
            .await?;
        Ok(uri)
    }
}
