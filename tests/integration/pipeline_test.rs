//! End-to-End Pipeline Integration Tests
//!
//! Runs the full chain with scripted collaborators: fragment stream ->
//! assembler -> extraction -> transforms -> embedded context -> bridge
//! readiness and initial push.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use maquette_core::streaming::StreamEvent;
use maquette_studio::services::bridge::{BridgePhase, HookCall, RuntimeBridge};
use maquette_studio::services::document::ExtractionRule;
use maquette_studio::services::generation::{GenerationService, TransformOptions};
use maquette_studio::{StudioError, StudioState};

use crate::support::{ScriptedProvider, ScriptedRuntime};

fn reasoning(text: &str) -> StreamEvent {
    StreamEvent::ReasoningDelta {
        content: text.to_string(),
    }
}

fn content(text: &str) -> StreamEvent {
    StreamEvent::ContentDelta {
        content: text.to_string(),
    }
}

fn concept_image() -> String {
    maquette_core::data_uri::DataUri::format("image/png", b"concept")
}

#[tokio::test(start_paused = true)]
async fn full_generation_drives_embedded_context() -> Result<()> {
    let provider = Arc::new(ScriptedProvider::new(vec![
        reasoning("**Analyzing Footprint**"),
        content("Sure! ```html\n<!DOCTYPE html><html><head></head><body><script>camera.position.set(10, 20, 30);</script></body></html>\n```"),
    ]));
    let service = GenerationService::new(provider);
    let state = StudioState::new();

    let (progress_tx, mut progress_rx) = mpsc::channel(16);
    let model = service
        .generate_model(&concept_image(), &TransformOptions::default(), Some(progress_tx))
        .await?;

    // The assembled buffer was the fenced text; the extractor pulled the
    // bounded document out of it and both transforms ran
    assert_eq!(model.extraction_rule, ExtractionRule::BoundedDocument);
    assert!(model.document.starts_with("<!DOCTYPE html>"));
    assert!(model.document.contains("overlay-suppression"));
    assert!(model.document.contains("camera.position.set(8, 16, 24);"));
    assert!(!model.document.contains("Sure!"));

    // Progress labels arrived as the reasoning streamed
    let label = progress_rx.recv().await.unwrap();
    assert_eq!(label, "Analyzing Footprint");

    // Hand the document to the (scripted) context and bring up the bridge
    let runtime = Arc::new(ScriptedRuntime::appearing_after(3));
    let mut bridge = RuntimeBridge::new(Arc::clone(&runtime));
    let phase = bridge.activate(&state.snapshot().await).await;
    assert_eq!(phase, BridgePhase::Ready);

    // Initial push carried the default params (1.0, 1.0, 20)
    let calls = runtime.calls();
    match &calls[0] {
        HookCall::UpdateParams(params) => {
            assert_eq!(params.scale, 1.0);
            assert_eq!(params.height, 1.0);
            assert_eq!(params.levels, 20);
        }
        other => panic!("expected UpdateParams first, got {:?}", other),
    }

    // Measurements flow back into host state
    state.record_measurements(bridge.measurements()).await;
    assert_eq!(state.measurements().await.surface_area, Some(2350.0));
    assert_eq!(state.measurements().await.floor_area, Some(780.0));

    Ok(())
}

#[tokio::test]
async fn reasoning_only_stream_surfaces_empty_artifact() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        reasoning("**Thinking**"),
        reasoning(" still thinking, producing nothing"),
    ]));
    let service = GenerationService::new(provider);

    let err = service
        .generate_model(&concept_image(), &TransformOptions::default(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::EmptyArtifact(_)));
}

#[tokio::test]
async fn truncated_stream_still_yields_usable_document() -> Result<()> {
    // Stream cut off mid-document: no closing tag, stray fence at the end
    let provider = Arc::new(ScriptedProvider::new(vec![
        reasoning("**Building Geometry**"),
        content("<!DOCTYPE html>\n<html><body><script>const s = 1;\n"),
        content("```"),
    ]));
    let service = GenerationService::new(provider);

    let model = service
        .generate_model(&concept_image(), &TransformOptions::default(), None)
        .await?;
    assert_eq!(model.extraction_rule, ExtractionRule::UnboundedTail);
    assert!(model.document.contains("const s = 1;"));
    assert!(!model.document.contains("```"));
    Ok(())
}

#[tokio::test]
async fn non_document_output_passes_through_flagged() -> Result<()> {
    let provider = Arc::new(ScriptedProvider::new(vec![content(
        "I cannot build a scene from this image.",
    )]));
    let service = GenerationService::new(provider);

    let model = service
        .generate_model(&concept_image(), &TransformOptions::default(), None)
        .await?;
    // The caller sees the rule and treats this as a likely failure
    assert_eq!(model.extraction_rule, ExtractionRule::RawFallback);
    Ok(())
}

#[tokio::test]
async fn concept_image_and_render_round_trip() -> Result<()> {
    let provider = Arc::new(ScriptedProvider::new(vec![]));
    let service = GenerationService::new(provider);

    let image = service
        .generate_concept_image("a cliffside museum", Default::default(), true)
        .await?;
    assert!(image.starts_with("data:image/png;base64,"));

    // The scripted provider has no render response
    let err = service
        .generate_realistic_render(&image, "dusk, warm light")
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::Generation(_)));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn inert_document_degrades_without_failing_generation() -> Result<()> {
    let provider = Arc::new(ScriptedProvider::new(vec![content(
        "<!DOCTYPE html><html><body>static scene, no hooks</body></html>",
    )]));
    let service = GenerationService::new(provider);

    // Generation itself succeeds
    let model = service
        .generate_model(&concept_image(), &TransformOptions::default(), None)
        .await?;
    assert_eq!(model.extraction_rule, ExtractionRule::BoundedDocument);

    // The bridge abandons the context after the poll budget; no error
    let runtime = Arc::new(ScriptedRuntime::inert());
    let mut bridge = RuntimeBridge::new(Arc::clone(&runtime));
    let phase = bridge.activate(&StudioState::new().snapshot().await).await;
    assert_eq!(phase, BridgePhase::Abandoned);
    assert_eq!(bridge.measurements().surface_area, None);
    Ok(())
}
