//! Document Extraction and Transform Integration Tests
//!
//! Exercises the extraction priority ladder on realistic model output and
//! the two post-processing passes on extracted documents.

use maquette_studio::services::document::{
    extract_document, rescale_camera_distance, suppress_overlays, ExtractionRule,
    DEFAULT_CAMERA_FACTOR,
};

const COMPLETE_DOC: &str = "<!DOCTYPE html>\n<html>\n<head><title>Tower</title></head>\n<body>\n<div id=\"info\">Drag to orbit</div>\n<script>\ncamera.position.set(30, 40, 50);\n</script>\n</body>\n</html>";

#[test]
fn bounded_document_survives_conversational_wrapping() {
    let raw = format!(
        "Of course! Here's an interactive model of your tower:\n\n{}\n\nEnjoy exploring it!",
        COMPLETE_DOC
    );
    let result = extract_document(&raw);
    assert_eq!(result.rule, ExtractionRule::BoundedDocument);
    assert_eq!(result.content, COMPLETE_DOC);
}

#[test]
fn bounded_document_inside_fence_uses_bounded_rule() {
    let raw = format!("```html\n{}\n```", COMPLETE_DOC);
    let result = extract_document(&raw);
    // Bounded match is never second-guessed by the fence rule
    assert_eq!(result.rule, ExtractionRule::BoundedDocument);
    assert_eq!(result.content, COMPLETE_DOC);
}

#[test]
fn truncated_generation_recovers_tail() {
    let raw = "Let me build that.\n```html\n<!DOCTYPE html>\n<html><body><script>const geometry = new THREE.BoxGeometry(";
    let result = extract_document(raw);
    assert_eq!(result.rule, ExtractionRule::FencedBlock);
    assert!(result.content.starts_with("<!DOCTYPE html>"));
    assert!(result.content.ends_with("BoxGeometry("));
}

#[test]
fn truncated_unfenced_generation_strips_stray_fence() {
    let raw = "<!DOCTYPE html>\n<html><body><script>let a = 1;\n```";
    let result = extract_document(raw);
    assert_eq!(result.rule, ExtractionRule::UnboundedTail);
    assert!(result.content.ends_with("let a = 1;"));
}

#[test]
fn refusal_text_falls_back_raw() {
    let raw = "  I'm unable to produce a 3D scene from this image.  ";
    let result = extract_document(raw);
    assert_eq!(result.rule, ExtractionRule::RawFallback);
    assert!(!result.is_document());
    assert_eq!(
        result.content,
        "I'm unable to produce a 3D scene from this image."
    );
}

#[test]
fn transforms_compose_on_extracted_document() {
    let extracted = extract_document(COMPLETE_DOC);
    let doc = suppress_overlays(&extracted.content);
    let doc = rescale_camera_distance(&doc, DEFAULT_CAMERA_FACTOR);

    // Style block landed in the head, before the closing tag
    let style = doc.find("overlay-suppression").unwrap();
    assert!(style < doc.find("</head>").unwrap());

    // Camera pulled in by the default factor, other content untouched
    assert!(doc.contains("camera.position.set(24, 32, 40);"));
    assert!(doc.contains("<div id=\"info\">Drag to orbit</div>"));
    assert!(doc.contains("<title>Tower</title>"));
}

#[test]
fn transforms_are_order_insensitive() {
    let a = rescale_camera_distance(&suppress_overlays(COMPLETE_DOC), 0.5);
    let b = suppress_overlays(&rescale_camera_distance(COMPLETE_DOC, 0.5));
    assert_eq!(a, b);
}

#[test]
fn transforms_are_total_on_non_documents() {
    let not_a_doc = "plain refusal text";
    assert_eq!(
        rescale_camera_distance(not_a_doc, 0.5),
        not_a_doc
    );
    let suppressed = suppress_overlays(not_a_doc);
    assert!(suppressed.starts_with(not_a_doc));
    assert!(suppressed.contains("overlay-suppression"));
}
