//! Stream Assembly Integration Tests
//!
//! Drives the assembler with realistic interleaved reasoning/content
//! streams and checks buffer assembly and progress label behavior.

use maquette_core::streaming::StreamEvent;
use maquette_studio::services::streaming::{StreamAssembler, PLACEHOLDER_LABEL};

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

#[test]
fn interleaved_stream_assembles_in_order() {
    let mut asm = StreamAssembler::new();
    let mut labels = vec![];

    let events = [
        reasoning("Looking at the concept image."),
        reasoning(" **Analyzing Footprint** The plan reads as an L."),
        content("<!DOCTYPE html>"),
        reasoning(" **Building Geometry** Extruding the massing."),
        content("<html><body></body></html>"),
    ];
    for event in &events {
        if let Some(label) = asm.push(event) {
            labels.push(label);
        }
    }

    assert_eq!(
        labels,
        vec![
            PLACEHOLDER_LABEL.to_string(),
            "Analyzing Footprint".to_string(),
            "Building Geometry".to_string(),
        ]
    );
    assert_eq!(asm.finish(), "<!DOCTYPE html><html><body></body></html>");
}

#[test]
fn label_never_reverts_to_earlier_stage() {
    let mut asm = StreamAssembler::new();
    asm.push(&reasoning("**Step One**"));
    asm.push(&reasoning(" more text "));
    asm.push(&reasoning("**Step Two**"));

    // Plain narration after the second header keeps Step Two current
    let change = asm.push(&reasoning(" still refining details"));
    assert!(change.is_none());
    assert_eq!(asm.label(), Some("Step Two"));
}

#[test]
fn emphasis_split_across_fragments_is_recovered() {
    let mut asm = StreamAssembler::new();
    asm.push(&reasoning("**Facade"));
    asm.push(&reasoning(" and Glazing"));
    let change = asm.push(&reasoning("**"));
    assert_eq!(change.as_deref(), Some("Facade and Glazing"));
}

#[test]
fn content_only_stream_yields_buffer_without_labels() {
    let mut asm = StreamAssembler::new();
    let mut label_changes = 0;
    for chunk in ["<html>", "<body>", "</body>", "</html>"] {
        if asm.push(&content(chunk)).is_some() {
            label_changes += 1;
        }
    }
    assert_eq!(label_changes, 0);
    assert_eq!(asm.finish(), "<html><body></body></html>");
}
