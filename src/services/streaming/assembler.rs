//! Stream Assembler
//!
//! Consumes the ordered stream of generation events for one request:
//! final-content fragments accumulate into the document buffer, reasoning
//! fragments feed a scratch buffer from which a human-readable progress
//! label is derived.
//!
//! The reasoning stream is unstructured prose; the only reliably parseable
//! structure is the `**...**` emphasis markup the model tends to use for
//! section headers, so the most recent emphasized phrase stands in for
//! "current stage of work".

use regex::Regex;

use maquette_core::streaming::StreamEvent;

/// Label shown before any emphasized phrase has appeared.
pub const PLACEHOLDER_LABEL: &str = "Analyzing concept";

/// Scratch length under which the placeholder is still worth emitting.
/// Past this, reasoning without headers just keeps the current label.
const SHORT_SCRATCH_THRESHOLD: usize = 160;

/// Accumulates one generation request's stream.
pub struct StreamAssembler {
    content: String,
    scratch: String,
    label: Option<String>,
    emphasis: Regex,
}

impl StreamAssembler {
    pub fn new() -> Self {
        Self {
            content: String::new(),
            scratch: String::new(),
            label: None,
            emphasis: Regex::new(r"\*\*([^*]+)\*\*").unwrap(),
        }
    }

    /// Consume one event.
    ///
    /// Returns `Some(label)` only when the progress label changed, so
    /// callers never re-render an unchanged label.
    pub fn push(&mut self, event: &StreamEvent) -> Option<String> {
        match event {
            StreamEvent::ContentDelta { content } => {
                self.content.push_str(content);
                None
            }
            StreamEvent::ReasoningDelta { content } => {
                self.scratch.push_str(content);
                self.recompute_label()
            }
            _ => None,
        }
    }

    fn recompute_label(&mut self) -> Option<String> {
        let candidate = match self.last_emphasized_span() {
            Some(span) => span,
            None if self.scratch.len() < SHORT_SCRATCH_THRESHOLD => {
                PLACEHOLDER_LABEL.to_string()
            }
            // Long scratch with no headers: keep whatever we last showed
            None => return None,
        };

        if self.label.as_deref() == Some(candidate.as_str()) {
            return None;
        }
        self.label = Some(candidate.clone());
        Some(candidate)
    }

    /// Last `**...**` span in the scratch buffer, delimiters and
    /// surrounding whitespace stripped. Spans split across fragment
    /// boundaries are picked up because the whole scratch is rescanned.
    fn last_emphasized_span(&self) -> Option<String> {
        self.emphasis
            .captures_iter(&self.scratch)
            .last()
            .map(|caps| caps[1].trim().to_string())
            .filter(|span| !span.is_empty())
    }

    /// Current progress label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Length of the accumulated content buffer.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// End of stream: yield the accumulated buffer, discard the scratch.
    pub fn finish(self) -> String {
        self.content
    }
}

impl Default for StreamAssembler {
    fn default() -> Self {
        Self::new()
    }
}
