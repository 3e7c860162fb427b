//! Document Extraction
//!
//! Recovers a complete embeddable HTML document from the raw text a
//! generation model produced. Model output is frequently wrapped in
//! conversational prose or markdown fences, and may be truncated
//! mid-document when a length limit is hit, so extraction runs a strict
//! priority ladder: a clean bounded document is never second-guessed by
//! the looser rules, and the loosest rule tolerates a missing tail.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Which extraction rule produced the result.
///
/// Rules are tried strictly in this order; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionRule {
    /// Complete `<!DOCTYPE html>`/`<html>` ... `</html>` span found
    BoundedDocument,
    /// Markdown fence whose content starts with a document-root marker
    FencedBlock,
    /// Document-root marker found but no closing boundary (truncated output)
    UnboundedTail,
    /// No document-root marker anywhere; raw input returned trimmed
    RawFallback,
}

/// Result of an extraction pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub content: String,
    pub rule: ExtractionRule,
}

impl Extraction {
    /// A `RawFallback` result means no document-root marker was found;
    /// callers should treat it as a likely extraction failure.
    pub fn is_document(&self) -> bool {
        self.rule != ExtractionRule::RawFallback
    }
}

/// Document extractor with pre-compiled root-marker patterns.
pub struct DocumentExtractor {
    root_marker: Regex,
    closing_tag: Regex,
}

impl DocumentExtractor {
    pub fn new() -> Self {
        Self {
            // Doctype declaration or root-element opening tag, either case
            root_marker: Regex::new(r"(?i)<!doctype\s+html|<html[\s>]").unwrap(),
            closing_tag: Regex::new(r"(?i)</html\s*>").unwrap(),
        }
    }

    /// Extract the best-effort complete document from `text`.
    ///
    /// Total: always returns a result, falling back to the trimmed raw
    /// input when no document-root marker exists anywhere.
    pub fn extract(&self, text: &str) -> Extraction {
        if let Some(content) = self.bounded_document(text) {
            return Extraction {
                content,
                rule: ExtractionRule::BoundedDocument,
            };
        }
        if let Some(content) = self.fenced_block(text) {
            return Extraction {
                content,
                rule: ExtractionRule::FencedBlock,
            };
        }
        if let Some(content) = self.unbounded_tail(text) {
            return Extraction {
                content,
                rule: ExtractionRule::UnboundedTail,
            };
        }
        Extraction {
            content: text.trim().to_string(),
            rule: ExtractionRule::RawFallback,
        }
    }

    /// Rule 1: opening marker followed eventually by the closing root tag.
    /// Returns exactly that span, inclusive.
    fn bounded_document(&self, text: &str) -> Option<String> {
        let open = self.root_marker.find(text)?;
        let close = self.closing_tag.find(&text[open.start()..])?;
        Some(text[open.start()..open.start() + close.end()].to_string())
    }

    /// Rule 2: first triple-backtick fence whose inner content starts with
    /// a document-root marker. Returns the inner content without fences.
    fn fenced_block(&self, text: &str) -> Option<String> {
        let mut rest = text;
        while let Some(start) = rest.find("```") {
            let after_fence = &rest[start + 3..];
            // Skip an optional language tag line (e.g. "html")
            let content_start = match after_fence.find('\n') {
                Some(nl) => nl + 1,
                None => return None,
            };
            let content = &after_fence[content_start..];
            match content.find("```") {
                Some(end) => {
                    let inner = content[..end].trim();
                    if self.starts_with_root_marker(inner) {
                        return Some(inner.to_string());
                    }
                    rest = &content[end + 3..];
                }
                None => {
                    // Unclosed fence: still usable when it opens a document
                    let inner = content.trim();
                    if self.starts_with_root_marker(inner) {
                        return Some(inner.to_string());
                    }
                    return None;
                }
            }
        }
        None
    }

    /// Rule 3: marker found but no closing boundary; take everything from
    /// the marker to the end and strip a trailing stray fence.
    fn unbounded_tail(&self, text: &str) -> Option<String> {
        let open = self.root_marker.find(text)?;
        let mut tail = text[open.start()..].trim_end();
        if let Some(stripped) = tail.strip_suffix("```") {
            tail = stripped.trim_end();
        }
        Some(tail.to_string())
    }

    fn starts_with_root_marker(&self, text: &str) -> bool {
        self.root_marker
            .find(text)
            .map(|m| m.start() == 0)
            .unwrap_or(false)
    }
}

impl Default for DocumentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper constructing a fresh extractor.
pub fn extract_document(text: &str) -> Extraction {
    DocumentExtractor::new().extract(text)
}
