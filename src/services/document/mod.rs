//! Document Pipeline
//!
//! Extraction of an embeddable document from raw model output, and the
//! post-processing transforms applied before embedding.

pub mod extractor;
pub mod transformer;

pub use extractor::{extract_document, DocumentExtractor, Extraction, ExtractionRule};
pub use transformer::{rescale_camera_distance, suppress_overlays, DEFAULT_CAMERA_FACTOR};
