//! Integration Tests Module
//!
//! This module contains integration tests for the Maquette Studio core.
//! Tests cover document extraction and transforms, stream assembly with
//! progress labels, the embedded-runtime bridge lifecycle, and the full
//! generation pipeline with scripted collaborators.
//!
//! No network calls are made; the provider and the embedded runtime are
//! both scripted.

// Shared scripted collaborators (provider + runtime)
mod support;

// Document extraction and transform tests
mod document_test;

// Stream assembly and progress label tests
mod assembler_test;


// End-to-end generation pipeline tests
mod pipeline_test;
