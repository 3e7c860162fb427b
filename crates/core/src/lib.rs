//! Maquette Core
//!
//! Foundational types for the Maquette Studio workspace. This crate has
//! zero dependencies on application-level code (HTTP clients, providers,
//! the bridge, etc.).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `streaming` - Unified stream event types and the fragment-adapter trait
//! - `scene` - Control-surface value types (`SceneParams`, `SceneSnapshot`, ...)
//! - `data_uri` - Base64 data-URI parsing and formatting
//!
//! ## Design Principles
//!
//! 1. **Minimal dependencies (serde/thiserror/base64)** - keeps build times low
//! 2. **Trait-based abstractions** - the adapter seam enables mocking and testing
//! 3. **Unidirectional dependency** - this crate depends on nothing else in the workspace

pub mod data_uri;
pub mod error;
pub mod scene;
pub mod streaming;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Streaming Types ────────────────────────────────────────────────────
pub use streaming::{AdapterError, FragmentAdapter, StreamEvent};

// ── Scene Types ────────────────────────────────────────────────────────
pub use scene::{
    FogSettings, LightingPreset, Measurements, SceneParams, SceneSnapshot, MAX_FOG_DENSITY,
};

// ── Data URIs ──────────────────────────────────────────────────────────
pub use data_uri::DataUri;
