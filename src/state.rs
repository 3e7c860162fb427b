//! Application State
//!
//! Host-owned state container for the current generation: scene control
//! state, pulled measurements, and the live progress label.
//!
//! The bridge never reads this directly; it receives immutable
//! `SceneSnapshot`s per push. Only host-side callbacks write back, all
//! from the single-threaded callback chain.

use std::sync::Arc;
use tokio::sync::RwLock;

use maquette_core::scene::{
    FogSettings, LightingPreset, Measurements, SceneParams, SceneSnapshot,
};

#[derive(Debug, Default)]
struct StudioStateInner {
    snapshot: SceneSnapshot,
    measurements: Measurements,
    progress_label: Option<String>,
}

/// Shared application state
#[derive(Debug, Clone, Default)]
pub struct StudioState {
    inner: Arc<RwLock<StudioStateInner>>,
}

impl StudioState {
    /// Create state with default scene controls
    pub fn new() -> Self {
        Self::default()
    }

    /// Immutable snapshot of the current scene control state
    pub async fn snapshot(&self) -> SceneSnapshot {
        self.inner.read().await.snapshot.clone()
    }

    /// Update structure parameters; returns the new snapshot to push
    pub async fn update_params(&self, params: SceneParams) -> SceneSnapshot {
        let mut inner = self.inner.write().await;
        inner.snapshot.params = params;
        inner.snapshot.clone()
    }

    /// Update the lighting preset; returns the new snapshot to push
    pub async fn set_lighting(&self, preset: LightingPreset) -> SceneSnapshot {
        let mut inner = self.inner.write().await;
        inner.snapshot.lighting = preset;
        inner.snapshot.clone()
    }

    /// Update atmosphere settings; returns the new snapshot to push
    pub async fn set_fog(&self, fog: FogSettings) -> SceneSnapshot {
        let mut inner = self.inner.write().await;
        inner.snapshot.fog = fog;
        inner.snapshot.clone()
    }

    /// Record measurements pulled from the embedded document
    pub async fn record_measurements(&self, measurements: Measurements) {
        self.inner.write().await.measurements = measurements;
    }

    /// Latest recorded measurements
    pub async fn measurements(&self) -> Measurements {
        self.inner.read().await.measurements
    }

    /// Update the progress label shown during generation
    pub async fn set_progress_label(&self, label: impl Into<String>) {
        self.inner.write().await.progress_label = Some(label.into());
    }

    /// Clear the progress label (generation finished or was replaced)
    pub async fn clear_progress_label(&self) {
        self.inner.write().await.progress_label = None;
    }

    /// Current progress label, if a generation is running
    pub async fn progress_label(&self) -> Option<String> {
        self.inner.read().await.progress_label.clone()
    }

    /// Reset scene controls and measurements for a fresh generation.
    /// The old context's values never carry over.
    pub async fn reset_for_new_generation(&self) {
        let mut inner = self.inner.write().await;
        inner.snapshot = SceneSnapshot::default();
        inner.measurements = Measurements::default();
        inner.progress_label = None;
    }
}
