//! Scene Control Types
//!
//! Value types for the parametric control surface of a generated 3D
//! document: structure parameters, lighting presets, atmosphere settings,
//! and the immutable snapshot handed to the runtime bridge on each push.
//!
//! The host owns one mutable copy of this state; the bridge only ever
//! receives snapshots, never a live reference into host state.

use serde::{Deserialize, Serialize};

/// Maximum fog density the embedded documents accept.
pub const MAX_FOG_DENSITY: f64 = 0.1;

/// Structure parameters pushed through the `updateParams` hook.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneParams {
    /// Overall footprint scale multiplier
    pub scale: f64,
    /// Storey height multiplier
    pub height: f64,
    /// Number of levels/floors
    pub levels: u32,
}

impl SceneParams {
    /// Create params clamped to the ranges the generated documents handle.
    pub fn new(scale: f64, height: f64, levels: u32) -> Self {
        Self {
            scale: scale.clamp(0.1, 3.0),
            height: height.clamp(0.1, 3.0),
            levels: levels.clamp(1, 100),
        }
    }
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            height: 1.0,
            levels: 20,
        }
    }
}

/// Lighting presets understood by the `setLightingPreset` hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightingPreset {
    Day,
    Sunset,
    Night,
    Overcast,
}

impl LightingPreset {
    /// The name passed across the runtime boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            LightingPreset::Day => "day",
            LightingPreset::Sunset => "sunset",
            LightingPreset::Night => "night",
            LightingPreset::Overcast => "overcast",
        }
    }
}

impl Default for LightingPreset {
    fn default() -> Self {
        Self::Day
    }
}

impl std::str::FromStr for LightingPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(LightingPreset::Day),
            "sunset" => Ok(LightingPreset::Sunset),
            "night" => Ok(LightingPreset::Night),
            "overcast" => Ok(LightingPreset::Overcast),
            other => Err(format!("Unknown lighting preset: {}", other)),
        }
    }
}

/// Atmosphere settings pushed through the `updateFog` hook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FogSettings {
    /// CSS-style hex color
    pub color: String,
    /// Fog density, clamped to [0.0, MAX_FOG_DENSITY]
    pub density: f64,
}

impl FogSettings {
    /// Create settings with the density clamped into the accepted range,
    /// so every constructed value is valid to push.
    pub fn new(color: impl Into<String>, density: f64) -> Self {
        Self {
            color: color.into(),
            density: density.clamp(0.0, MAX_FOG_DENSITY),
        }
    }
}

impl Default for FogSettings {
    fn default() -> Self {
        Self {
            color: "#c8d4e0".to_string(),
            density: 0.015,
        }
    }
}

/// Immutable snapshot of the full control state, taken per push.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub params: SceneParams,
    pub lighting: LightingPreset,
    pub fog: FogSettings,
}

/// Derived measurements pulled back from the embedded document.
///
/// Each field is independently optional: a missing hook, or a hook that
/// failed, simply leaves the value unset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_area: Option<f64>,
}
