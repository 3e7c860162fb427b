//! Embedded Runtime Boundary
//!
//! Types for the isolation boundary between the host and the sandboxed
//! rendering surface. The host has no structural visibility into the
//! embedded document; all it can do is probe the context's global scope
//! for well-known hook names and call the ones that exist.
//!
//! Every hook is optional. Absence is a capability gap, not an error.

use serde::{Deserialize, Serialize};

use maquette_core::scene::{FogSettings, LightingPreset, SceneParams};

/// The named capability hooks an embedded document may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeHook {
    UpdateParams,
    SetLightingPreset,
    UpdateFog,
    GetSurfaceArea,
    GetFloorArea,
    GetObj,
    GetScreenshot,
}

impl RuntimeHook {
    /// All hooks, in probe order.
    pub const ALL: [RuntimeHook; 7] = [
        RuntimeHook::UpdateParams,
        RuntimeHook::SetLightingPreset,
        RuntimeHook::UpdateFog,
        RuntimeHook::GetSurfaceArea,
        RuntimeHook::GetFloorArea,
        RuntimeHook::GetObj,
        RuntimeHook::GetScreenshot,
    ];

    /// The symbol name probed on the context's global scope.
    pub fn symbol(&self) -> &'static str {
        match self {
            RuntimeHook::UpdateParams => "updateParams",
            RuntimeHook::SetLightingPreset => "setLightingPreset",
            RuntimeHook::UpdateFog => "updateFog",
            RuntimeHook::GetSurfaceArea => "getSurfaceArea",
            RuntimeHook::GetFloorArea => "getFloorArea",
            RuntimeHook::GetObj => "getOBJ",
            RuntimeHook::GetScreenshot => "getScreenshot",
        }
    }
}

/// A call into the embedded context, with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum HookCall {
    UpdateParams(SceneParams),
    SetLightingPreset(LightingPreset),
    UpdateFog(FogSettings),
    GetSurfaceArea,
    GetFloorArea,
    GetObj,
    GetScreenshot,
}

impl HookCall {
    /// The hook this call targets.
    pub fn hook(&self) -> RuntimeHook {
        match self {
            HookCall::UpdateParams(_) => RuntimeHook::UpdateParams,
            HookCall::SetLightingPreset(_) => RuntimeHook::SetLightingPreset,
            HookCall::UpdateFog(_) => RuntimeHook::UpdateFog,
            HookCall::GetSurfaceArea => RuntimeHook::GetSurfaceArea,
            HookCall::GetFloorArea => RuntimeHook::GetFloorArea,
            HookCall::GetObj => RuntimeHook::GetObj,
            HookCall::GetScreenshot => RuntimeHook::GetScreenshot,
        }
    }
}

/// Value returned by a hook invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum HookReturn {
    /// Push hooks return nothing
    Unit,
    /// Measurement queries
    Number(f64),
    /// Geometry text or screenshot data URI
    Text(String),
}

impl HookReturn {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            HookReturn::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            HookReturn::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// A present hook threw inside the sandbox.
///
/// Treated identically to a capability gap at every call site: the value
/// is not updated, nothing propagates to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeFault {
    pub message: String,
}

impl RuntimeFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for RuntimeFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "embedded runtime fault: {}", self.message)
    }
}

impl std::error::Error for RuntimeFault {}

/// Host-side handle onto one embedded execution context's global scope.
///
/// Valid for the lifetime of one generation; a regeneration produces a
/// fresh context and a fresh handle.
pub trait EmbeddedRuntime: Send + Sync {
    /// Whether the named hook is currently present on the global scope.
    fn has_hook(&self, hook: RuntimeHook) -> bool;

    /// Invoke a hook. Callers must probe first; invoking an absent hook
    /// is a fault.
    fn invoke(&self, call: HookCall) -> Result<HookReturn, RuntimeFault>;
}

impl<T: EmbeddedRuntime + ?Sized> EmbeddedRuntime for std::sync::Arc<T> {
    fn has_hook(&self, hook: RuntimeHook) -> bool {
        (**self).has_hook(hook)
    }

    fn invoke(&self, call: HookCall) -> Result<HookReturn, RuntimeFault> {
        (**self).invoke(call)
    }
}

/// The explicit optional-capability set for one embedded-context handle.
///
/// Makes the degrade-gracefully contract queryable instead of implicit in
/// call-site guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capabilities {
    pub update_params: bool,
    pub set_lighting_preset: bool,
    pub update_fog: bool,
    pub get_surface_area: bool,
    pub get_floor_area: bool,
    pub get_obj: bool,
    pub get_screenshot: bool,
}

impl Capabilities {
    /// Probe every hook on the given runtime.
    pub fn probe<R: EmbeddedRuntime + ?Sized>(runtime: &R) -> Self {
        Self {
            update_params: runtime.has_hook(RuntimeHook::UpdateParams),
            set_lighting_preset: runtime.has_hook(RuntimeHook::SetLightingPreset),
            update_fog: runtime.has_hook(RuntimeHook::UpdateFog),
            get_surface_area: runtime.has_hook(RuntimeHook::GetSurfaceArea),
            get_floor_area: runtime.has_hook(RuntimeHook::GetFloorArea),
            get_obj: runtime.has_hook(RuntimeHook::GetObj),
            get_screenshot: runtime.has_hook(RuntimeHook::GetScreenshot),
        }
    }

    pub fn supports(&self, hook: RuntimeHook) -> bool {
        match hook {
            RuntimeHook::UpdateParams => self.update_params,
            RuntimeHook::SetLightingPreset => self.set_lighting_preset,
            RuntimeHook::UpdateFog => self.update_fog,
            RuntimeHook::GetSurfaceArea => self.get_surface_area,
            RuntimeHook::GetFloorArea => self.get_floor_area,
            RuntimeHook::GetObj => self.get_obj,
            RuntimeHook::GetScreenshot => self.get_screenshot,
        }
    }

    /// A document without the primary hook cannot be driven at all.
    pub fn is_inert(&self) -> bool {
        !self.update_params
    }
}
