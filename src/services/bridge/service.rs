//! Runtime Bridge
//!
//! Drives one embedded execution context through its lifecycle:
//! `Unloaded -> Polling -> Ready -> (Active | Abandoned)`.
//!
//! The sandboxed context cannot notify the host, so readiness is detected
//! by bounded polling for the primary hook. After readiness, every push
//! and pull is an independent probe-then-call: a missing hook degrades
//! that one feature, a throwing hook is caught and discarded, and nothing
//! that happens inside the sandbox can destabilize the host.

use std::time::Duration;

use tracing::{debug, warn};

use maquette_core::scene::{
    FogSettings, LightingPreset, Measurements, SceneParams, SceneSnapshot,
};

use super::runtime::{Capabilities, EmbeddedRuntime, HookCall, RuntimeHook};

/// Interval between readiness probes.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Maximum readiness probes before the context is abandoned (~30s).
pub const MAX_POLL_ATTEMPTS: u32 = 300;

/// Delay between first observing the primary hook and the initial push,
/// so the context's graphics initialization can finish.
pub const READY_GRACE: Duration = Duration::from_millis(500);

/// Lifecycle phase of one embedded context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgePhase {
    /// Context not yet loaded
    Unloaded,
    /// Load observed, probing for the primary hook
    Polling,
    /// Primary hook present, initial push done
    Ready,
    /// At least one caller-driven push has happened
    Active,
    /// Primary hook never appeared; the document is inert
    Abandoned,
}

/// Control-channel bridge for one embedded context.
///
/// One bridge per generation: regenerating discards the bridge along with
/// its context and starts over from `Unloaded`.
pub struct RuntimeBridge<R: EmbeddedRuntime> {
    runtime: R,
    phase: BridgePhase,
}

impl<R: EmbeddedRuntime> RuntimeBridge<R> {
    pub fn new(runtime: R) -> Self {
        Self {
            runtime,
            phase: BridgePhase::Unloaded,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> BridgePhase {
        self.phase
    }

    /// Probe the full capability set of the underlying context.
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::probe(&self.runtime)
    }

    /// Entered when the context signals its load event.
    ///
    /// Polls for the primary hook, waits one grace delay once it appears,
    /// performs the initial full push from `initial`, and reports the
    /// resulting phase. When the hook never appears within the attempt
    /// budget the context is abandoned: no error is raised, subsequent
    /// pushes and pulls are silent no-ops.
    pub async fn activate(&mut self, initial: &SceneSnapshot) -> BridgePhase {
        self.phase = BridgePhase::Polling;

        let mut observed_at = None;
        for attempt in 1..=MAX_POLL_ATTEMPTS {
            if self.runtime.has_hook(RuntimeHook::UpdateParams) {
                observed_at = Some(attempt);
                break;
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }

        let Some(attempt) = observed_at else {
            warn!(
                attempts = MAX_POLL_ATTEMPTS,
                "primary hook never appeared, abandoning embedded context"
            );
            self.phase = BridgePhase::Abandoned;
            return self.phase;
        };

        debug!(attempt, "primary hook observed, waiting for scene init");
        tokio::time::sleep(READY_GRACE).await;
        self.phase = BridgePhase::Ready;

        // Initial full push: each part independently guarded
        self.try_invoke(HookCall::UpdateParams(initial.params));
        self.try_invoke(HookCall::SetLightingPreset(initial.lighting));
        self.try_invoke(HookCall::UpdateFog(initial.fog.clone()));

        self.phase
    }

    /// Push structure parameters.
    pub fn push_params(&mut self, params: SceneParams) {
        if !self.can_drive() {
            return;
        }
        self.try_invoke(HookCall::UpdateParams(params));
        self.mark_active();
    }

    /// Push a lighting preset.
    pub fn push_lighting(&mut self, preset: LightingPreset) {
        if !self.can_drive() {
            return;
        }
        self.try_invoke(HookCall::SetLightingPreset(preset));
        self.mark_active();
    }

    /// Push atmosphere settings.
    pub fn push_fog(&mut self, fog: FogSettings) {
        if !self.can_drive() {
            return;
        }
        self.try_invoke(HookCall::UpdateFog(fog));
        self.mark_active();
    }

    /// Push a full snapshot (params, lighting, fog), each independently.
    pub fn push_snapshot(&mut self, snapshot: &SceneSnapshot) {
        if !self.can_drive() {
            return;
        }
        self.try_invoke(HookCall::UpdateParams(snapshot.params));
        self.try_invoke(HookCall::SetLightingPreset(snapshot.lighting));
        self.try_invoke(HookCall::UpdateFog(snapshot.fog.clone()));
        self.mark_active();
    }

    /// Query the generated structure's surface area.
    pub fn surface_area(&self) -> Option<f64> {
        if !self.can_drive() {
            return None;
        }
        self.try_invoke(HookCall::GetSurfaceArea)?.as_number()
    }

    /// Query the generated structure's total floor area.
    pub fn floor_area(&self) -> Option<f64> {
        if !self.can_drive() {
            return None;
        }
        self.try_invoke(HookCall::GetFloorArea)?.as_number()
    }

    /// Pull both measurements in one pass.
    pub fn measurements(&self) -> Measurements {
        Measurements {
            surface_area: self.surface_area(),
            floor_area: self.floor_area(),
        }
    }

    /// Export the scene geometry as OBJ text.
    pub fn export_obj(&self) -> Option<String> {
        if !self.can_drive() {
            return None;
        }
        self.try_invoke(HookCall::GetObj)?.into_text()
    }

    /// Capture a raster snapshot as a data URI.
    pub fn capture_screenshot(&self) -> Option<String> {
        if !self.can_drive() {
            return None;
        }
        self.try_invoke(HookCall::GetScreenshot)?.into_text()
    }

    fn can_drive(&self) -> bool {
        matches!(self.phase, BridgePhase::Ready | BridgePhase::Active)
    }

    fn mark_active(&mut self) {
        if self.phase == BridgePhase::Ready {
            self.phase = BridgePhase::Active;
        }
    }

    /// Probe-then-call. A missing hook or a fault inside the sandbox both
    /// yield `None`; neither propagates.
    fn try_invoke(&self, call: HookCall) -> Option<super::runtime::HookReturn> {
        let hook = call.hook();
        if !self.runtime.has_hook(hook) {
            debug!(hook = hook.symbol(), "hook absent, skipping");
            return None;
        }
        match self.runtime.invoke(call) {
            Ok(value) => Some(value),
            Err(fault) => {
                warn!(
                    hook = hook.symbol(),
                    fault = %fault.message,
                    "embedded hook raised, discarding"
                );
                None
            }
        }
    }
}
