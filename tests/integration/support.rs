//! Scripted Collaborators
//!
//! Test doubles for the two external boundaries: the remote generation
//! provider and the embedded execution context.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::mpsc;

use maquette_core::data_uri::DataUri;
use maquette_core::streaming::StreamEvent;
use maquette_llm::{AspectRatio, GenError, GenResult, GenerationProvider, ProviderConfig};
use maquette_studio::services::bridge::{
    EmbeddedRuntime, HookCall, HookReturn, RuntimeFault, RuntimeHook,
};

/// Provider that replays a fixed fragment script instead of calling out.
pub struct ScriptedProvider {
    config: ProviderConfig,
    pub fragments: Vec<StreamEvent>,
    pub image_result: GenResult<String>,
}

impl ScriptedProvider {
    pub fn new(fragments: Vec<StreamEvent>) -> Self {
        Self {
            config: ProviderConfig::default(),
            fragments,
            image_result: Ok(DataUri::format("image/png", b"concept image")),
        }
    }
}

#[async_trait]
impl GenerationProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn generate_image(
        &self,
        _prompt: &str,
        _aspect_ratio: AspectRatio,
        _optimize: bool,
    ) -> GenResult<String> {
        self.image_result.clone()
    }

    async fn generate_document(
        &self,
        _image_data_uri: &str,
        _prompt: &str,
        tx: mpsc::Sender<StreamEvent>,
    ) -> GenResult<String> {
        let mut full = String::new();
        for event in &self.fragments {
            if let StreamEvent::ContentDelta { content } = event {
                full.push_str(content);
            }
            let _ = tx.send(event.clone()).await;
        }
        Ok(full)
    }

    async fn generate_render(
        &self,
        _screenshot_data_uri: &str,
        _style_prompt: &str,
    ) -> GenResult<String> {
        Err(GenError::EmptyArtifact {
            message: "render not scripted".to_string(),
        })
    }

    async fn health_check(&self) -> GenResult<()> {
        Ok(())
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

/// Embedded runtime whose primary hook appears after a configurable
/// number of probes, recording every invocation.
pub struct ScriptedRuntime {
    pub present_after: u32,
    probes: AtomicU32,
    pub hooks: Vec<RuntimeHook>,
    pub faulting: Vec<RuntimeHook>,
    calls: Mutex<Vec<HookCall>>,
    pub surface_area: f64,
    pub floor_area: f64,
}

impl ScriptedRuntime {
    /// Runtime with every hook, primary hook present immediately.
    pub fn ready() -> Self {
        Self::appearing_after(1)
    }

    /// Runtime whose primary hook appears on the nth probe.
    pub fn appearing_after(present_after: u32) -> Self {
        Self {
            present_after,
            probes: AtomicU32::new(0),
            hooks: RuntimeHook::ALL.to_vec(),
            faulting: vec![],
            calls: Mutex::new(vec![]),
            surface_area: 2350.0,
            floor_area: 780.0,
        }
    }

    /// Runtime that never exposes the primary hook.
    pub fn inert() -> Self {
        Self::appearing_after(u32::MAX)
    }

    pub fn calls(&self) -> Vec<HookCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn probe_count(&self) -> u32 {
        self.probes.load(Ordering::SeqCst)
    }
}

impl EmbeddedRuntime for ScriptedRuntime {
    fn has_hook(&self, hook: RuntimeHook) -> bool {
        if hook == RuntimeHook::UpdateParams {
            let probe = self.probes.fetch_add(1, Ordering::SeqCst) + 1;
            return probe >= self.present_after && self.hooks.contains(&hook);
        }
        self.hooks.contains(&hook)
    }

    fn invoke(&self, call: HookCall) -> Result<HookReturn, RuntimeFault> {
        let hook = call.hook();
        self.calls.lock().unwrap().push(call);
        if self.faulting.contains(&hook) {
            return Err(RuntimeFault::new("script threw"));
        }
        Ok(match hook {
            RuntimeHook::GetSurfaceArea => HookReturn::Number(self.surface_area),
            RuntimeHook::GetFloorArea => HookReturn::Number(self.floor_area),
            RuntimeHook::GetObj => HookReturn::Text("o building\nv 0 0 0\n".to_string()),
            RuntimeHook::GetScreenshot => {
                HookReturn::Text(DataUri::format("image/png", b"shot"))
            }
            _ => HookReturn::Unit,
        })
    }
}
