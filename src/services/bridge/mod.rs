//! Embedded Runtime Bridge
//!
//! Best-effort control channel into the sandboxed rendering surface:
//! readiness polling, capability probing, and guarded push/pull calls.

pub mod runtime;
pub mod service;

pub use runtime::{
    Capabilities, EmbeddedRuntime, HookCall, HookReturn, RuntimeFault, RuntimeHook,
};
pub use service::{BridgePhase, RuntimeBridge, MAX_POLL_ATTEMPTS, POLL_INTERVAL, READY_GRACE};
