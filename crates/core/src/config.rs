//! Configuration of an emulation session.
//!
//! This module replaces process-wide trace and abort switches with a value handed
//! to the [`Emulator`](crate::core::Emulator). It provides:
//! 1. **Defaults:** Tracing off, faults abort the process.
//! 2. **Structures:** [`EmulatorConfig`] and the [`FaultPolicy`] enum.
//! 3. **Loading:** JSON deserialization for tools.
//!
//! # Example
//!
//! ```
//! use armfpe_core::config::{EmulatorConfig, FaultPolicy};
//!
//! let config = EmulatorConfig::from_json(r#"{ "trace": true, "fault_policy": "Stop" }"#).unwrap();
//! assert!(config.trace);
//! assert_eq!(config.fault_policy, FaultPolicy::Stop);
//! ```

use serde::Deserialize;

/// Default configuration values.
mod defaults {
    /// Per-instruction tracing is off.
    pub const TRACE: bool = false;
}

/// What the entry point does with a fatal fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum FaultPolicy {
    /// Emit the diagnostic and call the abort handler, which never returns.
    #[default]
    #[serde(alias = "abort")]
    Abort,
    /// Emit the diagnostic and return the faulting instruction's address, so the
    /// host sees no progress and propagates the original trap.
    #[serde(alias = "stop")]
    Stop,
}

/// Emulation session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EmulatorConfig {
    /// Log every emulated instruction (address, raw word, disassembly) and dump
    /// the register file after each transfer.
    #[serde(default = "EmulatorConfig::default_trace")]
    pub trace: bool,

    /// Handling of unsupported or malformed instructions.
    #[serde(default)]
    pub fault_policy: FaultPolicy,
}

impl EmulatorConfig {
    /// Returns the default trace setting.
    fn default_trace() -> bool {
        defaults::TRACE
    }

    /// Parses a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns a copy with tracing switched on or off.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Returns a copy with the given fault policy.
    pub fn with_fault_policy(mut self, fault_policy: FaultPolicy) -> Self {
        self.fault_policy = fault_policy;
        self
    }
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            trace: defaults::TRACE,
            fault_policy: FaultPolicy::default(),
        }
    }
}
