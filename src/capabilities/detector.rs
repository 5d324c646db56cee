// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Device capability detection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::host::{ConnectionType, HostEnvironment};
use super::patterns;

/// Logical CPU count assumed when the host does not report one
pub const DEFAULT_CPU_CONCURRENCY: u32 = 1;
/// At or below this many logical CPUs a device is low-end
pub const LOW_END_MAX_CORES: u32 = 2;
/// At or below this much memory (GiB) a device is low-end
pub const LOW_END_MAX_MEMORY_GB: f64 = 2.0;

/// The four facts every effect decision is made from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCapabilities {
    pub is_low_end: bool,
    pub is_mobile: bool,
    #[serde(rename = "hasGoodGPU")]
    pub has_good_gpu: bool,
    pub reduced_motion: bool,
}

impl DeviceCapabilities {
    /// Probe the host. Never fails; failed sub-checks fall back to the
    /// lower-capability answer.
    pub fn detect(host: &dyn HostEnvironment) -> Self {
        ProbeReport::collect(host).capabilities
    }
}

/// Probe entry point.
pub fn probe(host: &dyn HostEnvironment) -> DeviceCapabilities {
    DeviceCapabilities::detect(host)
}

/// The heuristic that classified a device as low-end
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "signal", rename_all = "camelCase")]
pub enum LowEndSignal {
    CpuConcurrency { cores: u32 },
    DeviceMemory { gigabytes: f64 },
    SlowConnection { connection: ConnectionType },
    LegacyPlatform { token: &'static str },
}

impl std::fmt::Display for LowEndSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LowEndSignal::CpuConcurrency { cores } => write!(f, "{} logical CPU(s)", cores),
            LowEndSignal::DeviceMemory { gigabytes } => write!(f, "{}GiB device memory", gigabytes),
            LowEndSignal::SlowConnection { connection } => {
                write!(f, "{} effective connection", connection)
            }
            LowEndSignal::LegacyPlatform { token } => write!(f, "legacy platform '{}'", token),
        }
    }
}

/// Outcome of the graphics check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "camelCase")]
pub enum GpuVerdict {
    /// Host has no accelerated context type
    NoContext,
    /// Context creation or renderer lookup failed
    Error { message: String },
    /// Renderer matched the weak-GPU table
    WeakRenderer { renderer: String, token: &'static str },
    /// Renderer read and not known to be weak
    Renderer { renderer: String },
    /// Context exists but the debug renderer extension does not
    RendererHidden,
}

impl GpuVerdict {
    pub fn is_capable(&self) -> bool {
        matches!(self, GpuVerdict::Renderer { .. } | GpuVerdict::RendererHidden)
    }
}

/// Capabilities together with the evidence behind them
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeReport {
    pub capabilities: DeviceCapabilities,
    pub low_end_signal: Option<LowEndSignal>,
    pub gpu: GpuVerdict,
    pub probed_at: DateTime<Utc>,
}

impl ProbeReport {
    /// Run every sub-check against the host.
    pub fn collect(host: &dyn HostEnvironment) -> Self {
        let user_agent = host.user_agent();
        let user_agent = user_agent.as_deref();

        let is_mobile = user_agent.is_some_and(patterns::is_mobile_user_agent);
        let reduced_motion = detect_reduced_motion(host);
        let low_end_signal = detect_low_end(host, user_agent);
        let gpu = detect_gpu(host);

        let capabilities = DeviceCapabilities {
            is_low_end: low_end_signal.is_some(),
            is_mobile,
            has_good_gpu: gpu.is_capable(),
            reduced_motion,
        };

        debug!(
            ?capabilities,
            low_end_signal = ?low_end_signal,
            gpu = ?gpu,
            "Device capabilities probed"
        );

        Self {
            capabilities,
            low_end_signal,
            gpu,
            probed_at: Utc::now(),
        }
    }
}

fn detect_reduced_motion(host: &dyn HostEnvironment) -> bool {
    match host.prefers_reduced_motion() {
        Ok(reduced) => reduced,
        Err(err) => {
            debug!(error = %err, "Reduced-motion query failed, assuming reduced motion");
            true
        }
    }
}

/// Independent heuristics, first hit wins.
fn detect_low_end(host: &dyn HostEnvironment, user_agent: Option<&str>) -> Option<LowEndSignal> {
    let cores = match host.hardware_concurrency() {
        Some(0) | None => DEFAULT_CPU_CONCURRENCY,
        Some(n) => n,
    };
    if cores <= LOW_END_MAX_CORES {
        return Some(LowEndSignal::CpuConcurrency { cores });
    }

    // A zero or non-finite reading counts as not reported
    if let Some(gigabytes) = host
        .device_memory_gb()
        .filter(|gb| gb.is_finite() && *gb > 0.0)
    {
        if gigabytes <= LOW_END_MAX_MEMORY_GB {
            return Some(LowEndSignal::DeviceMemory { gigabytes });
        }
    }

    if let Some(raw) = host.effective_connection_type() {
        let connection = ConnectionType::parse(&raw);
        if connection.is_slow() {
            return Some(LowEndSignal::SlowConnection { connection });
        }
    }

    user_agent
        .and_then(patterns::legacy_platform_token)
        .map(|token| LowEndSignal::LegacyPlatform { token })
}

fn detect_gpu(host: &dyn HostEnvironment) -> GpuVerdict {
    let context = match host.create_graphics_context() {
        Ok(Some(context)) => context,
        Ok(None) => return GpuVerdict::NoContext,
        Err(err) => {
            debug!(error = %err, "Graphics context creation failed, assuming weak GPU");
            return GpuVerdict::Error {
                message: err.to_string(),
            };
        }
    };

    match context.unmasked_renderer() {
        Ok(Some(renderer)) => match patterns::weak_gpu_token(&renderer) {
            Some(token) => GpuVerdict::WeakRenderer { renderer, token },
            None => GpuVerdict::Renderer { renderer },
        },
        Ok(None) => GpuVerdict::RendererHidden,
        Err(err) => {
            debug!(error = %err, "Renderer lookup failed, assuming weak GPU");
            GpuVerdict::Error {
                message: err.to_string(),
            }
        }
    }
}
