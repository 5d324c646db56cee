// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Optimization session
//!
//! Runs probe → resolve exactly once and publishes the result. Before that
//! every accessor returns `None`; consumers that need to wait can subscribe
//! to the ready signal, which flips once from `None` to the snapshot.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use serde::Serialize;
use tokio::sync::watch;
use tracing::info;

use crate::capabilities::{DeviceCapabilities, HostEnvironment};
use crate::config::CapabilityOverrides;
use crate::error::{Result, VitrineError};
use crate::policy::{CapabilityTier, OptimalSettings};

static GLOBAL: OnceLock<OptimizationSession> = OnceLock::new();

/// Everything a consumer reads once the session is ready
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub capabilities: DeviceCapabilities,
    pub settings: OptimalSettings,
    pub tier: CapabilityTier,
}

impl SessionSnapshot {
    pub fn from_capabilities(capabilities: DeviceCapabilities) -> Self {
        Self {
            settings: OptimalSettings::resolve(&capabilities),
            tier: CapabilityTier::classify(&capabilities),
            capabilities,
        }
    }
}

/// Lifecycle position of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Probing,
    Ready,
}

/// Init-once holder of the capability snapshot
#[derive(Debug)]
pub struct OptimizationSession {
    snapshot: OnceLock<Arc<SessionSnapshot>>,
    probing: AtomicBool,
    ready_tx: watch::Sender<Option<Arc<SessionSnapshot>>>,
    overrides: Option<CapabilityOverrides>,
}

impl Default for OptimizationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl OptimizationSession {
    pub fn new() -> Self {
        let (ready_tx, _ready_rx) = watch::channel(None);
        Self {
            snapshot: OnceLock::new(),
            probing: AtomicBool::new(false),
            ready_tx,
            overrides: None,
        }
    }

    /// Session whose probed capabilities are patched by `overrides`.
    pub fn with_overrides(overrides: CapabilityOverrides) -> Self {
        Self {
            overrides: Some(overrides),
            ..Self::new()
        }
    }

    /// Session that is ready from the start with fixed capabilities.
    pub fn with_capabilities(capabilities: DeviceCapabilities) -> Self {
        let session = Self::new();
        session.publish(|| capabilities);
        session
    }

    /// The process-wide session.
    pub fn global() -> &'static OptimizationSession {
        GLOBAL.get_or_init(OptimizationSession::new)
    }

    /// Probe `host` on the first call; later calls return the cached
    /// snapshot and never touch the host.
    pub fn initialize(&self, host: &dyn HostEnvironment) -> Arc<SessionSnapshot> {
        self.publish(|| {
            let probed = DeviceCapabilities::detect(host);
            match &self.overrides {
                Some(overrides) => overrides.apply(probed),
                None => probed,
            }
        })
    }

    fn publish(&self, evaluate: impl FnOnce() -> DeviceCapabilities) -> Arc<SessionSnapshot> {
        let mut published_here = false;
        let snapshot = self
            .snapshot
            .get_or_init(|| {
                self.probing.store(true, Ordering::Release);
                let snapshot = SessionSnapshot::from_capabilities(evaluate());
                info!(capabilities = ?snapshot.capabilities, "Device capabilities");
                info!(settings = ?snapshot.settings, tier = %snapshot.tier, "Optimal settings");
                published_here = true;
                Arc::new(snapshot)
            })
            .clone();

        if published_here {
            self.ready_tx.send_replace(Some(snapshot.clone()));
        }
        snapshot
    }

    pub fn state(&self) -> SessionState {
        if self.snapshot.get().is_some() {
            SessionState::Ready
        } else if self.probing.load(Ordering::Acquire) {
            SessionState::Probing
        } else {
            SessionState::Uninitialized
        }
    }

    pub fn is_ready(&self) -> bool {
        self.snapshot.get().is_some()
    }

    pub fn snapshot(&self) -> Option<Arc<SessionSnapshot>> {
        self.snapshot.get().cloned()
    }

    pub fn capabilities(&self) -> Option<DeviceCapabilities> {
        self.snapshot.get().map(|snapshot| snapshot.capabilities)
    }

    pub fn settings(&self) -> Option<OptimalSettings> {
        self.snapshot.get().map(|snapshot| snapshot.settings)
    }

    /// Receiver of the ready signal. Its value is `None` until ready.
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<SessionSnapshot>>> {
        self.ready_tx.subscribe()
    }

    /// Wait until the session is ready.
    pub async fn wait_ready(&self) -> Result<Arc<SessionSnapshot>> {
        let mut rx = self.subscribe();
        let snapshot = rx
            .wait_for(|value| value.is_some())
            .await
            .map_err(|_| VitrineError::Session("ready signal closed".to_string()))?
            .clone();
        snapshot.ok_or_else(|| {
            VitrineError::Session("ready signal carried no snapshot".to_string())
        })
    }
}
