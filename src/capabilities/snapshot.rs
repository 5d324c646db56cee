// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Recorded host signals
//!
//! A `HostSnapshot` is the explicit form of everything the probe reads. It is
//! what a browser bridge posts back, what the CLI loads with `--env`, and what
//! tests build instead of faking real host APIs.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::host::{GraphicsContext, HostEnvironment};
use crate::error::{ProbeError, Result};

/// Graphics context availability as recorded by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "context", rename_all = "kebab-case")]
pub enum GraphicsSnapshot {
    /// No WebGL context type exists on this host
    #[default]
    Unavailable,
    /// Context creation threw
    Failed { reason: String },
    /// Context created; `renderer` is absent when the debug extension is
    Available {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        renderer: Option<String>,
    },
}

/// Complete set of host signals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_concurrency: Option<u32>,

    /// GiB, as reported by `navigator.deviceMemory`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_memory: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_type: Option<String>,

    #[serde(default)]
    pub reduced_motion: bool,

    #[serde(default)]
    pub graphics: GraphicsSnapshot,
}

impl HostSnapshot {
    /// Load a snapshot from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let snapshot = serde_json::from_str(&content)?;
        Ok(snapshot)
    }

    /// A well-equipped desktop, used as the `env-template` sample.
    pub fn template() -> Self {
        Self {
            user_agent: Some(
                "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36"
                    .to_string(),
            ),
            hardware_concurrency: Some(8),
            device_memory: Some(8.0),
            effective_type: Some("4g".to_string()),
            reduced_motion: false,
            graphics: GraphicsSnapshot::Available {
                renderer: Some("ANGLE (NVIDIA, NVIDIA GeForce RTX 3070 Direct3D11)".to_string()),
            },
        }
    }
}

impl HostEnvironment for HostSnapshot {
    fn user_agent(&self) -> Option<String> {
        self.user_agent.clone()
    }

    fn hardware_concurrency(&self) -> Option<u32> {
        self.hardware_concurrency
    }

    fn device_memory_gb(&self) -> Option<f64> {
        self.device_memory
    }

    fn effective_connection_type(&self) -> Option<String> {
        self.effective_type.clone()
    }

    fn prefers_reduced_motion(&self) -> std::result::Result<bool, ProbeError> {
        Ok(self.reduced_motion)
    }

    fn create_graphics_context(
        &self,
    ) -> std::result::Result<Option<Box<dyn GraphicsContext>>, ProbeError> {
        match &self.graphics {
            GraphicsSnapshot::Unavailable => Ok(None),
            GraphicsSnapshot::Failed { reason } => Err(ProbeError::GraphicsContext(reason.clone())),
            GraphicsSnapshot::Available { renderer } => Ok(Some(Box::new(RecordedContext {
                renderer: renderer.clone(),
            }))),
        }
    }
}

struct RecordedContext {
    renderer: Option<String>,
}

impl GraphicsContext for RecordedContext {
    fn unmasked_renderer(&self) -> std::result::Result<Option<String>, ProbeError> {
        Ok(self.renderer.clone())
    }
}
