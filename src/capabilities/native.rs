// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Host backed by the local machine
//!
//! CPU and memory come from `sysinfo`. There is no browser here, so the
//! user-agent, connection type, motion preference and renderer name can be
//! supplied through environment variables; without a renderer there is no
//! graphics context and the GPU is classified as weak.

use sysinfo::System;

use super::host::{GraphicsContext, HostEnvironment};
use crate::error::ProbeError;

pub const USER_AGENT_ENV: &str = "VITRINE_USER_AGENT";
pub const EFFECTIVE_TYPE_ENV: &str = "VITRINE_EFFECTIVE_TYPE";
pub const REDUCED_MOTION_ENV: &str = "VITRINE_REDUCED_MOTION";
pub const GPU_RENDERER_ENV: &str = "VITRINE_GPU_RENDERER";

/// Signals read from the machine this process runs on
#[derive(Debug, Clone, PartialEq)]
pub struct NativeHost {
    cpu_count: Option<u32>,
    memory_gb: Option<f64>,
    user_agent: Option<String>,
    effective_type: Option<String>,
    reduced_motion: Option<String>,
    renderer: Option<String>,
}

impl NativeHost {
    /// Read the current machine.
    pub fn detect() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();

        let cpu_count = match sys.cpus().len() {
            0 => None,
            n => u32::try_from(n).ok(),
        };

        let memory_gb = match sys.total_memory() {
            0 => None,
            bytes => Some(bytes as f64 / (1024.0 * 1024.0 * 1024.0)),
        };

        Self {
            cpu_count,
            memory_gb,
            user_agent: read_env(USER_AGENT_ENV),
            effective_type: read_env(EFFECTIVE_TYPE_ENV),
            reduced_motion: read_env(REDUCED_MOTION_ENV),
            renderer: read_env(GPU_RENDERER_ENV),
        }
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_flag(raw: &str) -> Result<bool, ProbeError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "reduce" => Ok(true),
        "0" | "false" | "no" | "no-preference" => Ok(false),
        other => Err(ProbeError::Host(format!(
            "{} has unrecognised value '{}'",
            REDUCED_MOTION_ENV, other
        ))),
    }
}

impl HostEnvironment for NativeHost {
    fn user_agent(&self) -> Option<String> {
        self.user_agent.clone()
    }

    fn hardware_concurrency(&self) -> Option<u32> {
        self.cpu_count
    }

    fn device_memory_gb(&self) -> Option<f64> {
        self.memory_gb
    }

    fn effective_connection_type(&self) -> Option<String> {
        self.effective_type.clone()
    }

    fn prefers_reduced_motion(&self) -> Result<bool, ProbeError> {
        match &self.reduced_motion {
            Some(raw) => parse_flag(raw),
            None => Ok(false),
        }
    }

    fn create_graphics_context(&self) -> Result<Option<Box<dyn GraphicsContext>>, ProbeError> {
        Ok(self.renderer.clone().map(|renderer| {
            Box::new(NamedRenderer { renderer }) as Box<dyn GraphicsContext>
        }))
    }
}

struct NamedRenderer {
    renderer: String,
}

impl GraphicsContext for NamedRenderer {
    fn unmasked_renderer(&self) -> Result<Option<String>, ProbeError> {
        Ok(Some(self.renderer.clone()))
    }
}
