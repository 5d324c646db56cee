// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Configuration for Vitrine
//!
//! Handles loading and validating ~/.vitrine/config.json

use serde::{Deserialize, Serialize};

use crate::capabilities::DeviceCapabilities;

mod io;
mod validation;

/// Main configuration structure, stored in ~/.vitrine/config.json.
/// Keys are camelCase, like the capability names they override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitrineConfig {
    /// Forced capability values applied after probing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities_override: Option<CapabilityOverrides>,

    /// Terminal background defaults
    #[serde(default)]
    pub terminal: TerminalDefaults,

    /// Callback throttling
    #[serde(default)]
    pub throttle: ThrottleConfig,

    /// Default log directive (e.g. "vitrine=debug"); `RUST_LOG` wins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// Per-field overrides; `None` keeps the probed value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_low_end: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_mobile: Option<bool>,
    #[serde(default, rename = "hasGoodGPU", skip_serializing_if = "Option::is_none")]
    pub has_good_gpu: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,
}

impl CapabilityOverrides {
    pub fn apply(&self, probed: DeviceCapabilities) -> DeviceCapabilities {
        DeviceCapabilities {
            is_low_end: self.is_low_end.unwrap_or(probed.is_low_end),
            is_mobile: self.is_mobile.unwrap_or(probed.is_mobile),
            has_good_gpu: self.has_good_gpu.unwrap_or(probed.has_good_gpu),
            reduced_motion: self.reduced_motion.unwrap_or(probed.reduced_motion),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Terminal background defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalDefaults {
    /// Screen pixel density assumed when the caller does not pass one
    #[serde(default = "default_device_pixel_ratio")]
    pub device_pixel_ratio: f64,
}

impl Default for TerminalDefaults {
    fn default() -> Self {
        Self {
            device_pixel_ratio: default_device_pixel_ratio(),
        }
    }
}

/// Throttled callback settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrottleConfig {
    /// Trailing delay for throttled callbacks, in milliseconds
    #[serde(default = "default_throttle_delay_ms")]
    pub delay_ms: u64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_throttle_delay_ms(),
        }
    }
}

fn default_device_pixel_ratio() -> f64 {
    1.0
}

fn default_throttle_delay_ms() -> u64 {
    16
}
