// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Capability → settings policy table

use serde::{Deserialize, Serialize};

use crate::capabilities::DeviceCapabilities;

/// Feature switches and tunables handed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalSettings {
    pub enable_terminal: bool,
    pub terminal_scale: f64,
    pub terminal_opacity: f64,

    pub enable_complex_animations: bool,
    /// Seconds
    pub animation_duration: f64,
    pub enable_parallax: bool,

    pub enable_smooth_scrolling: bool,
    pub enable_blur: bool,

    pub throttle_animations: bool,
    pub use_request_idle_callback: bool,
}

impl OptimalSettings {
    /// Resolve settings for a capability record.
    ///
    /// Pure and total: every field depends only on the four inputs.
    pub fn resolve(capabilities: &DeviceCapabilities) -> Self {
        let DeviceCapabilities {
            is_low_end,
            is_mobile,
            has_good_gpu,
            reduced_motion,
        } = *capabilities;

        Self {
            enable_terminal: !is_low_end && has_good_gpu && !reduced_motion,
            terminal_scale: if is_mobile {
                0.5
            } else if is_low_end {
                0.7
            } else {
                1.0
            },
            terminal_opacity: if is_low_end { 0.1 } else { 0.2 },

            enable_complex_animations: !is_low_end && !reduced_motion,
            // Low-end is checked before reduced motion
            animation_duration: if is_low_end {
                0.3
            } else if reduced_motion {
                0.1
            } else {
                0.8
            },
            enable_parallax: !is_mobile && !is_low_end,

            enable_smooth_scrolling: !is_low_end && !is_mobile,
            enable_blur: has_good_gpu && !is_low_end,

            throttle_animations: is_low_end || is_mobile,
            use_request_idle_callback: !is_low_end,
        }
    }
}

impl From<&DeviceCapabilities> for OptimalSettings {
    fn from(capabilities: &DeviceCapabilities) -> Self {
        Self::resolve(capabilities)
    }
}

/// Resolver entry point.
pub fn resolve(capabilities: &DeviceCapabilities) -> OptimalSettings {
    OptimalSettings::resolve(capabilities)
}
