// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Terminal background tuning
//!
//! Every tunable steps down with the tier: mobile < low-end < full.

use serde::Serialize;

use crate::capabilities::DeviceCapabilities;
use crate::policy::CapabilityTier;

/// Pixel density cap on mobile
pub const MOBILE_MAX_DPR: f64 = 1.0;
/// Pixel density cap everywhere else
pub const DESKTOP_MAX_DPR: f64 = 2.0;
/// Opacity of the gradient shown instead of the live terminal
pub const STATIC_BACKDROP_OPACITY: f64 = 0.3;

/// Props for the terminal renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalEffect {
    pub scale: f64,
    pub grid_mul: [f64; 2],
    pub digit_size: f64,
    pub time_scale: f64,
    /// Render a still frame; reduced motion pauses instead of removing
    pub pause: bool,
    pub scanline_intensity: f64,
    pub glitch_amount: f64,
    pub flicker_amount: f64,
    pub noise_amp: f64,
    pub chromatic_aberration: f64,
    pub dither: f64,
    pub curvature: f64,
    pub mouse_react: bool,
    pub mouse_strength: f64,
    pub page_load_animation: bool,
    pub brightness: f64,
    pub dpr: f64,
    /// Blend opacity of the layer from `OptimalSettings::terminal_opacity`
    pub opacity: f64,
}

impl TerminalEffect {
    /// `None` when the tier allows no live background (low-end with a weak
    /// GPU): mount the static backdrop instead.
    pub fn tune(
        capabilities: &DeviceCapabilities,
        device_pixel_ratio: f64,
        opacity: f64,
    ) -> Option<Self> {
        let DeviceCapabilities {
            is_low_end,
            is_mobile,
            reduced_motion,
            ..
        } = *capabilities;

        if !CapabilityTier::classify(capabilities).allows_live_background() {
            return None;
        }

        Some(Self {
            scale: if is_mobile {
                0.8
            } else if is_low_end {
                1.2
            } else {
                1.5
            },
            grid_mul: if is_mobile { [1.0, 1.0] } else { [2.0, 1.0] },
            digit_size: if is_mobile { 0.8 } else { 1.2 },
            time_scale: if is_low_end { 0.5 } else { 1.0 },
            pause: reduced_motion,
            scanline_intensity: if is_low_end { 0.2 } else { 0.5 },
            glitch_amount: if is_low_end { 0.5 } else { 1.0 },
            flicker_amount: if is_low_end { 0.3 } else { 1.0 },
            noise_amp: if is_low_end { 0.5 } else { 1.0 },
            // Off on every tier
            chromatic_aberration: 0.0,
            dither: 0.0,
            curvature: if is_low_end { 0.0 } else { 0.1 },
            mouse_react: !is_mobile && !is_low_end,
            mouse_strength: 0.3,
            page_load_animation: !is_low_end,
            brightness: if is_low_end { 0.7 } else { 1.0 },
            dpr: cap_device_pixel_ratio(device_pixel_ratio, is_mobile),
            opacity,
        })
    }
}

/// Clamp the screen density to bound fill-rate cost.
pub fn cap_device_pixel_ratio(device_pixel_ratio: f64, is_mobile: bool) -> f64 {
    let reported = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    let cap = if is_mobile { MOBILE_MAX_DPR } else { DESKTOP_MAX_DPR };
    reported.min(cap)
}
