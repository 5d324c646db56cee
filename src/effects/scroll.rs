// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Inertial scroll controller parameters

use serde::{Serialize, Serializer};

/// Easing curves used by tweens and the scroll controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// `min(1, 1.001 - 2^(-10t))`
    ExpoOut,
    /// `1 - (1 - t)^3`
    CubicOut,
    /// Tween library `power3.out`: `1 - (1 - t)^4`
    Power3Out,
}

impl Easing {
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::ExpoOut => (1.001 - 2f64.powf(-10.0 * t)).min(1.0),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Easing::ExpoOut => "expo.out",
            Easing::CubicOut => "cubic.out",
            Easing::Power3Out => "power3.out",
        }
    }
}

impl Serialize for Easing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Constructor options for the smooth-scroll controller
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothScrollConfig {
    pub duration: f64,
    pub easing: Easing,
    pub direction: &'static str,
    pub gesture_direction: &'static str,
    pub smooth: bool,
    pub mouse_multiplier: f64,
    pub smooth_touch: bool,
    pub touch_multiplier: f64,
    pub infinite: bool,
    pub normalize_wheel: bool,
    /// Tween ticker lag smoothing; off so scroll and tweens share a clock
    pub lag_smoothing: bool,
}

impl SmoothScrollConfig {
    pub fn new(throttle: bool) -> Self {
        Self {
            duration: if throttle { 0.8 } else { 1.2 },
            easing: Easing::ExpoOut,
            direction: "vertical",
            gesture_direction: "vertical",
            smooth: true,
            mouse_multiplier: if throttle { 0.8 } else { 1.0 },
            smooth_touch: false,
            touch_multiplier: 2.0,
            infinite: false,
            normalize_wheel: true,
            lag_smoothing: false,
        }
    }
}

/// Options for programmatic scrolling to a section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollToConfig {
    pub duration: f64,
    pub easing: Easing,
}

impl Default for ScrollToConfig {
    fn default() -> Self {
        Self {
            duration: 2.0,
            easing: Easing::CubicOut,
        }
    }
}
