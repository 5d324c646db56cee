// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Capability tier classification

use serde::{Deserialize, Serialize};

use crate::capabilities::DeviceCapabilities;

/// Qualitative bucket a device lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CapabilityTier {
    /// No live effects at all; static visuals only
    StaticFallback,
    /// Effects run with reduced cost or motion
    Degraded,
    /// Everything on
    Full,
}

impl CapabilityTier {
    pub fn classify(capabilities: &DeviceCapabilities) -> Self {
        if capabilities.is_low_end && !capabilities.has_good_gpu {
            return CapabilityTier::StaticFallback;
        }

        if capabilities.is_low_end || capabilities.is_mobile || capabilities.reduced_motion {
            return CapabilityTier::Degraded;
        }

        CapabilityTier::Full
    }

    /// Get a human-readable description of this tier
    pub fn description(&self) -> &'static str {
        match self {
            CapabilityTier::StaticFallback => "Constrained device, weak GPU (static visuals)",
            CapabilityTier::Degraded => "Reduced effects (mobile, low-end or reduced motion)",
            CapabilityTier::Full => "Full effects",
        }
    }

    /// Whether a live animated background may be mounted at all
    pub fn allows_live_background(&self) -> bool {
        !matches!(self, CapabilityTier::StaticFallback)
    }
}

impl std::fmt::Display for CapabilityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapabilityTier::StaticFallback => write!(f, "StaticFallback"),
            CapabilityTier::Degraded => write!(f, "Degraded"),
            CapabilityTier::Full => write!(f, "Full"),
        }
    }
}
