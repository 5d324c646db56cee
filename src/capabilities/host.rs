// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Host environment abstraction
//!
//! Every signal the probe reads comes through [`HostEnvironment`]. Optional
//! APIs are `Option`s so each rule has to say what it does when the API is
//! missing; host calls that can blow up return `Result<_, ProbeError>`.

use serde::{Deserialize, Serialize};

use crate::error::ProbeError;

/// Read-only view of the environment the page runs in.
#[cfg_attr(test, mockall::automock)]
pub trait HostEnvironment {
    /// Device/browser identifier string (`navigator.userAgent`)
    fn user_agent(&self) -> Option<String>;

    /// Logical CPU count (`navigator.hardwareConcurrency`)
    fn hardware_concurrency(&self) -> Option<u32>;

    /// Approximate device memory in GiB (`navigator.deviceMemory`)
    fn device_memory_gb(&self) -> Option<f64>;

    /// Raw effective connection type (`navigator.connection.effectiveType`)
    fn effective_connection_type(&self) -> Option<String>;

    /// `prefers-reduced-motion: reduce`
    fn prefers_reduced_motion(&self) -> Result<bool, ProbeError>;

    /// Try to create a hardware-accelerated context.
    ///
    /// `Ok(None)` means the host has no such context type at all.
    fn create_graphics_context(&self) -> Result<Option<Box<dyn GraphicsContext>>, ProbeError>;
}

/// A live hardware-accelerated graphics context.
#[cfg_attr(test, mockall::automock)]
pub trait GraphicsContext {
    /// Unmasked renderer name from the debug renderer extension.
    ///
    /// `Ok(None)` when the extension is not exposed.
    fn unmasked_renderer(&self) -> Result<Option<String>, ProbeError>;
}

/// Coarse network speed classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionType {
    #[serde(rename = "slow-2g")]
    Slow2g,
    #[serde(rename = "2g")]
    TwoG,
    #[serde(rename = "3g")]
    ThreeG,
    #[serde(rename = "4g")]
    FourG,
    #[serde(rename = "unknown")]
    Unknown,
}

impl ConnectionType {
    /// Parse a raw effective type string; anything unrecognised is `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "slow-2g" => ConnectionType::Slow2g,
            "2g" => ConnectionType::TwoG,
            "3g" => ConnectionType::ThreeG,
            "4g" => ConnectionType::FourG,
            _ => ConnectionType::Unknown,
        }
    }

    /// Whether this is one of the slow tiers that marks a device low-end
    pub fn is_slow(&self) -> bool {
        matches!(
            self,
            ConnectionType::Slow2g | ConnectionType::TwoG | ConnectionType::ThreeG
        )
    }
}

impl std::fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionType::Slow2g => write!(f, "slow-2g"),
            ConnectionType::TwoG => write!(f, "2g"),
            ConnectionType::ThreeG => write!(f, "3g"),
            ConnectionType::FourG => write!(f, "4g"),
            ConnectionType::Unknown => write!(f, "unknown"),
        }
    }
}
