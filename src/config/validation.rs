// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::capabilities::DeviceCapabilities;
use crate::error::{Result, VitrineError};

use super::VitrineConfig;

impl VitrineConfig {
    /// Reject values the effect gate and scheduler cannot work with.
    pub fn validate(&self) -> Result<()> {
        let dpr = self.terminal.device_pixel_ratio;
        if !dpr.is_finite() || dpr <= 0.0 {
            return Err(VitrineError::Config(format!(
                "terminal.devicePixelRatio must be a positive number, got {}",
                dpr
            )));
        }

        if self.throttle.delay_ms == 0 {
            return Err(VitrineError::Config(
                "throttle.delayMs must be at least 1".to_string(),
            ));
        }

        if let Some(level) = self.log_level.as_deref() {
            EnvFilter::try_new(level).map_err(|e| {
                VitrineError::Config(format!(
                    "logLevel {:?} is not a valid log filter: {}",
                    level, e
                ))
            })?;
        }

        Ok(())
    }

    /// Apply configured overrides to freshly probed capabilities.
    pub fn effective_capabilities(&self, probed: DeviceCapabilities) -> DeviceCapabilities {
        match &self.capabilities_override {
            Some(overrides) => overrides.apply(probed),
            None => probed,
        }
    }

    pub fn throttle_delay(&self) -> Duration {
        Duration::from_millis(self.throttle.delay_ms)
    }
}
