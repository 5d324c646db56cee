// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Effect gate command

use serde::Serialize;

use crate::cli::args::{EffectArgs, OutputFormat};
use crate::config::VitrineConfig;
use crate::effects::{EffectDecision, EffectGate};
use crate::error::{Result, VitrineError};
use crate::policy::CapabilityTier;
use crate::session::SessionSnapshot;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EffectOutput<'a> {
    feature: String,
    tier: CapabilityTier,
    #[serde(flatten)]
    decision: &'a EffectDecision,
}

/// Execute the effect command
pub fn execute(
    args: &EffectArgs,
    snapshot: &SessionSnapshot,
    config: &VitrineConfig,
    format: &OutputFormat,
) -> Result<()> {
    println!("{}", render(args, snapshot, config, format)?);
    Ok(())
}

pub fn render(
    args: &EffectArgs,
    snapshot: &SessionSnapshot,
    config: &VitrineConfig,
    format: &OutputFormat,
) -> Result<String> {
    if let Some(dpr) = args.dpr {
        if !dpr.is_finite() || dpr <= 0.0 {
            return Err(VitrineError::InvalidInput(format!(
                "--dpr must be a positive number, got {}",
                dpr
            )));
        }
    }

    let request = args.request(config.terminal.device_pixel_ratio);
    let decision = EffectGate::new(snapshot).select(&request);
    let feature = format!("{:?}", args.feature);

    if matches!(format, OutputFormat::Json) {
        let output = EffectOutput {
            feature,
            tier: snapshot.tier,
            decision: &decision,
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    let mut out = format!("{}: {} (tier {})", feature, decision.label(), snapshot.tier);
    match &decision {
        EffectDecision::Static(fallback) => {
            out.push_str(&format!("\nFallback: {:?}", fallback));
        }
        EffectDecision::Full(config) | EffectDecision::Degraded(config) => {
            out.push('\n');
            out.push_str(&serde_json::to_string_pretty(config)?);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::DeviceCapabilities;
    use crate::cli::args::Feature;

    fn snapshot(is_low_end: bool, has_good_gpu: bool) -> SessionSnapshot {
        SessionSnapshot::from_capabilities(DeviceCapabilities {
            is_low_end,
            is_mobile: false,
            has_good_gpu,
            reduced_motion: false,
        })
    }

    fn args(feature: Feature, dpr: Option<f64>) -> EffectArgs {
        EffectArgs {
            feature,
            dpr,
            items: 6,
        }
    }

    #[test]
    fn test_static_terminal_text() {
        let text = render(
            &args(Feature::Terminal, None),
            &snapshot(true, false),
            &VitrineConfig::default(),
            &OutputFormat::Text,
        )
        .unwrap();
        assert!(text.starts_with("Terminal: static (tier StaticFallback)"));
        assert!(text.contains("GradientBackdrop"));
    }

    #[test]
    fn test_terminal_json_uses_config_dpr() {
        let mut config = VitrineConfig::default();
        config.terminal.device_pixel_ratio = 3.0;
        let json = render(
            &args(Feature::Terminal, None),
            &snapshot(false, true),
            &config,
            &OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["feature"], "Terminal");
        assert_eq!(value["decision"], "full");
        assert_eq!(value["config"]["kind"], "terminal");
        assert_eq!(value["config"]["dpr"], 2.0);
    }

    #[test]
    fn test_rejects_bad_dpr() {
        let result = render(
            &args(Feature::Terminal, Some(-1.0)),
            &snapshot(false, true),
            &VitrineConfig::default(),
            &OutputFormat::Text,
        );
        assert!(matches!(result, Err(VitrineError::InvalidInput(_))));
    }
}
