// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Capability probe command

use std::fmt::Write as _;

use serde::Serialize;

use super::yes_no;
use crate::capabilities::{DeviceCapabilities, GpuVerdict, HostEnvironment, ProbeReport};
use crate::cli::args::OutputFormat;
use crate::config::VitrineConfig;
use crate::error::Result;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProbeOutput<'a> {
    #[serde(flatten)]
    report: &'a ProbeReport,
    /// Capabilities after config overrides
    effective: DeviceCapabilities,
    overridden: bool,
}

/// Execute the probe command
pub fn execute(
    host: &dyn HostEnvironment,
    config: &VitrineConfig,
    format: &OutputFormat,
) -> Result<()> {
    let report = ProbeReport::collect(host);
    println!("{}", render(&report, config, format)?);
    Ok(())
}

pub fn render(
    report: &ProbeReport,
    config: &VitrineConfig,
    format: &OutputFormat,
) -> Result<String> {
    let effective = config.effective_capabilities(report.capabilities);
    let overridden = effective != report.capabilities;

    if matches!(format, OutputFormat::Json) {
        let output = ProbeOutput {
            report,
            effective,
            overridden,
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    let mut out = String::new();
    let caps = &report.capabilities;
    let _ = writeln!(out, "=== Device Capabilities ===\n");
    let _ = writeln!(out, "Low-end:        {}", yes_no(caps.is_low_end));
    let _ = writeln!(out, "Mobile:         {}", yes_no(caps.is_mobile));
    let _ = writeln!(out, "Good GPU:       {}", yes_no(caps.has_good_gpu));
    let _ = writeln!(out, "Reduced motion: {}", yes_no(caps.reduced_motion));

    let _ = writeln!(out, "\n=== Evidence ===\n");
    match &report.low_end_signal {
        Some(signal) => {
            let _ = writeln!(out, "Low-end signal: {}", signal);
        }
        None => {
            let _ = writeln!(out, "Low-end signal: none");
        }
    }
    let _ = writeln!(out, "GPU: {}", describe_gpu(&report.gpu));
    let _ = writeln!(out, "Probed at: {}", report.probed_at.to_rfc3339());

    if overridden {
        let _ = writeln!(out, "\n=== Config Overrides ===\n");
        let _ = writeln!(out, "Low-end:        {}", yes_no(effective.is_low_end));
        let _ = writeln!(out, "Mobile:         {}", yes_no(effective.is_mobile));
        let _ = writeln!(out, "Good GPU:       {}", yes_no(effective.has_good_gpu));
        let _ = writeln!(out, "Reduced motion: {}", yes_no(effective.reduced_motion));
    }

    Ok(out)
}

fn describe_gpu(verdict: &GpuVerdict) -> String {
    match verdict {
        GpuVerdict::NoContext => "no accelerated context".to_string(),
        GpuVerdict::Error { message } => format!("probe failed ({})", message),
        GpuVerdict::WeakRenderer { renderer, token } => {
            format!("{} (weak, matched '{}')", renderer, token)
        }
        GpuVerdict::Renderer { renderer } => renderer.clone(),
        GpuVerdict::RendererHidden => "renderer hidden, assumed capable".to_string(),
    }
}
