// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Resolved settings command

use std::fmt::Write as _;

use super::on_off;
use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::session::SessionSnapshot;

/// Execute the settings command
pub fn execute(snapshot: &SessionSnapshot, format: &OutputFormat) -> Result<()> {
    println!("{}", render(snapshot, format)?);
    Ok(())
}

pub fn render(snapshot: &SessionSnapshot, format: &OutputFormat) -> Result<String> {
    if matches!(format, OutputFormat::Json) {
        return Ok(serde_json::to_string_pretty(snapshot)?);
    }

    let settings = &snapshot.settings;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Tier: {} ({})\n",
        snapshot.tier,
        snapshot.tier.description()
    );

    let _ = writeln!(out, "=== Terminal ===");
    let _ = writeln!(out, "Enabled: {}", on_off(settings.enable_terminal));
    let _ = writeln!(out, "Scale:   {}", settings.terminal_scale);
    let _ = writeln!(out, "Opacity: {}", settings.terminal_opacity);

    let _ = writeln!(out, "\n=== Animation ===");
    let _ = writeln!(
        out,
        "Complex animations: {}",
        on_off(settings.enable_complex_animations)
    );
    let _ = writeln!(out, "Duration:           {}s", settings.animation_duration);
    let _ = writeln!(out, "Parallax:           {}", on_off(settings.enable_parallax));
    let _ = writeln!(out, "Throttled:          {}", on_off(settings.throttle_animations));

    let _ = writeln!(out, "\n=== Rendering ===");
    let _ = writeln!(
        out,
        "Smooth scrolling: {}",
        on_off(settings.enable_smooth_scrolling)
    );
    let _ = writeln!(out, "Blur:             {}", on_off(settings.enable_blur));
    let _ = writeln!(
        out,
        "Idle callbacks:   {}",
        on_off(settings.use_request_idle_callback)
    );

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::DeviceCapabilities;

    #[test]
    fn test_render_text_low_end() {
        let snapshot = SessionSnapshot::from_capabilities(DeviceCapabilities {
            is_low_end: true,
            is_mobile: false,
            has_good_gpu: false,
            reduced_motion: false,
        });
        let text = render(&snapshot, &OutputFormat::Text).unwrap();
        assert!(text.starts_with("Tier: StaticFallback"));
        assert!(text.contains("Enabled: off"));
        assert!(text.contains("Duration:           0.3s"));
        assert!(text.contains("Idle callbacks:   off"));
    }

    #[test]
    fn test_render_json_full() {
        let snapshot = SessionSnapshot::from_capabilities(DeviceCapabilities {
            is_low_end: false,
            is_mobile: false,
            has_good_gpu: true,
            reduced_motion: false,
        });
        let json = render(&snapshot, &OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tier"], "Full");
        assert_eq!(value["settings"]["enableTerminal"], true);
        assert_eq!(value["settings"]["animationDuration"], 0.8);
        assert_eq!(value["capabilities"]["hasGoodGPU"], true);
    }
}
